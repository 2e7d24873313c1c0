//! Collage Core - Photo collage layout and rendering library
//!
//! This crate provides the core functionality for building photo collages:
//! grid layout topologies with draggable dividers, a freeform transform
//! board with move/rotate/resize drags, and a rasterizer that composites
//! the result and encodes it to PNG for export.
//!
//! The crate is UI-agnostic. All drag interactions are modeled as pure
//! sessions: a snapshot taken at pointer-press plus a function of the
//! current pointer, so hosts can drive them from any event loop.

pub mod asset;
pub mod config;
pub mod layout;
pub mod render;
pub mod transform;

pub use asset::{decode_asset, AssetId, AssetStore, ImageAsset};
pub use config::{AspectRatio, CollageConfig, Color};
pub use layout::{partition, CellRect, DividerDrag, LayoutDescriptor, RatioKey};
pub use render::{encode_png, export_size, render, render_elements, render_grid, Placement, Surface};
pub use transform::{ElementBoard, ElementGeometry, FreeformElement, Handle, LayerShift};

#[cfg(test)]
mod tests {
    use super::*;

    // A smoke test of the whole pipeline: configure, lay out, promote to
    // freeform, render, encode.
    #[test]
    fn test_full_pipeline() {
        let config = CollageConfig {
            cell_count: 4,
            ..CollageConfig::default()
        };
        let layout = LayoutDescriptor::for_count(config.cell_count);
        assert_eq!(layout.cell_count(), 4);

        let (width, height) = export_size(&config.aspect_ratio);
        let cells = partition(&layout, width as f64, height as f64, config.padding);
        assert_eq!(cells.len(), 4);

        let mut assets = AssetStore::new();
        for i in 0..4u32 {
            assets.insert(AssetId(i), solid(8, 8, [60 * i as u8, 0, 0]));
        }

        let board = ElementBoard::from_cells(&cells, config.corner_radius);
        let (surface, warnings) =
            render_elements(width, height, config.background, &board, &assets);
        assert!(warnings.is_empty());
        assert_eq!(surface.width, width);

        let png = encode_png(&surface).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> ImageAsset {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgb);
        }
        ImageAsset::new(width, height, pixels)
    }
}
