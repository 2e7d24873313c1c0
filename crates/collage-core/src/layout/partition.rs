//! Region partitioning: descriptor + canvas dimensions -> cell rectangles.
//!
//! Pure geometry over four scalar inputs plus the ratios embedded in the
//! descriptor. Rectangles are produced fresh on every call and never mutated
//! in place.
//!
//! # Gutter Budget
//!
//! A two-way split reserves one `padding` gutter between its spans, so each
//! span gives up `padding / 2`. The three-row splits reserve two gutters and
//! spread them evenly: each of the three rows gives up `padding * 2 / 3`.
//! This keeps the total gutter budget consistent regardless of row count.
//!
//! Extreme ratio/padding combinations can drive a span to zero or below.
//! Such degenerate rectangles are returned as-is; the renderer skips them.

use serde::{Deserialize, Serialize};

use super::topology::LayoutDescriptor;

/// Axis-aligned cell rectangle in output-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width / height; meaningless for degenerate cells.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// True when the rect has no drawable area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Split a content span two ways at `ratio` percent, reserving one gutter.
///
/// Returns the two span sizes; the gutter of `padding` sits between them.
fn split_two(content: f64, ratio: f64, padding: f64) -> (f64, f64) {
    let first = content * ratio / 100.0 - padding / 2.0;
    let second = content * (100.0 - ratio) / 100.0 - padding / 2.0;
    (first, second)
}

/// Split a content span into three rows at cumulative percentages
/// `ratio_1` / `ratio_2`, reserving two gutters spread evenly.
fn split_three(content: f64, ratio_1: f64, ratio_2: f64, padding: f64) -> [f64; 3] {
    let gutter_share = padding * 2.0 / 3.0;
    [
        content * ratio_1 / 100.0 - gutter_share,
        content * (ratio_2 - ratio_1) / 100.0 - gutter_share,
        content * (100.0 - ratio_2) / 100.0 - gutter_share,
    ]
}

/// Compute the rectangle for every logical cell of a layout.
///
/// # Arguments
///
/// * `layout` - The topology plus its current ratios
/// * `outer_width` / `outer_height` - Canvas dimensions in pixels
/// * `padding` - Uniform margin and gutter size in pixels
///
/// # Returns
///
/// One rect per cell, ordered by logical index (left-to-right, top-to-bottom
/// within each sub-block). The order is stable for a given topology, so cell
/// index `i` always shows image `i`.
pub fn partition(
    layout: &LayoutDescriptor,
    outer_width: f64,
    outer_height: f64,
    padding: f64,
) -> Vec<CellRect> {
    let content_w = outer_width - padding * 2.0;
    let content_h = outer_height - padding * 2.0;

    match *layout {
        LayoutDescriptor::Single => {
            vec![CellRect::new(padding, padding, content_w, content_h)]
        }

        LayoutDescriptor::Horizontal { ratio_x } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            vec![
                CellRect::new(padding, padding, left_w, content_h),
                CellRect::new(padding + left_w + padding, padding, right_w, content_h),
            ]
        }

        LayoutDescriptor::LeftRight1x2 { ratio_x, ratio_y } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let (top_h, bottom_h) = split_two(content_h, ratio_y, padding);
            let right_x = padding + left_w + padding;
            vec![
                CellRect::new(padding, padding, left_w, content_h),
                CellRect::new(right_x, padding, right_w, top_h),
                CellRect::new(right_x, padding + top_h + padding, right_w, bottom_h),
            ]
        }

        LayoutDescriptor::Grid2x2 { ratio_x, ratio_y } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let (top_h, bottom_h) = split_two(content_h, ratio_y, padding);
            let right_x = padding + left_w + padding;
            let bottom_y = padding + top_h + padding;
            vec![
                CellRect::new(padding, padding, left_w, top_h),
                CellRect::new(right_x, padding, right_w, top_h),
                CellRect::new(padding, bottom_y, left_w, bottom_h),
                CellRect::new(right_x, bottom_y, right_w, bottom_h),
            ]
        }

        LayoutDescriptor::LeftRight2x2 { ratio_x, ratio_y } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let (top_h, bottom_h) = split_two(content_h, ratio_y, padding);
            let col_w = (right_w - padding) / 2.0;
            let col_0 = padding + left_w + padding;
            let col_1 = col_0 + col_w + padding;
            let bottom_y = padding + top_h + padding;
            vec![
                CellRect::new(padding, padding, left_w, content_h),
                CellRect::new(col_0, padding, col_w, top_h),
                CellRect::new(col_1, padding, col_w, top_h),
                CellRect::new(col_0, bottom_y, col_w, bottom_h),
                CellRect::new(col_1, bottom_y, col_w, bottom_h),
            ]
        }

        LayoutDescriptor::Grid2x3 {
            ratio_x,
            ratio_y1,
            ratio_y2,
        } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let heights = split_three(content_h, ratio_y1, ratio_y2, padding);
            let right_x = padding + left_w + padding;

            let mut cells = Vec::with_capacity(6);
            let mut y = padding;
            for row_h in heights {
                cells.push(CellRect::new(padding, y, left_w, row_h));
                cells.push(CellRect::new(right_x, y, right_w, row_h));
                y += row_h + padding;
            }
            cells
        }

        LayoutDescriptor::LeftRight2x3 {
            ratio_x,
            ratio_y1,
            ratio_y2,
        } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let heights = split_three(content_h, ratio_y1, ratio_y2, padding);
            let col_w = (right_w - padding) / 2.0;
            let col_0 = padding + left_w + padding;
            let col_1 = col_0 + col_w + padding;

            let mut cells = Vec::with_capacity(7);
            cells.push(CellRect::new(padding, padding, left_w, content_h));
            let mut y = padding;
            for row_h in heights {
                cells.push(CellRect::new(col_0, y, col_w, row_h));
                cells.push(CellRect::new(col_1, y, col_w, row_h));
                y += row_h + padding;
            }
            cells
        }

        LayoutDescriptor::Left2Right2x3 {
            ratio_x,
            ratio_y_left,
            ratio_y1,
            ratio_y2,
        } => {
            let (left_w, right_w) = split_two(content_w, ratio_x, padding);
            let (left_top_h, left_bottom_h) = split_two(content_h, ratio_y_left, padding);
            let heights = split_three(content_h, ratio_y1, ratio_y2, padding);
            let col_w = (right_w - padding) / 2.0;
            let col_0 = padding + left_w + padding;
            let col_1 = col_0 + col_w + padding;

            let mut cells = Vec::with_capacity(8);
            cells.push(CellRect::new(padding, padding, left_w, left_top_h));
            cells.push(CellRect::new(
                padding,
                padding + left_top_h + padding,
                left_w,
                left_bottom_h,
            ));
            let mut y = padding;
            for row_h in heights {
                cells.push(CellRect::new(col_0, y, col_w, row_h));
                cells.push(CellRect::new(col_1, y, col_w, row_h));
                y += row_h + padding;
            }
            cells
        }

        LayoutDescriptor::Auto { count } => {
            if count == 0 {
                return Vec::new();
            }
            if count == 1 {
                return vec![CellRect::new(padding, padding, content_w, content_h)];
            }
            let cols = (count as f64).sqrt().ceil() as u32;
            let rows = count.div_ceil(cols);
            let cell_w = (content_w - padding * (cols - 1) as f64) / cols as f64;
            let cell_h = (content_h - padding * (rows - 1) as f64) / rows as f64;

            (0..count)
                .map(|i| {
                    let row = i / cols;
                    let col = i % cols;
                    CellRect::new(
                        padding + col as f64 * (cell_w + padding),
                        padding + row as f64 * (cell_h + padding),
                        cell_w,
                        cell_h,
                    )
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RatioKey;

    const EPS: f64 = 1e-9;

    fn assert_rect(rect: &CellRect, x: f64, y: f64, w: f64, h: f64) {
        assert!((rect.x - x).abs() < EPS, "x: {} vs {}", rect.x, x);
        assert!((rect.y - y).abs() < EPS, "y: {} vs {}", rect.y, y);
        assert!((rect.width - w).abs() < EPS, "w: {} vs {}", rect.width, w);
        assert!((rect.height - h).abs() < EPS, "h: {} vs {}", rect.height, h);
    }

    #[test]
    fn test_single_fills_content() {
        let cells = partition(&LayoutDescriptor::Single, 800.0, 600.0, 25.0);
        assert_eq!(cells.len(), 1);
        assert_rect(&cells[0], 25.0, 25.0, 750.0, 550.0);
    }

    #[test]
    fn test_grid_2x2_worked_example() {
        // 1000x1000 canvas, 20px padding, balanced ratios. Each span is
        // 960 * 50/100 - 10 = 470, so two cells plus three gutters close
        // the canvas exactly: 20 + 470 + 20 + 470 + 20 = 1000.
        let layout = LayoutDescriptor::for_count(4);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_eq!(cells.len(), 4);
        assert_rect(&cells[0], 20.0, 20.0, 470.0, 470.0);
        assert_rect(&cells[1], 510.0, 20.0, 470.0, 470.0);
        assert_rect(&cells[2], 20.0, 510.0, 470.0, 470.0);
        assert_rect(&cells[3], 510.0, 510.0, 470.0, 470.0);
    }

    #[test]
    fn test_grid_2x2_after_divider_drag() {
        // ratioX dragged to 70: left = 960 * 0.7 - 10 = 662, right = 278
        let layout = LayoutDescriptor::for_count(4).with_ratio(RatioKey::X, 70.0);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_rect(&cells[0], 20.0, 20.0, 662.0, 470.0);
        assert_rect(&cells[1], 20.0 + 662.0 + 20.0, 20.0, 278.0, 470.0);
        // left + gutter + right spans the content width
        assert!((cells[0].width + 20.0 + cells[1].width - 960.0).abs() < EPS);
    }

    #[test]
    fn test_horizontal_spans_content() {
        let layout = LayoutDescriptor::for_count(2);
        let cells = partition(&layout, 1000.0, 500.0, 10.0);

        assert_eq!(cells.len(), 2);
        assert_rect(&cells[0], 10.0, 10.0, 485.0, 480.0);
        assert_rect(&cells[1], 505.0, 10.0, 485.0, 480.0);
    }

    #[test]
    fn test_left_right_1x2_nested_split() {
        let layout = LayoutDescriptor::for_count(3);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_eq!(cells.len(), 3);
        // Left cell spans full content height
        assert_rect(&cells[0], 20.0, 20.0, 470.0, 960.0);
        // Right side splits into two stacked cells
        assert_rect(&cells[1], 510.0, 20.0, 470.0, 470.0);
        assert_rect(&cells[2], 510.0, 510.0, 470.0, 470.0);
    }

    #[test]
    fn test_left_right_2x2_block() {
        let layout = LayoutDescriptor::for_count(5);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_eq!(cells.len(), 5);
        assert_rect(&cells[0], 20.0, 20.0, 470.0, 960.0);

        // Right block: two 225-wide columns
        let col_w = (470.0 - 20.0) / 2.0;
        assert_rect(&cells[1], 510.0, 20.0, col_w, 470.0);
        assert_rect(&cells[2], 510.0 + col_w + 20.0, 20.0, col_w, 470.0);
        assert_rect(&cells[3], 510.0, 510.0, col_w, 470.0);
        assert_rect(&cells[4], 510.0 + col_w + 20.0, 510.0, col_w, 470.0);
    }

    #[test]
    fn test_grid_2x3_row_heights() {
        let layout = LayoutDescriptor::for_count(6);
        let cells = partition(&layout, 900.0, 1200.0, 30.0);
        assert_eq!(cells.len(), 6);

        let content_h = 1200.0 - 60.0;
        let gutter_share = 30.0 * 2.0 / 3.0;
        let row_0 = content_h * 33.33 / 100.0 - gutter_share;
        let row_1 = content_h * (66.67 - 33.33) / 100.0 - gutter_share;
        let row_2 = content_h * (100.0 - 66.67) / 100.0 - gutter_share;

        assert!((cells[0].height - row_0).abs() < EPS);
        assert!((cells[2].height - row_1).abs() < EPS);
        assert!((cells[4].height - row_2).abs() < EPS);

        // Three rows plus two gutters fill the content height
        assert!((row_0 + row_1 + row_2 + 60.0 - content_h).abs() < EPS);

        // Row-major ordering: pairs share a y
        assert_eq!(cells[0].y, cells[1].y);
        assert_eq!(cells[2].y, cells[3].y);
        assert_eq!(cells[4].y, cells[5].y);
        assert!(cells[2].y > cells[0].y);
    }

    #[test]
    fn test_left_right_2x3_left_full_height() {
        let layout = LayoutDescriptor::for_count(7);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_eq!(cells.len(), 7);
        assert_rect(&cells[0], 20.0, 20.0, 470.0, 960.0);
        // Remaining six form the 2x3 block
        assert_eq!(cells[1].y, cells[2].y);
        assert_eq!(cells[1].x, cells[3].x);
        assert_eq!(cells[2].x, cells[4].x);
    }

    #[test]
    fn test_left2_right_2x3_stacked_left() {
        let layout = LayoutDescriptor::for_count(8);
        let cells = partition(&layout, 1000.0, 1000.0, 20.0);

        assert_eq!(cells.len(), 8);
        let top_h = 960.0 * 66.67 / 100.0 - 10.0;
        let bottom_h = 960.0 * 33.33 / 100.0 - 10.0;
        assert_rect(&cells[0], 20.0, 20.0, 470.0, top_h);
        assert_rect(&cells[1], 20.0, 20.0 + top_h + 20.0, 470.0, bottom_h);
        // Stacked left cells plus their gutter fill the content height
        assert!((cells[0].height + 20.0 + cells[1].height - 960.0).abs() < EPS);
    }

    #[test]
    fn test_auto_grid_nine() {
        let layout = LayoutDescriptor::Auto { count: 9 };
        let cells = partition(&layout, 940.0, 940.0, 20.0);

        assert_eq!(cells.len(), 9);
        // cols = rows = 3, cell = (900 - 40) / 3
        let cell = (900.0 - 40.0) / 3.0;
        assert_rect(&cells[0], 20.0, 20.0, cell, cell);
        assert_rect(&cells[4], 20.0 + cell + 20.0, 20.0 + cell + 20.0, cell, cell);
        assert_rect(
            &cells[8],
            20.0 + 2.0 * (cell + 20.0),
            20.0 + 2.0 * (cell + 20.0),
            cell,
            cell,
        );
    }

    #[test]
    fn test_auto_grid_partial_last_row() {
        let layout = LayoutDescriptor::Auto { count: 7 };
        let cells = partition(&layout, 1000.0, 1000.0, 0.0);

        // cols = 3, rows = 3, last row has a single cell
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[6].x, 0.0);
        assert!(cells[6].y > cells[3].y);
    }

    #[test]
    fn test_auto_grid_zero_count() {
        let cells = partition(&LayoutDescriptor::Auto { count: 0 }, 100.0, 100.0, 5.0);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_auto_grid_one_fills_content() {
        let cells = partition(&LayoutDescriptor::Auto { count: 1 }, 100.0, 80.0, 5.0);
        assert_eq!(cells.len(), 1);
        assert_rect(&cells[0], 5.0, 5.0, 90.0, 70.0);
    }

    #[test]
    fn test_zero_padding() {
        let layout = LayoutDescriptor::for_count(4);
        let cells = partition(&layout, 100.0, 100.0, 0.0);
        assert_rect(&cells[0], 0.0, 0.0, 50.0, 50.0);
        assert_rect(&cells[3], 50.0, 50.0, 50.0, 50.0);
    }

    #[test]
    fn test_extreme_ratios_may_degenerate() {
        // ratioX clamped at 20 with huge padding can drive spans negative;
        // the partitioner reports them untouched
        let layout = LayoutDescriptor::for_count(2).with_ratio(RatioKey::X, 0.0);
        let cells = partition(&layout, 200.0, 200.0, 60.0);
        assert_eq!(cells.len(), 2);
        assert!(cells[0].is_degenerate());
    }

    #[test]
    fn test_cells_never_overlap() {
        for count in 1..=12 {
            let layout = LayoutDescriptor::for_count(count);
            let cells = partition(&layout, 1200.0, 900.0, 15.0);
            assert_eq!(cells.len(), count as usize);

            for (i, a) in cells.iter().enumerate() {
                for b in cells.iter().skip(i + 1) {
                    let overlap_x = a.x < b.x + b.width - EPS && b.x < a.x + a.width - EPS;
                    let overlap_y = a.y < b.y + b.height - EPS && b.y < a.y + a.height - EPS;
                    assert!(
                        !(overlap_x && overlap_y),
                        "cells overlap for count {count}: {a:?} vs {b:?}"
                    );
                }
            }
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
