//! Named partition topologies and their adjustable ratios.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lower clamp bound for every divider ratio, in percent.
pub const RATIO_MIN: f64 = 20.0;
/// Upper clamp bound for every divider ratio, in percent.
pub const RATIO_MAX: f64 = 80.0;

/// A named partition scheme plus the ratio percentages its dividers adjust.
///
/// One variant per topology, each carrying exactly the ratios that topology
/// needs, so a divider can never address a ratio its layout does not have.
/// The serialized form uses the `type` tag and camelCase ratio names the web
/// UI already speaks (e.g. `{"type":"grid-2x2","ratioX":50,"ratioY":50}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutDescriptor {
    /// One cell filling the whole content rectangle.
    #[serde(rename = "single")]
    Single,

    /// Two cells side by side.
    #[serde(rename = "horizontal", rename_all = "camelCase")]
    Horizontal { ratio_x: f64 },

    /// Full-height cell on the left, two stacked cells on the right.
    #[serde(rename = "left-right-1x2", rename_all = "camelCase")]
    LeftRight1x2 { ratio_x: f64, ratio_y: f64 },

    /// Two columns by two rows.
    #[serde(rename = "grid-2x2", rename_all = "camelCase")]
    Grid2x2 { ratio_x: f64, ratio_y: f64 },

    /// Full-height cell on the left, a 2x2 block on the right.
    #[serde(rename = "left-right-2x2", rename_all = "camelCase")]
    LeftRight2x2 { ratio_x: f64, ratio_y: f64 },

    /// Two columns by three rows. `ratio_y1`/`ratio_y2` are the cumulative
    /// percentages where the first and second row boundaries sit.
    #[serde(rename = "grid-2x3", rename_all = "camelCase")]
    Grid2x3 {
        ratio_x: f64,
        ratio_y1: f64,
        ratio_y2: f64,
    },

    /// Full-height cell on the left, a 2x3 block on the right.
    #[serde(rename = "left-right-2x3", rename_all = "camelCase")]
    LeftRight2x3 {
        ratio_x: f64,
        ratio_y1: f64,
        ratio_y2: f64,
    },

    /// Two stacked cells on the left, a 2x3 block on the right.
    #[serde(rename = "left2-right-2x3", rename_all = "camelCase")]
    Left2Right2x3 {
        ratio_x: f64,
        ratio_y_left: f64,
        ratio_y1: f64,
        ratio_y2: f64,
    },

    /// Uniform fallback grid for counts with no modeled topology.
    #[serde(rename = "grid-auto")]
    Auto { count: u32 },
}

/// Addresses one adjustable ratio of a descriptor.
///
/// Each divider owns exactly one key. The serialized names match the field
/// names the UI uses (`ratioX`, `ratioY`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioKey {
    #[serde(rename = "ratioX")]
    X,
    #[serde(rename = "ratioY")]
    Y,
    #[serde(rename = "ratioYLeft")]
    YLeft,
    #[serde(rename = "ratioY1")]
    Y1,
    #[serde(rename = "ratioY2")]
    Y2,
}

impl FromStr for RatioKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ratioX" => Ok(RatioKey::X),
            "ratioY" => Ok(RatioKey::Y),
            "ratioYLeft" => Ok(RatioKey::YLeft),
            "ratioY1" => Ok(RatioKey::Y1),
            "ratioY2" => Ok(RatioKey::Y2),
            _ => Err(()),
        }
    }
}

/// Clamp a ratio percentage into the allowed divider range.
pub(crate) fn clamp_ratio(value: f64) -> f64 {
    value.clamp(RATIO_MIN, RATIO_MAX)
}

impl LayoutDescriptor {
    /// Pick the topology for an image count, with default ratios.
    ///
    /// Counts 1 through 8 map to the modeled topologies; anything else falls
    /// back to [`LayoutDescriptor::Auto`]. Calling this again after a count
    /// change discards any ratio customization of the previous descriptor.
    pub fn for_count(count: u32) -> Self {
        match count {
            1 => Self::Single,
            2 => Self::Horizontal { ratio_x: 50.0 },
            3 => Self::LeftRight1x2 {
                ratio_x: 50.0,
                ratio_y: 50.0,
            },
            4 => Self::Grid2x2 {
                ratio_x: 50.0,
                ratio_y: 50.0,
            },
            5 => Self::LeftRight2x2 {
                ratio_x: 50.0,
                ratio_y: 50.0,
            },
            6 => Self::Grid2x3 {
                ratio_x: 50.0,
                ratio_y1: 33.33,
                ratio_y2: 66.67,
            },
            7 => Self::LeftRight2x3 {
                ratio_x: 50.0,
                ratio_y1: 33.33,
                ratio_y2: 66.67,
            },
            8 => Self::Left2Right2x3 {
                ratio_x: 50.0,
                ratio_y_left: 66.67,
                ratio_y1: 33.33,
                ratio_y2: 66.67,
            },
            other => Self::Auto { count: other },
        }
    }

    /// Number of logical cells this topology produces.
    pub fn cell_count(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Horizontal { .. } => 2,
            Self::LeftRight1x2 { .. } => 3,
            Self::Grid2x2 { .. } => 4,
            Self::LeftRight2x2 { .. } => 5,
            Self::Grid2x3 { .. } => 6,
            Self::LeftRight2x3 { .. } => 7,
            Self::Left2Right2x3 { .. } => 8,
            Self::Auto { count } => *count,
        }
    }

    /// Read the ratio addressed by `key`, if this topology carries it.
    pub fn ratio(&self, key: RatioKey) -> Option<f64> {
        match (self, key) {
            (Self::Horizontal { ratio_x }, RatioKey::X) => Some(*ratio_x),
            (Self::LeftRight1x2 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::LeftRight1x2 { ratio_y, .. }, RatioKey::Y) => Some(*ratio_y),
            (Self::Grid2x2 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::Grid2x2 { ratio_y, .. }, RatioKey::Y) => Some(*ratio_y),
            (Self::LeftRight2x2 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::LeftRight2x2 { ratio_y, .. }, RatioKey::Y) => Some(*ratio_y),
            (Self::Grid2x3 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::Grid2x3 { ratio_y1, .. }, RatioKey::Y1) => Some(*ratio_y1),
            (Self::Grid2x3 { ratio_y2, .. }, RatioKey::Y2) => Some(*ratio_y2),
            (Self::LeftRight2x3 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::LeftRight2x3 { ratio_y1, .. }, RatioKey::Y1) => Some(*ratio_y1),
            (Self::LeftRight2x3 { ratio_y2, .. }, RatioKey::Y2) => Some(*ratio_y2),
            (Self::Left2Right2x3 { ratio_x, .. }, RatioKey::X) => Some(*ratio_x),
            (Self::Left2Right2x3 { ratio_y_left, .. }, RatioKey::YLeft) => Some(*ratio_y_left),
            (Self::Left2Right2x3 { ratio_y1, .. }, RatioKey::Y1) => Some(*ratio_y1),
            (Self::Left2Right2x3 { ratio_y2, .. }, RatioKey::Y2) => Some(*ratio_y2),
            _ => None,
        }
    }

    /// Return a copy of this descriptor with the ratio addressed by `key`
    /// replaced, clamped to [`RATIO_MIN`]..[`RATIO_MAX`].
    ///
    /// Addressing a ratio this topology does not carry returns the descriptor
    /// unchanged. Ratios are independent: writing one never re-clamps the
    /// others against it.
    pub fn with_ratio(&self, key: RatioKey, value: f64) -> Self {
        let value = clamp_ratio(value);
        let mut updated = *self;
        match (&mut updated, key) {
            (Self::Horizontal { ratio_x }, RatioKey::X) => *ratio_x = value,
            (Self::LeftRight1x2 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::LeftRight1x2 { ratio_y, .. }, RatioKey::Y) => *ratio_y = value,
            (Self::Grid2x2 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::Grid2x2 { ratio_y, .. }, RatioKey::Y) => *ratio_y = value,
            (Self::LeftRight2x2 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::LeftRight2x2 { ratio_y, .. }, RatioKey::Y) => *ratio_y = value,
            (Self::Grid2x3 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::Grid2x3 { ratio_y1, .. }, RatioKey::Y1) => *ratio_y1 = value,
            (Self::Grid2x3 { ratio_y2, .. }, RatioKey::Y2) => *ratio_y2 = value,
            (Self::LeftRight2x3 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::LeftRight2x3 { ratio_y1, .. }, RatioKey::Y1) => *ratio_y1 = value,
            (Self::LeftRight2x3 { ratio_y2, .. }, RatioKey::Y2) => *ratio_y2 = value,
            (Self::Left2Right2x3 { ratio_x, .. }, RatioKey::X) => *ratio_x = value,
            (Self::Left2Right2x3 { ratio_y_left, .. }, RatioKey::YLeft) => *ratio_y_left = value,
            (Self::Left2Right2x3 { ratio_y1, .. }, RatioKey::Y1) => *ratio_y1 = value,
            (Self::Left2Right2x3 { ratio_y2, .. }, RatioKey::Y2) => *ratio_y2 = value,
            _ => {}
        }
        updated
    }
}
