//! Engine configuration and presentation-supplied layout metrics.
//!
//! Configuration over convention: rule variants are options here, not
//! forks of the rule tables. Layout metrics belong to the presentation
//! layer; the engine receives them as plain data and uses them only to
//! compute card anchors and hit rectangles inside the extents it is
//! given.

use serde::{Deserialize, Serialize};

/// Engine options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards drawn per stock press (classically 1 or 3).
    pub draw_count: usize,
    /// Refill an exhausted stock from the waste instead of failing the
    /// draw.
    pub recycle_waste: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_count: 1,
            recycle_waste: false,
        }
    }
}

/// Card dimensions and fan spacing, in the presentation layer's
/// coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub card_width: f32,
    pub card_height: f32,
    /// Vertical offset between successive cards fanned in a tableau.
    pub fan_step: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card_width: 105.0,
            card_height: 140.0,
            fan_step: 20.0,
        }
    }
}
