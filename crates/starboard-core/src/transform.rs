//! Canvas view transform (pan + zoom).

use serde::{Deserialize, Serialize};

/// Camera state mapping board coordinates to screen coordinates.
///
/// Replaced wholesale by the interaction layer on every pan or zoom
/// gesture. No bounds are enforced here; `scale` is expected positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Pan offset.
    pub x: f64,
    pub y: f64,
    /// Zoom factor, 1.0 = 100%.
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}
