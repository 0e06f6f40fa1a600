//! Core configuration for vizij-transport-core.

use serde::{Deserialize, Serialize};

/// Tuning constants for the transport.
///
/// The free functions (`play`, `update`, `new_player`) use `Config::default()`;
/// the `*_with` variants and [`crate::PlayerStore`] take an explicit config.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration in milliseconds of one unit of stamp for new players.
    pub default_duration_ms: f64,
    /// How close (in stamp units) `play` treats the playhead as sitting on a bound.
    pub boundary_snap_tolerance: f64,
    /// Distance from the viewport center at which the viewport attaches to the playhead.
    pub viewport_attach_tolerance: f64,
    /// Fraction of the current viewport kept each tick while following.
    pub viewport_retain: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: 1000.0,
            boundary_snap_tolerance: 0.001,
            viewport_attach_tolerance: 0.01,
            viewport_retain: 0.6,
        }
    }
}
