//! Vizij Transport Core (engine-agnostic)
//!
//! Normalized playback transport for timeline UIs. A [`Player`] tracks a playhead
//! (`stamp`) on `[0, 1]`, advances it against a caller-supplied [`Clock`], applies a
//! boundary policy inside `bounds`, and keeps a `viewport` window following the
//! playhead.
//!
//! Every transition is a pure function: it borrows a `Player` and returns the next
//! value. Adapters (web, stores) own the record and decide when to tick.

pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod integrator;
pub mod player;
pub mod store;
pub mod transport;
pub mod viewport;

// Re-exports for consumers (adapters)
pub use clock::{now, Clock, ManualClock, RawTime, SystemClock};
pub use commands::{parse_commands_json, PlayerCommand};
pub use config::Config;
pub use error::TransportError;
pub use integrator::{update, update_with};
pub use player::{
    new_player, new_player_with, set_bound, set_bounds, set_direction, set_duration,
    set_playback, set_speed, set_viewport, set_viewport_bound, timescale, Bound, Direction,
    Playback, Player, Range,
};
pub use store::PlayerStore;
pub use transport::{center_viewport, pause, play, play_with, reset, reverse, seek};
pub use viewport::{blend_viewport, fitted_viewport};

/// Transport result type
pub type Result<T> = core::result::Result<T, TransportError>;
