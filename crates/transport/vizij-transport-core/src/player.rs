//! The `Player` record and its direct field mutators.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, RawTime};
use crate::config::Config;
use crate::error::TransportError;

/// A `[start, end]` sub-range of the unit interval.
pub type Range = [f64; 2];

/// Boundary policy applied when the playhead reaches a bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Playback {
    /// Overshooting the end wraps to the start. Underflowing the start while
    /// reversing stops instead of wrapping.
    #[default]
    Loop,
    /// Clamp to the bound and flip direction.
    Bounce,
    /// Return to the start and stop.
    Once,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Direction encoded by the sign of a timescale. Zero reads as forward.
    #[inline]
    pub fn of(timescale: f64) -> Self {
        if timescale < 0.0 {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Selects one end of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Start,
    End,
}

/// Playback transport state on the normalized interval `[0, 1]`.
///
/// Treat values as immutable: every transition returns a new `Player`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Whether the transport is actively advancing.
    pub running: bool,
    /// Wall-clock ms of the tick before the last one. Bookkeeping for `update`.
    pub previous_time: RawTime,
    /// Wall-clock ms of the last tick or reset.
    pub current_time: RawTime,
    /// Playhead position. May sit outside `[0, 1]` until the boundary policy applies.
    pub stamp: f64,
    /// Signed speed multiplier: sign is direction, magnitude is speed.
    pub timescale: f64,
    pub bounds: Range,
    pub playback: Playback,
    /// Timeline zoom window that follows the playhead.
    pub viewport: Range,
    /// Milliseconds for `stamp` to traverse 1.0.
    pub duration: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            running: false,
            previous_time: 0.0,
            current_time: 0.0,
            stamp: 0.0,
            timescale: 0.0,
            bounds: [0.0, 1.0],
            playback: Playback::Loop,
            viewport: [0.0, 1.0],
            duration: Config::default().default_duration_ms,
        }
    }
}

impl Player {
    /// Direction implied by the timescale sign.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of(self.timescale)
    }

    /// Whether `stamp` lies within `bounds` (inclusive).
    #[inline]
    pub fn is_in_bounds(&self) -> bool {
        self.stamp >= self.bounds[0] && self.stamp <= self.bounds[1]
    }

    /// Check the documented preconditions without touching the record.
    ///
    /// The transport functions accept any input and degrade numerically; callers that
    /// want a hard guarantee check here before handing values over.
    pub fn validate(&self) -> Result<(), TransportError> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(TransportError::InvalidDuration {
                duration: self.duration,
            });
        }
        for (field, value) in [("stamp", self.stamp), ("timescale", self.timescale)] {
            if !value.is_finite() {
                return Err(TransportError::NonFinite {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if self.bounds[0] > self.bounds[1] {
            return Err(TransportError::inverted("bounds", self.bounds));
        }
        if self.viewport[0] > self.viewport[1] {
            return Err(TransportError::inverted("viewport", self.viewport));
        }
        Ok(())
    }
}

/// Creates a stopped player at stamp 0 with full bounds and viewport, clock synced to `clock`.
pub fn new_player<C: Clock + ?Sized>(clock: &C) -> Player {
    new_player_with(clock, &Config::default())
}

pub fn new_player_with<C: Clock + ?Sized>(clock: &C, cfg: &Config) -> Player {
    let t = clock.now();
    Player {
        previous_time: t,
        current_time: t,
        duration: cfg.default_duration_ms,
        ..Player::default()
    }
}

#[must_use]
pub fn set_bounds(player: &Player, bounds: Range) -> Player {
    Player { bounds, ..*player }
}

#[must_use]
pub fn set_viewport(player: &Player, viewport: Range) -> Player {
    Player {
        viewport,
        ..*player
    }
}

/// Replace the duration. Non-positive durations are not rejected here; see
/// [`Player::validate`].
#[must_use]
pub fn set_duration(player: &Player, duration: f64) -> Player {
    Player {
        duration,
        ..*player
    }
}

#[must_use]
pub fn set_playback(player: &Player, playback: Playback) -> Player {
    Player {
        playback,
        ..*player
    }
}

/// Set the speed magnitude, keeping the current direction.
#[must_use]
pub fn set_speed(player: &Player, speed: f64) -> Player {
    Player {
        timescale: player.direction().sign() * speed.abs(),
        ..*player
    }
}

/// Point the current timescale in `direction`, keeping its magnitude.
#[must_use]
pub fn set_direction(player: &Player, direction: Direction) -> Player {
    Player {
        timescale: direction.sign() * player.timescale.abs(),
        ..*player
    }
}

/// Signed timescale (speed times direction).
#[inline]
pub fn timescale(player: &Player) -> f64 {
    player.timescale
}

/// Move one end of `range` to `stamp`, re-ordering when it would cross the other end.
fn move_bound(range: Range, bound: Bound, stamp: f64) -> Range {
    match bound {
        Bound::Start if range[1] <= stamp => [range[1], stamp],
        Bound::End if range[0] >= stamp => [stamp, range[0]],
        Bound::Start => [stamp, range[1]],
        Bound::End => [range[0], stamp],
    }
}

/// Move one of the playback bounds.
#[must_use]
pub fn set_bound(player: &Player, bound: Bound, stamp: f64) -> Player {
    set_bounds(player, move_bound(player.bounds, bound, stamp))
}

/// Move one edge of the viewport. This is the only call besides `set_viewport`
/// that changes the viewport width.
#[must_use]
pub fn set_viewport_bound(player: &Player, bound: Bound, stamp: f64) -> Player {
    set_viewport(player, move_bound(player.viewport, bound, stamp))
}
