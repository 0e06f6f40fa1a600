//! Transport control: play, pause, reset and seek.

use log::debug;

use crate::clock::Clock;
use crate::config::Config;
use crate::player::{Direction, Playback, Player};
use crate::viewport::fitted_viewport;

/// Start playback. See [`play_with`].
#[must_use]
pub fn play(player: &Player, speed: Option<f64>, direction: Option<Direction>) -> Player {
    play_with(player, speed, direction, &Config::default())
}

/// Start playback, optionally changing speed and direction.
///
/// `speed` is taken as a magnitude; without it the current magnitude is kept, or 1
/// when the player is paused. `direction` defaults to the current timescale sign.
///
/// If the playhead sits on the bound it would run straight into (the end when going
/// forward, the start when reversing) it is moved to the opposite bound so playback
/// has somewhere to go. A finished `Once` player always restarts from the opposite bound.
#[must_use]
pub fn play_with(
    player: &Player,
    speed: Option<f64>,
    direction: Option<Direction>,
    cfg: &Config,
) -> Player {
    let mut p = *player;
    p.running = true;

    let direction = direction.unwrap_or_else(|| player.direction());
    let magnitude = match speed {
        Some(s) => s.abs(),
        None if player.timescale != 0.0 => player.timescale.abs(),
        None => 1.0,
    };

    let [start, end] = p.bounds;
    let (terminal, restart) = match direction {
        Direction::Forward => (end, start),
        Direction::Reverse => (start, end),
    };
    if (p.playback == Playback::Once && p.stamp == terminal)
        || (p.stamp - terminal).abs() <= cfg.boundary_snap_tolerance
    {
        debug!(
            "play {:?}: stamp {} at terminal bound, restarting from {}",
            direction, p.stamp, restart
        );
        p.stamp = restart;
    }

    p.timescale = direction.sign() * magnitude;
    p
}

/// Stop advancing. Position and everything else stay put.
#[must_use]
pub fn pause(player: &Player) -> Player {
    Player {
        running: false,
        timescale: 0.0,
        ..*player
    }
}

/// Resync both timestamps to `clock` so the next tick starts clean, and move the
/// playhead to `stamp` (or 0).
#[must_use]
pub fn reset<C: Clock + ?Sized>(player: &Player, clock: &C, stamp: Option<f64>) -> Player {
    let t = clock.now();
    Player {
        previous_time: t,
        current_time: t,
        stamp: stamp.unwrap_or(0.0),
        ..*player
    }
}

/// Jump to `stamp` and re-center the viewport on it.
#[must_use]
pub fn seek<C: Clock + ?Sized>(player: &Player, clock: &C, stamp: f64) -> Player {
    let mut p = reset(player, clock, Some(stamp));
    p.viewport = fitted_viewport(stamp, p.viewport);
    p
}

/// Seek to `stamp`, or to the current playhead when omitted.
#[must_use]
pub fn center_viewport<C: Clock + ?Sized>(
    player: &Player,
    clock: &C,
    stamp: Option<f64>,
) -> Player {
    seek(player, clock, stamp.unwrap_or(player.stamp))
}

/// Flip the playback direction in place.
#[must_use]
pub fn reverse(player: &Player) -> Player {
    Player {
        timescale: -player.timescale,
        ..*player
    }
}
