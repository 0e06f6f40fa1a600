//! The per-tick integrator: time delta, boundary policy, viewport follow.

use log::debug;

use crate::clock::Clock;
use crate::config::Config;
use crate::player::{Playback, Player};
use crate::viewport::{blend_viewport, center, fitted_viewport};

/// Advance one tick using `Config::default()`. See [`update_with`].
#[must_use]
pub fn update<C: Clock + ?Sized>(player: &Player, clock: &C, cold_start: bool) -> Player {
    update_with(player, clock, cold_start, &Config::default())
}

/// Advance `stamp` by the wall-clock time since the last tick, apply the boundary
/// policy, and move the viewport toward the playhead.
///
/// A `cold_start` tick measures no elapsed time, which avoids a huge first-frame jump
/// after the clock has been idle.
///
/// The policy range is `bounds` while the pre-tick stamp is inside them, and `[0, 1]`
/// otherwise so a playhead left outside by a bounds change can travel back in.
/// This function does not look at `running`; callers stop ticking stopped players.
#[must_use]
pub fn update_with<C: Clock + ?Sized>(
    player: &Player,
    clock: &C,
    cold_start: bool,
    cfg: &Config,
) -> Player {
    let mut p = *player;

    let t = clock.now();
    p.previous_time = if cold_start { t } else { player.current_time };
    p.current_time = t;

    let in_bounds = player.is_in_bounds();
    let delta = (p.current_time - p.previous_time) * p.timescale / p.duration;
    let updated = player.stamp + delta;
    let [start, end] = if in_bounds { p.bounds } else { [0.0, 1.0] };

    let snapped = if updated > end {
        match p.playback {
            Playback::Loop => {
                debug!("loop: {} passed end {}, wrapping to {}", updated, end, start);
                p.stamp = start;
            }
            Playback::Bounce => {
                debug!("bounce: {} passed end {}, reversing", updated, end);
                p.stamp = end;
                p.timescale = -p.timescale;
            }
            Playback::Once => {
                debug!("once: {} passed end {}, stopping", updated, end);
                p.stamp = start;
                p.running = false;
            }
        }
        true
    } else if in_bounds && updated < start {
        match p.playback {
            Playback::Loop => {
                p.stamp = start;
                // Reversing past a loop start stops rather than wrapping to the end.
                if p.timescale < 0.0 {
                    debug!("loop: {} fell below start {} in reverse, stopping", updated, start);
                    p.running = false;
                }
            }
            Playback::Bounce => {
                debug!("bounce: {} fell below start {}, reversing", updated, start);
                p.stamp = start;
                p.timescale = -p.timescale;
            }
            Playback::Once => {
                debug!("once: {} fell below start {}, stopping", updated, start);
                p.stamp = start;
                p.running = false;
            }
        }
        true
    } else {
        p.stamp = updated;
        false
    };

    let mid = center(player.viewport);
    let attached = (player.stamp - mid).abs() < cfg.viewport_attach_tolerance
        || (p.stamp - mid).abs() < cfg.viewport_attach_tolerance;
    if attached || snapped {
        p.viewport = fitted_viewport(p.stamp, player.viewport);
    } else if p.running {
        // Lead the target by one tick when the playhead is ahead of the window.
        let oomph = if mid < p.stamp { delta } else { 0.0 };
        let ideal = fitted_viewport(p.stamp + oomph, player.viewport);
        p.viewport = blend_viewport(player.viewport, ideal, cfg.viewport_retain);
    }

    p
}
