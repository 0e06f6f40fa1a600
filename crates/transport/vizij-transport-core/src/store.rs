//! Single-player store: owns a `Player`, its clock and config, and applies commands.
//!
//! This is the caller the pure functions expect. It guards the preconditions they
//! leave unchecked (positive duration, ordered ranges) and only ticks while running.

use log::{trace, warn};

use crate::clock::Clock;
use crate::commands::{parse_commands_json, PlayerCommand};
use crate::config::Config;
use crate::error::TransportError;
use crate::integrator::update_with;
use crate::player::{self, new_player_with, Direction, Player, Range};
use crate::transport::{center_viewport, pause, play_with, reset, reverse, seek};

#[derive(Debug)]
pub struct PlayerStore<C: Clock> {
    player: Player,
    clock: C,
    cfg: Config,
    /// Set by `Play` so the next tick measures no stale time.
    cold_start: bool,
    /// Heading and speed magnitude used by `Play` when it omits them. They outlive a
    /// zero timescale, so a stopped player still remembers where it was going.
    direction: Direction,
    speed: f64,
}

impl<C: Clock> PlayerStore<C> {
    pub fn new(clock: C, cfg: Config) -> Self {
        let player = new_player_with(&clock, &cfg);
        Self {
            player,
            clock,
            cfg,
            cold_start: true,
            direction: Direction::Forward,
            speed: 1.0,
        }
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Swap in an externally produced record (e.g. restored from storage).
    pub fn replace(&mut self, player: Player) -> Result<(), TransportError> {
        player.validate()?;
        self.player = player;
        self.cold_start = true;
        self.sync_heading();
        Ok(())
    }

    /// Apply one command. Rejected commands leave the player unchanged.
    pub fn apply(&mut self, cmd: PlayerCommand) -> Result<(), TransportError> {
        trace!("apply {:?}", cmd);
        let p = &self.player;
        let next = match cmd {
            PlayerCommand::SetDuration { duration } => {
                if !(duration.is_finite() && duration > 0.0) {
                    let err = TransportError::InvalidDuration { duration };
                    warn!("rejected duration: {err}");
                    return Err(err);
                }
                player::set_duration(p, duration)
            }
            PlayerCommand::SetSpeed { speed } => {
                self.speed = speed.abs();
                player::set_direction(&player::set_speed(p, speed), self.direction)
            }
            PlayerCommand::SetDirection { direction } => {
                self.direction = direction;
                player::set_direction(p, direction)
            }
            PlayerCommand::Reverse => {
                self.direction = self.direction.flipped();
                reverse(p)
            }
            PlayerCommand::Reset { stamp } => reset(p, &self.clock, stamp),
            PlayerCommand::Play { speed, direction } => {
                self.cold_start = true;
                let speed = speed.unwrap_or(self.speed);
                let direction = direction.unwrap_or(self.direction);
                play_with(p, Some(speed), Some(direction), &self.cfg)
            }
            PlayerCommand::Pause => pause(p),
            PlayerCommand::SetBounds { start, end } => {
                player::set_bounds(p, checked_range("bounds", [start, end])?)
            }
            PlayerCommand::SetBound { bound, stamp } => {
                player::set_bound(p, bound, stamp.unwrap_or(p.stamp))
            }
            PlayerCommand::SetViewport { start, end } => {
                player::set_viewport(p, checked_range("viewport", [start, end])?)
            }
            PlayerCommand::CenterViewport { stamp } => center_viewport(p, &self.clock, stamp),
            PlayerCommand::SetViewportBound { bound, stamp } => {
                player::set_viewport_bound(p, bound, stamp)
            }
            PlayerCommand::SetPlayback { playback } => player::set_playback(p, playback),
            PlayerCommand::Seek { stamp } => seek(p, &self.clock, stamp),
        };
        self.player = next;
        self.sync_heading();
        Ok(())
    }

    /// Apply commands in order, stopping at the first rejection.
    pub fn apply_all<I>(&mut self, cmds: I) -> Result<(), TransportError>
    where
        I: IntoIterator<Item = PlayerCommand>,
    {
        cmds.into_iter().try_for_each(|cmd| self.apply(cmd))
    }

    /// Parse and apply a command (or array of commands) from JSON.
    pub fn apply_json(&mut self, json: &str) -> Result<(), TransportError> {
        let cmds = parse_commands_json(json)?;
        self.apply_all(cmds)
    }

    /// Advance one frame if running. Stopped players are returned untouched.
    pub fn tick(&mut self) -> &Player {
        if self.player.running {
            self.player = update_with(&self.player, &self.clock, self.cold_start, &self.cfg);
            self.cold_start = false;
            self.sync_heading();
        }
        &self.player
    }

    /// Adopt the live timescale's heading; bounce flips it mid-play.
    fn sync_heading(&mut self) {
        if self.player.timescale != 0.0 {
            self.direction = self.player.direction();
            self.speed = self.player.timescale.abs();
        }
    }
}

fn checked_range(kind: &str, range: Range) -> Result<Range, TransportError> {
    if range[0] > range[1] {
        let err = TransportError::inverted(kind, range);
        warn!("rejected {kind}: {err}");
        return Err(err);
    }
    Ok(range)
}
