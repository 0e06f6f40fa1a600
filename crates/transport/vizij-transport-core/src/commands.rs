//! Command vocabulary for driving a transport from outside (UI events, JS, JSON).

use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::player::{Bound, Direction, Playback};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlayerCommand {
    SetDuration {
        duration: f64,
    },
    SetSpeed {
        speed: f64,
    },
    SetDirection {
        direction: Direction,
    },
    Reverse,
    Reset {
        #[serde(default)]
        stamp: Option<f64>,
    },
    Play {
        #[serde(default)]
        speed: Option<f64>,
        #[serde(default)]
        direction: Option<Direction>,
    },
    Pause,
    SetBounds {
        start: f64,
        end: f64,
    },
    /// Move one bound; `stamp` defaults to the current playhead.
    SetBound {
        bound: Bound,
        #[serde(default)]
        stamp: Option<f64>,
    },
    SetViewport {
        start: f64,
        end: f64,
    },
    /// Seek so the viewport centers on `stamp` (or the current playhead).
    CenterViewport {
        #[serde(default)]
        stamp: Option<f64>,
    },
    SetViewportBound {
        bound: Bound,
        stamp: f64,
    },
    SetPlayback {
        playback: Playback,
    },
    Seek {
        stamp: f64,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<PlayerCommand>),
    One(PlayerCommand),
}

/// Parse either a single command or an array of commands.
pub fn parse_commands_json(json: &str) -> Result<Vec<PlayerCommand>, TransportError> {
    let parsed: OneOrMany = serde_json::from_str(json)?;
    Ok(match parsed {
        OneOrMany::Many(cmds) => cmds,
        OneOrMany::One(cmd) => vec![cmd],
    })
}
