//! Snapshot module - immutable session state and its persistence codec
//!
//! A [`SessionSnapshot`] holds exactly what a saved game needs: board, score,
//! hand, turn, game-over flag and combo. Nothing derived is stored; the board's
//! placement counter is rebuilt from the owners present on load.
//!
//! Two encodings are provided:
//! - one JSON document ([`to_json`] / [`from_json`])
//! - flat key/value pairs for string stores ([`to_entries`] / [`from_entries`]),
//!   one JSON value per field

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::catalog::Hand;

/// Store keys, in field order
pub const SNAPSHOT_KEYS: [&str; 6] = ["board", "score", "hand", "turn", "gameOver", "combo"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub board: Board,
    pub score: u32,
    pub hand: Hand,
    pub turn: u32,
    pub game_over: bool,
    pub combo: u32,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("saved game is missing `{0}`")]
    MissingKey(&'static str),
    #[error("saved game field `{key}` is malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("saved game is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SnapshotError {
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::MissingKey(_) => "missing_key",
            SnapshotError::Malformed { .. } | SnapshotError::Json(_) => "malformed",
        }
    }
}

/// Encode the whole snapshot as one JSON document
pub fn to_json(snapshot: &SessionSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Decode a snapshot written by [`to_json`]
pub fn from_json(json: &str) -> Result<SessionSnapshot, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Flatten into `(key, json value)` pairs, keys as in [`SNAPSHOT_KEYS`]
pub fn to_entries(
    snapshot: &SessionSnapshot,
) -> Result<Vec<(&'static str, String)>, SnapshotError> {
    Ok(vec![
        ("board", serde_json::to_string(&snapshot.board)?),
        ("score", serde_json::to_string(&snapshot.score)?),
        ("hand", serde_json::to_string(&snapshot.hand)?),
        ("turn", serde_json::to_string(&snapshot.turn)?),
        ("gameOver", serde_json::to_string(&snapshot.game_over)?),
        ("combo", serde_json::to_string(&snapshot.combo)?),
    ])
}

/// Rebuild a snapshot from a key/value store.
///
/// Every key in [`SNAPSHOT_KEYS`] is required.
pub fn from_entries<F>(lookup: F) -> Result<SessionSnapshot, SnapshotError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(SessionSnapshot {
        board: field(&lookup, "board")?,
        score: field(&lookup, "score")?,
        hand: field(&lookup, "hand")?,
        turn: field(&lookup, "turn")?,
        game_over: field(&lookup, "gameOver")?,
        combo: field(&lookup, "combo")?,
    })
}

fn field<T, F>(lookup: &F, key: &'static str) -> Result<T, SnapshotError>
where
    T: DeserializeOwned,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or(SnapshotError::MissingKey(key))?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Malformed { key, source })
}
