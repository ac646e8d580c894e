//! Editing error types.

use thiserror::Error;

/// Errors produced by chart editing operations.
///
/// Timing-map edits are not represented here: an invalid tempo edit
/// is ignored rather than signalled (see
/// [`TimingMap::set_tempo`](crate::TimingMap::set_tempo)).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// A note already occupies the target beat and lane.
    #[error("note already exists at beat {beat} in lane {lane}")]
    NoteAlreadyExists { beat: f32, lane: u8 },

    /// The chart already contains a difficulty with this name.
    #[error("difficulty {0:?} already exists")]
    DifficultyAlreadyExists(String),
}
