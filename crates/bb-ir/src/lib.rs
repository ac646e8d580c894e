//! Core chart IR types for the backbeat chart editor.
//!
//! This crate defines the in-memory model the editor operates on:
//! a [`Chart`] holds named difficulties, each [`Difficulty`] holds its
//! timed notes plus the note types they reference, and a [`TimingMap`]
//! converts between musical position (beats) and wall-clock time under
//! a sequence of tempo changes. File formats, rendering and playback
//! all build on these types.

mod chart;
mod difficulty;
mod error;
mod note;
pub mod timing;

pub use chart::Chart;
pub use difficulty::Difficulty;
pub use error::EditError;
pub use note::{Note, NoteEdit, NoteType, NoteTypeId};
pub use timing::{TempoPoint, TimingMap, DEFAULT_TEMPO};
