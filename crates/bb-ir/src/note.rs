//! Note and note type value types.

use arrayvec::ArrayString;
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a note type in a difficulty's registry.
    pub struct NoteTypeId;
}

/// A named class of note (tap, mine, roll, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteType {
    /// Display name, unique within a difficulty
    pub name: ArrayString<32>,
    /// Hitting this note is a penalty
    pub is_mine: bool,
    /// Hold that must be re-tapped while it is active
    pub is_roll: bool,
}

impl NoteType {
    /// Create a note type. Names longer than the cap are dropped.
    pub fn new(name: &str, is_mine: bool, is_roll: bool) -> Self {
        let mut type_name = ArrayString::new();
        let _ = type_name.try_push_str(name);
        Self {
            name: type_name,
            is_mine,
            is_roll,
        }
    }
}

/// A single placed note.
///
/// Notes are keyed by `(beat, lane)` — a difficulty never holds two
/// notes on the same beat and lane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    /// Type of this note. Back-reference into the owning difficulty's
    /// registry; resolves to `None` once the type has been removed.
    pub note_type: NoteTypeId,
    /// Beat the note sits on
    pub beat: f32,
    /// Hold length in beats, 0 for a tap
    pub hold_length: f32,
    /// Column the note occupies, 0-based
    pub lane: u8,
}

impl Note {
    /// Whether the note is held rather than tapped.
    pub fn is_hold(&self) -> bool {
        self.hold_length > 0.0
    }
}

/// A partial edit applied to an existing note.
///
/// `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoteEdit {
    pub note_type: Option<NoteTypeId>,
    pub hold_length: Option<f32>,
}
