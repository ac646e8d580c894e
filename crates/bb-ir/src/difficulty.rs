//! A single playable difficulty: its notes, note types and timing.

use arrayvec::ArrayString;
use slotmap::SlotMap;
use tracing::warn;

use crate::error::EditError;
use crate::note::{Note, NoteEdit, NoteType, NoteTypeId};
use crate::timing::TimingMap;

/// One playable arrangement of a chart (e.g. "Easy", "Expert").
///
/// Owns its notes, the registry of note types those notes reference,
/// and the timing map used to place them against the audio.
#[derive(Clone, Debug)]
pub struct Difficulty {
    /// Display name, unique within the chart
    pub name: ArrayString<32>,
    /// Beat/time mapping for this difficulty
    pub timing: TimingMap,
    note_types: SlotMap<NoteTypeId, NoteType>,
    notes: Vec<Note>,
}

impl Difficulty {
    /// Create an empty difficulty with default timing.
    pub fn new(name: &str) -> Self {
        let mut diff_name = ArrayString::new();
        let _ = diff_name.try_push_str(name);
        Self {
            name: diff_name,
            timing: TimingMap::default(),
            note_types: SlotMap::with_key(),
            notes: Vec::new(),
        }
    }

    /// All notes, in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Place a note at `(beat, lane)`.
    ///
    /// Returns the placed note, or [`EditError::NoteAlreadyExists`]
    /// when the beat and lane are already occupied.
    pub fn add_note(
        &mut self,
        note_type: NoteTypeId,
        beat: f32,
        hold_length: f32,
        lane: u8,
    ) -> Result<Note, EditError> {
        if self.note_at(beat, lane).is_some() {
            return Err(EditError::NoteAlreadyExists { beat, lane });
        }

        let note = Note {
            note_type,
            beat,
            hold_length,
            lane,
        };
        self.notes.push(note);
        Ok(note)
    }

    /// The note at `(beat, lane)`, if any.
    pub fn note_at(&self, beat: f32, lane: u8) -> Option<&Note> {
        self.notes
            .iter()
            .find(|note| note.beat == beat && note.lane == lane)
    }

    /// Apply a partial edit to the note at `(beat, lane)`.
    ///
    /// Does nothing when no such note exists.
    pub fn edit_note(&mut self, beat: f32, lane: u8, edit: NoteEdit) {
        let Some(note) = self
            .notes
            .iter_mut()
            .find(|note| note.beat == beat && note.lane == lane)
        else {
            return;
        };

        if let Some(note_type) = edit.note_type {
            note.note_type = note_type;
        }
        if let Some(hold_length) = edit.hold_length {
            note.hold_length = hold_length;
        }
    }

    /// Remove the note at `(beat, lane)`. Does nothing when absent.
    pub fn remove_note(&mut self, beat: f32, lane: u8) {
        self.notes
            .retain(|note| note.beat != beat || note.lane != lane);
    }

    /// Register a note type and return its handle.
    pub fn add_note_type(&mut self, name: &str, is_mine: bool, is_roll: bool) -> NoteTypeId {
        self.note_types.insert(NoteType::new(name, is_mine, is_roll))
    }

    /// Resolve a note type handle. `None` once the type was removed.
    pub fn note_type(&self, id: NoteTypeId) -> Option<&NoteType> {
        self.note_types.get(id)
    }

    /// Look a note type up by name.
    pub fn find_note_type(&self, name: &str) -> Option<NoteTypeId> {
        self.note_types
            .iter()
            .find(|(_, note_type)| note_type.name.as_str() == name)
            .map(|(id, _)| id)
    }

    /// All registered note types.
    pub fn note_types(&self) -> impl Iterator<Item = (NoteTypeId, &NoteType)> {
        self.note_types.iter()
    }

    /// Remove a note type from the registry.
    ///
    /// Notes referencing it keep their handle and resolve to `None`
    /// from then on.
    pub fn remove_note_type(&mut self, id: NoteTypeId) -> Option<NoteType> {
        let removed = self.note_types.remove(id);
        if removed.is_some() {
            let dangling = self.notes.iter().filter(|n| n.note_type == id).count();
            if dangling > 0 {
                warn!(
                    "removed note type still referenced by {} notes in {:?}",
                    dangling, self.name
                );
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn difficulty_with_tap() -> (Difficulty, NoteTypeId) {
        let mut diff = Difficulty::new("Expert");
        let tap = diff.add_note_type("Tap", false, false);
        (diff, tap)
    }

    #[test]
    fn adding_duplicate_note_is_rejected() {
        let (mut diff, tap) = difficulty_with_tap();
        diff.add_note(tap, 4.0, 0.0, 1).unwrap();

        let result = diff.add_note(tap, 4.0, 2.0, 1);
        assert_eq!(
            result,
            Err(EditError::NoteAlreadyExists { beat: 4.0, lane: 1 })
        );
        assert_eq!(diff.notes().len(), 1);
    }

    #[test]
    fn same_beat_different_lanes_coexist() {
        let (mut diff, tap) = difficulty_with_tap();
        diff.add_note(tap, 4.0, 0.0, 0).unwrap();
        diff.add_note(tap, 4.0, 0.0, 1).unwrap();
        assert_eq!(diff.notes().len(), 2);
    }

    #[test]
    fn edit_note_updates_only_given_fields() {
        let (mut diff, tap) = difficulty_with_tap();
        let mine = diff.add_note_type("Mine", true, false);
        diff.add_note(tap, 4.0, 0.0, 1).unwrap();

        diff.edit_note(4.0, 1, NoteEdit { note_type: Some(mine), ..Default::default() });

        let note = diff.note_at(4.0, 1).unwrap();
        assert_eq!(note.note_type, mine);
        assert_eq!(note.hold_length, 0.0);
    }

    #[test]
    fn edit_of_missing_note_is_a_noop() {
        let (mut diff, _) = difficulty_with_tap();
        diff.edit_note(9.0, 3, NoteEdit { hold_length: Some(1.0), ..Default::default() });
        assert!(diff.notes().is_empty());
    }

    #[test]
    fn remove_note_by_beat_and_lane() {
        let (mut diff, tap) = difficulty_with_tap();
        diff.add_note(tap, 4.0, 0.0, 0).unwrap();
        diff.add_note(tap, 4.0, 0.0, 1).unwrap();

        diff.remove_note(4.0, 0);

        assert!(diff.note_at(4.0, 0).is_none());
        assert!(diff.note_at(4.0, 1).is_some());
    }

    #[test]
    fn note_type_lookup_by_name() {
        let (mut diff, tap) = difficulty_with_tap();
        let roll = diff.add_note_type("Roll", false, true);

        assert_eq!(diff.find_note_type("Tap"), Some(tap));
        assert_eq!(diff.find_note_type("Roll"), Some(roll));
        assert_eq!(diff.find_note_type("Fake"), None);
    }

    #[test]
    fn removed_note_type_leaves_dangling_references() {
        let (mut diff, tap) = difficulty_with_tap();
        diff.add_note(tap, 4.0, 0.0, 1).unwrap();

        let removed = diff.remove_note_type(tap);

        assert!(removed.is_some());
        let note = diff.note_at(4.0, 1).unwrap();
        assert!(diff.note_type(note.note_type).is_none());
    }
}
