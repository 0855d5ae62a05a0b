//! Notebook store with substring search

use notefleet_domain::{Clock, IdSequence, Note, SystemClock};
use notefleet_types::{NoteId, StoreError};
use std::fmt;
use tracing::{debug, info};

use crate::DEFAULT_FIRST_NOTE_ID;

/// Notes in creation order
///
/// Lookups are linear scans; there is no secondary index and no delete.
pub struct Notebook {
    notes: Vec<Note>,
    note_ids: IdSequence,
    clock: Box<dyn Clock>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Notebook {
    /// Empty notebook dated by the host clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            notes: Vec::new(),
            note_ids: IdSequence::starting_at(DEFAULT_FIRST_NOTE_ID),
            clock,
        }
    }

    /// Issue ids starting from `first_id` instead of the default
    pub fn starting_at(mut self, first_id: u64) -> Self {
        self.note_ids = IdSequence::starting_at(first_id);
        self
    }

    /// Create a note and append it, returning its id
    pub fn add_new_note(
        &mut self,
        text: impl Into<String>,
        tags: impl Into<String>,
    ) -> Result<NoteId, StoreError> {
        let id = NoteId(self.note_ids.next_id().ok_or(StoreError::IdsExhausted)?);
        let note = Note::new(id, text, tags, self.clock.today());
        self.notes.push(note);
        info!(note_id = %id, "note added");
        Ok(id)
    }

    fn find_note(&self, id: NoteId) -> Option<&Note> {
        debug!(note_id = %id, "looking up note");
        self.notes.iter().find(|n| n.id() == id)
    }

    fn find_note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        debug!(note_id = %id, "looking up note for update");
        self.notes.iter_mut().find(|n| n.id() == id)
    }

    pub fn note(&self, id: NoteId) -> Result<&Note, StoreError> {
        self.find_note(id).ok_or(StoreError::NoteNotFound(id))
    }

    pub fn get_note_text(&self, id: NoteId) -> Result<&str, StoreError> {
        self.note(id).map(Note::text)
    }

    pub fn get_note_tags(&self, id: NoteId) -> Result<&str, StoreError> {
        self.note(id).map(Note::tags)
    }

    pub fn replace_note_text(
        &mut self,
        id: NoteId,
        text: impl Into<String>,
    ) -> Result<(), StoreError> {
        let note = self.find_note_mut(id).ok_or(StoreError::NoteNotFound(id))?;
        note.set_text(text);
        Ok(())
    }

    pub fn replace_note_tags(
        &mut self,
        id: NoteId,
        tags: impl Into<String>,
    ) -> Result<(), StoreError> {
        let note = self.find_note_mut(id).ok_or(StoreError::NoteNotFound(id))?;
        note.set_tags(tags);
        Ok(())
    }

    /// Notes whose text or tags contain `search`, in creation order
    pub fn search_notes(&self, search: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.contains(search)).collect()
    }

    pub fn get_num_notes(&self) -> usize {
        self.notes.len()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl fmt::Display for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            writeln!(f, "{}", note)?;
        }
        Ok(())
    }
}
