//! Notebook note type

use chrono::NaiveDate;
use notefleet_types::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note with free-form text and a free-form tag string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    text: String,
    tags: String,
    created_on: NaiveDate,
}

impl Note {
    pub fn new(
        id: NoteId,
        text: impl Into<String>,
        tags: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            tags: tags.into(),
            created_on,
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.tags = tags.into();
    }

    /// Case-sensitive substring match against text or tags
    pub fn contains(&self, search: &str) -> bool {
        self.text.contains(search) || self.tags.contains(search)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note Id = {}, Date = {}, Text = {}, Tags = {}",
            self.id, self.created_on, self.text, self.tags
        )
    }
}
