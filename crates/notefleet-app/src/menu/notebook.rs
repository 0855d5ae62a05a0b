//! Command line notebook menu

use notefleet_domain::Note;
use notefleet_store::Notebook;
use notefleet_types::{NoteId, OutputFormat, Result, StoreError};
use std::io::{BufRead, Write};
use tracing::debug;

use super::{Console, Menu};

const MENU_TEXT: &str = "
        Notebook Menu

        1. Display Notes
        2. Search Notes
        3. Add Note
        4. Modify Note
        5. Quit
        ";

/// Notebook menu over a line console
pub struct NotebookCli<R, W> {
    notebook: Notebook,
    console: Console<R, W>,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> NotebookCli<R, W> {
    pub fn new(notebook: Notebook, console: Console<R, W>, format: OutputFormat) -> Self {
        Self {
            notebook,
            console,
            format,
        }
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_parts(self) -> (Notebook, Console<R, W>) {
        (self.notebook, self.console)
    }

    fn apply_changes(
        &mut self,
        id: NoteId,
        text: String,
        tags: String,
    ) -> std::result::Result<(), StoreError> {
        // Report unknown ids even when both answers were left empty
        self.notebook.note(id)?;
        if !text.is_empty() {
            self.notebook.replace_note_text(id, text)?;
        }
        if !tags.is_empty() {
            self.notebook.replace_note_tags(id, tags)?;
        }
        Ok(())
    }
}

fn render_notes<'a, R, W, I>(
    console: &mut Console<R, W>,
    format: OutputFormat,
    notes: I,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = &'a Note>,
{
    match format {
        OutputFormat::Json => {
            let notes: Vec<&Note> = notes.into_iter().collect();
            console.say(&serde_json::to_string_pretty(&notes)?)
        }
        OutputFormat::Table => {
            for note in notes {
                console.say(&format!("\n\t{}", note))?;
            }
            Ok(())
        }
    }
}

impl<R: BufRead, W: Write> Menu for NotebookCli<R, W> {
    fn display_menu(&mut self) -> Result<Option<String>> {
        self.console.say(MENU_TEXT)?;
        self.console.ask("\tEnter a choice: ")
    }

    fn display_notes(&mut self) -> Result<()> {
        render_notes(&mut self.console, self.format, self.notebook.notes())
    }

    fn search_notes(&mut self) -> Result<()> {
        let search = self.console.prompt("\n\tEnter the string to search for: ")?;
        let matching = self.notebook.search_notes(&search);
        debug!(pattern = %search, matches = matching.len(), "note search");
        self.console.say(&format!(
            "\tThere are {} notes matching the string \"{}\":",
            matching.len(),
            search
        ))?;
        render_notes(&mut self.console, self.format, matching)
    }

    fn add_new_note(&mut self) -> Result<()> {
        let text = self.console.prompt("\n\tEnter the text for the note: ")?;
        let tags = self.console.prompt("\tEnter tags for the note: ")?;
        match self.notebook.add_new_note(text, tags) {
            Ok(_) => self.console.say("\tNote has been added"),
            Err(e) => self.console.say(&format!("\t{}", e)),
        }
    }

    fn modify_note(&mut self) -> Result<()> {
        let raw_id = self.console.prompt("\n\tEnter a note id: ")?;
        let text = self.console.prompt("\n\tEnter the text for the note: ")?;
        let tags = self.console.prompt("\tEnter tags for the note: ")?;

        let Ok(id) = raw_id.parse::<NoteId>() else {
            return self
                .console
                .say(&format!("\t{} is not a valid note id", raw_id.trim()));
        };

        match self.apply_changes(id, text, tags) {
            Ok(()) => self.console.say("\tNote has been modified"),
            Err(e) => self.console.say(&format!("\t{}", e)),
        }
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.console.say(message)
    }
}
