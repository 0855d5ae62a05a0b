//! Interactive text menus
//!
//! The stores never print. These consoles collect input line by line,
//! call into a store and render the outcome, so they can be driven from
//! a terminal or from an in-memory buffer in tests.

pub mod logistics;
pub mod notebook;

pub use logistics::LogisticsCli;
pub use notebook::NotebookCli;

use notefleet_types::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// Why a menu loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked the quit entry
    Quit,
    /// Input ran out before a quit
    EndOfInput,
}

/// Line-oriented input/output pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line without its terminator, `None` at end of input
    ///
    /// A line that is not valid UTF-8 is reported and read with
    /// replacement characters so the session keeps going.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let mut line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!("input line is not valid UTF-8");
                self.say("\tInput is not valid UTF-8")?;
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `message` without a newline and read the answer
    pub fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like `ask`, but end of input reads as an empty answer
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        Ok(self.ask(message)?.unwrap_or_default())
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Capabilities a notebook front-end has to provide
///
/// `run` drives the numbered choices 1 to 5 on top of them.
pub trait Menu {
    /// Show the menu and return the raw choice, `None` at end of input
    fn display_menu(&mut self) -> Result<Option<String>>;

    fn display_notes(&mut self) -> Result<()>;

    /// Ask for a pattern and show the matching notes
    fn search_notes(&mut self) -> Result<()>;

    fn add_new_note(&mut self) -> Result<()>;

    /// Ask for a note id and replace its text and/or tags
    fn modify_note(&mut self) -> Result<()>;

    /// Print a status line
    fn notify(&mut self, message: &str) -> Result<()>;

    fn quit(&mut self) -> Result<MenuExit> {
        self.notify("\tGoodbye!")?;
        Ok(MenuExit::Quit)
    }

    /// Display the menu and respond to choices until quit or end of input
    fn run(&mut self) -> Result<MenuExit> {
        loop {
            let Some(choice) = self.display_menu()? else {
                return Ok(MenuExit::EndOfInput);
            };
            let choice = choice.trim();
            if !matches!(choice, "1" | "2" | "3" | "4" | "5") {
                self.notify(&format!("\t{} is not a valid choice", choice))?;
                continue;
            }

            self.notify(&format!("\t{} is a valid choice", choice))?;
            match choice {
                "1" => self.display_notes()?,
                "2" => self.search_notes()?,
                "3" => self.add_new_note()?,
                "4" => self.modify_note()?,
                _ => return self.quit(),
            }
        }
    }
}
