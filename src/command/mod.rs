//! Command handlers for the form's user actions.
//!
//! A hosting UI (a desktop window, a terminal session, a test double)
//! implements [`Host`] and forwards button presses to a [`CommandHandler`].
//! Every handler takes a fresh snapshot of the form, so the composer never
//! touches UI types.
//!
//! # Example
//!
//! ```
//! use readmegen::command::{Command, CommandHandler, Host, SaveDialog};
//! use readmegen::form::{FormField, FormInput};
//! use std::path::PathBuf;
//!
//! #[derive(Default)]
//! struct Stdout;
//!
//! impl Host for Stdout {
//!     fn show_output(&mut self, text: &str) {
//!         print!("{}", text);
//!     }
//!     fn show_preview(&mut self, text: &str) {
//!         print!("{}", text);
//!     }
//!     fn clear_output(&mut self) {}
//!     fn choose_save_path(&mut self, _dialog: &SaveDialog) -> Option<PathBuf> {
//!         None
//!     }
//!     fn report_error(&mut self, title: &str, message: &str) {
//!         eprintln!("{}: {}", title, message);
//!     }
//!     fn report_info(&mut self, title: &str, message: &str) {
//!         println!("{}: {}", title, message);
//!     }
//! }
//!
//! let mut form = FormInput::new().with(FormField::Title, "Demo");
//! let handler = CommandHandler::new();
//! handler.run(Command::Generate, &mut form, &mut Stdout).unwrap();
//! ```

mod save;

pub use save::{write_markdown, SaveDialog};

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::form::FormInput;
use crate::render::{compose_with, ComposeOptions};

/// The UI collaborator that displays output and talks to the user.
pub trait Host {
    /// Replace the contents of the main read-only output area.
    fn show_output(&mut self, text: &str);

    /// Show text in a separate read-only preview view.
    fn show_preview(&mut self, text: &str);

    /// Empty the main output area.
    fn clear_output(&mut self);

    /// Ask the user where to save. `None` means the user cancelled.
    fn choose_save_path(&mut self, dialog: &SaveDialog) -> Option<PathBuf>;

    /// Show a blocking error message.
    fn report_error(&mut self, title: &str, message: &str);

    /// Show a blocking informational message.
    fn report_info(&mut self, title: &str, message: &str);
}

/// A user action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Compose and show in the main output area
    Generate,
    /// Compose and show in a separate preview
    Preview,
    /// Compose and write to a user-chosen file
    Save,
    /// Reset the form and the output area
    Clear,
}

impl Command {
    /// All commands in button order.
    pub const ALL: [Command; 4] = [
        Command::Preview,
        Command::Generate,
        Command::Clear,
        Command::Save,
    ];

    /// Short name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate => "generate",
            Command::Preview => "preview",
            Command::Save => "save",
            Command::Clear => "clear",
        }
    }

    /// Button caption for the command.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Generate => "Generate README",
            Command::Preview => "Preview README",
            Command::Save => "Save README to File",
            Command::Clear => "Clear Fields",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown command `{}`", s)))
    }
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output shown in the main area
    Generated,
    /// Output shown in a preview
    Previewed,
    /// File written at the given path
    Saved(PathBuf),
    /// The user dismissed the save dialog
    SaveCancelled,
    /// Form and output cleared
    Cleared,
}

/// Runs form commands against a host.
#[derive(Debug, Clone, Default)]
pub struct CommandHandler {
    options: ComposeOptions,
    dialog: SaveDialog,
}

impl CommandHandler {
    /// Create a handler with default compose options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compose options.
    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the save dialog settings.
    pub fn with_dialog(mut self, dialog: SaveDialog) -> Self {
        self.dialog = dialog;
        self
    }

    /// Get the compose options.
    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Dispatch a command.
    pub fn run(&self, command: Command, form: &mut FormInput, host: &mut dyn Host) -> Result<Outcome> {
        log::debug!("Running command: {}", command);
        match command {
            Command::Generate => {
                self.generate(form, host);
                Ok(Outcome::Generated)
            }
            Command::Preview => {
                self.preview(form, host);
                Ok(Outcome::Previewed)
            }
            Command::Save => Ok(match self.save(form, host)? {
                Some(path) => Outcome::Saved(path),
                None => Outcome::SaveCancelled,
            }),
            Command::Clear => {
                self.clear(form, host);
                Ok(Outcome::Cleared)
            }
        }
    }

    /// Compose the current form and show it in the main output area.
    pub fn generate(&self, form: &FormInput, host: &mut dyn Host) -> String {
        let text = self.compose(form);
        host.show_output(&text);
        text
    }

    /// Compose the current form and show it in a preview.
    pub fn preview(&self, form: &FormInput, host: &mut dyn Host) -> String {
        let text = self.compose(form);
        host.show_preview(&text);
        text
    }

    /// Compose the current form and write it to a file the host chooses.
    ///
    /// An empty title is rejected before anything is composed or written.
    /// Returns `Ok(None)` when the user cancels the dialog.
    pub fn save(&self, form: &FormInput, host: &mut dyn Host) -> Result<Option<PathBuf>> {
        if !form.has_title() {
            let err = Error::MissingTitle;
            log::warn!("Save rejected: {}", err);
            host.report_error("Error", &err.to_string());
            return Err(err);
        }

        let text = self.compose(form);

        let Some(chosen) = host.choose_save_path(&self.dialog) else {
            log::debug!("Save cancelled");
            return Ok(None);
        };
        let path = self.dialog.resolve(&chosen);

        if let Err(err) = write_markdown(&path, &text) {
            host.report_error("Error", &err.to_string());
            return Err(err);
        }

        host.report_info("Success", &format!("README saved to {}", path.display()));
        Ok(Some(path))
    }

    /// Reset every form field and empty the output area.
    pub fn clear(&self, form: &mut FormInput, host: &mut dyn Host) {
        form.clear();
        host.clear_output();
    }

    fn compose(&self, form: &FormInput) -> String {
        compose_with(&form.snapshot(), &self.options)
    }
}
