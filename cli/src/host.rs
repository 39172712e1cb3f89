//! Terminal implementation of the form host.

use std::path::PathBuf;

use colored::Colorize;
use readmegen::{Host, SaveDialog};

/// Shows output on stdout and messages on stderr.
pub struct TerminalHost {
    /// Path handed out by the next save dialog
    save_path: Option<PathBuf>,

    /// Whether the host is driven by an interactive session
    interactive: bool,
}

impl TerminalHost {
    /// Host for one-shot commands.
    pub fn oneshot() -> Self {
        Self {
            save_path: None,
            interactive: false,
        }
    }

    /// Host for an interactive session.
    pub fn interactive() -> Self {
        Self {
            save_path: None,
            interactive: true,
        }
    }

    /// Answer the next save dialog with `path`.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    /// Answer the next save dialog with `path`.
    pub fn set_save_path(&mut self, path: Option<PathBuf>) {
        self.save_path = path;
    }
}

impl Host for TerminalHost {
    fn show_output(&mut self, text: &str) {
        print!("{}", text);
        if !text.is_empty() && !text.ends_with('\n') {
            println!();
        }
    }

    fn show_preview(&mut self, text: &str) {
        println!("{}", "Preview README".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        self.show_output(text);
        println!("{}", "─".repeat(40).dimmed());
    }

    fn clear_output(&mut self) {
        if self.interactive {
            println!("{}", "Fields cleared".green());
        }
    }

    fn choose_save_path(&mut self, dialog: &SaveDialog) -> Option<PathBuf> {
        log::debug!("Save dialog: {} ({})", dialog.filter_name, dialog.filter_pattern);
        self.save_path.take()
    }

    fn report_error(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title.red().bold(), message);
    }

    fn report_info(&mut self, title: &str, message: &str) {
        println!("{}: {}", title.green().bold(), message);
    }
}
