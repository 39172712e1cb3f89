//! Interactive form session on stdin.
//!
//! Each input line either edits a field or presses one of the form's
//! buttons, one at a time.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use readmegen::{Command, CommandHandler, FormField, FormInput, Outcome, SaveDialog};

use crate::host::TerminalHost;

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace a field's raw value
    Set(FormField, String),
    /// Set whether the table header text is included
    Header(bool),
    /// Flip the table header checkbox
    ToggleHeader,
    /// Press a button; `Save` may carry a path
    Run(Command, Option<PathBuf>),
    /// Print the current raw field values
    Show,
    /// Print the command list
    Help,
    /// End the session
    Quit,
    /// Blank line
    Nothing,
}

/// Expand `\n`, `\t` and `\\` escapes in a field value.
fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

/// Parse one line of session input.
pub fn parse_line(line: &str) -> Result<Action, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Action::Nothing),
        "set" => {
            let rest = rest.trim_start();
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if name.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            let field = name.parse::<FormField>().map_err(|e| e.to_string())?;
            Ok(Action::Set(field, unescape(value)))
        }
        "header" => match rest.trim() {
            "on" => Ok(Action::Header(true)),
            "off" => Ok(Action::Header(false)),
            _ => Err("usage: header on|off".to_string()),
        },
        "toggle-header" => Ok(Action::ToggleHeader),
        "show" => Ok(Action::Show),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        name => {
            let command = name.parse::<Command>().map_err(|e| e.to_string())?;
            let path = match (command, rest.trim()) {
                (Command::Save, "") => None,
                (Command::Save, path) => Some(PathBuf::from(path)),
                (_, "") => None,
                (_, _) => return Err(format!("`{}` takes no arguments", command)),
            };
            Ok(Action::Run(command, path))
        }
    }
}

fn print_help() {
    println!("{}", "Commands".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("  set <field> <value>   edit a field (\\n for newlines)");
    println!("  header on|off         include the table header text");
    println!("  toggle-header         flip the table header checkbox");
    println!("  show                  print the current fields");
    for command in Command::ALL {
        let usage = if command == Command::Save {
            "save [path]".to_string()
        } else {
            command.name().to_string()
        };
        println!("  {:<21} {}", usage, command.label());
    }
    println!("  quit                  leave the session");
    println!();
    let names: Vec<_> = FormField::ALL.iter().map(|f| f.name()).collect();
    println!("Fields: {}", names.join(", ").dimmed());
}

fn print_form(form: &FormInput) {
    for field in FormField::ALL {
        println!("{}: {}", field.label().bold(), form.get(field));
    }
    println!(
        "{}: {}",
        "Include Table Header".bold(),
        if form.include_table_header { "Yes" } else { "No" }
    );
}

/// Interactive session state.
pub struct Session {
    form: FormInput,
    handler: CommandHandler,
    host: TerminalHost,
}

impl Session {
    /// Start a session with the given form and handler.
    pub fn new(form: FormInput, handler: CommandHandler) -> Self {
        Self {
            form,
            handler,
            host: TerminalHost::interactive(),
        }
    }

    /// Apply one action. Returns `false` when the session should end.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Set(field, value) => self.form.set(field, value),
            Action::Header(include) => self.form.include_table_header = include,
            Action::ToggleHeader => {
                self.form.include_table_header = !self.form.include_table_header;
                println!(
                    "Include Table Header: {}",
                    if self.form.include_table_header { "Yes" } else { "No" }
                );
            }
            Action::Run(command, path) => {
                if command == Command::Save {
                    self.host.set_save_path(path);
                }
                // Failures were already reported through the host.
                match self.handler.run(command, &mut self.form, &mut self.host) {
                    Ok(Outcome::SaveCancelled) => println!("{}", "Save cancelled".yellow()),
                    Ok(_) => {}
                    Err(e) => log::debug!("Command {} failed: {}", command, e),
                }
            }
            Action::Show => print_form(&self.form),
            Action::Help => print_help(),
            Action::Quit => return false,
            Action::Nothing => {}
        }
        true
    }

    /// Read and apply lines until `quit` or end of input.
    ///
    /// `save` without a path asks for one on the next input line; a blank
    /// answer cancels the save.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        println!(
            "{} - type {} for commands",
            "readmegen".cyan().bold(),
            "help".bold()
        );
        prompt(">")?;

        let mut lines = input.lines();
        while let Some(line) = lines.next() {
            let action = match parse_line(&line?) {
                Ok(Action::Run(Command::Save, None)) if self.form.has_title() => {
                    let dialog = SaveDialog::MARKDOWN;
                    prompt(&format!(
                        "Save as ({} {}, blank to cancel):",
                        dialog.filter_name, dialog.filter_pattern
                    ))?;
                    let answer = lines.next().transpose()?.unwrap_or_default();
                    let answer = answer.trim();
                    let path = (!answer.is_empty()).then(|| PathBuf::from(answer));
                    Action::Run(Command::Save, path)
                }
                Ok(action) => action,
                Err(message) => {
                    eprintln!("{}: {}", "Error".red().bold(), message);
                    prompt(">")?;
                    continue;
                }
            };

            if !self.apply(action) {
                break;
            }
            prompt(">")?;
        }

        Ok(())
    }

    /// The current form.
    pub fn form(&self) -> &FormInput {
        &self.form
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{} ", text.cyan());
    io::stdout().flush()
}
