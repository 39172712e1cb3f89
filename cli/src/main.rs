//! readmegen CLI - README Markdown composer

mod host;
mod session;

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use readmegen::{
    compose_with_stats, CommandHandler, ComposeOptions, FormField, FormInput, JsonFormat, Section,
};

use host::TerminalHost;
use session::Session;

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(author = "readmegen contributors")]
#[command(version)]
#[command(about = "Compose README Markdown from a handful of fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the README and print it
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show the README in a framed preview
    Preview {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Compose the README and save it (requires a title)
    Save {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output file (".md" is added when there is no extension)
        #[arg(short, long, value_name = "FILE", default_value = "README.md")]
        output: PathBuf,
    },

    /// Print the parsed fields as JSON
    Json {
        #[command(flatten)]
        fields: FieldArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show which sections the fields produce
    Info {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Fill in the form line by line
    #[command(alias = "i")]
    Interactive {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Show version information
    Version,
}

/// Field values shared by every subcommand.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Load field values from a JSON file (flags override it)
    #[arg(long, value_name = "FILE")]
    fields: Option<PathBuf>,

    /// Document title
    #[arg(short, long)]
    title: Option<String>,

    /// Description, wrapped on output
    #[arg(short, long)]
    description: Option<String>,

    /// Table headers (comma-separated)
    #[arg(long)]
    headers: Option<String>,

    /// Table data (rows, comma-separated)
    #[arg(long)]
    rows: Option<String>,

    /// Code example
    #[arg(short, long)]
    code: Option<String>,

    /// Image URL
    #[arg(long)]
    image_url: Option<String>,

    /// Image alt text
    #[arg(long)]
    image_alt: Option<String>,

    /// Leave the header names out of the table
    #[arg(long)]
    no_table_header: bool,

    /// Description line width (0 disables wrapping)
    #[arg(long, env = "READMEGEN_WIDTH", default_value = "80")]
    width: usize,
}

impl FieldArgs {
    fn form(&self) -> Result<FormInput, Box<dyn std::error::Error>> {
        let mut form = match &self.fields {
            Some(path) => {
                let json = fs::read_to_string(path)?;
                FormInput::from_json(&json)?
            }
            None => FormInput::new(),
        };

        let overrides = [
            (FormField::Title, &self.title),
            (FormField::Description, &self.description),
            (FormField::Headers, &self.headers),
            (FormField::Rows, &self.rows),
            (FormField::Code, &self.code),
            (FormField::ImageUrl, &self.image_url),
            (FormField::ImageAlt, &self.image_alt),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }

        if self.no_table_header {
            form.include_table_header = false;
        }

        Ok(form)
    }

    fn options(&self) -> ComposeOptions {
        ComposeOptions::new().with_line_width(self.width)
    }

    fn handler(&self) -> CommandHandler {
        CommandHandler::new().with_options(self.options())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate { fields }) => cmd_generate(&fields),
        Some(Commands::Preview { fields }) => cmd_preview(&fields),
        Some(Commands::Save { fields, output }) => cmd_save(&fields, output),
        Some(Commands::Json { fields, compact }) => cmd_json(&fields, compact),
        Some(Commands::Info { fields }) => cmd_info(&fields),
        Some(Commands::Interactive { fields }) => cmd_interactive(&fields),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: readmegen <COMMAND> [FIELDS]".yellow());
            println!("       readmegen --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate(args: &FieldArgs) -> Result<(), Box<dyn std::error::Error>> {
    let form = args.form()?;
    args.handler().generate(&form, &mut TerminalHost::oneshot());
    Ok(())
}

fn cmd_preview(args: &FieldArgs) -> Result<(), Box<dyn std::error::Error>> {
    let form = args.form()?;
    args.handler().preview(&form, &mut TerminalHost::oneshot());
    Ok(())
}

fn cmd_save(args: &FieldArgs, output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let form = args.form()?;
    let mut host = TerminalHost::oneshot().with_save_path(output);

    match args.handler().save(&form, &mut host) {
        Ok(_) => Ok(()),
        // The host has already shown the message.
        Err(_) => std::process::exit(1),
    }
}

fn cmd_json(args: &FieldArgs, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fields = args.form()?.snapshot();

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", readmegen::render::to_json(&fields, format)?);
    Ok(())
}

fn cmd_info(args: &FieldArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fields = args.form()?.snapshot();
    let result = compose_with_stats(&fields, &args.options());
    let stats = &result.stats;

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for section in Section::ALL {
        let mark = if stats.rendered(section) {
            "yes".green()
        } else {
            "no".dimmed()
        };
        println!("{}: {}", section.to_string().bold(), mark);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Description lines".bold(), stats.description_line_count);
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "Blank rows dropped".bold(), stats.dropped_row_count);
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!("{}: {}", "Bytes".bold(), result.content_len());

    if !fields.has_title() {
        println!();
        println!("{}", "No title: saving will be refused".yellow());
    }

    Ok(())
}

fn cmd_interactive(args: &FieldArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(args.form()?, args.handler());
    session.run(io::stdin().lock())?;
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "readmegen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("README Markdown composer");
    println!();
    println!("License: MIT");
}
