//! Bubble - render chat messages with code fences, images, and inline styles

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bubble_core::{segments, Bubble, Conversation, EditOutcome, Message, Role};
use clap::{Parser, Subcommand, ValueEnum};

mod config;
mod logging;
mod render;

use config::Config;
use render::{RenderOptions, Theme};

#[derive(Parser)]
#[command(name = "bubble", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to <config dir>/bubble/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed segments of message content as JSON
    Segments {
        /// File holding the message content (stdin when omitted)
        file: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Render message content to the terminal
    Render {
        /// File holding the message content (stdin when omitted)
        file: Option<PathBuf>,
        /// Author of the message; user content is shown verbatim
        #[arg(long, value_enum, default_value_t = RoleArg::Assistant)]
        role: RoleArg,
        /// Disable colors and styles
        #[arg(long)]
        plain: bool,
    },
    /// Render a conversation stored as a JSON array of messages
    Transcript {
        file: PathBuf,
        /// Disable colors and styles
        #[arg(long)]
        plain: bool,
    },
    /// Edit a user message in a conversation file and print the result
    Edit {
        file: PathBuf,
        /// Zero-based index of the message to edit
        index: usize,
        /// Replacement content
        text: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    User,
    Assistant,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Assistant => Role::Assistant,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, config.log_filter.as_deref());

    let theme = config.theme();
    let options = config.render_options();
    tracing::debug!(theme = theme.name, ?options, "loaded config");

    match cli.command {
        Command::Segments { file, pretty } => print_segments(file.as_deref(), pretty),
        Command::Render { file, role, plain } => {
            let content = read_input(file.as_deref())?;
            let message = Message::new(role.into(), content);
            let bubble = Bubble::new(&message);
            let lines = render::render_message(bubble.rendered(), &theme, &options);
            emit(&lines, plain)
        }
        Command::Transcript { file, plain } => print_transcript(&file, &theme, &options, plain),
        Command::Edit { file, index, text } => edit_conversation(&file, index, text),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read message from stdin")?;
            Ok(content)
        }
    }
}

fn load_conversation(path: &Path) -> Result<Conversation> {
    let json = read_input(Some(path))?;
    Conversation::from_json(&json)
        .with_context(|| format!("Failed to load conversation {}", path.display()))
}

fn print_segments(file: Option<&Path>, pretty: bool) -> Result<()> {
    let content = read_input(file)?;
    let segments = segments::parse(&content);
    tracing::debug!(count = segments.len(), "parsed segments");

    let json = if pretty {
        serde_json::to_string_pretty(&segments)?
    } else {
        serde_json::to_string(&segments)?
    };
    println!("{json}");
    Ok(())
}

fn print_transcript(path: &Path, theme: &Theme, options: &RenderOptions, plain: bool) -> Result<()> {
    let conversation = load_conversation(path)?;
    if conversation.is_empty() {
        tracing::warn!("Conversation {} has no messages", path.display());
    }
    tracing::debug!(messages = conversation.len(), "rendering transcript");

    let lines = render::render_transcript(conversation.messages(), theme, options);
    emit(&lines, plain)
}

fn edit_conversation(path: &Path, index: usize, text: String) -> Result<()> {
    let mut conversation = load_conversation(path)?;

    match conversation.edit(index, text)? {
        EditOutcome::Unchanged => tracing::info!(index, "message unchanged"),
        EditOutcome::Replaced { dropped } => {
            tracing::info!(index, dropped, "message replaced")
        }
    }

    println!("{}", conversation.to_json_pretty()?);
    Ok(())
}

/// Write lines to stdout, styled only when stdout is a terminal
fn emit(lines: &[ratatui::text::Line<'_>], plain: bool) -> Result<()> {
    let stdout = io::stdout();
    let styled = !plain && stdout.is_terminal();
    let mut out = stdout.lock();
    render::write_lines(&mut out, lines, styled).context("Failed to write to stdout")
}
