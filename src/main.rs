use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mermaid_edit::config::{DIAGRAM_TYPE_VAR, INDENT_WIDTH_VAR};
use mermaid_edit::{
    ActionInfo, ActionKind, ConfigError, DiagramType, EditorConfig, Position, SessionContext, TextBuffer, detect,
    generate_node_id, prettify_with, run, swap_arrow_direction,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input is not formatted")]
    NotFormatted,
}

#[derive(Parser, Debug)]
#[command(name = "mermaid-edit", about = "Format and edit Mermaid flowchart and sequence diagrams")]
struct Cli {
    /// Spaces per indent level (1-8).
    #[arg(long, global = true, env = INDENT_WIDTH_VAR)]
    indent_width: Option<String>,
    /// Diagram type assumed when a document's type cannot be detected.
    #[arg(long, global = true, env = DIAGRAM_TYPE_VAR)]
    default_diagram: Option<String>,
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Flags win over the environment; clap has already applied the env fallback.
    fn config(&self) -> Result<EditorConfig, ConfigError> {
        EditorConfig::from_lookup(|key| match key {
            INDENT_WIDTH_VAR => self.indent_width.clone(),
            DIAGRAM_TYPE_VAR => self.default_diagram.clone(),
            _ => None,
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical form of a diagram.
    Format {
        /// Input file; stdin when absent.
        file: Option<PathBuf>,
        /// Print nothing and fail if the input is not already canonical.
        #[arg(long)]
        check: bool,
    },
    /// Print the diagram type, or `unknown`.
    Detect { file: Option<PathBuf> },
    /// Swap the endpoints of one edge or message line.
    Swap { line: String },
    /// Print the next free `tempN` node id.
    NextId { file: Option<PathBuf> },
    /// List the editor actions with their labels and descriptions.
    Actions {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run an editor action and print the outcome as JSON.
    Action {
        #[arg(value_parser = parse_action)]
        action: ActionKind,
        file: Option<PathBuf>,
        /// 1-based cursor line.
        #[arg(long, default_value_t = 1)]
        line: usize,
        /// Selected text.
        #[arg(long, default_value = "")]
        selection: String,
        /// Override the detected diagram type.
        #[arg(long, value_parser = parse_diagram)]
        diagram: Option<DiagramType>,
    },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command {
        Command::Format { file, check } => run_format(&config, file.as_deref(), check),
        Command::Detect { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", detect(&text).map_or("unknown", DiagramType::as_str));
            Ok(())
        }
        Command::Swap { line } => {
            println!("{}", swap_arrow_direction(&line));
            Ok(())
        }
        Command::NextId { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", generate_node_id(&text));
            Ok(())
        }
        Command::Actions { json } => {
            let catalog: Vec<ActionInfo> = ActionKind::ALL.into_iter().map(ActionKind::info).collect();
            if json {
                return print_json(&catalog);
            }
            for info in catalog {
                println!("{:<22} {:<22} {}", info.id, info.label, info.description);
            }
            Ok(())
        }
        Command::Action { action, file, line, selection, diagram } => {
            let text = read_input(file.as_deref())?;
            let ctx = config.session(&text);
            let ctx = SessionContext { diagram_type: diagram.unwrap_or(ctx.diagram_type), ..ctx };
            let model = TextBuffer::new(&text);
            tracing::debug!(%action, line, dialect = %ctx.diagram_type, "running action");
            print_json(&run(action, &model, Position::new(line, 1), &selection, &ctx))
        }
    }
}

fn run_format(config: &EditorConfig, file: Option<&Path>, check: bool) -> Result<(), CliError> {
    let text = read_input(file)?;
    let pretty = prettify_with(&text, &config.format_options());
    if check {
        return if pretty == text { Ok(()) } else { Err(CliError::NotFormatted) };
    }
    print!("{pretty}");
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn parse_action(raw: &str) -> Result<ActionKind, String> {
    ActionKind::from_id(raw).ok_or_else(|| {
        let known: Vec<&str> = ActionKind::ALL.iter().map(|kind| kind.id()).collect();
        format!("unknown action '{raw}' (expected one of: {})", known.join(", "))
    })
}

fn parse_diagram(raw: &str) -> Result<DiagramType, String> {
    DiagramType::from_id(raw).ok_or_else(|| format!("unknown diagram type '{raw}'"))
}
