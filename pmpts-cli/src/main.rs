mod config;
mod confirm;
mod constants;
mod list;

use crate::confirm::TtyConfirm;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pmpts_core::action::LastAction;
use pmpts_core::store::{PromptStore, SUFFIX, suffixed};
use pmpts_core::undo::{UndoOutcome, perform_undo};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "pmpts",
    bin_name = "pmpts",
    about = "Manage VS Code prompt files"
)]
struct Args {
    /// Override the prompts root directory for this invocation
    #[arg(short = 'r', long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Set the prompts root directory
    Setroot {
        /// Path to the prompts root
        path: PathBuf,
    },
    /// Move a file into the prompts root
    Add {
        /// Path of the file to add
        file: PathBuf,
        /// Overwrite an existing prompt without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Remove a prompt by name (moved to trash)
    Remove {
        /// Prompt name, with or without suffix
        name: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
    /// Rename a prompt
    Rename {
        /// Existing prompt name
        old: String,
        /// New prompt name
        new: String,
        /// Overwrite the target if it exists
        #[arg(short, long)]
        force: bool,
    },
    /// Copy a prompt to an output file
    Copy {
        /// Prompt name, with or without suffix
        name: String,
        /// Output file path
        out: PathBuf,
    },
    /// Print a prompt's content
    Show {
        /// Prompt name, with or without suffix
        name: String,
        /// Copy the content to the clipboard instead of printing it
        #[arg(short, long)]
        copy: bool,
    },
    /// List prompts
    List {
        /// Show frontmatter fields in a table
        #[arg(short, long)]
        verbose: bool,
        /// Also show file names
        #[arg(short, long)]
        files: bool,
    },
    /// Undo the last add or remove
    Undo,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = match config::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: failed to load settings: {err}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    let Some(cmd) = args.cmd else {
        Args::command().print_help().ok();
        std::process::exit(exitcode::USAGE);
    };

    match run(cmd, args.root, &mut settings) {
        Ok(message) => {
            if !message.is_empty() {
                println!("{message}");
            }
            std::process::exit(exitcode::OK);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(
    cmd: Commands,
    root_override: Option<PathBuf>,
    settings: &mut config::Settings,
) -> Result<String> {
    match cmd {
        Commands::Setroot { path } => {
            settings.root = Some(path.clone());
            config::store(settings)?;
            Ok(format!("root set to: {}", path.display()))
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(shell, &mut cmd, "pmpts", &mut std::io::stdout());
            Ok(String::new())
        }
        Commands::Add { file, force } => {
            let store = open_store(root_override, settings)?;
            let action = store.add_file(&file, force, &TtyConfirm)?;
            let message = if let LastAction::Add { dest, .. } = &action {
                added_message(dest)
            } else {
                String::new()
            };
            settings.last_action = Some(action);
            config::store(settings)?;
            Ok(message)
        }
        Commands::Remove { name, yes } => {
            let store = open_store(root_override, settings)?;
            let action = store.remove_prompt(&name, yes, &TtyConfirm)?;
            settings.last_action = Some(action);
            config::store(settings)?;
            Ok(format!("removed {} (moved to trash)", suffixed(&name)))
        }
        Commands::Rename { old, new, force } => {
            let store = open_store(root_override, settings)?;
            let action = store.rename_prompt(&old, &new, force, &TtyConfirm)?;
            settings.last_action = Some(action);
            config::store(settings)?;
            Ok(format!("renamed {} -> {}", suffixed(&old), suffixed(&new)))
        }
        Commands::Copy { name, out } => {
            let store = open_store(root_override, settings)?;
            let copied = store.copy_prompt(&name, &out)?;
            Ok(format!("copied {} -> {}", suffixed(&name), copied.display()))
        }
        Commands::Show { name, copy } => {
            let store = open_store(root_override, settings)?;
            let content = store.read(&name)?;
            if copy {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.set_text(content)?;
                Ok(format!("copied {} to clipboard", suffixed(&name)))
            } else {
                Ok(content.trim_end().to_string())
            }
        }
        Commands::List { verbose, files } => {
            let store = open_store(root_override, settings)?;
            let entries = store.entries()?;
            if entries.is_empty() {
                return Ok("(no prompts)".to_string());
            }
            if verbose {
                Ok(list::render_table(&entries))
            } else if files {
                Ok(list::render_files(&entries))
            } else {
                Ok(list::render_names(&entries))
            }
        }
        Commands::Undo => {
            let outcome = perform_undo(settings.last_action.take())?;
            let message = undo_message(&outcome);
            config::store(settings)?;
            Ok(message)
        }
    }
}

fn open_store(
    root_override: Option<PathBuf>,
    settings: &config::Settings,
) -> Result<PromptStore> {
    let root = root_override.unwrap_or_else(|| settings.root());
    let store = PromptStore::new(root);
    store.ensure_root()?;
    Ok(store)
}

fn added_message(dest: &Path) -> String {
    let base = file_name(dest);
    let name = base.strip_suffix(SUFFIX).unwrap_or(&base);
    format!("added prompt {base}\nuse /{name} to use it")
}

fn undo_message(outcome: &UndoOutcome) -> String {
    match outcome {
        UndoOutcome::Restored { dest } => format!("restored {}", file_name(dest)),
        UndoOutcome::RestoredOverwritten { .. } => {
            "restored overwritten prompt and moved new added file to trash".to_string()
        }
        UndoOutcome::MovedBack { dest, src } => {
            format!("moved {} back to {}", file_name(dest), src.display())
        }
        UndoOutcome::MovedToCwd { path } => {
            format!("moved {} to {}", file_name(path), path.display())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
