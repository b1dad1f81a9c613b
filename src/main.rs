//! clouddeck - A mock cloud drive browser for the terminal.
//!
//! Usage:
//!   cdeck                    Launch interactive TUI
//!   cdeck ls [ID...]         List a folder, addressed by its id path
//!   cdeck tree               Print the whole drive
//!   cdeck search QUERY       Search a folder by name
//!   cdeck export             Export the drive to JSON
//!   cdeck --help             Show help

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use clouddeck_core::{EntryId, FileEntry, SearchQuery, TreeStore};
use clouddeck_tui::{ThemeVariant, TuiConfig, UserSettings, ViewMode};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CLOUDDECK_LOG";

#[derive(Parser)]
#[command(
    name = "clouddeck",
    version,
    about = "A mock cloud drive browser for the terminal",
    long_about = "clouddeck browses a read-only drive of folders and files.\n\n\
                  Launch the interactive TUI by running `cdeck`, or use \
                  subcommands to list, search or export the drive."
)]
struct Cli {
    /// JSON tree to browse instead of the built-in sample drive
    #[arg(long, global = true, value_name = "FILE")]
    tree: Option<PathBuf>,

    /// Write logs to this file (filter with CLOUDDECK_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Start the TUI in list view
    #[arg(long)]
    list: bool,

    /// Color theme for the TUI
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Open the TUI with the root folder filtered by this query
    #[arg(long, value_name = "QUERY")]
    filter: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the entries of a folder
    Ls {
        /// Folder ids from the root down (e.g. `1 1-3`); empty lists the root
        ids: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the whole drive as a tree
    Tree {
        /// Maximum depth to display (top-level entries are depth 1)
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Search the entries of one folder by name
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Folder ids from the root down; defaults to the root
        #[arg(long = "in", value_name = "ID", num_args = 1..)]
        within: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Export the drive to JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeVariant {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeVariant::Dark,
            ThemeArg::Light => ThemeVariant::Light,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log.as_deref(), cli.command.is_none())?;

    // CLI flags override the settings file
    let mut settings = UserSettings::load();
    if let Some(tree) = cli.tree {
        settings.drive.tree_path = Some(tree);
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme.into();
    }
    if cli.list {
        settings.view_mode = ViewMode::List;
    }

    let store = settings
        .drive
        .load_store()
        .wrap_err("Failed to load drive tree")?;

    match cli.command {
        Some(Command::Ls { ids, format }) => run_ls(&store, &ids, format)?,
        Some(Command::Tree { depth }) => run_tree(&store, depth),
        Some(Command::Search {
            query,
            within,
            format,
        }) => run_search(&store, &query, &within, format)?,
        Some(Command::Export { output }) => run_export(&store, output)?,
        None => {
            // Launch TUI
            let mut config = TuiConfig::new();
            if let Some(query) = cli.filter {
                config = config.with_filter(query);
            }
            clouddeck_tui::run_with_config(Arc::new(store), settings, config)?;
        }
    }

    Ok(())
}

/// Install the log subscriber.
///
/// The TUI owns the terminal, so it only logs when a file is given.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .wrap_err_with(|| format!("Cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Root id followed by the given folder ids.
fn folder_path(ids: &[String]) -> Vec<EntryId> {
    std::iter::once(EntryId::root())
        .chain(ids.iter().map(|id| EntryId::new(id.as_str())))
        .collect()
}

/// Breadcrumb label for a folder path.
fn path_label(store: &TreeStore, path: &[EntryId]) -> String {
    let mut names = vec![store.root_label().to_string()];
    names.extend(
        path.iter()
            .skip(1)
            .map(|id| store.get(id).map_or_else(|| id.to_string(), |e| e.name.to_string())),
    );
    names.join(" › ")
}

/// List the entries of a folder.
fn run_ls(store: &TreeStore, ids: &[String], format: OutputFormat) -> Result<()> {
    let path = folder_path(ids);
    let entries = store
        .resolve(&path)
        .wrap_err_with(|| format!("Cannot list {}", ids.join("/")))?;

    match format {
        OutputFormat::Text => {
            println!("{}", path_label(store, &path));
            println!("{}", "─".repeat(72));
            for entry in entries {
                print_entry(entry, 0);
            }
            println!();
            println!("{} item(s)", entries.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
    }

    Ok(())
}

/// Print the whole drive.
fn run_tree(store: &TreeStore, max_depth: Option<usize>) {
    let stats = store.stats();

    println!();
    println!("{}", "─".repeat(72));
    println!(
        " {} - {}",
        store.root_label(),
        clouddeck_core::format_size(stats.total_size)
    );
    println!(
        " {} files, {} folders, {} levels deep",
        stats.total_files, stats.total_folders, stats.max_depth
    );
    println!("{}", "─".repeat(72));
    println!();

    for (depth, entry) in store.walk() {
        if !within_depth(depth, max_depth) {
            continue;
        }
        print_entry(entry, depth);
    }
}

/// Whether a walk entry (top level at 0) is shown under `--depth`, which
/// counts levels from 1 like the stats header.
fn within_depth(walk_depth: usize, max_depth: Option<usize>) -> bool {
    max_depth.is_none_or(|max| walk_depth < max)
}

/// Search a folder by name.
fn run_search(
    store: &TreeStore,
    query: &str,
    within: &[String],
    format: OutputFormat,
) -> Result<()> {
    let path = folder_path(within);
    let entries = store
        .resolve(&path)
        .wrap_err_with(|| format!("Cannot search {}", within.join("/")))?;
    let matches = SearchQuery::new(query).apply(entries);

    match format {
        OutputFormat::Text => {
            eprintln!(
                "{} of {} entries in {} match \"{}\"",
                matches.len(),
                entries.len(),
                path_label(store, &path),
                query
            );
            for entry in &matches {
                print_entry(entry, 0);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }

    Ok(())
}

/// Export the drive to JSON.
fn run_export(store: &TreeStore, output: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(store.root())?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)
                .wrap_err_with(|| format!("Cannot write {}", output_path.display()))?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

/// Print one entry as a row.
fn print_entry(entry: &FileEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if entry.is_folder() { "▸ " } else { "  " };
    let name = if entry.is_folder() {
        format!("{}/", entry.name)
    } else {
        entry.name.to_string()
    };
    let size = entry.size_label().unwrap_or_default();

    println!(
        "{}{}{:<40} {:>9} {:<8} {:>10}  {}",
        indent,
        marker,
        truncate(&name, 40),
        entry.id.as_str(),
        entry.kind().to_string(),
        size,
        entry.modified
    );
}

/// Truncate a string to max length in characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clouddeck_core::sample::sample_store;

    #[test]
    fn test_depth_limit_matches_stats_levels() {
        let store = sample_store("My Drive").unwrap();
        let levels = store.stats().max_depth as usize;
        assert_eq!(levels, 3);

        let shown = |max| store.walk().filter(|(d, _)| within_depth(*d, max)).count();
        assert_eq!(shown(None), store.len());
        assert_eq!(shown(Some(levels)), store.len());
        assert!(shown(Some(levels - 1)) < store.len());
        assert_eq!(shown(Some(1)), store.root().len());
        assert_eq!(shown(Some(0)), 0);
    }

    #[test]
    fn test_folder_path_starts_at_root() {
        let path = folder_path(&["1".to_string(), "1-3".to_string()]);
        assert_eq!(path, vec![EntryId::root(), EntryId::new("1"), EntryId::new("1-3")]);
    }
}
