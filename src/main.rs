mod calc;
mod cmd;
mod data;
mod logging;
mod ui;

use clap::{Parser, Subcommand};
use data::{AppSettings, CalendarDate, Persistable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moodcal", about = "daily mood journal")]
struct Cli {
    /// Path to the data directory holding config.yaml and the log (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Day the calendar opens on (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<CalendarDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config.yaml into the data directory
    Init,
    /// List the available moods
    Moods,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    let settings = AppSettings::load()?;
    let log_path = logging::init(&data_dir, &settings.log_level)?;
    tracing::info!(
        data_dir = %data_dir.display(),
        log = %log_path.display(),
        "starting"
    );

    match cli.command {
        None => cmd::root::run(settings, cli.date),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Moods) => cmd::moods::run(&settings),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "locale: es").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_date() {
        let cli = Cli::try_parse_from(["moodcal", "--date", "2024-05-01"]).unwrap();
        assert_eq!(cli.date, CalendarDate::from_ymd(2024, 5, 1));
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["moodcal", "--date", "2024-13-01"]).is_err());
    }

    #[test]
    fn test_cli_subcommands() {
        let cli = Cli::try_parse_from(["moodcal", "moods"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Moods)));
        let cli = Cli::try_parse_from(["moodcal", "--data-dir", "/tmp/x", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init)));
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/x"));
    }
}
