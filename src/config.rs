//! Configuration loading and resolution
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument (clap also reads the matching `MARQUEE_*`
//!    environment variable for each flag)
//! 2. TOML config file (`--config`, or `<config_dir>/marquee/marquee.toml`)
//! 3. Compiled default

use clap::Parser;
use std::path::{Path, PathBuf};

/// Default listen address when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:5740";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    version,
    about = "Booking-listing web app for music venues, artists, and shows"
)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "MARQUEE_DATABASE", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Address and port to listen on
    #[arg(long, env = "MARQUEE_BIND", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "MARQUEE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub bind_addr: String,
}

impl Config {
    /// Resolve the effective configuration from parsed arguments.
    pub fn resolve(cli: Cli) -> Config {
        let file = load_config_file(cli.config.as_deref());

        let db_path = cli
            .database
            .or_else(|| file.as_ref().and_then(|f| f.database.clone()))
            .unwrap_or_else(default_db_path);

        let bind_addr = cli
            .bind
            .or_else(|| file.as_ref().and_then(|f| f.bind.clone()))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        Config { db_path, bind_addr }
    }
}

/// Settings read from the TOML config file.
#[derive(Debug, Default)]
struct FileSettings {
    database: Option<PathBuf>,
    bind: Option<String>,
}

/// Read the config file if one exists.
///
/// A missing or unparseable file is not an error; the resolver falls
/// through to the compiled defaults.
fn load_config_file(explicit: Option<&Path>) -> Option<FileSettings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => dirs::config_dir()?.join("marquee").join("marquee.toml"),
    };

    let content = std::fs::read_to_string(&path).ok()?;
    let value = toml::from_str::<toml::Value>(&content).ok()?;

    Some(FileSettings {
        database: value
            .get("database")
            .and_then(|v| v.as_str())
            .map(PathBuf::from),
        bind: value
            .get("bind")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    })
}

/// OS-dependent default database location.
fn default_db_path() -> PathBuf {
    let data_dir = if cfg!(target_os = "macos") {
        // ~/Library/Application Support/marquee
        dirs::data_dir()
    } else {
        // ~/.local/share/marquee on Linux, %LOCALAPPDATA%\marquee on Windows
        dirs::data_local_dir()
    };

    data_dir
        .map(|d| d.join("marquee"))
        .unwrap_or_else(|| PathBuf::from("./marquee_data"))
        .join("marquee.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(database: Option<&str>, bind: Option<&str>, config: Option<&Path>) -> Cli {
        Cli {
            database: database.map(PathBuf::from),
            bind: bind.map(str::to_string),
            config: config.map(Path::to_path_buf),
        }
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("marquee.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_cli_args_take_priority_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(&dir, "database = \"/from/file.db\"\nbind = \"0.0.0.0:80\"\n");

        let resolved = Config::resolve(cli(
            Some("/from/cli.db"),
            Some("127.0.0.1:9999"),
            Some(&config_path),
        ));
        assert_eq!(resolved.db_path, PathBuf::from("/from/cli.db"));
        assert_eq!(resolved.bind_addr, "127.0.0.1:9999");
    }

    #[test]
    fn test_file_used_when_cli_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(&dir, "database = \"/from/file.db\"\nbind = \"0.0.0.0:80\"\n");

        let resolved = Config::resolve(cli(None, None, Some(&config_path)));
        assert_eq!(resolved.db_path, PathBuf::from("/from/file.db"));
        assert_eq!(resolved.bind_addr, "0.0.0.0:80");
    }

    #[test]
    fn test_partial_file_falls_through_per_setting() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(&dir, "bind = \"0.0.0.0:80\"\n");

        let resolved = Config::resolve(cli(None, None, Some(&config_path)));
        assert!(resolved.db_path.ends_with("marquee.db"));
        assert_eq!(resolved.bind_addr, "0.0.0.0:80");
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        // Point at a config path that does not exist so the resolver cannot
        // pick up a real user config file.
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such.toml");

        let resolved = Config::resolve(cli(None, None, Some(&missing)));
        assert!(resolved.db_path.ends_with("marquee.db"));
        assert_eq!(resolved.bind_addr, DEFAULT_BIND);
    }

    #[test]
    fn test_malformed_file_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config(&dir, "this is not toml [[[");

        let resolved = Config::resolve(cli(None, None, Some(&config_path)));
        assert_eq!(resolved.bind_addr, DEFAULT_BIND);
    }
}
