use anyhow::{Context, Result, bail};
use colored::*;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::args::ArgSource;
use crate::shell::path::normalize;

pub const DEFAULT_USERNAME: &str = "Anonymous";

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub username: String,
    pub start_dir: PathBuf,
}

/// Optional TOML file given with `--config`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub username: Option<String>,
    pub start_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: &ArgSource) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read working directory")?;
        Self::build(args, home_dir(), &cwd)
    }

    /// Layers defaults, the config file and start-up flags, in that order.
    pub fn build(args: &ArgSource, home: PathBuf, cwd: &Path) -> Result<Self> {
        let file = match args.get("config") {
            Some(path) => load_config(&cwd.join(path))?,
            None => FileConfig::default(),
        };

        let username = non_empty(args.get("username").map(str::to_string))
            .or_else(|| non_empty(file.username))
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

        let start_dir = args
            .get("dir")
            .map(PathBuf::from)
            .or(file.start_dir)
            .unwrap_or(home);
        let start_dir = normalize(&cwd.join(start_dir));

        if !start_dir.is_dir() {
            bail!("❌ Start directory is not a directory: {}", start_dir.display());
        }

        Ok(Self { username, start_dir })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .unwrap_or_else(|| PathBuf::from("/"))
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    if !path.is_file() {
        bail!("❌ Critical: config file not found: {}", path.display());
    }
    eprintln!("{} Loading config from: {}", "🌿".green(), path.display().to_string().bold());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // A relative start_dir is relative to the file, not to the caller.
    if let Some(dir) = &mut config.start_dir
        && dir.is_relative()
        && let Some(base) = path.parent()
    {
        let joined = base.join(&*dir);
        *dir = joined;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::tests::scratch_dir;

    fn args(tokens: &[&str]) -> ArgSource {
        ArgSource::parse(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let home = scratch_dir("config_defaults");
        let config = Config::build(&args(&[]), home.clone(), Path::new("/")).unwrap();
        assert_eq!(config.username, "Anonymous");
        assert_eq!(config.start_dir, home);
        fs::remove_dir_all(home).unwrap();
    }

    #[test]
    fn test_username_flag() {
        let home = scratch_dir("config_username");
        let config = Config::build(&args(&["--username", "Bob"]), home.clone(), Path::new("/")).unwrap();
        assert_eq!(config.username, "Bob");

        let config = Config::build(&args(&["--username", ""]), home.clone(), Path::new("/")).unwrap();
        assert_eq!(config.username, "Anonymous");
        fs::remove_dir_all(home).unwrap();
    }

    #[test]
    fn test_relative_dir_flag() {
        let base = scratch_dir("config_dir_flag");
        fs::create_dir(base.join("work")).unwrap();
        let config = Config::build(&args(&["--dir", "./work/../work"]), PathBuf::from("/"), &base).unwrap();
        assert_eq!(config.start_dir, base.join("work"));
        fs::remove_dir_all(base).unwrap();
    }

    #[test]
    fn test_missing_start_dir() {
        let base = scratch_dir("config_missing_dir");
        let res = Config::build(&args(&["--dir", "gone"]), PathBuf::from("/"), &base);
        assert!(res.is_err());
        fs::remove_dir_all(base).unwrap();
    }

    #[test]
    fn test_config_file_layer() {
        let base = scratch_dir("config_file");
        fs::create_dir(base.join("projects")).unwrap();
        fs::write(base.join("fm.toml"), "username = \"Ann\"\nstart_dir = \"projects\"\n").unwrap();

        let config = Config::build(&args(&["--config", "fm.toml"]), PathBuf::from("/"), &base).unwrap();
        assert_eq!(config.username, "Ann");
        assert_eq!(config.start_dir, base.join("projects"));

        // Flags override the file.
        let config = Config::build(
            &args(&["--config", "fm.toml", "--username", "Bob"]),
            PathBuf::from("/"),
            &base,
        )
        .unwrap();
        assert_eq!(config.username, "Bob");
        fs::remove_dir_all(base).unwrap();
    }

    #[test]
    fn test_config_file_rejects_unknown_keys() {
        let base = scratch_dir("config_unknown");
        fs::write(base.join("fm.toml"), "colour = \"red\"\n").unwrap();
        let res = Config::build(&args(&["--config", "fm.toml"]), PathBuf::from("/"), &base);
        assert!(res.is_err());
        fs::remove_dir_all(base).unwrap();
    }
}
