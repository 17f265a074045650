use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;

const PREFIX: &str = "--";
const FLAG_PATTERN: &str = r"^--\S+$";

/// Start-up flags given as `--name value` pairs.
///
/// Tokens are examined pairwise: a token at an even position that looks like
/// `--name` takes the following token as its value. Anything else is skipped,
/// so unknown flags and stray words never fail start-up.
#[derive(Debug, Default)]
pub struct ArgSource {
    values: HashMap<String, Option<String>>,
}

impl ArgSource {
    /// Reads the process arguments, program name excluded.
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flag = Regex::new(FLAG_PATTERN).context("Invalid flag pattern")?;
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut values = HashMap::new();
        for index in (0..tokens.len()).step_by(2) {
            let token = &tokens[index];
            if !flag.is_match(token) {
                continue;
            }
            if let Some(name) = token.strip_prefix(PREFIX) {
                // Later duplicates win.
                values.insert(name.to_string(), tokens.get(index + 1).cloned());
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_flag_value() {
        let args = ArgSource::parse(["--username", "Bob"]).unwrap();
        assert_eq!(args.get("username"), Some("Bob"));
        assert_eq!(args.get("dir"), None);
    }

    #[test]
    fn test_pairwise_positions_only() {
        // "--username" sits at an odd position, so it is the value of "stray".
        let args = ArgSource::parse(["stray", "--username", "Bob"]).unwrap();
        assert_eq!(args.get("username"), None);
    }

    #[test]
    fn test_flag_without_value() {
        let args = ArgSource::parse(["--dir", "/tmp", "--username"]).unwrap();
        assert_eq!(args.get("dir"), Some("/tmp"));
        assert_eq!(args.get("username"), None);
    }

    #[test]
    fn test_bare_prefix_is_not_a_flag() {
        let args = ArgSource::parse(["--", "value"]).unwrap();
        assert_eq!(args.get(""), None);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let args = ArgSource::parse(["--username", "Ann", "--username", "Bob"]).unwrap();
        assert_eq!(args.get("username"), Some("Bob"));
    }
}
