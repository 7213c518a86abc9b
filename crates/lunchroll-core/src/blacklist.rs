//! Restaurant names the caller never wants to be offered.

use std::collections::HashSet;
use std::path::Path;

use crate::ConfigError;

/// Set of restaurant names to exclude. Matching is exact and case-sensitive
/// against the name the provider reports in nearby search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    names: HashSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from explicit names. Empty strings are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Parses newline-delimited text: each non-blank line is one name, with
    /// surrounding whitespace (including `\r`) stripped.
    #[must_use]
    pub fn parse_lines(content: &str) -> Self {
        Self::from_names(content.lines().map(str::trim))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Resolve the blacklist from exactly one of an explicit name list or a file.
///
/// # Errors
///
/// - [`ConfigError::BlacklistSourceConflict`] if both or neither source is given.
/// - [`ConfigError::BlacklistIo`] if the file cannot be read.
/// - [`ConfigError::EmptyBlacklist`] if the file holds no non-blank lines.
pub fn load_blacklist(
    names: Option<&[String]>,
    path: Option<&Path>,
) -> Result<Blacklist, ConfigError> {
    match (names, path) {
        (Some(names), None) => Ok(Blacklist::from_names(names.iter().cloned())),
        (None, Some(path)) => load_blacklist_file(path),
        _ => Err(ConfigError::BlacklistSourceConflict),
    }
}

fn load_blacklist_file(path: &Path) -> Result<Blacklist, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BlacklistIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let blacklist = Blacklist::parse_lines(&content);
    if blacklist.is_empty() {
        return Err(ConfigError::EmptyBlacklist {
            path: path.display().to_string(),
        });
    }
    Ok(blacklist)
}
