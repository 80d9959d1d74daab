use std::fs;
use std::path::Path;

use crate::error::{DocStyleError, Result};

use super::RuleSet;

pub const LOCAL_CONFIG_NAME: &str = ".docstyle-guard.toml";

/// Trait for loading a rule set from various sources.
pub trait ConfigLoader {
    /// Load the rule set from the default location, falling back to the
    /// built-in house style when no rule file exists.
    ///
    /// # Errors
    /// Returns an error if an existing rule file cannot be read or parsed.
    fn load(&self) -> Result<RuleSet>;

    /// Load the rule set from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<RuleSet>;
}

/// Loads rule files from the filesystem, looking for [`LOCAL_CONFIG_NAME`] in
/// the working directory.
#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<RuleSet> {
        let rules: RuleSet = toml::from_str(content)?;
        validate(&rules)?;
        Ok(rules)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<RuleSet> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(RuleSet::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<RuleSet> {
        let content = fs::read_to_string(path).map_err(|source| DocStyleError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

/// Reject rule sets that would make every comparison meaningless.
fn validate(rules: &RuleSet) -> Result<()> {
    if rules.font.name.trim().is_empty() {
        return Err(DocStyleError::Config(
            "font.name must not be empty".to_string(),
        ));
    }
    if rules.font.size_pt <= 0.0 {
        return Err(DocStyleError::Config(format!(
            "font.size_pt must be positive, got {}",
            rules.font.size_pt
        )));
    }
    if rules.paragraph.first_line_indent_cm < 0.0 {
        return Err(DocStyleError::Config(format!(
            "paragraph.first_line_indent_cm must not be negative, got {}",
            rules.paragraph.first_line_indent_cm
        )));
    }
    if rules.tolerance.cm < 0.0 || rules.tolerance.pt < 0.0 {
        return Err(DocStyleError::Config(
            "tolerances must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
