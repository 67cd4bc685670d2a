use std::path::Path;

use tracing::{debug, info};

use crate::error::RuleError;
use crate::ir::rule::Rule;
use crate::repository::RuleGroup;

/// Trait for rule frontends that parse rules from various formats.
///
/// Implementations provide parsing from specific file formats (YAML, etc.)
/// into boxed [`Rule`] values the engine can evaluate.
pub trait RuleFrontend: Send + Sync {
    /// Return the file extensions this frontend supports (e.g., `["yaml", "yml"]`).
    fn extensions(&self) -> &[&str];

    /// Parse rules from a string content.
    fn parse(&self, content: &str) -> Result<Vec<Box<dyn Rule>>, RuleError>;

    /// Parse rules from a file path.
    ///
    /// The default implementation reads the file and delegates to [`parse`](Self::parse).
    fn parse_file(&self, path: &Path) -> Result<Vec<Box<dyn Rule>>, RuleError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RuleError::Parse(format!("cannot read {}: {e}", path.display())))?;
        self.parse(&content)
    }
}

/// Load rule groups from a directory using the provided frontends.
///
/// Every regular file whose extension is claimed by a frontend becomes one
/// group named after the file stem. Files are visited in file-name order so
/// the resulting repository is deterministic. Other files are ignored.
pub fn load_directory(
    path: &Path,
    frontends: &[&dyn RuleFrontend],
) -> Result<Vec<RuleGroup>, RuleError> {
    let entries = std::fs::read_dir(path).map_err(|e| {
        RuleError::Parse(format!("cannot read directory {}: {e}", path.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RuleError::Parse(format!("directory entry error: {e}")))?;
        let file_path = entry.path();
        if file_path.is_file() {
            files.push(file_path);
        }
    }
    files.sort();

    let mut groups = Vec::new();
    for file_path in files {
        let extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let Some(frontend) = frontends
            .iter()
            .find(|frontend| frontend.extensions().contains(&extension))
        else {
            debug!(file = %file_path.display(), "no frontend for file, skipping");
            continue;
        };

        let rules = frontend.parse_file(&file_path)?;
        let name = file_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("rules")
            .to_owned();
        info!(file = %file_path.display(), rules = rules.len(), "loaded rule file");
        groups.push(RuleGroup::new(name, rules));
    }

    Ok(groups)
}
