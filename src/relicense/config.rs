/*!
# Run Configuration

Settings for a relicensing run. Every field has a default so a TOML file
only needs the keys it changes:

```toml
threshold = 0.8
recursive = true
extensions = ["c", "h"]
marker = "GNU General Public License"
trim_trailing_whitespace = true
```
*/

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{LicenseSwapError, Result};

/// Similarity a file header needs to be replaced
pub const DEFAULT_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelicenseConfig {
    /// Minimum similarity ratio in [0, 1]
    pub threshold: f64,

    /// Descend into subdirectories
    pub recursive: bool,

    /// File extensions (without the dot) considered candidates
    pub extensions: Vec<String>,

    /// Literal text a file must contain before it is scored at all
    pub marker: Option<String>,

    /// Strip trailing spaces/tabs from rewritten files
    pub trim_trailing_whitespace: bool,

    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl Default for RelicenseConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            recursive: false,
            extensions: vec!["c".to_string()],
            marker: None,
            trim_trailing_whitespace: false,
            dry_run: false,
        }
    }
}

impl RelicenseConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LicenseSwapError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|message| LicenseSwapError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(LicenseSwapError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
