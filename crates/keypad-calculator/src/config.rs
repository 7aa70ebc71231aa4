//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::DEFAULT_SEPARATOR;
use crate::core::{CalcError, CalcResult};

/// What the next digit does after a division by zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorRecovery {
    /// The next digit starts a new operand, as after a successful result
    #[default]
    FreshEntry,
    /// The next digit is appended to the error text
    LiteralAppend,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Thousands separator used on both display lines
    pub grouping_separator: char,
    /// Entry behaviour after a division by zero
    pub error_recovery: ErrorRecovery,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grouping_separator: DEFAULT_SEPARATOR,
            error_recovery: ErrorRecovery::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping separator
    #[must_use]
    pub const fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Set the post-error entry behaviour
    #[must_use]
    pub const fn with_error_recovery(mut self, recovery: ErrorRecovery) -> Self {
        self.error_recovery = recovery;
        self
    }

    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Rejects separators that would make the display ambiguous
    pub fn validate(&self) -> CalcResult<()> {
        let sep = self.grouping_separator;
        if sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+') || sep.is_control() {
            return Err(CalcError::config(format!(
                "grouping separator {sep:?} is not allowed"
            )));
        }
        Ok(())
    }
}
