//! # Arena Configuration
//!
//! Arena settings, loadable from TOML:
//!
//! ```toml
//! word_size = 8
//! strategy = "rotating_largest"   # first_fit | best_fit | worst_fit | rotating_largest
//! rotation_slots = 3
//! free_policy = "block_length"    # forward_scan | block_length
//! initial_words = 4096            # omit to start shut down
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::arena::FreePolicy;
use crate::error::{ArenaError, ArenaResult};
use crate::strategy::{StrategyKind, DEFAULT_ROTATION_SLOTS};
use crate::MAX_WORDS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default bytes per word.
pub const DEFAULT_WORD_SIZE: usize = 8;

/// Arena configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Bytes per word.
    pub word_size: usize,
    /// Initial placement strategy.
    pub strategy: StrategyKind,
    /// Ranks rotated over by the rotating strategy.
    pub rotation_slots: usize,
    /// How `free` decides block extents.
    pub free_policy: FreePolicy,
    /// Words to provision immediately, if any.
    pub initial_words: Option<usize>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            strategy: StrategyKind::default(),
            rotation_slots: DEFAULT_ROTATION_SLOTS,
            free_policy: FreePolicy::default(),
            initial_words: None,
        }
    }
}

impl ArenaConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] on a syntax error or unknown
    /// key, or the validation error for out-of-range values.
    pub fn from_toml_str(text: &str) -> ArenaResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ArenaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Io`] if the file cannot be read, otherwise as
    /// [`ArenaConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ArenaResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArenaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::InvalidWordSize`] if `word_size` is zero.
    /// - [`ArenaError::InvalidConfig`] if `rotation_slots` is zero.
    /// - [`ArenaError::CapacityExceeded`] if `initial_words` is above
    ///   [`MAX_WORDS`].
    pub fn validate(&self) -> ArenaResult<()> {
        if self.word_size == 0 {
            return Err(ArenaError::InvalidWordSize(self.word_size));
        }

        if self.rotation_slots == 0 {
            return Err(ArenaError::InvalidConfig(
                "rotation_slots must be at least 1".to_string(),
            ));
        }

        match self.initial_words {
            Some(words) if words > MAX_WORDS => Err(ArenaError::CapacityExceeded {
                requested: words,
                ceiling: MAX_WORDS,
            }),
            _ => Ok(()),
        }
    }
}
