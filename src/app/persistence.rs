// SPDX-License-Identifier: MPL-2.0
//! Storage for the language preference.
//!
//! The page persists exactly one value: the selected language code, under
//! [`LANGUAGE_PREFERENCE_KEY`](crate::config::defaults::LANGUAGE_PREFERENCE_KEY).

use crate::config::{self, Config};
use crate::error::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Where the language preference lives between sessions.
pub trait PreferenceStore {
    /// The stored language code, if any. Not validated.
    fn load_language(&self) -> Option<String>;

    /// Stores a language code.
    fn save_language(&mut self, code: &str) -> Result<()>;
}

/// Preference stored in a `settings.toml` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform settings location, see [`config::default_config_path`].
    #[must_use]
    pub fn default_location() -> Option<Self> {
        config::default_config_path().map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_config(&self) -> Result<Config> {
        if self.path.exists() {
            config::load_from_path(&self.path)
        } else {
            Ok(Config::default())
        }
    }
}

impl PreferenceStore for FileStore {
    fn load_language(&self) -> Option<String> {
        match self.load_config() {
            Ok(config) => config.language,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read language preference");
                None
            }
        }
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        let mut config = self.load_config().unwrap_or_default();
        config.language = Some(code.to_string());
        config::save_to_path(&config, &self.path)
    }
}

/// In-process store. Clones share the same slot, which lets a test "reload"
/// the page with the preference an earlier instance saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    language: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `code`.
    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            language: Rc::new(RefCell::new(Some(code.into()))),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load_language(&self) -> Option<String> {
        self.language.borrow().clone()
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        *self.language.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
