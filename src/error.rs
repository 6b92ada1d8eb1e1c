// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Problems found while loading the embedded translation catalog.
///
/// None of these stop the page from working: the loader keeps whatever it
/// could parse and the affected keys fall back to their literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The resource file name is not a supported language code.
    UnknownLanguage(String),

    /// The resource contained syntax the Fluent parser rejected.
    Parse { language: String, errors: usize },

    /// A key was defined more than once in the same resource.
    DuplicateKey { language: String, key: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownLanguage(name) => {
                write!(f, "Unknown catalog language: {}", name)
            }
            CatalogError::Parse { language, errors } => {
                write!(f, "{} parse error(s) in '{}' catalog", errors, language)
            }
            CatalogError::DuplicateKey { language, key } => {
                write!(f, "Duplicate key '{}' in '{}' catalog", key, language)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
