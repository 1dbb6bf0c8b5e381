//! Key Store: the set of API keys accepted by the gate.
//!
//! Keys come from the `[api_keys]` table of a TOML file:
//!
//! ```toml
//! [api_keys]
//! demo_key = "12345"
//! ```
//!
//! Only the values authorize requests; names exist for the operator's benefit.

use std::path::Path;

use indexmap::IndexMap;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::ConfigError;

/// Name of the TOML table holding the keys.
pub const SECTION: &str = "api_keys";

/// Length of keys produced by [`generate_key`].
pub const GENERATED_KEY_LEN: usize = 16;

/// Immutable name → key mapping, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    keys: IndexMap<String, String>,
}

impl KeyStore {
    /// Read and parse the key file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let document: toml::Table = text.parse()?;

        let section = document
            .get(SECTION)
            .ok_or(ConfigError::MissingSection(SECTION))?
            .as_table()
            .ok_or(ConfigError::NotATable(SECTION))?;

        let mut keys = IndexMap::with_capacity(section.len());
        for (name, value) in section {
            let value = value
                .as_str()
                .ok_or_else(|| ConfigError::NonStringValue(name.clone()))?;
            keys.insert(name.clone(), value.to_string());
        }

        if keys.is_empty() {
            return Err(ConfigError::NoKeys(SECTION));
        }

        Ok(Self { keys })
    }

    /// Build a store directly from `(name, value)` pairs.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            keys: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// True when `candidate` equals any configured key value.
    ///
    /// Every configured value is compared so timing does not reveal which
    /// entry matched.
    pub fn contains(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.keys
            .values()
            .fold(false, |found, key| constant_time_eq(key, candidate) | found)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Configured key names, in file order. Safe to log.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Random key over `[A-Za-z0-9]`. The key is not registered anywhere; the
/// operator has to add it to the `[api_keys]` table.
pub fn generate_key() -> String {
    generate_key_with(&mut rand::thread_rng())
}

pub fn generate_key_with(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(GENERATED_KEY_LEN)
        .map(char::from)
        .collect()
}
