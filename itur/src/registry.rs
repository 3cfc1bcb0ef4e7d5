//! Version-aware attenuation model registry.
//!
//! Models are bound to a `(recommendation, version)` pair. A version
//! may also be an alias for another version of the same
//! recommendation (e.g. `"current"` → `"3"`), and aliases are checked
//! before bindings on every lookup.

use crate::{model::AttenuationModel, ItuError};
use dashmap::DashMap;
use log::{debug, warn};
use regex::Regex;
use std::{
    fmt,
    str::FromStr,
    sync::{Arc, OnceLock},
};

/// A canonical ITU-R recommendation identifier, e.g. `P.840`.
///
/// The only way to get one is through [`Recommendation::parse`] (or
/// `FromStr`), so a `Recommendation` is always in canonical form.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Recommendation(String);

impl Recommendation {
    /// Normalizes `s` into canonical `P.<digits>` form.
    ///
    /// Accepts `P.840`, `p.840`, `P840` and `p840`, with surrounding
    /// whitespace. Digits are kept verbatim, leading zeros included.
    pub fn parse(s: &str) -> Result<Self, ItuError> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^[Pp]\.?([0-9]+)$").expect("constant identifier pattern")
        });
        pattern
            .captures(s.trim())
            .and_then(|caps| caps.get(1))
            .map(|digits| Self(format!("P.{}", digits.as_str())))
            .ok_or_else(|| ItuError::InvalidIdentifier(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Recommendation {
    type Err = ItuError;

    fn from_str(s: &str) -> Result<Self, ItuError> {
        Self::parse(s)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `(recommendation, version)` pair used for bindings and aliases.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryKey {
    rec: Recommendation,
    version: String,
}

impl RegistryKey {
    pub fn new(rec: &str, version: impl Into<String>) -> Result<Self, ItuError> {
        Ok(Self {
            rec: Recommendation::parse(rec)?,
            version: version.into(),
        })
    }

    pub fn rec(&self) -> &Recommendation {
        &self.rec
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            rec: self.rec.clone(),
            version: version.into(),
        }
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rec, self.version)
    }
}

/// Maps recommendation versions to attenuation models.
///
/// Every method takes `&self`, so a registry can be populated at
/// start-up and then shared (e.g. behind an `Arc`) with any code that
/// needs to look models up.
#[derive(Default)]
pub struct Registry {
    /// Models bound to canonical keys.
    bindings: DashMap<RegistryKey, Arc<dyn AttenuationModel>>,

    /// `(rec, alias version)` → `(rec, target version)`.
    aliases: DashMap<RegistryKey, RegistryKey>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `model` to `(rec, version)`.
    ///
    /// Registering the same key twice replaces the earlier model.
    pub fn register(
        &self,
        rec: &str,
        version: impl Into<String>,
        model: Arc<dyn AttenuationModel>,
    ) -> Result<(), ItuError> {
        let key = RegistryKey::new(rec, version)?;
        debug!("registering {} as {key}", model.name());
        if let Some(prev) = self.bindings.insert(key.clone(), model) {
            warn!("{key} was bound to {}, replacing", prev.name());
        }
        Ok(())
    }

    /// Makes lookups of `(rec, alias_version)` resolve to
    /// `(rec, target_version)`.
    ///
    /// The target does not need to be registered yet. Aliases are a
    /// single hop: an alias that targets another alias is not
    /// followed.
    pub fn alias(
        &self,
        rec: &str,
        alias_version: impl Into<String>,
        target_version: impl Into<String>,
    ) -> Result<(), ItuError> {
        let from = RegistryKey::new(rec, alias_version)?;
        let to = from.with_version(target_version);
        debug!("aliasing {from} to {to}");
        self.aliases.insert(from, to);
        Ok(())
    }

    /// Returns the model for `(rec, version)`, following an alias if
    /// one is declared.
    pub fn resolve(
        &self,
        rec: &str,
        version: impl Into<String>,
    ) -> Result<Arc<dyn AttenuationModel>, ItuError> {
        let key = self.resolve_key(RegistryKey::new(rec, version)?);
        self.bindings
            .get(&key)
            .map(|model| Arc::clone(model.value()))
            .ok_or(ItuError::NotFound(key))
    }

    /// Returns `true` if `(rec, version)` would resolve.
    pub fn contains(&self, rec: &str, version: impl Into<String>) -> Result<bool, ItuError> {
        let key = self.resolve_key(RegistryKey::new(rec, version)?);
        Ok(self.bindings.contains_key(&key))
    }

    /// All bound keys, sorted.
    pub fn keys(&self) -> Vec<RegistryKey> {
        let mut keys: Vec<RegistryKey> = self.bindings.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// All declared aliases as `(alias, target)`, sorted by alias.
    pub fn aliases(&self) -> Vec<(RegistryKey, RegistryKey)> {
        let mut aliases: Vec<(RegistryKey, RegistryKey)> = self
            .aliases
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        aliases.sort();
        aliases
    }

    /// Number of bound models (aliases not included).
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Private API.
impl Registry {
    fn resolve_key(&self, key: RegistryKey) -> RegistryKey {
        match self.aliases.get(&key).map(|target| target.value().clone()) {
            Some(target) => {
                debug!("{key} is an alias for {target}");
                target
            }
            None => key,
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bindings", &self.keys())
            .field("aliases", &self.aliases())
            .finish()
    }
}
