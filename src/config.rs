//! Input record for a single `tofu apply` invocation.
//!
//! An [`ApplyInputs`] maps each recognized option name ([`InputKey`]) to a
//! string value. Records are usually read from a flat YAML file and then
//! adjusted with `KEY=VALUE` overrides from the command line.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::str::FromStr;

use camino::Utf8Path;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::debug;

use crate::error::TofuApplyError;
use crate::serde_helpers::InputValue;

/// The fixed set of option names an input record may carry.
///
/// The string form of each key is its kebab-case name, which is also the
/// flag name passed to `tofu` (`AutoApprove` is `auto-approve`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum InputKey {
    Chdir,
    PlanFile,
    AutoApprove,
    Destroy,
    RefreshOnly,
    Refresh,
    Replace,
    Target,
    TargetFile,
    Exclude,
    ExcludeFile,
    Var,
    VarFile,
    CompactWarnings,
    ConsolidateWarnings,
    ConsolidateErrors,
    Input,
    Json,
    Lock,
    LockTimeout,
    NoColor,
    Concise,
    Parallelism,
    State,
    StateOut,
    Backup,
    ShowSensitive,
    Deprecation,
}

impl InputKey {
    /// Returns the kebab-case option name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns every recognized key.
    pub fn all() -> impl Iterator<Item = InputKey> {
        InputKey::iter()
    }
}

/// A flat record of user-supplied apply options.
///
/// Empty values are stored but reported as absent by [`get`](Self::get), so
/// an empty string, a missing key and an explicit `null` all mean "not
/// provided". Whitespace-only values count as provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyInputs {
    values: BTreeMap<InputKey, String>,
}

impl ApplyInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from string keys, skipping names that are not an [`InputKey`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut inputs = Self::new();
        for (key, value) in pairs {
            match InputKey::from_str(key.as_ref()) {
                Ok(key) => inputs.set(key, value),
                Err(_) => debug!("ignoring unrecognized input: {}", key.as_ref()),
            }
        }
        inputs
    }

    /// Returns the value for `key` if it is present and non-empty.
    pub fn get(&self, key: InputKey) -> Option<&str> {
        self.values
            .get(&key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, key: InputKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Sets `key` and returns the record, for building records inline.
    #[must_use]
    pub fn with(mut self, key: InputKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn unset(&mut self, key: InputKey) {
        self.values.remove(&key);
    }

    /// Iterates over the provided (non-empty) entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (InputKey, &str)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Returns true if no option is provided.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Applies overrides in order; a later override for the same key wins.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = &'a InputOverride>,
    {
        for item in overrides {
            debug!("override: {}={}", item.key, item.value);
            self.set(item.key, item.value.clone());
        }
    }
}

impl<'de> Deserialize<'de> for ApplyInputs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ApplyInputsVisitor;

        impl<'de> Visitor<'de> for ApplyInputsVisitor {
            type Value = ApplyInputs;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a flat mapping of apply input names to values")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ApplyInputs::new())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ApplyInputs::new())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut inputs = ApplyInputs::new();
                while let Some(name) = map.next_key::<String>()? {
                    match InputKey::from_str(&name) {
                        Ok(key) => {
                            if let Some(value) = map.next_value::<InputValue>()?.into_inner() {
                                inputs.set(key, value);
                            }
                        }
                        Err(_) => {
                            debug!("ignoring unrecognized input: {}", name);
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(inputs)
            }
        }

        deserializer.deserialize_any(ApplyInputsVisitor)
    }
}

/// A single `KEY=VALUE` override given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOverride {
    pub key: InputKey,
    pub value: String,
}

impl FromStr for InputOverride {
    type Err = TofuApplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_override(s)
    }
}

/// Parses `KEY=VALUE`, splitting on the first `=`.
///
/// The value may itself contain `=` (`var=region=us-east-1`) and may be
/// empty, which unsets the option.
pub fn parse_override(s: &str) -> Result<InputOverride, TofuApplyError> {
    let (key, value) = s.split_once('=').ok_or_else(|| {
        TofuApplyError::Validation(format!("expected KEY=VALUE, got: {}", s))
    })?;
    let key = InputKey::from_str(key.trim())
        .map_err(|_| TofuApplyError::Validation(format!("unknown input key: {}", key.trim())))?;
    Ok(InputOverride {
        key,
        value: value.to_string(),
    })
}

/// Loads an input record from a YAML file.
///
/// An empty file yields an empty record.
pub fn load_inputs(path: &Utf8Path) -> Result<ApplyInputs, TofuApplyError> {
    let content = fs::read_to_string(path).map_err(|e| TofuApplyError::io(path.as_str(), e))?;
    if content.trim().is_empty() {
        return Ok(ApplyInputs::new());
    }
    let inputs: ApplyInputs = serde_yaml::from_str(&content)
        .map_err(|e| TofuApplyError::Config(format!("failed to parse YAML: {}: {}", path, e)))?;
    debug!("loaded {} input(s) from {}", inputs.iter().count(), path);
    Ok(inputs)
}
