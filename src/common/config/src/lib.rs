//! Configuration for ramify graph operations.
//!
//! Provides the key-policy vocabulary used by zip/merge and the defaults for
//! overlay, flat encoding and tree rendering.

use std::fmt;
use std::str::FromStr;

use common_error::{RamifyError, RamifyResult};
use serde::{Deserialize, Serialize};

/// Global ramify configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RamifyConfig {
    /// Zip configuration.
    pub zip: ZipConfig,
    /// Overlay configuration.
    pub overlay: OverlayConfig,
    /// Flat path encoding configuration.
    pub flat: FlatConfig,
    /// Tree rendering configuration.
    pub display: DisplayConfig,
}

/// Which edges appear in a zipped or merged graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Every key of any input, first-seen order.
    Union,
    /// Keys present in every non-absent input.
    #[default]
    Intersection,
    /// Exactly the first input's keys.
    First,
    /// Exactly the last input's keys.
    Last,
    /// Like `Union`, but any key missing from some input is an error.
    Strict,
}

impl KeyPolicy {
    /// All policies, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Union,
        Self::Intersection,
        Self::First,
        Self::Last,
        Self::Strict,
    ];

    /// The policy name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::First => "first",
            Self::Last => "last",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyPolicy {
    type Err = RamifyError;

    fn from_str(s: &str) -> RamifyResult<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name() == s)
            .ok_or_else(|| RamifyError::invalid_value(format!("unknown key policy '{s}'")))
    }
}

/// Zip configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipConfig {
    /// Key policy used when none is given explicitly.
    pub key_policy: KeyPolicy,
}

impl ZipConfig {
    /// Set the key policy.
    #[must_use]
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }
}

/// Overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Which edges appear in the overlaid graph.
    pub key_policy: KeyPolicy,
    /// Let later layers take precedence instead of earlier ones.
    pub reversed: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            key_policy: KeyPolicy::First,
            reversed: false,
        }
    }
}

impl OverlayConfig {
    /// Set the key policy.
    #[must_use]
    pub fn with_key_policy(mut self, key_policy: KeyPolicy) -> Self {
        self.key_policy = key_policy;
        self
    }

    /// Enable or disable reversed precedence.
    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}

/// Flat path encoding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatConfig {
    /// Path separator for textual keys; `None` means explicit key sequences.
    pub separator: Option<String>,
    /// Omit null values whose structure is implied by other entries.
    pub minimize: bool,
}

impl Default for FlatConfig {
    fn default() -> Self {
        Self {
            separator: Some("/".to_string()),
            minimize: false,
        }
    }
}

impl FlatConfig {
    /// Set the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: Option<&str>) -> Self {
        self.separator = separator.map(str::to_string);
        self
    }

    /// Enable or disable minimization.
    #[must_use]
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }
}

/// Tree rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label printed for the root node.
    pub root_label: String,
    /// Render children in key order instead of edge order.
    pub sort_keys: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            root_label: "root".to_string(),
            sort_keys: false,
        }
    }
}

impl DisplayConfig {
    /// Set the root label.
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Enable or disable key sorting.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
