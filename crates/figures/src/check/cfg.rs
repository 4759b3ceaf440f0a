//! Check configuration.
//!
//! Policy
//! - `CheckCfg::default()` is the literal rule set: every subtype ANDs in the
//!   root condition `side_count == 0`, so no triangle or quadrangle is ever valid.
//! - `BaseRule::Exclude` is the opt-in alternative in which subtypes require the
//!   root condition to fail instead. Callers must ask for it explicitly.

use std::fmt;
use std::str::FromStr;

/// How non-root kinds compose the root condition `side_count == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BaseRule {
    /// Root condition must hold (`base && ...`). Always false for real shapes.
    #[default]
    Require,
    /// Root condition must not hold (`!base && ...`).
    Exclude,
}

impl BaseRule {
    /// Whether a subtype with the given root verdict may still be valid.
    #[inline]
    pub fn admits(self, base: bool) -> bool {
        match self {
            BaseRule::Require => base,
            BaseRule::Exclude => !base,
        }
    }
}

impl fmt::Display for BaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseRule::Require => f.write_str("require"),
            BaseRule::Exclude => f.write_str("exclude"),
        }
    }
}

impl FromStr for BaseRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "require" => Ok(BaseRule::Require),
            "exclude" => Ok(BaseRule::Exclude),
            other => Err(format!("unknown base rule {other:?} (expected require|exclude)")),
        }
    }
}

/// Validity configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckCfg {
    pub base_rule: BaseRule,
}

impl CheckCfg {
    pub fn with_base_rule(base_rule: BaseRule) -> Self {
        Self { base_rule }
    }
}
