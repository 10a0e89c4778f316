//! Mock configuration.

use std::env;

use serde::{Deserialize, Serialize};

/// How a set `update_expression` constraint is compared with the actual call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateExpressionMatch {
    /// Byte-for-byte string equality.
    #[default]
    Exact,
    /// Both expressions are parsed and their clause lists compared, so clause
    /// order and whitespace no longer matter.
    Structural,
}

/// How clause keywords are located inside an update expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClauseScan {
    /// First occurrence anywhere, even inside a longer word such as `ADDENDUM`.
    #[default]
    Substring,
    /// First occurrence not touching an identifier character on either side.
    WordBoundary,
}

/// What happens to the head expectation when a call does not match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// The expectation stays at the head of the queue.
    #[default]
    Retain,
    /// The expectation is dropped, so the next call is checked against the
    /// one registered after it.
    Consume,
}

/// Dynamock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockConfig {
    /// Comparison used for the `update_expression` constraint.
    pub update_expression_match: UpdateExpressionMatch,
    /// Keyword scan used by the update-expression parser.
    pub clause_scan: ClauseScan,
    /// Queue behaviour on mismatch.
    pub on_mismatch: MismatchPolicy,
}

impl MockConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset or unrecognised values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_choice("DYNAMOCK_UPDATE_EXPRESSION_MATCH", &[
            ("exact", UpdateExpressionMatch::Exact),
            ("structural", UpdateExpressionMatch::Structural),
        ]) {
            config.update_expression_match = v;
        }
        if let Some(v) = env_choice("DYNAMOCK_CLAUSE_SCAN", &[
            ("substring", ClauseScan::Substring),
            ("word-boundary", ClauseScan::WordBoundary),
        ]) {
            config.clause_scan = v;
        }
        if let Some(v) = env_choice("DYNAMOCK_ON_MISMATCH", &[
            ("retain", MismatchPolicy::Retain),
            ("consume", MismatchPolicy::Consume),
        ]) {
            config.on_mismatch = v;
        }

        config
    }

    /// Use structural comparison for update expressions.
    #[must_use]
    pub fn structural(mut self) -> Self {
        self.update_expression_match = UpdateExpressionMatch::Structural;
        self
    }

    /// Use the word-boundary keyword scan.
    #[must_use]
    pub fn word_boundary(mut self) -> Self {
        self.clause_scan = ClauseScan::WordBoundary;
        self
    }

    /// Drop the head expectation on mismatch.
    #[must_use]
    pub fn consume_on_mismatch(mut self) -> Self {
        self.on_mismatch = MismatchPolicy::Consume;
        self
    }
}

fn env_choice<T: Copy>(key: &str, choices: &[(&str, T)]) -> Option<T> {
    let raw = env::var(key).ok()?;
    let raw = raw.trim();
    choices
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(raw))
        .map(|(_, v)| *v)
}
