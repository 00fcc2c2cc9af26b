//! Text cleanup pipeline for LLM training data preparation.
//!
//! Cleaning is an ordered list of [`RewriteRule`]s applied left to right,
//! followed by a trim. Every rule is a pure function of its input, so the
//! pipeline never fails and an empty input always yields an empty string.

mod noise;
pub mod rules;

pub use noise::{is_noise, NoiseFilter};
pub use rules::{default_rules, RewriteRule};

use crate::model::{RawTable, TabularValue};
use crate::render::render_table_markdown;
use std::sync::LazyLock;

/// Ordered rewrite-rule pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    rules: Vec<RewriteRule>,
}

impl CleanupPipeline {
    /// Create a pipeline from an explicit rule list.
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Create a pipeline without any rules (trim only).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append a rule and return self.
    pub fn with_rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Insert a rule at `index` (clamped to the list length) and return self.
    pub fn with_rule_at(mut self, index: usize, rule: RewriteRule) -> Self {
        let index = index.min(self.rules.len());
        self.rules.insert(index, rule);
        self
    }

    /// Insert a rule right before the rule named `name`.
    ///
    /// Appends when no rule carries that name.
    pub fn with_rule_before(self, name: &str, rule: RewriteRule) -> Self {
        let index = self.position(name).unwrap_or(self.rules.len());
        self.with_rule_at(index, rule)
    }

    /// Remove every rule named `name` and return self.
    pub fn without_rule(mut self, name: &str) -> Self {
        self.rules.retain(|r| r.name() != name);
        self
    }

    /// Get the rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name() == name)
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result.trim().to_string()
    }

    /// Process optional text; absent input yields an empty string.
    pub fn process_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.process(t)).unwrap_or_default()
    }

    /// Normalize a raw table grid into cleaned table text.
    ///
    /// Returns `None` when the grid is rejected (no rows, or fewer than two
    /// columns). Otherwise the first row is promoted to the header, the
    /// table is rendered as a Markdown pipe table, and the rendered text is
    /// run through this pipeline.
    pub fn normalize_table(&self, table: &RawTable) -> Option<String> {
        let tabular = TabularValue::from_raw(table)?;
        Some(self.process(&render_table_markdown(&tabular)))
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

static DEFAULT_PIPELINE: LazyLock<CleanupPipeline> = LazyLock::new(CleanupPipeline::default);

/// Clean text with the default rule list.
pub fn clean(text: &str) -> String {
    DEFAULT_PIPELINE.process(text)
}

/// Clean optional text with the default rule list.
pub fn clean_opt(text: Option<&str>) -> String {
    DEFAULT_PIPELINE.process_opt(text)
}

/// Normalize a raw table grid with the default rule list.
pub fn normalize_table(table: &RawTable) -> Option<String> {
    DEFAULT_PIPELINE.normalize_table(table)
}
