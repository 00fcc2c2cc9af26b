//! Rewrite rules applied by the cleanup pipeline.

use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// A single pure string rewrite.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: String,
    kind: RuleKind,
}

#[derive(Debug, Clone)]
enum RuleKind {
    /// Regex replaced with `regex` replacement syntax (`$1`, `${name}`)
    Pattern { regex: Regex, replacement: String },
    /// Literal substring replacement
    Literal { from: String, to: String },
}

impl RewriteRule {
    /// Create a regex-based rule.
    pub fn pattern(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            kind: RuleKind::Pattern {
                regex: Regex::new(pattern)?,
                replacement: replacement.into(),
            },
        })
    }

    /// Create a literal substring rule.
    pub fn literal(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Literal {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    fn builtin(name: &str, pattern: &str, replacement: &str) -> Self {
        Self::pattern(name, pattern, replacement).expect("built-in rewrite pattern must compile")
    }

    /// Get the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the rule to a text.
    pub fn apply(&self, text: &str) -> String {
        match &self.kind {
            RuleKind::Pattern { regex, replacement } => {
                regex.replace_all(text, replacement.as_str()).into_owned()
            }
            RuleKind::Literal { from, to } => {
                if from.is_empty() {
                    text.to_string()
                } else {
                    text.replace(from.as_str(), to)
                }
            }
        }
    }
}

/// Names of the built-in rules, in application order.
pub mod names {
    /// `Copyright © ... all rights reserved.` spans
    pub const COPYRIGHT: &str = "copyright";
    /// Multi-line trademark disclaimer block
    pub const TRADEMARK_DISCLAIMER: &str = "trademark_disclaimer";
    /// Table-of-contents dotted leader lines
    pub const TOC_LEADER: &str = "toc_leader";
    /// Final "heading + page number" footer line
    pub const TRAILING_FOOTER: &str = "trailing_footer";
    /// Known extraction artifact token
    pub const ARTIFACT_TOKEN: &str = "artifact_token";
    /// Runs of blank lines
    pub const BLANK_LINES: &str = "blank_lines";
}

static DEFAULT_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        RewriteRule::builtin(
            names::COPYRIGHT,
            r"(?i)Copyright ©.*all rights reserved\.",
            "",
        ),
        RewriteRule::builtin(
            names::TRADEMARK_DISCLAIMER,
            r"(?s)Amazon の商標および.*ありません。",
            "",
        ),
        RewriteRule::builtin(names::TOC_LEADER, r".*\.{5,}\s*\d+", ""),
        // Anchored to the end of the whole text: only the last line can match.
        RewriteRule::builtin(names::TRAILING_FOOTER, r"\n.* \d+\s*\z", ""),
        RewriteRule::literal(names::ARTIFACT_TOKEN, "$.Name", "項目名"),
        RewriteRule::builtin(names::BLANK_LINES, r"\n\s*\n", "\n\n"),
    ]
});

/// The default rule list, in application order.
///
/// Boilerplate removal runs before the blank-line collapse so removed spans
/// do not leave stray whitespace behind.
pub fn default_rules() -> Vec<RewriteRule> {
    DEFAULT_RULES.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> RewriteRule {
        default_rules()
            .into_iter()
            .find(|r| r.name() == name)
            .unwrap()
    }

    #[test]
    fn test_default_rule_order() {
        let order: Vec<String> = default_rules()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                names::COPYRIGHT,
                names::TRADEMARK_DISCLAIMER,
                names::TOC_LEADER,
                names::TRAILING_FOOTER,
                names::ARTIFACT_TOKEN,
                names::BLANK_LINES,
            ]
        );
    }

    #[test]
    fn test_copyright_case_insensitive() {
        let r = rule(names::COPYRIGHT);
        assert_eq!(
            r.apply("before COPYRIGHT © 2023 Amazon Web Services, Inc. ALL RIGHTS RESERVED. after"),
            "before  after"
        );
        // Needs the trailing reservation phrase on the same line.
        assert_eq!(
            r.apply("Copyright © 2023\nAll rights reserved."),
            "Copyright © 2023\nAll rights reserved."
        );
    }

    #[test]
    fn test_trademark_disclaimer_spans_lines() {
        let r = rule(names::TRADEMARK_DISCLAIMER);
        let text = "前文\nAmazon の商標および商品デザインは、\nAmazon 以外の製品の関連で使用してはなりません。\n後文";
        assert_eq!(r.apply(text), "前文\n\n後文");
    }

    #[test]
    fn test_toc_leader() {
        let r = rule(names::TOC_LEADER);
        assert_eq!(r.apply("定義....................2\n本文"), "\n本文");
        assert_eq!(r.apply("Overview .... 3"), "Overview .... 3");
    }

    #[test]
    fn test_trailing_footer_only_last_line() {
        let r = rule(names::TRAILING_FOOTER);
        let text = "Body text\nIntro 1\nMore body\nOperational excellence 12";
        assert_eq!(r.apply(text), "Body text\nIntro 1\nMore body");
        assert_eq!(r.apply("Body\nSection 4\n"), "Body");
        assert_eq!(r.apply("Body\nSection 4\n\n"), "Body");
        assert_eq!(r.apply("Body\nSection 4 \n"), "Body");
        assert_eq!(r.apply("Section 4"), "Section 4");
    }

    #[test]
    fn test_artifact_token_is_literal() {
        let r = rule(names::ARTIFACT_TOKEN);
        assert_eq!(r.apply("| $.Name | Value |"), "| 項目名 | Value |");
        assert_eq!(r.apply("x.Name"), "x.Name");
    }

    #[test]
    fn test_blank_lines() {
        let r = rule(names::BLANK_LINES);
        assert_eq!(r.apply("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(r.apply("a\n  \t\n \nb"), "a\n\nb");
        assert_eq!(r.apply("a\nb"), "a\nb");
    }

    #[test]
    fn test_custom_pattern_rule() {
        let r = RewriteRule::pattern("confidential", r"(?m)^CONFIDENTIAL$", "").unwrap();
        assert_eq!(r.apply("x\nCONFIDENTIAL\ny"), "x\n\ny");
        assert!(RewriteRule::pattern("bad", "(", "").is_err());
    }

    #[test]
    fn test_empty_literal_is_noop() {
        let r = RewriteRule::literal("noop", "", "x");
        assert_eq!(r.apply("abc"), "abc");
    }
}
