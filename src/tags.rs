//! Keyword-based tag inference over finished records.

use crate::model::Record;

/// Maps a set of keywords to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    /// Tag emitted when any keyword matches
    pub tag: String,
    /// Lower-case keywords searched as substrings
    pub keywords: Vec<String>,
}

impl TagRule {
    /// Create a rule. Keywords are lower-cased.
    pub fn new<K: AsRef<str>>(tag: impl Into<String>, keywords: impl IntoIterator<Item = K>) -> Self {
        Self {
            tag: tag.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check the rule against already lower-cased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Infers tags from record text and writes them into the record.
#[derive(Debug, Clone)]
pub struct Tagger {
    rules: Vec<TagRule>,
}

impl Tagger {
    /// Create a tagger with an explicit rule list.
    pub fn new(rules: Vec<TagRule>) -> Self {
        Self { rules }
    }

    /// Add a rule after the existing ones.
    pub fn with_rule(mut self, rule: TagRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Get the rules in evaluation order.
    pub fn rules(&self) -> &[TagRule] {
        &self.rules
    }

    /// Tags matching the text, in rule order.
    ///
    /// Matching is case-insensitive substring search, so short keywords
    /// like `im` also hit inside longer words.
    pub fn infer(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| rule.tag.clone())
            .collect()
    }

    /// Return a copy of the record with a `Tags:` line as its second line.
    pub fn apply(&self, record: &Record) -> Record {
        let tags: String = self
            .infer(&record.text)
            .iter()
            .map(|t| format!("[{}]", t))
            .collect();

        let tag_line = format!("Tags: {}", tags);
        let mut lines: Vec<&str> = record.text.split('\n').collect();
        lines.insert(1, &tag_line);
        Record::new(lines.join("\n"))
    }

    /// Tag every record.
    pub fn apply_all<'a, I>(&self, records: I) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records.into_iter().map(|r| self.apply(r)).collect()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(vec![
            TagRule::new("JP1/AJS", ["ajs", "ジョブ管理", "スケジュール"]),
            TagRule::new("JP1/IM", ["im", "統合管理", "ビューア"]),
            TagRule::new("JP1/PFM", ["pfm", "パフォーマンス", "監視"]),
            TagRule::new("AWS", ["aws"]),
            TagRule::new("GCP", ["gcp", "google cloud"]),
            TagRule::new("Troubleshooting", ["エラー", "トラブル", "失敗", "解決"]),
            TagRule::new("Setup", ["構築", "セットアップ", "インストール"]),
            TagRule::new("Design", ["設計", "アーキテクチャ", "ベストプラクティス"]),
        ])
    }
}
