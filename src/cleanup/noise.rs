//! Noise page classification.

use std::sync::LazyLock;

/// Table-of-contents marker tokens (English, Japanese).
const DEFAULT_MARKERS: &[&str] = &["Table of Contents", "目次"];

/// Dotted leader runs (ASCII period, full-width period U+FF0E).
const DEFAULT_LEADERS: &[&str] = &["....", "．．．．"];

/// Classifies page text as content or structural noise.
///
/// A page is noise only when it contains both a marker token and a dotted
/// leader run. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    markers: Vec<String>,
    leaders: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter with explicit markers and leaders.
    pub fn new<M, L>(markers: impl IntoIterator<Item = M>, leaders: impl IntoIterator<Item = L>) -> Self
    where
        M: Into<String>,
        L: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
            leaders: leaders.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a marker token and return self.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    /// Add a leader run and return self.
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leaders.push(leader.into());
        self
    }

    /// Check whether the text contains a marker token.
    pub fn has_marker(&self, text: &str) -> bool {
        self.markers.iter().any(|m| text.contains(m.as_str()))
    }

    /// Check whether the text contains a dotted leader run.
    pub fn has_leader(&self, text: &str) -> bool {
        self.leaders.iter().any(|l| text.contains(l.as_str()))
    }

    /// Classify a page's raw text.
    pub fn is_noise(&self, text: &str) -> bool {
        !text.is_empty() && self.has_marker(text) && self.has_leader(text)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS.iter().copied(), DEFAULT_LEADERS.iter().copied())
    }
}

static DEFAULT_FILTER: LazyLock<NoiseFilter> = LazyLock::new(NoiseFilter::default);

/// Classify raw page text with the default filter.
pub fn is_noise(text: &str) -> bool {
    DEFAULT_FILTER.is_noise(text)
}
