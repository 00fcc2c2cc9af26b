//! Parsing options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options controlling what is pulled out of each page.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// What to extract from each page
    pub extract_mode: ExtractMode,

    /// Page selection (which pages to walk)
    pub pages: PageSelection,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extract mode.
    pub fn with_extract_mode(mut self, mode: ExtractMode) -> Self {
        self.extract_mode = mode;
        self
    }

    /// Extract text only.
    pub fn text_only(mut self) -> Self {
        self.extract_mode = ExtractMode::TextOnly;
        self
    }

    /// Extract tables only.
    pub fn tables_only(mut self) -> Self {
        self.extract_mode = ExtractMode::TablesOnly;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// What content to extract from each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Text and tables
    #[default]
    Full,
    /// Page text only
    TextOnly,
    /// Tables only
    TablesOnly,
}

impl ExtractMode {
    /// Whether page text is extracted.
    pub fn wants_text(self) -> bool {
        matches!(self, ExtractMode::Full | ExtractMode::TextOnly)
    }

    /// Whether page tables are extracted.
    pub fn wants_tables(self) -> bool {
        matches!(self, ExtractMode::Full | ExtractMode::TablesOnly)
    }
}

/// Page selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let range = parse_range(start, end, s)?;
                return Ok(PageSelection::Range(range));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                for p in parse_range(start, end, s)? {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p = parse_page(part, s)?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort_unstable();
        Ok(PageSelection::Pages(pages))
    }
}

fn parse_page(part: &str, input: &str) -> Result<u32> {
    match part.trim().parse::<u32>() {
        Ok(p) if p > 0 => Ok(p),
        _ => Err(Error::InvalidPageRange(input.to_string())),
    }
}

fn parse_range(start: &str, end: &str, input: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_page(start, input)?;
    let end = parse_page(end, input)?;
    if start > end {
        return Err(Error::InvalidPageRange(input.to_string()));
    }
    Ok(start..=end)
}
