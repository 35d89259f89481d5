use crate::error::{Result, SearchError};
use crate::index::SuffixIndex;
use std::collections::HashSet;

/// Normalized set of titles that may mark the start of a work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleSet {
    titles: HashSet<String>,
}

impl TitleSet {
    /// Builds the set from a newline-separated list. Lines are trimmed and
    /// blank lines dropped, otherwise an empty title would match every blank
    /// line of the corpus.
    pub fn parse(title_list: &str) -> Self {
        let titles = title_list
            .lines()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .collect();
        Self { titles }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// One titled document of the corpus.
#[derive(Debug, Clone)]
pub struct Work {
    title: String,
    annotated_text: String,
    index: SuffixIndex,
    line_offset: usize,
}

impl Work {
    /// Freezes the annotated text and builds its index.
    pub fn new(title: String, annotated_text: String, line_offset: usize) -> Self {
        let index = SuffixIndex::new(&annotated_text);
        Self {
            title,
            annotated_text,
            index,
            line_offset,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body lines, each prefixed with its line number within the work.
    pub fn text(&self) -> &str {
        &self.annotated_text
    }

    pub fn index(&self) -> &SuffixIndex {
        &self.index
    }

    /// Line of the source file holding this work's title.
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }
}

/// The loaded corpus: every recognised title plus the works found, in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    titles: TitleSet,
    works: Vec<Work>,
}

impl Corpus {
    pub fn new(titles: TitleSet, works: Vec<Work>) -> Self {
        Self { titles, works }
    }

    pub fn titles(&self) -> &TitleSet {
        &self.titles
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn work(&self, title: &str) -> Result<&Work> {
        self.works
            .iter()
            .find(|work| work.title == title)
            .ok_or_else(|| SearchError::UnknownTitle(title.to_string()))
    }

    /// Titles of the works actually present, in corpus order.
    pub fn work_titles(&self) -> Vec<&str> {
        self.works.iter().map(Work::title).collect()
    }
}
