use super::types::{Corpus, TitleSet, Work};
use crate::error::{Result, SearchError};
use std::collections::HashSet;
use std::path::Path;

/// Lines `0..=FRONT_MATTER_LINES` hold the licence header; titles there are ignored.
pub const FRONT_MATTER_LINES: usize = 130;
/// Trimmed line that ends the corpus.
pub const TERMINAL_MARKER: &str = "FINIS";

/// Buffer for the work currently being read. `title` is `None` for the
/// preamble before the first title, which is never emitted.
struct WorkInProgress {
    title: Option<String>,
    text: String,
    line_offset: usize,
}

impl WorkInProgress {
    fn preamble() -> Self {
        Self {
            title: None,
            text: String::new(),
            line_offset: 0,
        }
    }

    fn open(title: &str, line_offset: usize) -> Self {
        Self {
            title: Some(title.to_string()),
            text: String::new(),
            line_offset,
        }
    }

    fn push_line(&mut self, line_index: usize, line: &str) {
        if self.title.is_none() {
            return;
        }
        self.text
            .push_str(&(line_index - self.line_offset).to_string());
        self.text.push(' ');
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn finish(self) -> Option<Work> {
        let title = self.title?;
        tracing::debug!("Indexing {} ({} bytes)", title, self.text.len());
        Some(Work::new(title, self.text, self.line_offset))
    }
}

/// Splits `raw_corpus` into works using the titles in `title_list`.
///
/// Each title opens at most one work: once consumed, later lines with the same
/// text are ordinary body lines. A corpus that ends without the terminal
/// marker is rejected as malformed.
pub fn parse(title_list: &str, raw_corpus: &str) -> Result<(TitleSet, Vec<Work>)> {
    let titles = TitleSet::parse(title_list);
    // Scratch copy consumed while scanning; `titles` itself stays intact.
    let mut remaining: HashSet<String> = titles.iter().map(str::to_string).collect();
    let mut works = Vec::new();
    let mut current = WorkInProgress::preamble();
    let mut terminated = false;

    for (line_index, line) in raw_corpus.lines().enumerate() {
        let trimmed = line.trim();

        if line_index > FRONT_MATTER_LINES && remaining.remove(trimmed) {
            let finished =
                std::mem::replace(&mut current, WorkInProgress::open(trimmed, line_index));
            works.extend(finished.finish());
        } else if trimmed == TERMINAL_MARKER {
            let finished = std::mem::replace(&mut current, WorkInProgress::preamble());
            works.extend(finished.finish());
            terminated = true;
            break;
        } else {
            current.push_line(line_index, line);
        }
    }

    if !terminated {
        return Err(SearchError::MalformedCorpus(format!(
            "no {} line before end of input",
            TERMINAL_MARKER
        )));
    }

    if !remaining.is_empty() {
        tracing::debug!("{} titles never appeared in the corpus", remaining.len());
    }

    Ok((titles, works))
}

impl Corpus {
    pub fn parse(title_list: &str, raw_corpus: &str) -> Result<Self> {
        let (titles, works) = parse(title_list, raw_corpus)?;
        Ok(Corpus::new(titles, works))
    }

    /// Reads both input files and parses them.
    pub async fn load(titles_path: &Path, corpus_path: &Path) -> Result<Self> {
        let title_list = read_input(titles_path).await?;
        let raw_corpus = read_input(corpus_path).await?;

        let corpus = Corpus::parse(&title_list, &raw_corpus)?;
        tracing::info!(
            "Parsed {} works from {} known titles",
            corpus.works().len(),
            corpus.titles().len()
        );
        Ok(corpus)
    }
}

async fn read_input(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SearchError::MissingInput {
            path: path.to_path_buf(),
            source,
        })
}
