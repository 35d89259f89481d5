use super::types::Snippet;
use crate::corpus::{Corpus, Work};
use crate::error::{Result, SearchError};
use std::collections::HashSet;

/// Maximum gap between chained hits, and the context kept on either side of a cluster.
pub const SNIPPET_SIZE: usize = 150;

/// Runs every query term against the selected works and returns one snippet
/// per cluster of nearby hits: works in corpus order, clusters in offset order.
///
/// Titles in `selected_titles` that match no work are skipped.
pub fn search(
    queries: &[String],
    selected_titles: &HashSet<String>,
    works: &[Work],
) -> Result<Vec<Snippet>> {
    if queries.iter().any(|query| query.is_empty()) {
        return Err(SearchError::InvalidQuery(format!(
            "empty search term in {:?}",
            queries
        )));
    }
    if selected_titles.is_empty() {
        return Err(SearchError::InvalidQuery(
            "no titles selected".to_string(),
        ));
    }

    for title in selected_titles {
        if !works.iter().any(|work| work.title() == title.as_str()) {
            tracing::debug!("Ignoring unknown title {:?}", title);
        }
    }

    let mut results = Vec::new();
    for work in works
        .iter()
        .filter(|work| selected_titles.contains(work.title()))
    {
        let mut offsets = Vec::new();
        for query in queries {
            offsets.extend(work.index().lookup(query)?);
        }
        offsets.sort_unstable();

        for (start, end) in cluster_offsets(&offsets) {
            let (begin, end) = snippet_bounds(start, end, work.text());
            results.push(Snippet {
                title: work.title().to_string(),
                text: work.text()[begin..end].to_string(),
            });
        }
    }

    Ok(results)
}

/// Greedily chains sorted offsets: a hit joins the current cluster when it is
/// at most `SNIPPET_SIZE` past the cluster's last hit. Returns `(first, last)`
/// hit of every cluster.
pub fn cluster_offsets(offsets: &[usize]) -> Vec<(usize, usize)> {
    let mut clusters = Vec::new();
    let mut i = 0;

    while i < offsets.len() {
        let start = offsets[i];
        let mut end = start;
        let mut j = i + 1;
        while j < offsets.len() && offsets[j] <= end + SNIPPET_SIZE {
            end = offsets[j];
            j += 1;
        }
        clusters.push((start, end));
        i = j;
    }

    clusters
}

/// Byte range of the snippet for a cluster, clamped to the text and widened
/// to the nearest character boundaries.
pub fn snippet_bounds(start: usize, end: usize, text: &str) -> (usize, usize) {
    let mut begin = start.saturating_sub(SNIPPET_SIZE);
    let mut end = end.saturating_add(SNIPPET_SIZE).min(text.len());

    while !text.is_char_boundary(begin) {
        begin -= 1;
    }
    while !text.is_char_boundary(end) {
        end += 1;
    }

    (begin, end)
}

impl Corpus {
    pub fn search(
        &self,
        queries: &[String],
        selected_titles: &HashSet<String>,
    ) -> Result<Vec<Snippet>> {
        search(queries, selected_titles, self.works())
    }
}
