use crate::error::{Result, SearchError};

/// Suffix array over the ASCII-lowercased bytes of a text.
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    text: Vec<u8>,
    suffixes: Vec<usize>,
}

impl SuffixIndex {
    pub fn new(text: &str) -> Self {
        let text = text.to_ascii_lowercase().into_bytes();
        let suffixes = build_suffix_array(&text);
        Self { text, suffixes }
    }

    /// Returns every byte offset where `needle` occurs, ascending.
    ///
    /// The needle is folded the same way the indexed text was, so callers may
    /// pass it in any case. An empty needle is rejected instead of matching
    /// every position.
    pub fn lookup(&self, needle: &str) -> Result<Vec<usize>> {
        if needle.is_empty() {
            return Err(SearchError::InvalidQuery(
                "search term must not be empty".to_string(),
            ));
        }

        let needle = needle.to_ascii_lowercase();
        let needle = needle.as_bytes();

        let start = self
            .suffixes
            .partition_point(|&s| &self.text[s..] < needle);
        let end = self.suffixes.partition_point(|&s| {
            let suffix = &self.text[s..];
            &suffix[..suffix.len().min(needle.len())] <= needle
        });

        let mut offsets = self.suffixes[start..end].to_vec();
        offsets.sort_unstable();
        Ok(offsets)
    }

    /// Length in bytes of the indexed text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Prefix doubling: each round sorts suffixes by the rank pair of their first
/// `k` and next `k` bytes, until every rank is distinct.
pub(crate) fn build_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut suffixes: Vec<usize> = (0..n).collect();
    if n == 0 {
        return suffixes;
    }

    let mut rank: Vec<usize> = text.iter().map(|&b| b as usize).collect();
    let mut next_rank = vec![0usize; n];
    let mut k = 1;

    loop {
        // A suffix that runs out sorts before any that continues.
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

        suffixes.sort_unstable_by_key(|&i| key(i));

        next_rank[suffixes[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(suffixes[w - 1]) != key(suffixes[w]));
            next_rank[suffixes[w]] = next_rank[suffixes[w - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[suffixes[n - 1]] == n - 1 || k >= n {
            break;
        }
        k *= 2;
    }

    suffixes
}
