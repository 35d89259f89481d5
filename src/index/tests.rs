//! Index Module Tests
//!
//! ## Test Scopes
//! - **Construction**: The prefix-doubling suffix array matches a naive sort.
//! - **Lookup**: All occurrences are reported, ascending, case-insensitively.
//! - **Errors**: Empty needles are rejected.

#[cfg(test)]
mod tests {
    use crate::error::SearchError;
    use crate::index::suffix_array::build_suffix_array;
    use crate::index::SuffixIndex;

    fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
        let mut suffixes: Vec<usize> = (0..text.len()).collect();
        suffixes.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        suffixes
    }

    fn naive_find_all(haystack: &str, needle: &str) -> Vec<usize> {
        let haystack = haystack.to_ascii_lowercase();
        let needle = needle.to_ascii_lowercase();
        (0..haystack.len())
            .filter(|&i| haystack.as_bytes()[i..].starts_with(needle.as_bytes()))
            .collect()
    }

    // ============================================================
    // CONSTRUCTION
    // ============================================================

    #[test]
    fn test_suffix_array_matches_naive_sort() {
        let samples = [
            "banana",
            "mississippi",
            "aaaaaaaa",
            "abracadabra",
            "1 To be, or not to be\n2 that is the question\n",
            "x",
        ];

        for sample in samples {
            assert_eq!(
                build_suffix_array(sample.as_bytes()),
                naive_suffix_array(sample.as_bytes()),
                "suffix array mismatch for {:?}",
                sample
            );
        }
    }

    #[test]
    fn test_suffix_array_empty_text() {
        assert!(build_suffix_array(b"").is_empty());

        let index = SuffixIndex::new("");
        assert!(index.is_empty());
        assert!(index.lookup("a").unwrap().is_empty());
    }

    // ============================================================
    // LOOKUP
    // ============================================================

    #[test]
    fn test_lookup_finds_all_offsets_ascending() {
        let index = SuffixIndex::new("banana");

        assert_eq!(index.lookup("ana").unwrap(), vec![1, 3]);
        assert_eq!(index.lookup("a").unwrap(), vec![1, 3, 5]);
        assert_eq!(index.lookup("banana").unwrap(), vec![0]);
    }

    #[test]
    fn test_lookup_missing_needle() {
        let index = SuffixIndex::new("banana");

        assert!(index.lookup("apple").unwrap().is_empty());
        assert!(index.lookup("bananas").unwrap().is_empty());
        assert!(index.lookup("nab").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = SuffixIndex::new("1 ROMEO. But soft!\n2 Romeo, Romeo\n");

        let upper = index.lookup("Romeo").unwrap();
        let lower = index.lookup("romeo").unwrap();
        let shouting = index.lookup("ROMEO").unwrap();

        assert_eq!(upper.len(), 3);
        assert_eq!(upper, lower);
        assert_eq!(upper, shouting);
    }

    #[test]
    fn test_lookup_agrees_with_naive_scan() {
        let text = "1 Now is the winter of our discontent\n\
                    2 Made glorious summer by this sun of York;\n\
                    3 And all the clouds that lour'd upon our house\n";
        let index = SuffixIndex::new(text);

        for needle in ["the", "our", "o", "sun of", "York", "\n", "zzz"] {
            assert_eq!(
                index.lookup(needle).unwrap(),
                naive_find_all(text, needle),
                "lookup mismatch for {:?}",
                needle
            );
        }
    }

    #[test]
    fn test_offsets_align_with_non_ascii_text() {
        // Non-ASCII bytes are left untouched, so offsets stay valid for the original.
        let text = "Æsop's fable, then Romeo";
        let index = SuffixIndex::new(text);

        let offsets = index.lookup("romeo").unwrap();
        assert_eq!(offsets.len(), 1);
        assert_eq!(&text[offsets[0]..offsets[0] + 5], "Romeo");
        assert_eq!(index.len(), text.len());
    }

    // ============================================================
    // ERRORS
    // ============================================================

    #[test]
    fn test_empty_needle_is_invalid_query() {
        let index = SuffixIndex::new("banana");

        let result = index.lookup("");
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }
}
