//! Request-side query preparation. The engine itself only ever sees a
//! ready-made list of terms and a non-empty title selection.

/// Turns a raw query into search terms.
///
/// Outside exact-match mode a multi-word query also searches each word on its
/// own. The raw query is always the last term.
pub fn split_query(raw: &str, exact_match: bool) -> Vec<String> {
    let mut terms = Vec::new();

    if !exact_match {
        let words: Vec<&str> = raw.split(' ').filter(|word| !word.is_empty()).collect();
        if words.len() > 1 {
            terms.extend(words.into_iter().map(str::to_string));
        }
    }

    terms.push(raw.to_string());
    terms
}

/// Lenient boolean flag: `1`, `t` and `true` in any case are true, anything
/// else (including a missing value) is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("t") | Some("true")
    )
}

/// Reads the optional JSON array of titles from a request body.
///
/// Titles are trimmed and blanks dropped. A missing or unparsable body yields
/// an empty list.
pub fn parse_selected_titles(body: &[u8]) -> Vec<String> {
    if body.is_empty() {
        return Vec::new();
    }

    match serde_json::from_slice::<Vec<String>>(body) {
        Ok(titles) => titles
            .iter()
            .map(|title| title.trim())
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            tracing::warn!("Ignoring unparsable title selection: {}", e);
            Vec::new()
        }
    }
}
