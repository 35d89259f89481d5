use serde::{Deserialize, Serialize};

/// A window of a work's annotated text around one or more nearby hits.
///
/// Serialized with the `Title`/`Snippet` field names the front-end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Snippet")]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(rename = "exactMatch", default)]
    pub exact_match: Option<String>,
}
