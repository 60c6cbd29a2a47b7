use serde::{Deserialize, Serialize};

/// One contextual link as returned by the search service. Either field may be
/// missing from the upstream item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// The terminal artifact of one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub original: String,
    pub reconstructed: String,
    pub explanations: Vec<String>,
    pub links: Vec<SearchLink>,
}
