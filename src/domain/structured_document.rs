use serde::{Deserialize, Serialize};

/// Final output of the pipeline: an edited document distilled from a
/// transcript. `content` is an HTML fragment; it is not validated beyond
/// being a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub title: String,
    pub content: String,
}
