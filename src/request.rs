//! The one transient entity of a scaffold run
//!
//! A `ScaffoldRequest` pairs the raw project name (used verbatim as the
//! directory name and generator argument) with the display title derived
//! from it. The title is a pure function of the name: splitting on
//! whitespace and capitalizing each word. Hyphens and underscores are
//! not word boundaries, so `"MY-COOL_APP"` becomes `"My-cool_app"`.

use crate::error::ScaffoldError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    raw_name: String,
    title: String,
}

impl ScaffoldRequest {
    /// Build a request from the user-supplied name.
    ///
    /// Fails with `InvalidArgument` when the name is absent, empty, or
    /// whitespace-only - nothing downstream can do anything useful with
    /// those.
    pub fn new(raw_name: Option<String>) -> Result<Self, ScaffoldError> {
        let raw_name = match raw_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ScaffoldError::InvalidArgument),
        };

        let title = title_case(&raw_name);
        Ok(Self { raw_name, title })
    }

    /// The name exactly as the user typed it.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// The derived display title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Capitalize the first letter of every whitespace-delimited word and
/// lowercase the remainder of the word.
///
/// Token count and whitespace-delimited order are preserved; runs of
/// whitespace collapse to a single space, which is the only
/// normalization a display title needs.
fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
