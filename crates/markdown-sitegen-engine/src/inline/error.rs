/// A text run whose inline markup cannot be tokenized.
///
/// Fatal for the whole run: no partial span sequence is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid markdown, formatted section not closed: `{delimiter}`")]
    Unclosed { delimiter: String },
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}
