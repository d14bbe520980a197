use thiserror::Error;

/// Errors produced while constructing or running a normalizer.
///
/// Every failure is a deterministic function of the input; nothing is
/// retried, and `normalize` never returns partially transformed text.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// The target [`Format`](crate::Format) does not have the
    /// [`PRETTY_PRINT`](crate::EncodeOptions::PRETTY_PRINT) option set.
    /// Raised when constructing a [`FormatNormalizer`](crate::FormatNormalizer),
    /// never during `normalize`.
    #[error("this normalizer requires the PRETTY_PRINT encode option to be set")]
    MissingPrettyPrint,

    /// The decoded value could not be serialized back to JSON text.
    #[error("failed to encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// Text produced at some stage of the pipeline does not parse as JSON.
    #[error("text is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The serializer produced bytes that are not valid UTF-8.
    #[error("encoded JSON is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An indent string was empty or contained non-whitespace characters.
    #[error("indent must be a non-empty whitespace string, got {0:?}")]
    InvalidIndent(String),

    /// A newline string was not one of `"\n"`, `"\r\n"` or `"\r"`.
    #[error("newline must be one of \"\\n\", \"\\r\\n\" or \"\\r\", got {0:?}")]
    InvalidNewLine(String),

    /// The re-encoded text has no line break, so no newline style can be
    /// inferred. Happens for top-level scalars and empty containers, which
    /// pretty-print to a single line.
    #[error("encoded text has no newline; cannot infer its style")]
    NoNewline,

    /// A line's leading whitespace is not an exact repetition of the
    /// inferred indent unit. Mixed or corrupted indentation is surfaced
    /// rather than guessed at.
    #[error("leading whitespace of line {line} is not a repetition of the indent unit {unit:?}")]
    MalformedIndent {
        /// One-based line number within the re-encoded text.
        line: usize,
        /// The indent unit the rest of the text uses.
        unit: String,
    },
}
