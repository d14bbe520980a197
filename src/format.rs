use crate::error::NormalizerError;
use crate::options::EncodeOptions;

/// The string repeated once per nesting level to indent a line.
///
/// Must be non-empty and consist of whitespace only. Use
/// [`Indent::spaces`] or [`Indent::tab`] for the common cases, or
/// [`Indent::from_str`] for anything else (e.g. mixed tab-space units).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent(String);

impl Indent {
    /// Creates an indent from an arbitrary whitespace string.
    pub fn from_str(value: &str) -> Result<Self, NormalizerError> {
        if value.is_empty() || value.contains(|c: char| !c.is_whitespace()) {
            return Err(NormalizerError::InvalidIndent(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// An indent of `count` spaces. `count` must be at least 1.
    pub fn spaces(count: usize) -> Result<Self, NormalizerError> {
        Self::from_str(&" ".repeat(count))
    }

    /// A single-tab indent.
    pub fn tab() -> Self {
        Self("\t".to_string())
    }

    /// Infers the indent unit used by `text`: the leading whitespace run
    /// of the first line that starts with whitespace followed by
    /// non-whitespace content.
    ///
    /// Returns `None` for text with no indented line, which happens when
    /// the structure has at most one nesting level. Callers must treat
    /// that as "nothing to translate".
    pub fn from_text(text: &str) -> Option<Self> {
        for line in text.lines() {
            if let Some(content_start) = line.find(|c: char| !c.is_whitespace()) {
                if content_start > 0 {
                    return Some(Self(line[..content_start].to_string()));
                }
            }
        }
        None
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The line terminator sequence used between lines of output.
///
/// Only the three terminators JSON text is written with in practice are
/// accepted: `"\n"`, `"\r\n"` and `"\r"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLine(String);

impl NewLine {
    pub fn from_str(value: &str) -> Result<Self, NormalizerError> {
        match value {
            "\n" | "\r\n" | "\r" => Ok(Self(value.to_string())),
            _ => Err(NormalizerError::InvalidNewLine(value.to_string())),
        }
    }

    /// Unix-style line endings (`\n`).
    pub fn lf() -> Self {
        Self("\n".to_string())
    }

    /// Windows-style line endings (`\r\n`).
    pub fn crlf() -> Self {
        Self("\r\n".to_string())
    }

    /// Infers the newline sequence used by `text` from its first line
    /// break. Returns `None` when the text is a single line, which for
    /// pretty-printed JSON means a top-level scalar or empty container.
    pub fn from_text(text: &str) -> Option<Self> {
        let pos = text.find(['\r', '\n'])?;
        let newline = match &text[pos..] {
            s if s.starts_with("\r\n") => "\r\n",
            s if s.starts_with('\r') => "\r",
            _ => "\n",
        };
        Some(Self(newline.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The target style a [`FormatNormalizer`](crate::FormatNormalizer)
/// rewrites JSON text into.
///
/// Immutable once constructed; validation of the indent and newline
/// strings happens in their own constructors, so a `Format` value is
/// always internally consistent.
///
/// # Example
///
/// ```rust
/// use json_normalizer::{EncodeOptions, Format, Indent, NewLine};
///
/// let format = Format::new(
///     EncodeOptions::PRETTY_PRINT,
///     Indent::spaces(2)?,
///     NewLine::lf(),
///     true,
/// );
/// # Ok::<(), json_normalizer::NormalizerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    encode_options: EncodeOptions,
    indent: Indent,
    newline: NewLine,
    final_newline: bool,
}

impl Format {
    pub fn new(
        encode_options: EncodeOptions,
        indent: Indent,
        newline: NewLine,
        final_newline: bool,
    ) -> Self {
        Self { encode_options, indent, newline, final_newline }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        self.encode_options
    }

    pub fn indent(&self) -> &Indent {
        &self.indent
    }

    pub fn newline(&self) -> &NewLine {
        &self.newline
    }

    /// Whether normalized output ends with exactly one newline sequence.
    pub fn final_newline(&self) -> bool {
        self.final_newline
    }
}

impl Default for Format {
    /// Four-space indent, LF line endings, trailing newline.
    fn default() -> Self {
        Self {
            encode_options: EncodeOptions::default(),
            indent: Indent(" ".repeat(4)),
            newline: NewLine::lf(),
            final_newline: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_rejects_empty_and_non_whitespace() {
        assert!(matches!(Indent::from_str(""), Err(NormalizerError::InvalidIndent(_))));
        assert!(matches!(Indent::from_str("  x"), Err(NormalizerError::InvalidIndent(_))));
        assert!(matches!(Indent::spaces(0), Err(NormalizerError::InvalidIndent(_))));
    }

    #[test]
    fn indent_accepts_mixed_whitespace() {
        assert_eq!(Indent::from_str("\t ").unwrap().as_str(), "\t ");
        assert_eq!(Indent::spaces(3).unwrap().as_str(), "   ");
        assert_eq!(Indent::tab().as_str(), "\t");
    }

    #[test]
    fn newline_rejects_anything_but_the_three_terminators() {
        assert!(matches!(NewLine::from_str(""), Err(NormalizerError::InvalidNewLine(_))));
        assert!(matches!(NewLine::from_str("\n\n"), Err(NormalizerError::InvalidNewLine(_))));
        assert!(matches!(NewLine::from_str(" "), Err(NormalizerError::InvalidNewLine(_))));
        assert_eq!(NewLine::from_str("\r\n").unwrap().as_str(), "\r\n");
    }

    #[test]
    fn newline_inference_finds_first_terminator() {
        assert_eq!(NewLine::from_text("{\n  \"a\": 1\n}").unwrap().as_str(), "\n");
        assert_eq!(NewLine::from_text("{\r\n  \"a\": 1\r\n}").unwrap().as_str(), "\r\n");
        assert_eq!(NewLine::from_text("{\r  \"a\": 1\r}").unwrap().as_str(), "\r");
        assert!(NewLine::from_text("true").is_none());
    }

    #[test]
    fn indent_inference_takes_first_indented_line() {
        assert_eq!(Indent::from_text("{\n    \"a\": 1\n}").unwrap().as_str(), "    ");
        assert_eq!(Indent::from_text("{\n\t\"a\": 1\n}").unwrap().as_str(), "\t");
        // No indented line at all: single nesting level.
        assert!(Indent::from_text("true").is_none());
        assert!(Indent::from_text("{}").is_none());
    }
}
