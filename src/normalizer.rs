use crate::encode::encode_value;
use crate::error::NormalizerError;
use crate::format::{Format, Indent, NewLine};
use crate::json::JsonText;
use crate::options::EncodeOptions;
use crate::reindent::reindent;

/// A transformation from one [`JsonText`] to another.
///
/// Normalizers compose as decorators: a [`FormatNormalizer`] can wrap
/// any other `Normalize` implementation and restyle its output.
pub trait Normalize {
    fn normalize(&self, json: &JsonText) -> Result<JsonText, NormalizerError>;
}

/// Rewrites a JSON text into a target [`Format`] without changing the
/// value it decodes to.
///
/// The pipeline is: optionally delegate to an upstream normalizer,
/// re-encode the decoded value with the format's encode options, infer
/// the indent unit and newline the serializer actually used, then
/// translate every line's leading whitespace to the target style.
///
/// # Example
///
/// ```rust
/// use json_normalizer::{
///     EncodeOptions, Format, FormatNormalizer, Indent, JsonText, NewLine, Normalize,
/// };
///
/// let format = Format::new(
///     EncodeOptions::PRETTY_PRINT,
///     Indent::tab(),
///     NewLine::lf(),
///     true,
/// );
/// let normalizer = FormatNormalizer::new(format)?;
///
/// let json = JsonText::from_encoded(r#"{"name":"Alice","active":true}"#)?;
/// let normalized = normalizer.normalize(&json)?;
///
/// assert_eq!(
///     normalized.encoded(),
///     "{\n\t\"active\": true,\n\t\"name\": \"Alice\"\n}\n",
/// );
/// # Ok::<(), json_normalizer::NormalizerError>(())
/// ```
pub struct FormatNormalizer {
    format: Format,
    upstream: Option<Box<dyn Normalize + Send + Sync>>,
}

impl FormatNormalizer {
    /// Creates a normalizer for the given target format.
    ///
    /// Fails with [`NormalizerError::MissingPrettyPrint`] when the
    /// format's encode options lack the pretty-print bit: compact output
    /// has no indentation to rewrite. The check runs here rather than
    /// per call because the format is immutable for the normalizer's
    /// lifetime.
    pub fn new(format: Format) -> Result<Self, NormalizerError> {
        Self::build(format, None)
    }

    /// Creates a normalizer that first delegates to `upstream` and then
    /// restyles its output.
    pub fn with_upstream(
        format: Format,
        upstream: Box<dyn Normalize + Send + Sync>,
    ) -> Result<Self, NormalizerError> {
        Self::build(format, Some(upstream))
    }

    fn build(
        format: Format,
        upstream: Option<Box<dyn Normalize + Send + Sync>>,
    ) -> Result<Self, NormalizerError> {
        if !format.encode_options().contains(EncodeOptions::PRETTY_PRINT) {
            return Err(NormalizerError::MissingPrettyPrint);
        }
        Ok(Self { format, upstream })
    }

    pub fn format(&self) -> &Format {
        &self.format
    }
}

impl Normalize for FormatNormalizer {
    fn normalize(&self, json: &JsonText) -> Result<JsonText, NormalizerError> {
        let upstreamed;
        let json = match &self.upstream {
            Some(upstream) => {
                upstreamed = upstream.normalize(json)?;
                &upstreamed
            }
            None => json,
        };

        // Re-encode with the target format's own encode options; the
        // pretty-print bit is guaranteed present by construction.
        let encoded = encode_value(json.decoded(), self.format.encode_options())?;

        let old_newline = NewLine::from_text(&encoded).ok_or(NormalizerError::NoNewline)?;
        let old_indent = Indent::from_text(&encoded);

        let content = reindent(&encoded, &old_newline, old_indent.as_ref(), &self.format)?;

        JsonText::from_encoded(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn space_crlf_format() -> Format {
        Format::new(
            EncodeOptions::PRETTY_PRINT,
            Indent::spaces(1).unwrap(),
            NewLine::crlf(),
            true,
        )
    }

    #[test]
    fn construction_requires_pretty_print() {
        let format = Format::new(
            EncodeOptions::ESCAPE_UNICODE,
            Indent::spaces(1).unwrap(),
            NewLine::lf(),
            false,
        );
        assert!(matches!(
            FormatNormalizer::new(format),
            Err(NormalizerError::MissingPrettyPrint)
        ));
    }

    #[test]
    fn single_key_object() {
        let normalizer = FormatNormalizer::new(space_crlf_format()).unwrap();
        let json = JsonText::from_value(json!({"Test-Json": false}));

        let normalized = normalizer.normalize(&json).unwrap();

        assert_eq!(normalized.encoded(), "{\r\n \"Test-Json\": false\r\n}\r\n");
    }

    #[test]
    fn indent_like_string_values_survive() {
        let normalizer = FormatNormalizer::new(space_crlf_format()).unwrap();
        let json = JsonText::from_value(json!({
            "Test-Json": false,
            "Test-Json2": "    ",
        }));

        let normalized = normalizer.normalize(&json).unwrap();

        // The four-space *value* matches the serializer's indent unit but
        // is not leading whitespace, so it must come through untouched.
        assert_eq!(
            normalized.encoded(),
            "{\r\n \"Test-Json\": false,\r\n \"Test-Json2\": \"    \"\r\n}\r\n",
        );
    }

    #[test]
    fn single_line_texts_cannot_be_normalized() {
        let normalizer = FormatNormalizer::new(space_crlf_format()).unwrap();

        let scalar = JsonText::from_value(json!(true));
        assert!(matches!(
            normalizer.normalize(&scalar),
            Err(NormalizerError::NoNewline)
        ));

        let empty = JsonText::from_value(json!({}));
        assert!(matches!(
            normalizer.normalize(&empty),
            Err(NormalizerError::NoNewline)
        ));
    }

    struct Replacer;

    impl Normalize for Replacer {
        fn normalize(&self, _json: &JsonText) -> Result<JsonText, NormalizerError> {
            Ok(JsonText::from_value(json!({"replaced": true})))
        }
    }

    #[test]
    fn upstream_normalizer_runs_first() {
        let normalizer =
            FormatNormalizer::with_upstream(space_crlf_format(), Box::new(Replacer)).unwrap();
        let json = JsonText::from_value(json!({"original": 1}));

        let normalized = normalizer.normalize(&json).unwrap();

        assert_eq!(normalized.encoded(), "{\r\n \"replaced\": true\r\n}\r\n");
    }
}
