use std::fmt::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::NormalizerError;
use crate::options::EncodeOptions;

/// Indent written by the pretty serializer before any reindenting
/// happens. The reindenter infers it back from the text rather than
/// relying on this constant.
const SERIALIZER_INDENT: &[u8] = b"    ";

/// Encodes a decoded value according to `options`.
///
/// With [`EncodeOptions::PRETTY_PRINT`] set, output is multi-line with
/// the serializer's default four-space indent; the escaping options are
/// applied as passes over the encoded text afterwards.
pub(crate) fn encode_value(value: &Value, options: EncodeOptions) -> Result<String, NormalizerError> {
    let mut text = if options.contains(EncodeOptions::PRETTY_PRINT) {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(SERIALIZER_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer).map_err(NormalizerError::Encode)?;
        String::from_utf8(buffer)?
    } else {
        serde_json::to_string(value).map_err(NormalizerError::Encode)?
    };

    if options.contains(EncodeOptions::ESCAPE_UNICODE) {
        text = escape_unicode(&text);
    }
    if options.contains(EncodeOptions::ESCAPE_SOLIDUS) {
        // A bare `/` can only occur inside string literals, and the
        // serializer never writes `\/` itself, so a plain replace is safe.
        text = text.replace('/', "\\/");
    }

    Ok(text)
}

/// Rewrites every non-ASCII character as one or two `\uXXXX` escapes.
/// Non-ASCII characters only occur inside string literals, so escaping
/// them does not change the decoded value.
fn escape_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pretty_print_uses_four_space_indent() {
        let text = encode_value(&json!({"a": 1}), EncodeOptions::PRETTY_PRINT).unwrap();
        assert_eq!(text, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn compact_without_pretty_print() {
        let text = encode_value(&json!({"a": [1, 2]}), EncodeOptions::empty()).unwrap();
        assert_eq!(text, "{\"a\":[1,2]}");
    }

    #[test]
    fn escape_unicode_writes_bmp_and_surrogate_pairs() {
        let options = EncodeOptions::PRETTY_PRINT | EncodeOptions::ESCAPE_UNICODE;
        let text = encode_value(&json!({"s": "é😀"}), options).unwrap();
        assert_eq!(text, "{\n    \"s\": \"\\u00e9\\ud83d\\ude00\"\n}");
        // Escaping must not change the decoded value.
        let back: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({"s": "é😀"}));
    }

    #[test]
    fn escape_solidus_only_touches_slashes() {
        let options = EncodeOptions::PRETTY_PRINT | EncodeOptions::ESCAPE_SOLIDUS;
        let text = encode_value(&json!({"url": "a/b"}), options).unwrap();
        assert_eq!(text, "{\n    \"url\": \"a\\/b\"\n}");
        let back: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({"url": "a/b"}));
    }
}
