use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizerError;

/// A JSON-encoded string paired with the value it decodes to.
///
/// The two sides always agree: `encoded` parses to `decoded` under the
/// standard JSON grammar, checked at construction. Instances are
/// immutable; every normalization step produces a new `JsonText` and
/// never mutates its input.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonText {
    encoded: String,
    decoded: Value,
}

impl JsonText {
    /// Wraps an already-encoded JSON string, verifying that it parses.
    pub fn from_encoded(encoded: &str) -> Result<Self, NormalizerError> {
        let decoded = serde_json::from_str(encoded).map_err(NormalizerError::InvalidJson)?;
        Ok(Self { encoded: encoded.to_string(), decoded })
    }

    /// Wraps a decoded value, encoding it compactly.
    pub fn from_value(decoded: Value) -> Self {
        Self { encoded: decoded.to_string(), decoded }
    }

    /// Encodes any serializable type and wraps the result.
    ///
    /// ```rust
    /// use json_normalizer::JsonText;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Config {
    ///     enabled: bool,
    /// }
    ///
    /// let json = JsonText::from_serialize(&Config { enabled: true })?;
    /// assert_eq!(json.encoded(), r#"{"enabled":true}"#);
    /// # Ok::<(), json_normalizer::NormalizerError>(())
    /// ```
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, NormalizerError> {
        let decoded = serde_json::to_value(value).map_err(NormalizerError::Encode)?;
        Ok(Self::from_value(decoded))
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn decoded(&self) -> &Value {
        &self.decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn from_encoded_keeps_the_exact_text() {
        let json = JsonText::from_encoded("{\n    \"a\": 1\n}").unwrap();
        assert_eq!(json.encoded(), "{\n    \"a\": 1\n}");
        assert_eq!(json.decoded(), &json!({"a": 1}));
    }

    #[test]
    fn from_encoded_rejects_invalid_text() {
        assert!(matches!(
            JsonText::from_encoded("{\"a\": }"),
            Err(NormalizerError::InvalidJson(_))
        ));
    }

    #[test]
    fn from_value_round_trips() {
        let json = JsonText::from_value(json!([1, 2, 3]));
        assert_eq!(json.encoded(), "[1,2,3]");
    }
}
