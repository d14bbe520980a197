//! # json-normalizer
//!
//! A deterministic JSON style normalizer: rewrite an encoded JSON text's
//! indentation, line endings and trailing newline to a target style
//! without changing the value it represents.
//!
//! The transformation is purely line-oriented. The value is re-encoded
//! with a pretty-printing serializer, the indent unit and newline
//! sequence actually used are inferred back from that text, and every
//! line's leading whitespace is then translated to the target style.
//! Everything after a line's leading whitespace run is copied through
//! byte for byte, so string values that happen to contain indent-like
//! whitespace are never touched.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `json-normalize` CLI tool:
//!
//! ```sh
//! # Install
//! cargo install json-normalizer
//!
//! # Two-space indent, LF endings, trailing newline
//! echo '{"a":1,"b":2}' | json-normalize --indent 2
//!
//! # Tabs and Windows line endings, written back to a file
//! json-normalize --tabs --eol crlf config.json -o config.json
//! ```
//!
//! Run `json-normalize --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use json_normalizer::{
//!     EncodeOptions, Format, FormatNormalizer, Indent, JsonText, NewLine, Normalize,
//! };
//!
//! let format = Format::new(
//!     EncodeOptions::PRETTY_PRINT,
//!     Indent::spaces(2)?,
//!     NewLine::lf(),
//!     true,
//! );
//! let normalizer = FormatNormalizer::new(format)?;
//!
//! let json = JsonText::from_encoded(r#"{"name":"Alice","scores":[95,87]}"#)?;
//! let normalized = normalizer.normalize(&json)?;
//!
//! println!("{}", normalized.encoded());
//! # Ok::<(), json_normalizer::NormalizerError>(())
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be wrapped and
//! normalized directly:
//!
//! ```rust
//! use json_normalizer::{Format, FormatNormalizer, JsonText, Normalize};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let normalizer = FormatNormalizer::new(Format::default())?;
//! let normalized = normalizer.normalize(&JsonText::from_serialize(&player)?)?;
//! # Ok::<(), json_normalizer::NormalizerError>(())
//! ```
//!
//! ## Composing Normalizers
//!
//! `FormatNormalizer` is a decorator over anything implementing
//! [`Normalize`]; an upstream normalizer runs first and its output is
//! then restyled:
//!
//! ```rust
//! use json_normalizer::{Format, FormatNormalizer, JsonText, Normalize, NormalizerError};
//!
//! struct Stripper;
//!
//! impl Normalize for Stripper {
//!     fn normalize(&self, json: &JsonText) -> Result<JsonText, NormalizerError> {
//!         // ... produce a differently-normalized JsonText ...
//!         Ok(json.clone())
//!     }
//! }
//!
//! let normalizer = FormatNormalizer::with_upstream(Format::default(), Box::new(Stripper))?;
//! # Ok::<(), json_normalizer::NormalizerError>(())
//! ```
//!
//! ## Guarantees
//!
//! - The decoded value of the output always equals the decoded value of
//!   the input; the rewrite touches whitespace only, and the result is
//!   re-parsed as a final check.
//! - Normalizing already-normalized text with the same format yields the
//!   identical text.
//! - Indent translation is collision-safe: it behaves correctly even
//!   when one indent unit is a substring of the other.

mod encode;
mod error;
mod format;
mod json;
mod normalizer;
mod options;
mod reindent;

pub use crate::error::NormalizerError;
pub use crate::format::{Format, Indent, NewLine};
pub use crate::json::JsonText;
pub use crate::normalizer::{FormatNormalizer, Normalize};
pub use crate::options::EncodeOptions;
