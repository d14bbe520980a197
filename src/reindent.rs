use crate::error::NormalizerError;
use crate::format::{Format, Indent, NewLine};

/// Sentinel substituted for the old indent unit during translation. A
/// control character never appears in a legitimate leading-whitespace
/// run, so the two-step replace behaves like an atomic rename even when
/// the old and new indent units overlap textually.
const PLACEHOLDER: &str = "\u{1}";

/// Rewrites the leading whitespace of every line of `text` from
/// `old_indent` repetitions to repetitions of the format's indent, joins
/// the lines with the format's newline, and applies its trailing-newline
/// policy.
///
/// Purely line-oriented: the text is never parsed, and everything after
/// a line's leading whitespace run is copied through untouched. An
/// `old_indent` of `None` means the source has no indented line at all,
/// making the translation a no-op.
pub(crate) fn reindent(
    text: &str,
    old_newline: &NewLine,
    old_indent: Option<&Indent>,
    format: &Format,
) -> Result<String, NormalizerError> {
    let new_newline = format.newline().as_str();
    let new_indent = format.indent().as_str();

    let mut formatted_lines = Vec::new();
    for (index, line) in text.trim_end().split(old_newline.as_str()).enumerate() {
        formatted_lines.push(reindent_line(line, index, old_indent, new_indent)?);
    }

    let mut content = formatted_lines.join(new_newline);
    if format.final_newline() {
        content.push_str(new_newline);
    }

    Ok(content)
}

fn reindent_line(
    line: &str,
    index: usize,
    old_indent: Option<&Indent>,
    new_indent: &str,
) -> Result<String, NormalizerError> {
    let content_start = match line.find(|c: char| !c.is_whitespace()) {
        // Whitespace-only lines and lines whose content starts at column
        // zero (closing brackets, the opening line) pass through as-is.
        None | Some(0) => return Ok(line.to_string()),
        Some(idx) => idx,
    };

    let old_indent = match old_indent {
        Some(indent) => indent.as_str(),
        None => return Ok(line.to_string()),
    };

    let (leading, rest) = line.split_at(content_start);

    // A pretty-printer indents with a whole number of units per level.
    // Anything else is corrupted input, surfaced instead of guessed at.
    let exact_multiple = leading.len() % old_indent.len() == 0
        && leading
            .as_bytes()
            .chunks(old_indent.len())
            .all(|chunk| chunk == old_indent.as_bytes());
    if !exact_multiple {
        return Err(NormalizerError::MalformedIndent {
            line: index + 1,
            unit: old_indent.to_string(),
        });
    }

    // Two-phase substitution over the whole run: old unit -> sentinel,
    // then sentinel -> new unit. A direct old -> new replace could
    // re-match text it just inserted when one unit contains the other.
    let translated = leading
        .replace(old_indent, PLACEHOLDER)
        .replace(PLACEHOLDER, new_indent);
    debug_assert!(!translated.contains(PLACEHOLDER), "sentinel leaked into output");

    Ok(format!("{}{}", translated, rest))
}
