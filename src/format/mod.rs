//! Input sanitizing, request encoding, and text helpers.
//!
//! Chat users paste snippets wrapped in Markdown code fences. The decompile
//! service wants bare C#, so fences are stripped before the length check
//! and before the payload is built.
//!
//! # Example
//!
//! ```
//! use il_relay::format::{encode, sanitize};
//!
//! let code = sanitize("```cs\nint x = 1;\n```").unwrap();
//! assert_eq!(code, "int x = 1;");
//!
//! let payload = encode(&code);
//! assert_eq!(payload.body, b"int x = 1;");
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::error::InputError;

/// Maximum sanitized input length in characters.
pub const MAX_INPUT_LEN: usize = 1000;

/// Content type of the decompile request body.
pub const PAYLOAD_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Exact bytes sent to the decompile service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Request body.
    pub body: Vec<u8>,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
}

/// A validated, encoded decompile request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Text exactly as the caller supplied it.
    pub raw_input: String,
    /// Text with formatting removed; at most [`MAX_INPUT_LEN`] characters.
    pub sanitized_input: String,
    /// Wire payload built from `sanitized_input`.
    pub payload: EncodedPayload,
}

impl InvocationRequest {
    /// Sanitize and encode raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooLong`] when the sanitized text exceeds
    /// [`MAX_INPUT_LEN`] characters.
    pub fn from_raw(raw: impl Into<String>) -> Result<Self, InputError> {
        let raw_input = raw.into();
        let sanitized_input = sanitize(&raw_input)?;
        let payload = encode(&sanitized_input);
        Ok(Self {
            raw_input,
            sanitized_input,
            payload,
        })
    }
}

// The pattern is a literal; compilation cannot fail.
#[allow(clippy::unwrap_used)]
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```(?:[\w#+-]*\s|[\w#+-]*$)").unwrap())
}

/// Remove code fences (with their language tags) and surrounding whitespace.
///
/// A language tag is a run of word characters, `#`, `+` or `-` directly
/// after an opening fence and ended by whitespace. Anything else after the
/// fence, such as ```` ```Console.WriteLine(1);``` ````, is kept as code.
#[must_use]
pub fn strip_formatting(raw: &str) -> String {
    fence_regex()
        .replace_all(raw.trim(), "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Strip formatting and enforce [`MAX_INPUT_LEN`].
///
/// The length is measured in characters after stripping.
///
/// # Errors
///
/// Returns [`InputError::TooLong`] when the stripped text is too long.
pub fn sanitize(raw: &str) -> Result<String, InputError> {
    let code = strip_formatting(raw);
    let length = code.chars().count();
    if length > MAX_INPUT_LEN {
        return Err(InputError::TooLong {
            length,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(code)
}

/// Build the wire payload for sanitized code.
#[must_use]
pub fn encode(sanitized: &str) -> EncodedPayload {
    EncodedPayload {
        body: sanitized.as_bytes().to_vec(),
        content_type: PAYLOAD_CONTENT_TYPE,
    }
}

/// Truncate `text` to at most `max_chars` characters.
///
/// Truncated text ends with [`ELLIPSIS`]; the marker counts toward the limit.
#[must_use]
pub fn truncate_to(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Wrap `text` in a Markdown code block tagged with `language`.
#[must_use]
pub fn code_block(text: &str, language: &str) -> String {
    format!("```{language}\n{text}\n```")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("int x = 1;", "int x = 1;" ; "plain text")]
    #[test_case("```cs\nint x = 1;\n```", "int x = 1;" ; "cs fence")]
    #[test_case("```csharp\nint x = 1;\n```", "int x = 1;" ; "csharp fence")]
    #[test_case("```\nint x = 1;\n```", "int x = 1;" ; "bare fence")]
    #[test_case("  \n```cs int x = 1;```  ", "int x = 1;" ; "inline fence")]
    #[test_case("``` ```", "" ; "only fences")]
    #[test_case("```Console.WriteLine(1);```", "Console.WriteLine(1);" ; "untagged one-line fence")]
    #[test_case("```c#\nint x = 1;\n```", "int x = 1;" ; "c sharp tag")]
    #[test_case("```cs\r\nint x = 1;\r\n```", "int x = 1;" ; "crlf fence")]
    fn test_strip_formatting(raw: &str, expected: &str) {
        assert_eq!(strip_formatting(raw), expected);
    }

    #[test]
    fn test_strip_keeps_single_backticks() {
        assert_eq!(strip_formatting("var s = $\"`{x}`\";"), "var s = $\"`{x}`\";");
    }

    #[test]
    fn test_sanitize_accepts_max_length() {
        let code = "a".repeat(MAX_INPUT_LEN);
        assert_eq!(sanitize(&code).unwrap().len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_sanitize_rejects_1001_chars() {
        let code = "a".repeat(MAX_INPUT_LEN + 1);
        assert_eq!(
            sanitize(&code),
            Err(InputError::TooLong {
                length: 1001,
                max: MAX_INPUT_LEN
            })
        );
    }

    #[test]
    fn test_sanitize_measures_after_stripping() {
        let raw = format!("```csharp\n{}\n```", "a".repeat(MAX_INPUT_LEN));
        assert!(raw.chars().count() > MAX_INPUT_LEN);
        assert!(sanitize(&raw).is_ok());
    }

    #[test]
    fn test_sanitize_counts_chars_not_bytes() {
        let code = "é".repeat(MAX_INPUT_LEN);
        assert!(code.len() > MAX_INPUT_LEN);
        assert!(sanitize(&code).is_ok());
    }

    #[test]
    fn test_encode_is_utf8_bytes() {
        let payload = encode("Console.WriteLine(\"hé\");");
        assert_eq!(payload.body, "Console.WriteLine(\"hé\");".as_bytes());
        assert_eq!(payload.content_type, PAYLOAD_CONTENT_TYPE);
    }

    #[test]
    fn test_invocation_request_from_raw() {
        let request = InvocationRequest::from_raw("```cs\nvar x = 1;\n```").unwrap();
        assert_eq!(request.raw_input, "```cs\nvar x = 1;\n```");
        assert_eq!(request.sanitized_input, "var x = 1;");
        assert_eq!(request.payload, encode("var x = 1;"));
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to("short", 990), "short");
        let exact = "x".repeat(990);
        assert_eq!(truncate_to(&exact, 990), exact);
    }

    #[test]
    fn test_truncate_long_text_has_marker() {
        let long = "x".repeat(2000);
        let out = truncate_to(&long, 990);
        assert_eq!(out.chars().count(), 990);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_code_block() {
        assert_eq!(code_block("nop", "asm"), "```asm\nnop\n```");
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_idempotent(raw in "[a-z `\\n{};=]{0,200}") {
            let once = strip_formatting(&raw);
            prop_assert_eq!(strip_formatting(&once), once.clone());
            if let Ok(code) = sanitize(&raw) {
                prop_assert_eq!(sanitize(&code), Ok(code));
            }
        }

        #[test]
        fn prop_truncate_respects_limit(text in "\\PC{0,3000}", max in 3usize..1200) {
            prop_assert!(truncate_to(&text, max).chars().count() <= max);
        }
    }
}
