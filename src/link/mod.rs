//! WhatsApp deep link construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const WA_BASE_URL: &str = "https://wa.me";

// Percent-encode everything except the characters `encodeURIComponent`
// leaves intact, so the text renders identically wherever the link is
// opened.
const TEXT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds a `wa.me` chat URL from a dial code and a local number.
///
/// The dial code loses its leading `+` and the number is reduced to its
/// decimal digits; the two are concatenated into the path. A non-empty
/// message becomes a percent-encoded `text` query parameter.
///
/// No validity checking happens here. Callers are expected to have
/// rejected numbers that are too short before building a link.
///
/// # Examples
///
/// ```
/// use wa_direct::build_chat_url;
///
/// assert_eq!(
///     build_chat_url("+971", "501234567", None),
///     "https://wa.me/971501234567"
/// );
/// assert_eq!(
///     build_chat_url("+971", "501234567", Some("Hi there!")),
///     "https://wa.me/971501234567?text=Hi%20there!"
/// );
/// ```
pub fn build_chat_url(country_code: &str, phone_number: &str, message: Option<&str>) -> String {
    let code_digits = country_code.strip_prefix('+').unwrap_or(country_code);
    let local_digits = sanitize_digits(phone_number);
    let base = format!("{WA_BASE_URL}/{code_digits}{local_digits}");

    match message {
        Some(text) if !text.is_empty() => {
            format!("{base}?text={}", utf8_percent_encode(text, TEXT_ENCODE_SET))
        }
        _ => base,
    }
}

/// Strips everything but ASCII digits from user-entered phone input.
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
