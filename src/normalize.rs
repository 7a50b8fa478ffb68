//! Text cleanup applied before any pattern matching

use regex::Regex;
use std::sync::LazyLock;

static QUOTE_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(>+)\s?$").unwrap());

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(>+)\s?").unwrap());

static FOUR_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^( {4})\s?").unwrap());

static TRAILING_NON_BREAKING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\x{A0}$").unwrap());

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NON_BREAKING_SPACE: char = '\u{A0}';

/// Trim characters that render as nothing (controls, BOM, zero-width and
/// other format characters) from both ends.
#[must_use]
pub fn preprocess(text: &str) -> &str {
    text.trim_matches(|c: char| !is_graphic(c))
}

/// Prepare a full message body for separator detection
#[must_use]
pub fn normalize_body(body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace(BYTE_ORDER_MARK, "");
    let body = TRAILING_NON_BREAKING_SPACE.replace_all(&body, "");

    body.replace(NON_BREAKING_SPACE, " ")
}

/// Prepare the forwarded part for header extraction: drop quote markers and
/// the indentation some clients add to forwarded content.
#[must_use]
pub fn normalize_original(text: &str) -> String {
    let text = text.replace(BYTE_ORDER_MARK, "");
    let text = QUOTE_LINE_BREAK.replace_all(&text, "");
    let text = QUOTE.replace_all(&text, "");

    FOUR_SPACES.replace_all(&text, "").into_owned()
}

fn is_graphic(c: char) -> bool {
    !(c.is_control()
        || matches!(
            c,
            '\u{AD}'
                | '\u{200B}'..='\u{200F}'
                | '\u{2028}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | BYTE_ORDER_MARK
        ))
}
