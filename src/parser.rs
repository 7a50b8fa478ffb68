//! Forward detection and original message extraction

use crate::config::{PatternConfig, PatternSet};
use crate::error::Result;
use crate::mailbox::MailboxParser;
use crate::normalize::{normalize_body, normalize_original, preprocess};
use crate::pattern::{reconcile, split_first, summarize};
use crate::types::{Mailbox, OriginalEmail, ParsedBody, ReadResult};
use std::sync::LazyLock;
use tracing::{debug, trace};

static DEFAULT_PARSER: LazyLock<ForwardParser> = LazyLock::new(ForwardParser::new);

/// Parser instance using the built-in tables, compiled on first use
#[must_use]
pub fn default_parser() -> &'static ForwardParser {
    &DEFAULT_PARSER
}

/// Read a message with the built-in tables, see [`ForwardParser::read`]
#[must_use]
pub fn read(body: &str, subject: &str) -> ReadResult {
    DEFAULT_PARSER.read(body, subject)
}

/// Build a mailbox with the built-in tables, see [`MailboxParser::prepare`]
#[must_use]
pub fn prepare_mailbox(name: &str, address: &str) -> Mailbox {
    DEFAULT_PARSER.prepare_mailbox(name, address)
}

/// Segments `[.., header line, header value, ..]` repeat every three, this
/// picks out the header values past the first.
const fn is_header_value(index: usize) -> bool {
    index % 3 == 2
}

/// Detects forwarded messages and extracts the original email.
///
/// Holds only immutable compiled tables, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct ForwardParser {
    patterns: PatternSet,
}

impl Default for ForwardParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardParser {
    /// Parser with the built-in tables
    #[must_use]
    pub fn new() -> Self {
        let patterns = PatternSet::builtin().expect("built-in pattern tables must compile");
        Self { patterns }
    }

    #[must_use]
    pub const fn with_patterns(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        Ok(Self::with_patterns(config.compile()?))
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    const fn mailboxes(&self) -> MailboxParser<'_> {
        MailboxParser::new(&self.patterns)
    }

    /// Read a message and extract the forwarded email, if any.
    ///
    /// `subject` may be empty when unknown. This never fails: whatever
    /// cannot be found is left empty.
    #[must_use]
    pub fn read(&self, body: &str, subject: &str) -> ReadResult {
        let subject = preprocess(subject);
        let body = preprocess(body);

        let mut forwarded = false;
        let mut forwarded_subject = None;

        if !subject.is_empty() {
            forwarded_subject = self.parse_subject(subject);
            forwarded = forwarded_subject.is_some();
        }

        let mut message = String::new();
        let mut email = OriginalEmail::default();

        if subject.is_empty() || forwarded {
            let parsed = self.parse_body(body, forwarded);

            if !parsed.email.is_empty() {
                forwarded = true;
                email = self.parse_original_email(&parsed.email, &parsed.body);
                message = parsed.message;
            }
        }

        if let Some(subject) = forwarded_subject {
            email.subject = subject;
        }

        debug!(
            "Read message: forwarded={forwarded} from={} subject={:?}",
            email.from, email.subject
        );

        ReadResult {
            forwarded,
            message,
            email,
        }
    }

    /// Strip a forwarding prefix (`Fwd:`, `TR:`, ...) from a subject.
    ///
    /// Prefixes are tried in table order. `None` when no prefix matches or
    /// nothing is left after it.
    #[must_use]
    pub fn parse_subject(&self, subject: &str) -> Option<String> {
        self.patterns
            .subject
            .find(subject, false)
            .map(|found| found.value().trim().to_string())
            .filter(|stripped| !stripped.is_empty())
    }

    /// Split a body into the forwarder's message and the forwarded email.
    ///
    /// Banners and quote headers are tried first. When the subject already
    /// told us this is a forward, an embedded `From:` line is accepted as the
    /// start of the forwarded email too.
    #[must_use]
    pub fn parse_body(&self, body: &str, forwarded: bool) -> ParsedBody {
        let body = normalize_body(body);

        let segments = self.patterns.separator.split(&body, true);
        if segments.len() > 2 {
            trace!("Separator split:{}", summarize(&segments));

            let message = segments[0].trim().to_string();
            let email = reconcile(&segments, 3, &[2], None).trim().to_string();

            debug!("Forward banner found");
            return ParsedBody {
                body,
                message,
                email,
            };
        }

        if forwarded {
            let segments = self.patterns.original_from.split(&body, true);
            if segments.len() > 3 {
                trace!("From line split:{}", summarize(&segments));

                let email = reconcile(&segments, 4, &[1, 3], Some(is_header_value))
                    .trim()
                    .to_string();

                debug!("Forwarded header block found without banner");
                return ParsedBody {
                    body,
                    message: String::new(),
                    email,
                };
            }
        }

        ParsedBody::default()
    }

    /// Extract the original email from the forwarded part.
    ///
    /// `body` is the whole normalized message body, searched for quote
    /// headers carrying the sender and date.
    #[must_use]
    pub fn parse_original_email(&self, text: &str, body: &str) -> OriginalEmail {
        let text = normalize_original(text);

        OriginalEmail {
            body: self.parse_original_body(&text),
            from: self.parse_original_from(&text, body),
            to: self.parse_original_to(&text),
            cc: self.parse_original_cc(&text),
            subject: self.parse_original_subject(&text),
            date: self.parse_original_date(&text, body),
        }
    }

    /// Body of the original email: what follows the header block.
    ///
    /// The last header line is taken to be Subject, Cc, To or Reply-To, in
    /// that order, as long as a blank line follows it.
    #[must_use]
    pub fn parse_original_body(&self, text: &str) -> String {
        let p = &self.patterns;

        for table in [
            &p.original_subject,
            &p.original_cc,
            &p.original_to,
            &p.original_reply_to,
        ] {
            let segments = table.split(text, true);

            if segments.len() > 3 && segments[3].starts_with("\n\n") {
                trace!("Body split on {}:{}", table.name(), summarize(&segments));
                return reconcile(&segments, 4, &[3], Some(is_header_value))
                    .trim()
                    .to_string();
            }
        }

        let segments = split_first(
            p.original_subject.iter().chain(&p.original_subject_lax),
            text,
            true,
        );

        if segments.len() > 3 {
            return reconcile(&segments, 4, &[3], Some(is_header_value))
                .trim()
                .to_string();
        }

        text.to_string()
    }

    #[must_use]
    pub fn parse_original_from(&self, text: &str, body: &str) -> Mailbox {
        let p = &self.patterns;

        if let Some(author) = self.mailboxes().parse(&p.original_from, text).into_iter().next()
            && !author.is_empty()
        {
            return author;
        }

        if let Some(found) = p.separator_with_information.find(body, true) {
            let (name, address) = found.name_and_address();
            let author = self.prepare_mailbox(name, address);

            if !author.is_empty() {
                debug!("Sender taken from quote header");
                return author;
            }
        }

        p.original_from_lax
            .find(text, true)
            .map(|found| {
                let (name, address) = found.name_and_address();
                self.prepare_mailbox(name, address)
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn parse_original_to(&self, text: &str) -> Vec<Mailbox> {
        let p = &self.patterns;

        let recipients = self.mailboxes().parse(&p.original_to, text);
        if !recipients.is_empty() {
            return recipients;
        }

        // Lax patterns would otherwise pick up the other fields' lines
        let text = p.original_subject_lax.strip(text);
        let text = p.original_date_lax.strip(&text);
        let text = p.original_cc_lax.strip(&text);

        self.mailboxes().parse(&p.original_to_lax, &text)
    }

    #[must_use]
    pub fn parse_original_cc(&self, text: &str) -> Vec<Mailbox> {
        let p = &self.patterns;

        let recipients = self.mailboxes().parse(&p.original_cc, text);
        if !recipients.is_empty() {
            return recipients;
        }

        let text = p.original_subject_lax.strip(text);
        let text = p.original_date_lax.strip(&text);

        self.mailboxes().parse(&p.original_cc_lax, &text)
    }

    #[must_use]
    pub fn parse_original_subject(&self, text: &str) -> String {
        let p = &self.patterns;

        p.original_subject
            .find(text, true)
            .or_else(|| p.original_subject_lax.find(text, true))
            .map(|found| found.value().trim().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn parse_original_date(&self, text: &str, body: &str) -> String {
        let p = &self.patterns;

        if let Some(found) = p.original_date.find(text, true) {
            return found.value().trim().to_string();
        }

        if let Some(found) = p.separator_with_information.find(body, true) {
            let date = found.name("date").trim();
            if !date.is_empty() {
                return date.to_string();
            }
        }

        let text = p.original_subject_lax.strip(text);

        p.original_date_lax
            .find(&text, true)
            .map(|found| found.value().trim().to_string())
            .unwrap_or_default()
    }

    /// See [`MailboxParser::prepare`]
    #[must_use]
    pub fn prepare_mailbox(&self, name: &str, address: &str) -> Mailbox {
        self.mailboxes().prepare(name, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_segments() {
        let picked: Vec<usize> = (4..10).filter(|&i| is_header_value(i)).collect();
        assert_eq!(picked, vec![5, 8]);
    }

    #[test]
    fn test_parse_body_without_forward_hint_ignores_from_line() {
        let parser = default_parser();
        let body = "Hi\n\nFrom: John Doe <john.doe@acme.com>\nSubject: Hello\n\nBody";

        assert_eq!(parser.parse_body(body, false), ParsedBody::default());

        let parsed = parser.parse_body(body, true);
        assert!(parsed.message.is_empty());
        assert!(parsed.email.starts_with("From: John Doe"));
        assert!(parsed.email.ends_with("Body"));
    }
}
