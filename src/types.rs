//! Result types produced by the forward parser

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display name and email address pair taken from a header value.
///
/// Either field may be empty. The empty mailbox is the [`Default`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Mailbox {
    /// Display name (e.g., "John Doe")
    pub name: String,

    /// Email address (e.g., "john.doe@acme.com")
    pub address: String,
}

impl Mailbox {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_empty()
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.address.is_empty()) {
            (false, false) => write!(f, "{} <{}>", self.name, self.address),
            (true, _) => write!(f, "{}", self.address),
            (false, true) => write!(f, "{}", self.name),
        }
    }
}

/// Attributes of the original message found inside a forward
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OriginalEmail {
    /// Body of the original message
    pub body: String,

    /// Original sender
    pub from: Mailbox,

    /// Original primary recipients
    pub to: Vec<Mailbox>,

    /// Original CC recipients
    pub cc: Vec<Mailbox>,

    /// Original subject
    pub subject: String,

    /// Original date, verbatim as written by the mail client
    pub date: String,
}

impl OriginalEmail {
    /// Check whether nothing at all was extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body.is_empty()
            && self.from.is_empty()
            && self.to.is_empty()
            && self.cc.is_empty()
            && self.subject.is_empty()
            && self.date.is_empty()
    }
}

/// Outcome of reading a message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadResult {
    /// Is this a forward?
    pub forwarded: bool,

    /// Text the forwarder wrote above the forwarded message
    pub message: String,

    /// The forwarded message
    pub email: OriginalEmail,
}

/// Body split into the forwarder's message and the forwarded email text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBody {
    /// Normalized body the split was performed on
    pub body: String,

    /// Forwarder's own text, empty when the From-line fallback was used
    pub message: String,

    /// Forwarded headers and original body
    pub email: String,
}
