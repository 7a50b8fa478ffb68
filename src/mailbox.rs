//! Mailbox list parsing for address-bearing header lines

use crate::config::PatternSet;
use crate::locale::MAILBOX_SEPARATORS;
use crate::pattern::PatternTable;
use crate::types::Mailbox;
use tracing::trace;

/// Decomposes header values such as `A <a@x.com>, "B" <b@y.com>` into
/// [`Mailbox`]es, one shape match at a time.
#[derive(Debug, Clone, Copy)]
pub struct MailboxParser<'a> {
    shapes: &'a PatternTable,
    addresses: &'a PatternTable,
}

impl<'a> MailboxParser<'a> {
    #[must_use]
    pub const fn new(patterns: &'a PatternSet) -> Self {
        Self {
            shapes: &patterns.mailbox,
            addresses: &patterns.mailbox_address,
        }
    }

    /// Build a mailbox, keeping the invariants: an address that is not a bare
    /// `local@domain.tld` token is really a name, and a name equal to the
    /// address is dropped.
    #[must_use]
    pub fn prepare(&self, name: &str, address: &str) -> Mailbox {
        let mut name = name.trim();
        let mut address = address.trim();

        if self.addresses.find(address, true).is_none() {
            name = address;
            address = "";
        }

        if name == address {
            name = "";
        }

        Mailbox {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    /// Locate the header line matched by `header` in `text` and parse its
    /// value into mailboxes. Empty when no line matches.
    #[must_use]
    pub fn parse(&self, header: &PatternTable, text: &str) -> Vec<Mailbox> {
        let Some(found) = header.find(text, true) else {
            return Vec::new();
        };

        self.parse_list(found.value())
    }

    /// Parse a raw mailbox list.
    ///
    /// A separator is only consumed right after a recognized mailbox, so a
    /// comma inside a display name survives. Text no shape recognizes becomes
    /// the last mailbox.
    #[must_use]
    pub fn parse_list(&self, list: &str) -> Vec<Mailbox> {
        let mut mailboxes = Vec::new();
        let mut line = list.trim().to_string();

        while !line.is_empty() {
            let shape = self
                .shapes
                .find(&line, true)
                .filter(|shape| !shape.full().is_empty());

            let Some(shape) = shape else {
                mailboxes.push(self.prepare("", &line));
                break;
            };

            let (name, address) = shape.name_and_address();
            trace!("Mailbox shape matched: name={name:?} address={address:?}");
            mailboxes.push(self.prepare(name, address));

            let rest = line.replacen(shape.full(), "", 1);
            let rest = rest.trim();
            line = rest
                .strip_prefix(MAILBOX_SEPARATORS)
                .unwrap_or(rest)
                .trim()
                .to_string();
        }

        mailboxes
    }
}
