// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Forwarded Email Parser
//!
//! Detects whether a message is a forward and reconstructs the original
//! email (sender, recipients, subject, date and body) from the plain text
//! that mail clients produce when forwarding.
//!
//! # Features
//!
//! - Forwarded subject prefixes (`Fwd:`, `TR:`, `WG:`, ...)
//! - Forward banners and quote headers of Apple Mail, Gmail, Outlook,
//!   Thunderbird, Yahoo Mail, HubSpot and more, in many locales
//! - Mailbox lists with quoted, bracketed and `mailto:` forms
//! - Pattern tables as plain data, replaceable through [`PatternConfig`]
//!
//! # Example
//!
//! ```rust
//! use forward_extract::read;
//!
//! let body = "Hi!\n\n\
//!             ---------- Forwarded message ---------\n\
//!             From: John Doe <john.doe@acme.com>\n\
//!             Date: Mon, Jan 7, 2019 at 3:46 PM\n\
//!             Subject: Hello\n\
//!             To: bessie.berry@acme.com\n\
//!             \n\
//!             Original body";
//!
//! let result = read(body, "Fwd: Hello");
//!
//! assert!(result.forwarded);
//! assert_eq!(result.message, "Hi!");
//! assert_eq!(result.email.from.address, "john.doe@acme.com");
//! assert_eq!(result.email.body, "Original body");
//! ```

mod config;
mod error;
pub mod locale;
mod mailbox;
mod normalize;
mod parser;
mod pattern;
mod types;

pub use config::{PatternConfig, PatternSet};
pub use error::{ConfigError, Result};
pub use mailbox::MailboxParser;
pub use normalize::{normalize_body, normalize_original, preprocess};
pub use parser::{ForwardParser, default_parser, prepare_mailbox, read};
pub use pattern::{
    Capture, Match, Pattern, PatternDef, PatternTable, find_first, reconcile, split_first,
    split_with,
};
pub use types::*;
