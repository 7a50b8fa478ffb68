//! Pattern table configuration
//!
//! The parser never reaches for global state: every table it uses lives in a
//! [`PatternSet`], compiled once from a [`PatternConfig`]. The built-in
//! configuration covers the clients and locales in [`crate::locale`]; a
//! custom one can be loaded from JSON.

use crate::error::{ConfigError, Result};
use crate::locale;
use crate::pattern::{PatternDef, PatternTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Uncompiled pattern tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub subject: Vec<PatternDef>,
    pub separator: Vec<PatternDef>,
    pub separator_with_information: Vec<PatternDef>,
    pub original_subject: Vec<PatternDef>,
    pub original_subject_lax: Vec<PatternDef>,
    pub original_from: Vec<PatternDef>,
    pub original_from_lax: Vec<PatternDef>,
    pub original_to: Vec<PatternDef>,
    pub original_to_lax: Vec<PatternDef>,
    pub original_reply_to: Vec<PatternDef>,
    pub original_cc: Vec<PatternDef>,
    pub original_cc_lax: Vec<PatternDef>,
    pub original_date: Vec<PatternDef>,
    pub original_date_lax: Vec<PatternDef>,
    pub mailbox: Vec<PatternDef>,
    pub mailbox_address: Vec<PatternDef>,
}

impl PatternConfig {
    /// Tables for every supported client and locale
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            subject: locale::SUBJECT.to_vec(),
            separator: locale::SEPARATOR.to_vec(),
            separator_with_information: locale::SEPARATOR_WITH_INFORMATION.to_vec(),
            original_subject: locale::ORIGINAL_SUBJECT.to_vec(),
            original_subject_lax: locale::ORIGINAL_SUBJECT_LAX.to_vec(),
            original_from: locale::ORIGINAL_FROM.to_vec(),
            original_from_lax: locale::ORIGINAL_FROM_LAX.to_vec(),
            original_to: locale::ORIGINAL_TO.to_vec(),
            original_to_lax: locale::ORIGINAL_TO_LAX.to_vec(),
            original_reply_to: locale::ORIGINAL_REPLY_TO.to_vec(),
            original_cc: locale::ORIGINAL_CC.to_vec(),
            original_cc_lax: locale::ORIGINAL_CC_LAX.to_vec(),
            original_date: locale::ORIGINAL_DATE.to_vec(),
            original_date_lax: locale::ORIGINAL_DATE_LAX.to_vec(),
            mailbox: locale::MAILBOX.to_vec(),
            mailbox_address: locale::MAILBOX_ADDRESS.to_vec(),
        }
    }

    /// Decode a configuration from JSON. Missing tables are empty.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compile every table
    pub fn compile(&self) -> Result<PatternSet> {
        let set = PatternSet {
            subject: PatternTable::compile("subject", &self.subject)?,
            separator: PatternTable::compile("separator", &self.separator)?,
            separator_with_information: PatternTable::compile(
                "separator_with_information",
                &self.separator_with_information,
            )?,
            original_subject: PatternTable::compile("original_subject", &self.original_subject)?,
            original_subject_lax: PatternTable::compile(
                "original_subject_lax",
                &self.original_subject_lax,
            )?,
            original_from: PatternTable::compile("original_from", &self.original_from)?,
            original_from_lax: PatternTable::compile(
                "original_from_lax",
                &self.original_from_lax,
            )?,
            original_to: PatternTable::compile("original_to", &self.original_to)?,
            original_to_lax: PatternTable::compile("original_to_lax", &self.original_to_lax)?,
            original_reply_to: PatternTable::compile(
                "original_reply_to",
                &self.original_reply_to,
            )?,
            original_cc: PatternTable::compile("original_cc", &self.original_cc)?,
            original_cc_lax: PatternTable::compile("original_cc_lax", &self.original_cc_lax)?,
            original_date: PatternTable::compile("original_date", &self.original_date)?,
            original_date_lax: PatternTable::compile(
                "original_date_lax",
                &self.original_date_lax,
            )?,
            mailbox: PatternTable::compile("mailbox", &self.mailbox)?,
            mailbox_address: PatternTable::compile("mailbox_address", &self.mailbox_address)?,
        };

        // Without these every mailbox would degrade to a bare name
        for table in [&set.mailbox, &set.mailbox_address] {
            if table.is_empty() {
                return Err(ConfigError::EmptyTable(table.name()));
            }
        }

        debug!(
            "Compiled pattern set: {} subject, {} separator, {} mailbox patterns",
            set.subject.len(),
            set.separator.len(),
            set.mailbox.len()
        );

        Ok(set)
    }
}

/// Compiled, immutable pattern tables shared by every read
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub subject: PatternTable,
    pub separator: PatternTable,
    pub separator_with_information: PatternTable,
    pub original_subject: PatternTable,
    pub original_subject_lax: PatternTable,
    pub original_from: PatternTable,
    pub original_from_lax: PatternTable,
    pub original_to: PatternTable,
    pub original_to_lax: PatternTable,
    pub original_reply_to: PatternTable,
    pub original_cc: PatternTable,
    pub original_cc_lax: PatternTable,
    pub original_date: PatternTable,
    pub original_date_lax: PatternTable,
    pub mailbox: PatternTable,
    pub mailbox_address: PatternTable,
}

impl PatternSet {
    pub fn builtin() -> Result<Self> {
        PatternConfig::builtin().compile()
    }
}
