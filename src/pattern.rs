//! Ordered pattern tables and the text segmentation primitives built on them

use crate::error::{ConfigError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Semantic role of the capture groups of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Capture {
    /// Pure delimiter, groups carry no meaning
    None,

    /// One group holds the value (header value, stripped subject)
    Value { group: usize },

    /// One group holds a bare address
    Address { group: usize },

    /// Display name and address
    NameAddress { name: usize, address: usize },

    /// Named groups `date`, `from_name` and `from_address`
    Combined,
}

/// Uncompiled pattern: regular expression source plus capture roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    pub pattern: Cow<'static, str>,
    pub capture: Capture,
}

impl PatternDef {
    #[must_use]
    pub const fn new(pattern: &'static str, capture: Capture) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            capture,
        }
    }

    #[must_use]
    pub const fn delimiter(pattern: &'static str) -> Self {
        Self::new(pattern, Capture::None)
    }

    #[must_use]
    pub const fn value(pattern: &'static str) -> Self {
        Self::new(pattern, Capture::Value { group: 1 })
    }
}

/// A compiled pattern with its capture roles
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    capture: Capture,
}

impl Pattern {
    pub fn compile(def: &PatternDef) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&def.pattern)?,
            capture: def.capture,
        })
    }

    #[must_use]
    pub const fn capture(&self) -> Capture {
        self.capture
    }

    /// First match of this pattern in `text`
    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t, '_>> {
        self.regex.captures(text).map(|captures| Match {
            pattern: self,
            captures,
        })
    }

    /// Split `text` around every match of this pattern, see [`split_with`]
    #[must_use]
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        split_with(&self.regex, text)
    }

    /// Remove the first match of this pattern from `text`
    #[must_use]
    pub fn remove_first<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace(text, regex::NoExpand(""))
    }
}

/// A successful application of one pattern to a text
#[derive(Debug)]
pub struct Match<'t, 'p> {
    pattern: &'p Pattern,
    captures: Captures<'t>,
}

impl<'t> Match<'t, '_> {
    /// The pattern that produced this match
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        self.pattern
    }

    /// Offset of the match in the searched text
    #[must_use]
    pub fn start(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.start())
    }

    /// Whole matched substring
    #[must_use]
    pub fn full(&self) -> &'t str {
        self.group(0)
    }

    /// Group by position; empty when the group did not participate
    #[must_use]
    pub fn group(&self, index: usize) -> &'t str {
        self.captures.get(index).map_or("", |m| m.as_str())
    }

    /// Group by name; empty when absent
    #[must_use]
    pub fn name(&self, name: &str) -> &'t str {
        self.captures.name(name).map_or("", |m| m.as_str())
    }

    /// Highest numbered group
    #[must_use]
    pub fn last_group(&self) -> &'t str {
        self.group(self.captures.len() - 1)
    }

    /// The value group declared by the pattern, or the last group
    #[must_use]
    pub fn value(&self) -> &'t str {
        match self.pattern.capture {
            Capture::Value { group } | Capture::Address { group } => self.group(group),
            _ => self.last_group(),
        }
    }

    /// Display name and address according to the declared roles
    #[must_use]
    pub fn name_and_address(&self) -> (&'t str, &'t str) {
        match self.pattern.capture {
            Capture::NameAddress { name, address } => (self.group(name), self.group(address)),
            Capture::Combined => (self.name("from_name"), self.name("from_address")),
            Capture::Address { group } | Capture::Value { group } => ("", self.group(group)),
            Capture::None => ("", self.last_group()),
        }
    }
}

/// A named, priority ordered list of patterns
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    name: &'static str,
    patterns: Vec<Pattern>,
}

impl PatternTable {
    pub fn compile(name: &'static str, defs: &[PatternDef]) -> Result<Self> {
        let patterns = defs
            .iter()
            .enumerate()
            .map(|(index, def)| {
                Pattern::compile(def).map_err(|source| ConfigError::Pattern {
                    table: name,
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { name, patterns })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Best match of any pattern, see [`find_first`]
    #[must_use]
    pub fn find<'t>(&self, text: &'t str, prefer_earliest: bool) -> Option<Match<'t, '_>> {
        find_first(&self.patterns, text, prefer_earliest)
    }

    /// Segments for the best delimiter, see [`split_first`]
    #[must_use]
    pub fn split<'t>(&self, text: &'t str, prefer_earliest: bool) -> Vec<&'t str> {
        split_first(&self.patterns, text, prefer_earliest)
    }

    /// Remove the first line matched by the first pattern that matches anything.
    ///
    /// Returns `text` unchanged when no pattern shortens it.
    #[must_use]
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.patterns
            .iter()
            .map(|pattern| pattern.remove_first(text))
            .find(|stripped| stripped.len() < text.len())
            .unwrap_or(Cow::Borrowed(text))
    }
}

impl<'a> IntoIterator for &'a PatternTable {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Find the best match among `patterns`.
///
/// Without `prefer_earliest` the first pattern in order that matches wins.
/// With it every pattern is tried and the match starting first in the text
/// wins, earlier patterns winning ties.
pub fn find_first<'t, 'p>(
    patterns: impl IntoIterator<Item = &'p Pattern>,
    text: &'t str,
    prefer_earliest: bool,
) -> Option<Match<'t, 'p>> {
    let mut best: Option<Match<'t, 'p>> = None;

    for pattern in patterns {
        let Some(candidate) = pattern.find(text) else {
            continue;
        };

        if !prefer_earliest {
            return Some(candidate);
        }

        if best
            .as_ref()
            .is_none_or(|current| candidate.start() < current.start())
        {
            best = Some(candidate);
        }
    }

    best
}

/// Split `text` with the best delimiter among `patterns`.
///
/// A pattern is a candidate when it yields more than one segment. Without
/// `prefer_earliest` the first candidate in order wins, with it the
/// candidate whose first match starts earliest. No candidate yields an
/// empty vector.
pub fn split_first<'t, 'p>(
    patterns: impl IntoIterator<Item = &'p Pattern>,
    text: &'t str,
    prefer_earliest: bool,
) -> Vec<&'t str> {
    let mut best: Option<Vec<&'t str>> = None;

    for pattern in patterns {
        let candidate = pattern.split(text);

        if candidate.len() < 2 {
            continue;
        }

        if !prefer_earliest {
            return candidate;
        }

        // The leading segment is the text before the first match
        if best
            .as_ref()
            .is_none_or(|current| candidate[0].len() < current[0].len())
        {
            best = Some(candidate);
        }
    }

    best.unwrap_or_default()
}

/// Split `text` at every non-overlapping match of `regex`.
///
/// For each match, the text since the previous match is emitted, followed by
/// every participating group (the whole match first). A zero-length group
/// spanning exactly the same range as the group before it is skipped. A match
/// at offset 0 is preceded by an empty segment, so the segment before the
/// delimiter always exists. Text after the last match is the final segment.
pub fn split_with<'t>(regex: &Regex, text: &'t str) -> Vec<&'t str> {
    let mut segments = Vec::new();
    let mut previous_end = 0;
    let mut matched = false;

    for captures in regex.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        if !matched && whole.start() == 0 {
            segments.push("");
        }
        matched = true;

        if previous_end < whole.start() {
            segments.push(&text[previous_end..whole.start()]);
        }

        let mut last_span = None;
        for group in captures.iter().flatten() {
            let span = group.range();
            if group.is_empty() && last_span.as_ref() == Some(&span) {
                continue;
            }
            segments.push(group.as_str());
            last_span = Some(span);
        }

        previous_end = whole.end();
    }

    if !matched {
        return vec![text];
    }

    if previous_end < text.len() {
        segments.push(&text[previous_end..]);
    }

    segments
}

/// Merge split segments back into one string.
///
/// The `always` segments come first (indices past the end are ignored). When
/// there are more than `min` segments, every segment from `min` on is
/// appended unless `exclude` rejects its index.
#[must_use]
pub fn reconcile(
    segments: &[&str],
    min: usize,
    always: &[usize],
    exclude: Option<fn(usize) -> bool>,
) -> String {
    let mut merged: String = always
        .iter()
        .filter_map(|&index| segments.get(index).copied())
        .collect();

    if segments.len() > min {
        for (index, segment) in segments.iter().enumerate().skip(min) {
            if exclude.is_some_and(|excluded| excluded(index)) {
                continue;
            }
            merged.push_str(segment);
        }
    }

    merged
}

/// Short one-line rendering of segments for trace output
pub(crate) fn summarize(segments: &[&str]) -> String {
    let mut out = String::new();

    for (index, segment) in segments.iter().enumerate() {
        let head: String = segment.chars().take(10).collect();
        let _ = write!(out, " {index}. {}", head.replace('\n', "NL"));
    }

    out
}
