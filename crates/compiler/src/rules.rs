//! The segmented form of every stylesheet in a run
//!
//! Stylesheets are stored as file → media section → selector list → declaration
//! blocks. Every level is an [`IndexMap`], so entries keep the position of their
//! first insertion: a selector list seen twice in the same section stays where
//! it was first written and accumulates both declaration blocks.
use std::fmt::{self, Display};

use codemap::Span;
use indexmap::IndexMap;

/// The `@media` block a rule was found in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKey {
    /// Rules outside of any `@media` block
    NoMedia,
    /// Rules inside `@media <query> { ... }`. The query is trimmed and its
    /// whitespace collapsed.
    Media(String),
}

impl Display for MediaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKey::NoMedia => Ok(()),
            MediaKey::Media(query) => write!(f, "@media {}", query),
        }
    }
}

/// The declaration blocks written for one selector list
#[derive(Debug, Clone)]
pub struct Rule {
    declarations: Vec<String>,
    span: Span,
}

impl Rule {
    /// Every declaration block, whitespace collapsed, in source order
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    /// Location of the first occurrence of the selector list
    pub(crate) fn span(&self) -> Span {
        self.span
    }
}

/// Selector lists of one media section, keyed by their normalized text
pub type RuleSet = IndexMap<String, Rule>;

/// All rules of a single stylesheet, grouped by media section
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    sections: IndexMap<MediaKey, RuleSet>,
}

impl Stylesheet {
    pub fn sections(&self) -> impl Iterator<Item = (&MediaKey, &RuleSet)> {
        self.sections.iter()
    }

    pub fn section(&self, key: &MediaKey) -> Option<&RuleSet> {
        self.sections.get(key)
    }

    /// Whether no section holds a single rule
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(IndexMap::is_empty)
    }

    pub(crate) fn insert(
        &mut self,
        key: &MediaKey,
        selector: String,
        declarations: String,
        span: Span,
    ) {
        if !self.sections.contains_key(key) {
            self.sections.insert(key.clone(), RuleSet::new());
        }

        self.sections[key]
            .entry(selector)
            .or_insert_with(|| Rule {
                declarations: Vec::new(),
                span,
            })
            .declarations
            .push(declarations);
    }

    /// Removes every rule for which `keep` returns `false`. Sections are kept
    /// even when they end up empty.
    pub(crate) fn retain_rules(&mut self, mut keep: impl FnMut(&str, &Rule) -> bool) {
        for rules in self.sections.values_mut() {
            rules.retain(|selector, rule| keep(selector, rule));
        }
    }
}

/// Segmented stylesheets keyed by file name, in the order they were scanned
#[derive(Debug, Default)]
pub struct RuleStore {
    files: IndexMap<String, Stylesheet>,
}

impl RuleStore {
    pub fn get(&self, name: &str) -> Option<&Stylesheet> {
        self.files.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Stylesheet)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn stylesheet_mut(&mut self, name: &str) -> &mut Stylesheet {
        if !self.files.contains_key(name) {
            self.files.insert(name.to_owned(), Stylesheet::default());
        }

        &mut self.files[name]
    }

    pub(crate) fn stylesheets_mut(&mut self) -> impl Iterator<Item = &mut Stylesheet> {
        self.files.values_mut()
    }
}
