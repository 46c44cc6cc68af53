//! Collects the selectors an HTML document could match
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// The wildcard selector, which every document uses
pub const WILDCARD: &str = "*";

/// Selector fragments referenced by the scanned HTML, in first-seen order
///
/// Tags are stored as-is, classes as `.name`, ids as `#name` and data
/// attributes as `[data-name]` or `[data-name="value"]`. The set always
/// contains [`WILDCARD`].
#[derive(Debug, Clone)]
pub struct UsedTokens {
    tokens: IndexSet<String>,
}

impl Default for UsedTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl UsedTokens {
    pub fn new() -> Self {
        let mut tokens = IndexSet::new();
        tokens.insert(WILDCARD.to_owned());
        Self { tokens }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`, the wildcard is never removed
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn insert(&mut self, token: String) -> bool {
        self.tokens.insert(token)
    }
}

struct ExtractionRule {
    regex: Regex,
    prefix: &'static str,
    suffix: &'static str,
}

impl ExtractionRule {
    fn new(name: &'static str, regex: &str, prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            regex: Regex::new(regex).unwrap_or_else(|e| panic!("invalid {} pattern: {}", name, e)),
            prefix,
            suffix,
        }
    }
}

static EXTRACTION_RULES: Lazy<[ExtractionRule; 5]> = Lazy::new(|| {
    [
        ExtractionRule::new("HTML tags", r"<(\w+)", "", ""),
        ExtractionRule::new("CSS classes", r#"class\s*=\s*"([^"]*)""#, ".", ""),
        ExtractionRule::new("IDs", r#"id\s*=\s*"([[:alnum:]\s_-]+)""#, "#", ""),
        ExtractionRule::new(
            "data attributes without values",
            r"\s(data-[[:alnum:]_-]+)",
            "[",
            "]",
        ),
        ExtractionRule::new(
            "data attributes with values",
            r#"\s(data-[[:alnum:]_-]+="[^"]*")"#,
            "[",
            "]",
        ),
    ]
});

/// A single-quoted string literal inside an attribute value
static QUOTED_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"'(.*?)'").unwrap());

/// Adds every selector fragment `html` references to `used`
pub(crate) fn scan_html(html: &str, used: &mut UsedTokens) {
    for rule in EXTRACTION_RULES.iter() {
        let matches: IndexSet<&str> = rule
            .regex
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        for found in matches {
            let found = if found.contains('\'') {
                template_literals(found)
            } else {
                found.to_owned()
            };

            for fragment in found.split_whitespace() {
                used.insert(format!("{}{}{}", rule.prefix, fragment, rule.suffix));
            }
        }
    }
}

/// Approximates the classes a templated attribute value can produce
///
/// `active ? 'btn-on' : 'btn-off'` yields `btn-on btn-off`. Single-character
/// literals are ignored.
fn template_literals(value: &str) -> String {
    QUOTED_LITERAL
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|literal| literal.len() > 1)
        .collect::<Vec<&str>>()
        .join(" ")
}
