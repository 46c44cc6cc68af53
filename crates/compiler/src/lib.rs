/*!
This crate removes unused rules from CSS.

Given the HTML of a site and its stylesheets, `pare` collects every tag, class,
id and data attribute the HTML references and rewrites each stylesheet to keep
only the rules whose selectors could match one of them. `@media` grouping and
the order of rules and declarations are preserved.

Matching is intentionally shallow: a selector is kept when it, or the simple
selector after its last combinator, is used. `.nav .active` is kept whenever
`.active` appears anywhere in the HTML.

## Use as library
```
# use pare_compiler as pare;
let css = pare::from_string(
    r#"<div class="foo bar"></div>"#,
    ".foo{color:red} .baz{color:blue}",
    &pare::Options::default(),
);
assert_eq!(css, ".foo {\n    color:red;\n}\n");
```

## Use as binary
```bash
cargo install pare
pare --html index.html --css site.css
```
*/

#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::single_match,
    clippy::new_without_default,
    clippy::single_match_else,
    clippy::multiple_crate_versions,
    clippy::len_without_is_empty,
    unknown_lints,
)]

use std::{fmt, path::Path};

use codemap::CodeMap;
#[cfg(feature = "wasm-exports")]
use wasm_bindgen::prelude::*;

pub use crate::error::{
    PareError as Error, PareResult as Result, PublicPareErrorKind as ErrorKind,
};
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::html::{UsedTokens, WILDCARD};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::minify::{Minifier, StdMinifier};
pub use crate::options::{Options, OutputStyle};
pub use crate::rules::{MediaKey, Rule, RuleSet, RuleStore, Stylesheet};
pub use crate::serializer::OutputRecord;

use crate::{
    filter::{filter_rules, KeepSet},
    lexer::Lexer,
    segment::Segmenter,
    serializer::serialize_store,
};

pub use codemap;

mod error;
mod filter;
mod fs;
mod html;
mod lexer;
mod logger;
mod minify;
mod options;
mod rules;
mod segment;
mod serializer;
mod utils;

/// The state of a single purge run
///
/// A `Purger` owns everything a run accumulates: the selectors found in HTML,
/// the segmented stylesheets and the source map used for diagnostics. Feed it
/// HTML and CSS in any order, then [`filter`](Purger::filter) and
/// [`finish`](Purger::finish).
///
/// ```
/// # use pare_compiler as pare;
/// let options = pare::Options::default();
/// let mut purger = pare::Purger::new(&options);
///
/// purger.scan_html(r#"<p class="lead">"#);
/// purger.scan_css("site.css", "p{margin:0} .lead{font-size:2em} .hero{height:9em}");
/// purger.filter();
///
/// let records = purger.finish();
/// assert_eq!(records[0].source, "p {\n    margin:0;\n}\n.lead {\n    font-size:2em;\n}\n");
/// ```
pub struct Purger<'a> {
    options: &'a Options<'a>,
    used: UsedTokens,
    store: RuleStore,
    map: CodeMap,
    inline_count: usize,
}

impl<'a> Purger<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            options,
            used: UsedTokens::new(),
            store: RuleStore::default(),
            map: CodeMap::new(),
            inline_count: 0,
        }
    }

    /// Records the selectors referenced by one HTML document
    pub fn scan_html(&mut self, html: &str) {
        html::scan_html(html, &mut self.used);
    }

    /// Segments a stylesheet and stores its rules under `name`
    ///
    /// Scanning the same name twice appends to the rules already stored.
    pub fn scan_css(&mut self, name: &str, css: &str) {
        let file = self.map.add_file(name.to_owned(), css.to_owned());
        let lexer = Lexer::new_from_file(&file);
        let sheet = self.store.stylesheet_mut(name);

        Segmenter::new(&lexer, sheet, &self.map, self.options).segment();
    }

    /// Reads an HTML document through [`Options::fs`] and scans it
    pub fn scan_html_path(&mut self, path: &Path) -> Result<()> {
        let document = read_to_string(path, self.options)?;
        self.scan_html(&document);
        Ok(())
    }

    /// Reads a stylesheet through [`Options::fs`] and scans it under its path
    pub fn scan_css_path(&mut self, path: &Path) -> Result<()> {
        let stylesheet = read_to_string(path, self.options)?;
        self.scan_css(&path.to_string_lossy(), &stylesheet);
        Ok(())
    }

    /// Scans a stylesheet that has no file of its own, naming it `inline_<n>`
    ///
    /// Returns the name the stylesheet was stored under.
    pub fn add_inline_css(&mut self, css: &str) -> String {
        let name = format!("inline_{}", self.inline_count);
        self.inline_count += 1;
        self.scan_css(&name, css);
        name
    }

    /// Removes every rule not matched by the scanned HTML or the whitelist
    pub fn filter(&mut self) {
        let keep = KeepSet::new(&self.used, &self.options.whitelist);
        filter_rules(&mut self.store, &keep, &self.map, self.options);
    }

    pub fn used_tokens(&self) -> &UsedTokens {
        &self.used
    }

    pub fn rules(&self) -> &RuleStore {
        &self.store
    }

    /// Serializes every scanned stylesheet, in the order they were first scanned
    pub fn finish(self) -> Vec<OutputRecord> {
        serialize_store(&self.store, self.options)
    }
}

impl fmt::Debug for Purger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Purger")
            .field("used", &self.used)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

fn read_to_string(path: &Path, options: &Options) -> Result<String> {
    let bytes = options.fs.read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| Error::utf8(path, &e))
}

/// Purge in-memory stylesheets against in-memory HTML
///
/// `css` pairs a file name with the stylesheet's contents. The name is only
/// used to derive [`OutputRecord::new_filename`] and in diagnostics.
///
/// ```
/// # use pare_compiler as pare;
/// let records = pare::purge(
///     &["<main><h1>hi</h1></main>"],
///     &[("a.css", "h1{margin:0} h2{margin:0}")],
///     &pare::Options::default().suffix(".min"),
/// );
/// assert_eq!(records[0].new_filename, "a.min.css");
/// assert_eq!(records[0].source, "h1 {\n    margin:0;\n}\n");
/// ```
pub fn purge<H, N, C>(html: &[H], css: &[(N, C)], options: &Options) -> Vec<OutputRecord>
where
    H: AsRef<str>,
    N: AsRef<str>,
    C: AsRef<str>,
{
    let mut purger = Purger::new(options);

    for document in html {
        purger.scan_html(document.as_ref());
    }

    for (name, stylesheet) in css {
        purger.scan_css(name.as_ref(), stylesheet.as_ref());
    }

    purger.filter();
    purger.finish()
}

/// Purge a single stylesheet against a single HTML document
///
/// ```
/// # use pare_compiler as pare;
/// let css = pare::from_string("<a>", "a{color:red} b{color:blue}", &pare::Options::default());
/// assert_eq!(css, "a {\n    color:red;\n}\n");
/// ```
pub fn from_string<H: AsRef<str>, C: AsRef<str>>(html: H, css: C, options: &Options) -> String {
    purge(&[html.as_ref()], &[("stdin.css", css.as_ref())], options)
        .pop()
        .map(|record| record.source)
        .unwrap_or_default()
}

/// Purge stylesheets read from disk against HTML read from disk
///
/// All files are read through [`Options::fs`]. Nothing is written; see
/// [`write_records`].
///
/// n.b. `pare` does not currently support files or paths that are not valid UTF-8
pub fn from_paths<H, C>(html: &[H], css: &[C], options: &Options) -> Result<Vec<OutputRecord>>
where
    H: AsRef<Path>,
    C: AsRef<Path>,
{
    let mut purger = Purger::new(options);

    for path in html {
        purger.scan_html_path(path.as_ref())?;
    }

    for path in css {
        purger.scan_css_path(path.as_ref())?;
    }

    purger.filter();
    Ok(purger.finish())
}

/// Purge one stylesheet on disk against one HTML file on disk
///
/// ```no_run
/// # use pare_compiler as pare;
/// fn main() -> Result<(), Box<pare::Error>> {
///     let css = pare::from_path("index.html", "style.css", &pare::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_path<H: AsRef<Path>, C: AsRef<Path>>(
    html: H,
    css: C,
    options: &Options,
) -> Result<String> {
    Ok(from_paths(&[html], &[css], options)?
        .pop()
        .map(|record| record.source)
        .unwrap_or_default())
}

/// Writes each record's source to its [`OutputRecord::new_filename`] through
/// [`Options::fs`]
pub fn write_records(records: &[OutputRecord], options: &Options) -> Result<()> {
    for record in records {
        let path = Path::new(&record.new_filename);
        options
            .fs
            .write(path, record.source.as_bytes())
            .map_err(|e| Error::io(path, e))?;
    }

    Ok(())
}

#[cfg(feature = "wasm-exports")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "wasm-exports")))]
#[wasm_bindgen(js_name = purge)]
pub fn purge_js(html: String, css: String) -> String {
    from_string(html, css, &Options::default().fs(&NullFs))
}
