use crate::{Fs, Logger, Minifier, StdFs, StdLogger, StdMinifier};

/// Configuration for a purge run
///
/// The simplest usage is `pare::Options::default()`; however, a builder pattern
/// is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) minifier: &'a dyn Minifier,
    pub(crate) style: OutputStyle,
    pub(crate) whitelist: Vec<String>,
    pub(crate) suffix: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) quiet: bool,
    pub(crate) verbose: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            minifier: &StdMinifier,
            style: OutputStyle::Expanded,
            whitelist: Vec::new(),
            suffix: None,
            comment: None,
            quiet: false,
            verbose: false,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to control the file system that `pare` reads
    /// sources from and writes results to.
    ///
    /// By default, it uses [`StdFs`], which is backed by [`std::fs`].
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// The minifier used for [`OutputStyle::Compressed`] output
    ///
    /// By default, [`StdMinifier`] is used.
    #[must_use]
    #[inline]
    pub fn minifier(mut self, minifier: &'a dyn Minifier) -> Self {
        self.minifier = minifier;
        self
    }

    /// `pare` currently offers 2 different output styles
    ///
    ///  - [`OutputStyle::Expanded`] writes each selector and declaration block on
    ///    its own line, prefixed by the comment banner if one is set.
    ///  - [`OutputStyle::Compressed`] passes the result through the configured
    ///    [`Minifier`] and omits the banner.
    ///
    /// By default, output is expanded.
    #[must_use]
    #[inline]
    pub const fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Treat a selector as used even if no HTML references it.
    ///
    /// Entries are compared verbatim against the selectors found in stylesheets
    /// (after pseudo-classes are removed), so classes must include their leading
    /// `.` and ids their leading `#`.
    ///
    /// This method will append a single selector to the list.
    #[must_use]
    #[inline]
    pub fn whitelist_selector<S: Into<String>>(mut self, selector: S) -> Self {
        self.whitelist.push(selector.into());
        self
    }

    /// Append multiple whitelisted selectors
    ///
    /// Note that this method does *not* remove existing entries
    ///
    /// See [`Options::whitelist_selector`](Options::whitelist_selector) for more
    /// information about the whitelist
    #[must_use]
    #[inline]
    pub fn whitelist_selectors<S: AsRef<str>>(mut self, selectors: &[S]) -> Self {
        for selector in selectors {
            self.whitelist.push(selector.as_ref().to_owned());
        }

        self
    }

    /// Text inserted into output filenames immediately before the extension.
    ///
    /// With a suffix of `.min`, `dist/app.css` is written to `dist/app.min.css`.
    /// Without a suffix the original file is overwritten.
    #[must_use]
    #[inline]
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// A banner prepended verbatim to every expanded stylesheet, usually a
    /// `/* ... */` comment followed by a newline.
    #[must_use]
    #[inline]
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// This flag tells `pare` not to emit any warnings or debug messages.
    ///
    /// Setting this option to `true` will stop all logs from reaching the [`crate::Logger`].
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Report every removed selector list to the logger's `debug` channel.
    #[must_use]
    #[inline]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub(crate) fn is_compressed(&self) -> bool {
        matches!(self.style, OutputStyle::Compressed)
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// Each rule is written over three lines, rules inside `@media` blocks are
    /// indented by four spaces.
    ///
    /// This is the default output.
    Expanded,

    /// The expanded output passed through the configured [`Minifier`].
    Compressed,
}
