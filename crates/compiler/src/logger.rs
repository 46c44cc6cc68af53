use codemap::SpanLoc;
use std::fmt::Debug;

/// Sink for log messages
///
/// Every message points at the stylesheet location it concerns. Warnings are
/// emitted for malformed CSS that was skipped; debug messages report each
/// selector list removed by the filter and are only produced when
/// [`crate::Options::verbose`] is set.
pub trait Logger: Debug {
    /// Logs a diagnostic about a removed selector list
    fn debug(&self, location: SpanLoc, message: &str);

    /// Logs a problem with the input that was recovered from
    fn warning(&self, location: SpanLoc, message: &str);
}

/// Logs events to standard error
///
/// Warnings quote the offending stylesheet line so malformed input can be found
/// without opening the file. Debug lines are one per removed selector list,
/// prefixed with its location.
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn debug(&self, location: SpanLoc, message: &str) {
        eprintln!("{}", debug_line(&location, message));
    }

    #[inline]
    fn warning(&self, location: SpanLoc, message: &str) {
        eprintln!("{}", warning_report(&location, message));
    }
}

fn debug_line(location: &SpanLoc, message: &str) -> String {
    format!(
        "{}:{}:{}: {}",
        location.file.name(),
        location.begin.line + 1,
        location.begin.column + 1,
        message
    )
}

fn warning_report(location: &SpanLoc, message: &str) -> String {
    format!(
        "warning: {}\n  --> {}:{}:{}\n   | {}",
        message,
        location.file.name(),
        location.begin.line + 1,
        location.begin.column + 1,
        location.file.source_line(location.begin.line).trim_end()
    )
}

/// Discards all log events
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn debug(&self, _location: SpanLoc, _message: &str) {}

    #[inline]
    fn warning(&self, _location: SpanLoc, _message: &str) {}
}

#[cfg(test)]
mod test {
    use codemap::CodeMap;

    use super::{debug_line, warning_report};

    #[test]
    fn warning_quotes_the_line() {
        let mut map = CodeMap::new();
        let file = map.add_file("site.css".to_owned(), "a{x:1}\n  @media print\n".to_owned());
        let location = map.look_up_span(file.span.subspan(9, 15));

        assert_eq!(
            warning_report(&location, "Expected \"{\" after @media."),
            "warning: Expected \"{\" after @media.\n  --> site.css:2:3\n   |   @media print"
        );
    }

    #[test]
    fn debug_line_has_location() {
        let mut map = CodeMap::new();
        let file = map.add_file("site.css".to_owned(), ".a{x:1} .b{x:2}".to_owned());
        let location = map.look_up_span(file.span.subspan(8, 10));

        assert_eq!(
            debug_line(&location, "Removing unused selector \".b\"."),
            "site.css:1:9: Removing unused selector \".b\"."
        );
    }
}
