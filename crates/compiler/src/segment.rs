use std::ops::Range;

use codemap::{CodeMap, Span};

use crate::{
    lexer::Lexer,
    rules::{MediaKey, Stylesheet},
    utils::collapse_whitespace,
    Options,
};

/// Splits one stylesheet into media sections and rules
///
/// This is deliberately not a CSS parser. `@media` blocks are located by
/// splitting on the literal text `@media` and balancing braces, and rules are
/// recognized as a run of selector characters directly followed by `{`, then
/// everything up to the next `}`. Anything that does not fit that shape is
/// skipped without an error.
pub(crate) struct Segmenter<'a> {
    toks: &'a Lexer,
    sheet: &'a mut Stylesheet,
    map: &'a CodeMap,
    options: &'a Options<'a>,
}

impl<'a> Segmenter<'a> {
    pub fn new(
        toks: &'a Lexer,
        sheet: &'a mut Stylesheet,
        map: &'a CodeMap,
        options: &'a Options<'a>,
    ) -> Self {
        Self {
            toks,
            sheet,
            map,
            options,
        }
    }

    pub fn segment(mut self) {
        if let Some(span) = self.toks.unterminated_comment() {
            self.warn(span, "Unterminated comment, the rest of the file is not treated as one.");
        }

        for (idx, range) in self.toks.split_on("@media").into_iter().enumerate() {
            let range = self.toks.trim(range);

            if idx == 0 {
                self.extract_rules(range, &MediaKey::NoMedia);
            } else {
                self.segment_media(range);
            }
        }
    }

    /// Handles the text following one `@media`, up to the next `@media`
    ///
    /// Besides the media block itself this text usually contains the top level
    /// rules that follow the block, which are stored outside of any media
    /// section.
    fn segment_media(&mut self, range: Range<usize>) {
        let open = match self.toks.find_char(range.clone(), '{') {
            Some(open) => open,
            None => {
                self.warn(self.toks.span_of(range), "Expected \"{\" after @media.");
                return;
            }
        };

        let query = collapse_whitespace(&self.toks.raw_text(range.start..open));

        let close = match self.toks.rfind_char(open..range.end, '}') {
            Some(close) => close,
            None => {
                self.warn(self.toks.span_of(open..range.end), "Expected \"}\".");
                return;
            }
        };

        let toks = self.toks.tokens();
        let mut body = None;
        let mut trailing = Vec::new();
        let mut depth = 0_i32;
        let mut block_start = open;

        for idx in open..=close {
            match toks[idx].kind {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;

                    if depth == 0 {
                        let block = block_start..idx + 1;
                        block_start = idx + 1;

                        let first = self.toks.trim(block.clone()).start;
                        if toks[first].kind == '{' {
                            body = Some(block);
                        } else {
                            trailing.push(block);
                        }
                    }
                }
                _ => {}
            }
        }

        if block_start <= close {
            self.warn(
                self.toks.span_of(block_start..close + 1),
                "Unbalanced braces after @media, this text was ignored.",
            );
        }

        if let Some(body) = body {
            self.extract_rules(body, &MediaKey::Media(query));
        }

        for block in trailing {
            self.extract_rules(block, &MediaKey::NoMedia);
        }
    }

    /// Finds every `selector { declarations }` in the range
    ///
    /// The declarations run up to the first `}` and may themselves contain `{`,
    /// which is how nested at-rules end up as a single rule whose selector is
    /// the at-rule prelude.
    fn extract_rules(&mut self, range: Range<usize>, key: &MediaKey) {
        let toks = self.toks.tokens();
        let mut cursor = range.start;

        while let Some(open) = self.toks.find_char(cursor..range.end, '{') {
            let mut start = open;
            while start > cursor && is_selector_char(toks[start - 1].kind) {
                start -= 1;
            }

            if start == open {
                cursor = open + 1;
                continue;
            }

            let mut body_start = open;
            while body_start < range.end && toks[body_start].kind == '{' {
                body_start += 1;
            }

            let close = match self.toks.find_char(body_start..range.end, '}') {
                Some(close) => close,
                None => break,
            };

            if close == body_start {
                // `a{{}`: the last `{` is the declaration text
                if body_start - open > 1 {
                    body_start -= 1;
                } else {
                    cursor = close;
                    continue;
                }
            }

            let selector = collapse_whitespace(&self.toks.raw_text(start..open));
            let declarations = collapse_whitespace(&self.toks.raw_text(body_start..close));

            self.sheet
                .insert(key, selector, declarations, self.toks.span_of(start..open));

            cursor = close + 1;
        }
    }

    fn warn(&self, span: Span, message: &str) {
        if self.options.quiet {
            return;
        }

        self.options
            .logger
            .warning(self.map.look_up_span(span), message);
    }
}

fn is_selector_char(c: char) -> bool {
    !matches!(c, '{' | '}' | ';')
}
