use std::{iter::Peekable, ops::Range, str::Chars, sync::Arc};

use codemap::{File, Span};

const FORM_FEED: char = '\x0C';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: char,
    pos: u32,
}

/// The characters of a stylesheet with `/* ... */` comments removed
///
/// Every token remembers its byte offset in the original file, so spans built
/// from token ranges still point at the source the user wrote.
#[derive(Debug, Clone)]
pub(crate) struct Lexer {
    buf: Vec<Token>,
    entire_span: Span,
    /// Offset of a `/*` that is never closed. It and everything after it is
    /// kept as ordinary text.
    unterminated_comment: Option<u32>,
}

impl Lexer {
    pub fn tokens(&self) -> &[Token] {
        &self.buf
    }

    pub fn unterminated_comment(&self) -> Option<Span> {
        self.unterminated_comment
            .map(|pos| self.entire_span.subspan(pos as u64, pos as u64 + 2))
    }

    pub fn raw_text(&self, range: Range<usize>) -> String {
        self.buf[range].iter().map(|t| t.kind).collect()
    }

    /// Gets the span of the character at the given index. If the index is out of
    /// bounds, it returns the span of the last character. If the input is empty,
    /// it returns an empty span
    fn span_at_index(&self, idx: usize) -> Span {
        let (start, len) = match self.buf.get(idx) {
            Some(tok) => (tok.pos, tok.kind.len_utf8()),
            None => match self.buf.last() {
                Some(tok) => (tok.pos, tok.kind.len_utf8()),
                None => (0, 0),
            },
        };

        self.entire_span
            .subspan(start as u64, start as u64 + len as u64)
    }

    pub fn span_of(&self, range: Range<usize>) -> Span {
        if range.is_empty() {
            return self.span_at_index(range.start);
        }

        let start = self.span_at_index(range.start);
        let end = self.span_at_index(range.end - 1);

        start.merge(end)
    }

    pub fn find_char(&self, range: Range<usize>, c: char) -> Option<usize> {
        let start = range.start;
        self.buf[range]
            .iter()
            .position(|t| t.kind == c)
            .map(|idx| start + idx)
    }

    pub fn rfind_char(&self, range: Range<usize>, c: char) -> Option<usize> {
        let start = range.start;
        self.buf[range]
            .iter()
            .rposition(|t| t.kind == c)
            .map(|idx| start + idx)
    }

    pub fn trim(&self, mut range: Range<usize>) -> Range<usize> {
        while range.start < range.end && self.buf[range.start].kind.is_whitespace() {
            range.start += 1;
        }
        while range.end > range.start && self.buf[range.end - 1].kind.is_whitespace() {
            range.end -= 1;
        }
        range
    }

    /// Splits the whole input on every literal occurrence of `needle`
    ///
    /// The first range is the text before the first occurrence, and there is
    /// always one more range than there are occurrences.
    pub fn split_on(&self, needle: &str) -> Vec<Range<usize>> {
        let needle: Vec<char> = needle.chars().collect();
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut idx = 0;

        while idx + needle.len() <= self.buf.len() {
            let is_match = self.buf[idx..idx + needle.len()]
                .iter()
                .map(|t| t.kind)
                .eq(needle.iter().copied());

            if is_match {
                ranges.push(start..idx);
                idx += needle.len();
                start = idx;
            } else {
                idx += 1;
            }
        }

        ranges.push(start..self.buf.len());
        ranges
    }
}

/// Lex a string into a series of tokens
pub(crate) struct TokenLexer<'a> {
    buf: Peekable<Chars<'a>>,
    cursor: u32,
}

impl<'a> TokenLexer<'a> {
    pub fn new(buf: Peekable<Chars<'a>>) -> TokenLexer<'a> {
        Self { buf, cursor: 0 }
    }
}

impl<'a> Iterator for TokenLexer<'a> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        let kind = match self.buf.next()? {
            FORM_FEED => '\n',
            '\r' => {
                if self.buf.peek() == Some(&'\n') {
                    self.cursor += 1;
                    self.buf.next();
                }
                '\n'
            }
            c => c,
        };
        let len = kind.len_utf8() as u32;
        let pos = self.cursor;
        self.cursor += len;
        Some(Token { pos, kind })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.buf.size_hint()
    }
}

impl Lexer {
    pub fn new_from_file(file: &Arc<File>) -> Self {
        let raw: Vec<Token> = TokenLexer::new(file.source().chars().peekable()).collect();
        let mut buf = Vec::with_capacity(raw.len());
        let mut unterminated_comment = None;
        let mut idx = 0;

        while idx < raw.len() {
            let opens_comment =
                raw[idx].kind == '/' && matches!(raw.get(idx + 1), Some(t) if t.kind == '*');

            if opens_comment {
                match comment_end(&raw, idx + 2) {
                    Some(end) => {
                        idx = end;
                        continue;
                    }
                    None => {
                        unterminated_comment = Some(raw[idx].pos);
                        buf.extend_from_slice(&raw[idx..]);
                        break;
                    }
                }
            }

            buf.push(raw[idx]);
            idx += 1;
        }

        Lexer {
            buf,
            entire_span: file.span,
            unterminated_comment,
        }
    }
}

/// Index just past the `*/` that closes a comment whose body starts at `from`
fn comment_end(toks: &[Token], from: usize) -> Option<usize> {
    toks[from..]
        .windows(2)
        .position(|pair| pair[0].kind == '*' && pair[1].kind == '/')
        .map(|idx| from + idx + 2)
}
