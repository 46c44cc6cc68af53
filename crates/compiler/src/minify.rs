use std::fmt::Debug;

/// Produces the compressed form of an assembled stylesheet
///
/// Only consulted when [`crate::OutputStyle::Compressed`] is requested. The
/// comment banner is never passed through a minifier.
pub trait Minifier: Debug {
    fn minify(&self, css: &str) -> String;
}

/// Collapses whitespace and drops the separators CSS does not need
///
/// This is a character-level pass over the assembler's output, not a general
/// purpose minifier: whitespace next to `{`, `}`, `;` and `,` is removed, any
/// other run of whitespace becomes a single space, and the last `;` of a block
/// is dropped. Quoted strings are copied through untouched.
#[derive(Debug)]
pub struct StdMinifier;

impl Minifier for StdMinifier {
    fn minify(&self, css: &str) -> String {
        let mut out = String::with_capacity(css.len());
        let mut chars = css.chars();
        let mut quote: Option<char> = None;
        let mut pending_space = false;

        while let Some(c) = chars.next() {
            if let Some(q) = quote {
                out.push(c);
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                } else if c == q {
                    quote = None;
                }
                continue;
            }

            if c.is_whitespace() {
                pending_space = true;
                continue;
            }

            if pending_space {
                pending_space = false;
                if !out.is_empty() && !is_separator(c) && !out.ends_with(is_separator) {
                    out.push(' ');
                }
            }

            match c {
                '"' | '\'' => {
                    quote = Some(c);
                    out.push(c);
                }
                '}' => {
                    if out.ends_with(';') {
                        out.pop();
                    }
                    out.push('}');
                }
                _ => out.push(c),
            }
        }

        out
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '{' | '}' | ';' | ',')
}
