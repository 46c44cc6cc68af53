use crate::{
    rules::{MediaKey, Rule, RuleStore, Stylesheet},
    Options,
};

/// A rewritten stylesheet, ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    /// The name the stylesheet was scanned under
    pub filename: String,
    /// `filename` with the configured suffix inserted before its extension
    pub new_filename: String,
    /// The rewritten stylesheet
    pub source: String,
}

pub(crate) fn serialize_store(store: &RuleStore, options: &Options) -> Vec<OutputRecord> {
    store
        .iter()
        .map(|(filename, sheet)| OutputRecord {
            filename: filename.clone(),
            new_filename: output_filename(filename, options.suffix.as_deref()),
            source: serialize_stylesheet(sheet, options),
        })
        .collect()
}

pub(crate) fn serialize_stylesheet(sheet: &Stylesheet, options: &Options) -> String {
    let mut serializer = Serializer::new(options);

    serializer.visit_stylesheet(sheet);

    serializer.finish()
}

/// Inserts `suffix` before the extension of `filename`
///
/// Names without an extension get the suffix appended.
pub(crate) fn output_filename(filename: &str, suffix: Option<&str>) -> String {
    let suffix = match suffix {
        Some(suffix) if !suffix.is_empty() => suffix,
        _ => return filename.to_owned(),
    };

    match filename.rfind('.') {
        Some(dot) => format!("{}{}{}", &filename[..dot], suffix, &filename[dot..]),
        None => format!("{}{}", filename, suffix),
    }
}

pub(crate) struct Serializer<'a> {
    indentation: usize,
    indent_width: usize,
    options: &'a Options<'a>,
    buffer: String,
}

impl<'a> Serializer<'a> {
    pub fn new(options: &'a Options<'a>) -> Self {
        Self {
            indentation: 0,
            indent_width: 4,
            options,
            buffer: String::new(),
        }
    }

    pub fn visit_stylesheet(&mut self, sheet: &Stylesheet) {
        for (key, rules) in sheet.sections() {
            if rules.is_empty() {
                continue;
            }

            match key {
                MediaKey::NoMedia => {
                    for (selector, rule) in rules {
                        self.write_rule(selector, rule);
                    }
                }
                MediaKey::Media(..) => {
                    self.buffer.push_str(&key.to_string());
                    self.buffer.push_str(" {\n");

                    self.indentation += self.indent_width;
                    for (selector, rule) in rules {
                        self.write_rule(selector, rule);
                    }
                    self.indentation -= self.indent_width;

                    self.buffer.push_str("}\n\n");
                }
            }
        }
    }

    fn write_rule(&mut self, selector: &str, rule: &Rule) {
        self.write_indentation();
        self.buffer.push_str(selector);
        self.buffer.push_str(" {\n");

        self.indentation += self.indent_width;
        self.write_indentation();
        self.write_declarations(rule.declarations());
        self.buffer.push('\n');
        self.indentation -= self.indent_width;

        self.write_indentation();
        self.buffer.push_str("}\n");
    }

    /// Joins the declaration blocks of a rule with `;`
    ///
    /// A block may contain the `{` of a nested at-rule whose closing brace was
    /// taken as the end of the rule; it is closed again here.
    fn write_declarations(&mut self, declarations: &[String]) {
        let joined = declarations.join(";");
        let joined = joined.trim();

        self.buffer.push_str(joined);
        if !joined.ends_with(';') {
            self.buffer.push(';');
        }

        let opened = joined.matches('{').count();
        let closed = joined.matches('}').count();
        for _ in closed..opened {
            self.buffer.push('}');
        }
    }

    fn write_indentation(&mut self) {
        self.buffer.reserve(self.indentation);
        for _ in 0..self.indentation {
            self.buffer.push(' ');
        }
    }

    pub fn finish(self) -> String {
        if self.options.is_compressed() {
            return self.options.minifier.minify(&self.buffer);
        }

        match &self.options.comment {
            Some(comment) => {
                let mut source = String::with_capacity(comment.len() + self.buffer.len());
                source.push_str(comment);
                source.push_str(&self.buffer);
                source
            }
            None => self.buffer,
        }
    }
}
