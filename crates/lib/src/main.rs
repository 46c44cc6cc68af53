use std::{
    io::{stdout, Write},
    path::PathBuf,
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, Command, ValueEnum};

use pare::{write_records, Options, OutputRecord, OutputStyle, Purger};

/// HTML inputs longer than this are markup rather than a path
const MAX_PATH_LEN: usize = 200;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Style {
    Expanded,
    Compressed,
}

impl ValueEnum for Style {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Expanded, Self::Compressed]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Expanded => PossibleValue::new("expanded"),
            Self::Compressed => PossibleValue::new("compressed"),
        })
    }
}

fn cli() -> Command {
    Command::new("pare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove CSS rules that no HTML document uses")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true)
        )
        .arg(
            Arg::new("HTML")
                .short('H')
                .long("html")
                .help("HTML file, glob pattern or literal markup to scan. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
                .required(true)
        )
        .arg(
            Arg::new("CSS")
                .short('C')
                .long("css")
                .help("Stylesheet or glob pattern to rewrite. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
                .required_unless_present("INLINE_CSS")
        )
        .arg(
            Arg::new("INLINE_CSS")
                .long("inline-css")
                .help("A stylesheet given as text, written out as inline_<n>. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("WHITELIST")
                .short('w')
                .long("whitelist")
                .help("A selector to keep even if no HTML uses it, e.g. `.is-open`. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("SUFFIX")
                .long("suffix")
                .help("Inserted before the extension of each output file. Pass an empty string to overwrite the input.")
                .default_value(".pared")
                .num_args(1)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("COMMENT")
                .long("comment")
                .help("Text written at the top of every expanded stylesheet")
                .num_args(1)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("STYLE")
                .short('s')
                .long("style")
                .help("Minified or expanded output")
                .default_value("expanded")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Style)),
        )
        .arg(
            Arg::new("STDOUT")
                .action(ArgAction::SetTrue)
                .long("stdout")
                .help("Print the rewritten stylesheets instead of writing them to disk"),
        )
        .arg(
            Arg::new("VERBOSE")
                .action(ArgAction::SetTrue)
                .long("verbose")
                .help("Report every removed selector"),
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
}

/// Expands a glob pattern into the files it matches
///
/// Directories are skipped. A pattern that matches nothing, or is not a valid
/// pattern, is returned as a literal path so that reading it reports the
/// missing file.
fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let matched: Vec<PathBuf> = match glob::glob(pattern) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|path| !path.is_dir())
            .collect(),
        Err(..) => Vec::new(),
    };

    if matched.is_empty() {
        vec![PathBuf::from(pattern)]
    } else {
        matched
    }
}

fn discover(patterns: &[String]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for path in patterns.iter().flat_map(|pattern| expand_pattern(pattern)) {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    paths
}

fn run(
    html: &[String],
    css: &[String],
    inline_css: &[String],
    options: &Options,
) -> pare::Result<Vec<OutputRecord>> {
    let mut purger = Purger::new(options);

    let (markup, html_patterns): (Vec<&String>, Vec<&String>) =
        html.iter().partition(|input| input.len() > MAX_PATH_LEN);

    for document in markup {
        purger.scan_html(document);
    }

    let html_patterns: Vec<String> = html_patterns.into_iter().cloned().collect();
    for path in discover(&html_patterns) {
        purger.scan_html_path(&path)?;
    }

    for path in discover(css) {
        purger.scan_css_path(&path)?;
    }

    for stylesheet in inline_css {
        purger.add_inline_css(stylesheet);
    }

    purger.filter();
    Ok(purger.finish())
}

fn strings(matches: &clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map_or_else(Vec::new, |vals| vals.cloned().collect())
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let style = match matches.get_one::<Style>("STYLE") {
        Some(Style::Compressed) => OutputStyle::Compressed,
        Some(Style::Expanded) | None => OutputStyle::Expanded,
    };

    let whitelist = strings(&matches, "WHITELIST");

    let mut options = Options::default()
        .style(style)
        .whitelist_selectors(&whitelist)
        .quiet(matches.get_flag("QUIET"))
        .verbose(matches.get_flag("VERBOSE"));

    if let Some(suffix) = matches.get_one::<String>("SUFFIX") {
        options = options.suffix(suffix.as_str());
    }

    if let Some(comment) = matches.get_one::<String>("COMMENT") {
        options = options.comment(comment.as_str());
    }

    let records = run(
        &strings(&matches, "HTML"),
        &strings(&matches, "CSS"),
        &strings(&matches, "INLINE_CSS"),
        &options,
    )
    .unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    if matches.get_flag("STDOUT") {
        let mut out = stdout().lock();
        for record in &records {
            if records.len() > 1 {
                writeln!(out, "/* {} */", record.new_filename)?;
            }
            out.write_all(record.source.as_bytes())?;
        }
        return Ok(());
    }

    write_records(&records, &options).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1)
    });

    Ok(())
}
