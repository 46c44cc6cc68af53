use std::path::PathBuf;

use macros::TestFs;


#[test]
fn purges_files_from_custom_fs() {
    let mut fs = TestFs::new();
    fs.add_file("index.html", r#"<main class="page"><h1>hi</h1></main>"#);
    fs.add_file("about.html", r#"<section class="about">"#);
    fs.add_file("css/site.css", ".page{margin:0} .about{margin:1px} .blog{margin:2px}");

    let options = pare::Options::default().fs(&fs).suffix(".min");
    let records = pare::from_paths(
        &["index.html", "about.html"],
        &["css/site.css"],
        &options,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].filename, "css/site.css");
    assert_eq!(records[0].new_filename, "css/site.min.css");
    assert_eq!(
        records[0].source,
        ".page {\n    margin:0;\n}\n.about {\n    margin:1px;\n}\n"
    );
}

#[test]
fn write_records_through_custom_fs() {
    let mut fs = TestFs::new();
    fs.add_file("index.html", "<a>");
    fs.add_file("a.css", "a{x:1} b{x:2}");
    fs.add_file("b.css", "b{x:3}");

    let options = pare::Options::default().fs(&fs).suffix(".pared");
    let records = pare::from_paths(&["index.html"], &["a.css", "b.css"], &options).unwrap();
    pare::write_records(&records, &options).unwrap();

    assert_eq!(fs.contents("a.pared.css").as_deref(), Some("a {\n    x:1;\n}\n"));
    assert_eq!(fs.contents("b.pared.css").as_deref(), Some(""));
    assert_eq!(fs.contents("a.css").as_deref(), Some("a{x:1} b{x:2}"));
}

#[test]
fn from_path_single_file() {
    let mut fs = TestFs::new();
    fs.add_file("index.html", r#"<p id="intro">"#);
    fs.add_file("style.css", "#intro{font-size:2em} #outro{font-size:1em}");

    assert_eq!(
        "#intro {\n    font-size:2em;\n}\n",
        pare::from_path("index.html", "style.css", &pare::Options::default().fs(&fs)).unwrap()
    );
}

#[test]
fn missing_html_file() {
    let mut fs = TestFs::new();
    fs.add_file("style.css", "a{x:1}");

    assert_err!(
        "Error: file not found",
        pare::from_path("index.html", "style.css", &pare::Options::default().fs(&fs))
    );
}

#[test]
fn null_fs_cannot_read() {
    assert_err!(
        "Error: NullFs, there is no file system",
        pare::from_path("index.html", "style.css", &pare::Options::default().fs(&pare::NullFs))
    );
}

#[test]
fn null_fs_cannot_write() {
    let records = pare::purge(&["<a>"], &[("a.css", "a{x:1}")], &pare::Options::default());

    let err = pare::write_records(&records, &pare::Options::default().fs(&pare::NullFs))
        .unwrap_err();
    match err.kind() {
        pare::ErrorKind::IoError { path, error } => {
            assert_eq!(path, PathBuf::from("a.css"));
            assert_eq!(error.kind(), std::io::ErrorKind::PermissionDenied);
        }
        kind => panic!("unexpected error kind: {:?}", kind),
    }
}

#[test]
fn error_names_the_path() {
    let err = pare::from_path(
        "missing.html",
        "style.css",
        &pare::Options::default().fs(&pare::NullFs),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error: NullFs, there is no file system\n  ./missing.html"
    );
}

#[test]
fn reads_and_writes_real_files() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("index.html");
    let css = dir.path().join("app.css");

    std::fs::write(&html, r#"<nav class="top">"#).unwrap();
    std::fs::write(&css, ".top{position:sticky} .bottom{position:fixed}").unwrap();

    let options = pare::Options::default().suffix(".pared");
    let records = pare::from_paths(&[&html], &[&css], &options).unwrap();
    pare::write_records(&records, &options).unwrap();

    let written = std::fs::read_to_string(dir.path().join("app.pared.css")).unwrap();
    assert_eq!(written, ".top {\n    position:sticky;\n}\n");
    assert_eq!(
        std::fs::read_to_string(&css).unwrap(),
        ".top{position:sticky} .bottom{position:fixed}"
    );
}

#[test]
fn invalid_utf8_stylesheet() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("index.html");
    let css = dir.path().join("bad.css");

    std::fs::write(&html, "<a>").unwrap();
    std::fs::write(&css, b"a{content:'\xFF'}").unwrap();

    assert_err!(
        "Error: Invalid UTF-8 character \"\\xFF\"",
        pare::from_paths(&[&html], &[&css], &pare::Options::default())
    );

    let err = pare::from_paths(&[&html], &[&css], &pare::Options::default()).unwrap_err();
    assert!(matches!(
        err.kind(),
        pare::ErrorKind::FromUtf8Error { path, .. } if path == css
    ));
}
