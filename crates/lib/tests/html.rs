
fn used_tokens(documents: &[&str]) -> Vec<String> {
    let options = pare::Options::default();
    let mut purger = pare::Purger::new(&options);

    for document in documents {
        purger.scan_html(document);
    }

    purger.used_tokens().iter().map(str::to_owned).collect()
}

#[test]
fn tokens_from_every_document() {
    assert_eq!(
        used_tokens(&[r#"<nav class="menu">"#, r#"<footer class="menu small">"#]),
        vec!["*", "nav", ".menu", "footer", ".small"]
    );
}

#[test]
fn templated_class_literals() {
    assert_eq!(
        used_tokens(&[r#"<button :class="open ? 'btn-open' : 'btn-closed'">"#]),
        vec!["*", "button", ".btn-open", ".btn-closed"]
    );
}

#[test]
fn id_with_spaces_is_split() {
    assert_eq!(
        used_tokens(&[r#"<div id="a b">"#]),
        vec!["*", "div", "#a", "#b"]
    );
}

#[test]
fn templated_id_is_ignored() {
    assert_eq!(used_tokens(&[r#"<div id="{{ name }}">"#]), vec!["*", "div"]);
}

#[test]
fn single_quoted_class_is_not_read() {
    assert_eq!(used_tokens(&["<div class='x'>"]), vec!["*", "div"]);
}

#[test]
fn empty_class_attribute() {
    assert_eq!(used_tokens(&[r#"<p class="">"#]), vec!["*", "p"]);
}

test!(
    templated_class_keeps_rules,
    r#"<a :class="active ? 'is-active' : ''">"#,
    ".is-active{font-weight:bold} .is-hidden{display:none}",
    ".is-active {\n    font-weight:bold;\n}\n"
);
test!(
    data_attribute_with_value,
    r#"<div data-state="open">"#,
    r#"[data-state="open"]{display:block} [data-state="closed"]{display:none} [data-state]{margin:0}"#,
    "[data-state=\"open\"] {\n    display:block;\n}\n[data-state] {\n    margin:0;\n}\n"
);
test!(
    tag_names_are_case_sensitive,
    "<DIV>",
    "div{x:1} DIV{x:2}",
    "DIV {\n    x:2;\n}\n"
);
test!(
    ng_class_object_literal,
    r#"<li ng-class="{'active': on}">"#,
    ".active{x:1} .inactive{x:2}",
    ".active {\n    x:1;\n}\n"
);
test!(
    data_class_value_is_a_class,
    r#"<i data-class="foo">"#,
    ".foo{x:1}",
    ".foo {\n    x:1;\n}\n"
);
