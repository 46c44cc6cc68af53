
test!(
    keeps_used_class,
    r#"<div class="foo bar"></div>"#,
    ".foo{color:red} .baz{color:blue}",
    ".foo {\n    color:red;\n}\n"
);
test!(
    keeps_used_tag,
    "<p>text</p>",
    "p { margin: 0 }",
    "p {\n    margin: 0;\n}\n"
);
test!(
    wildcard_survives_empty_html,
    "",
    "*{box-sizing:border-box} .a{color:red}",
    "* {\n    box-sizing:border-box;\n}\n"
);
test!(
    empty_html_drops_everything_else,
    "",
    "a{color:red} .b{color:blue}",
    ""
);
test!(empty_stylesheet, "<a>", "", "");
test!(
    ids_and_data_attributes,
    r#"<div id="app" data-open data-theme="dark"></div>"#,
    r##"#app{margin:0} #other{margin:0} [data-open]{display:block} [data-theme="dark"]{color:#fff} [data-theme="light"]{color:#000}"##,
    "#app {\n    margin:0;\n}\n[data-open] {\n    display:block;\n}\n[data-theme=\"dark\"] {\n    color:#fff;\n}\n"
);
test!(
    declarations_accumulate,
    r#"<i class="x">"#,
    ".x{color:red} .x{font-size:1px}",
    ".x {\n    color:red;font-size:1px;\n}\n"
);
test!(
    whitespace_is_collapsed,
    "<ul><li>",
    "ul\n  li   {\n  color :  red;\n\n  margin: 0\n}",
    "ul li {\n    color : red; margin: 0;\n}\n"
);
test!(
    comments_are_removed,
    r#"<i class="a">"#,
    "/* header */\n.a{color:red/* inline */}\n/* .b{color:blue} */",
    ".a {\n    color:red;\n}\n"
);
test!(
    empty_rule_is_skipped,
    "<a><b>",
    "a{} b{color:red}",
    "b {\n    color:red;\n}\n"
);
test!(
    import_is_not_a_rule,
    r#"<i class="a">"#,
    "@import url(x.css);\n.a{color:red}",
    ".a {\n    color:red;\n}\n"
);
test!(
    keyframes_are_dropped,
    "<div>",
    "@keyframes spin{from{opacity:0}to{opacity:1}} div{animation:spin 1s}",
    "div {\n    animation:spin 1s;\n}\n"
);
test!(
    rule_order_follows_first_appearance,
    "<a><b><i>",
    "i{x:1} a{x:2} b{x:3} i{y:4}",
    "i {\n    x:1;y:4;\n}\na {\n    x:2;\n}\nb {\n    x:3;\n}\n"
);
test!(
    crlf_line_endings,
    "<a>",
    "a {\r\n  color: red;\r\n}\r\n",
    "a {\n    color: red;\n}\n"
);

#[test]
fn purging_output_again_changes_nothing() {
    let html = r#"<div class="card" data-open><a class="sm:px-2">"#;
    let css = "
        /* layout */
        .card{margin:0;}
        @media   (max-width: 600px) {
            .card { padding: 0 }
            .gone { display: none }
        }
        a:hover{color:red}
        .card{border:0}
        .sm\\:px-2{padding:0 .5rem}
        [data-open]{display:block}
        @layer base{.card{color:black}}
        @media print{.card{x:1}}
        @media print{.card{y:2} .gone{z:3}}
    ";
    let options = pare::Options::default()
        .logger(&pare::NullLogger)
        .whitelist_selector("@layer base");

    let once = pare::from_string(html, css, &options);
    let twice = pare::from_string(html, &once, &options);

    assert_eq!(once, twice);
    assert!(once.contains(".card {\n    margin:0;;border:0;\n}\n"));
    assert!(once.contains(".sm\\:px-2 {\n    padding:0 .5rem;\n}\n"));
    assert!(once.contains("@layer base {\n    .card{color:black;}\n}\n"));
    assert!(once.contains("@media print {\n    .card {\n        x:1;y:2;\n    }\n}\n\n"));
    assert!(!once.contains(".gone"));
}
