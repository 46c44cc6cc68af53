/*!
This crate removes CSS rules that no HTML document uses.

`pare` scans HTML for the tags, classes, ids and data attributes it references,
then rewrites each stylesheet to keep only the rules whose selectors could
match. `@media` blocks and the order of rules are preserved.

The matching is a heuristic, not a selector engine: only the rightmost simple
selector of each selector is checked, so `.sidebar .link` survives whenever
`.link` is used anywhere, with or without a `.sidebar` around it.

## Use as library
```
let css = pare::from_string(
    r#"<ul class="menu"><li>home</li></ul>"#,
    "ul.menu{padding:0} .menu li{display:inline} .footer{color:gray}",
    &pare::Options::default(),
);
assert_eq!(css, ".menu li {\n    display:inline;\n}\n");
```

## Use as binary
```bash
cargo install pare
pare --html index.html --html about.html --css site.css --suffix .min
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    renamed_and_removed_lints,
    clippy::unknown_clippy_lints,
    clippy::multiple_crate_versions,
    unknown_lints,
)]

pub use pare_compiler::*;
