use codemap::CodeMap;

use crate::{
    html::{UsedTokens, WILDCARD},
    rules::RuleStore,
    utils::unescaped_colon,
    Options,
};

/// Checked in this order when looking for the rightmost simple selector
const COMBINATORS: [char; 4] = [' ', '>', '+', '~'];

/// Selectors that count as used: everything the HTML references plus the
/// caller's whitelist
pub(crate) struct KeepSet<'a> {
    used: &'a UsedTokens,
    whitelist: &'a [String],
}

impl<'a> KeepSet<'a> {
    pub fn new(used: &'a UsedTokens, whitelist: &'a [String]) -> Self {
        Self { used, whitelist }
    }

    pub fn contains(&self, selector: &str) -> bool {
        selector == WILDCARD
            || self.used.contains(selector)
            || self.whitelist.iter().any(|s| s == selector)
    }

    /// Whether any selector of the comma separated list could match
    ///
    /// Only the selector itself and its rightmost simple selector are looked
    /// up; the ancestors named by combinators are never checked, so
    /// `.wrap .used` is kept whenever `.used` is.
    pub fn is_used(&self, selector_list: &str) -> bool {
        selector_list.split(',').any(|selector| {
            let selector = strip_pseudo(selector);

            selector == WILDCARD
                || self.contains(&selector)
                || self.contains(rightmost_simple_selector(&selector))
        })
    }
}

/// Drops everything after the first unescaped `:` and unescapes `\:` and `\/`
fn strip_pseudo(selector: &str) -> String {
    let end = unescaped_colon(selector).unwrap_or(selector.len());

    selector[..end].replace("\\:", ":").replace("\\/", "/")
}

/// Keeps only the text after the last combinator, trying each combinator in
/// turn
fn rightmost_simple_selector(selector: &str) -> &str {
    if !selector.contains(&COMBINATORS[..]) {
        return selector;
    }

    let mut rest = selector;
    for combinator in COMBINATORS {
        rest = rest.rsplit_once(combinator).map_or(rest, |(_, after)| after);
    }

    rest.trim()
}

/// Removes every selector list that no used selector can match
pub(crate) fn filter_rules(
    store: &mut RuleStore,
    keep: &KeepSet,
    map: &CodeMap,
    options: &Options,
) {
    let report = options.verbose && !options.quiet;

    for sheet in store.stylesheets_mut() {
        sheet.retain_rules(|selector_list, rule| {
            let is_used = keep.is_used(selector_list);

            if !is_used && report {
                options.logger.debug(
                    map.look_up_span(rule.span()),
                    &format!("Removing unused selector \"{}\".", selector_list),
                );
            }

            is_used
        });
    }
}

#[cfg(test)]
mod test {
    use super::{rightmost_simple_selector, strip_pseudo, KeepSet};
    use crate::html::UsedTokens;

    #[test]
    fn pseudo_classes_are_removed() {
        assert_eq!(strip_pseudo("a:hover"), "a");
        assert_eq!(strip_pseudo(".a::before"), ".a");
        assert_eq!(strip_pseudo(r".md\:flex:focus"), ".md:flex");
        assert_eq!(strip_pseudo(r".w-1\/2"), ".w-1/2");
    }

    #[test]
    fn combinators_are_split_in_fixed_order() {
        assert_eq!(rightmost_simple_selector(".a .b"), ".b");
        assert_eq!(rightmost_simple_selector(".a>.b"), ".b");
        assert_eq!(rightmost_simple_selector("ul li + .c ~ .d"), ".d");
        assert_eq!(rightmost_simple_selector(".a"), ".a");
        // the space split runs first, so a trailing space leaves nothing
        assert_eq!(rightmost_simple_selector(".a "), "");
    }

    #[test]
    fn any_selector_keeps_the_list() {
        let mut used = UsedTokens::new();
        used.insert(".b".to_owned());
        let keep = KeepSet::new(&used, &[]);

        assert!(keep.is_used(".a, .b"));
        assert!(keep.is_used(".a:hover,.b:focus"));
        assert!(!keep.is_used(".a, .c"));
    }

    #[test]
    fn whitelist_counts_as_used() {
        let used = UsedTokens::new();
        let whitelist = vec![".js-toggle".to_owned()];
        let keep = KeepSet::new(&used, &whitelist);

        assert!(keep.is_used(".js-toggle"));
        assert!(keep.is_used("body .js-toggle"));
        assert!(!keep.is_used(".other"));
    }

    #[test]
    fn wildcard_is_always_used() {
        let used = UsedTokens::new();
        let keep = KeepSet::new(&used, &[]);

        assert!(keep.is_used("*"));
        assert!(keep.is_used(".a > *"));
    }
}
