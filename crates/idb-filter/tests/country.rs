//! Country selector keyboard navigation.

use idb_filter::{CountrySelector, NavKey};

fn highlighted_code(selector: &CountrySelector) -> Option<String> {
    selector.highlighted().map(|c| c.code.clone())
}

#[test]
fn arrow_keys_wrap_over_filtered_list() {
    let mut selector = CountrySelector::builtin();
    selector.set_query("united");
    let codes: Vec<&str> = selector.visible().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["GB", "US", "AE"]);
    assert_eq!(highlighted_code(&selector).as_deref(), Some("GB"));

    selector.handle_key(NavKey::Down);
    selector.handle_key(NavKey::Down);
    assert_eq!(highlighted_code(&selector).as_deref(), Some("AE"));
    selector.handle_key(NavKey::Down);
    assert_eq!(highlighted_code(&selector).as_deref(), Some("GB"));
    selector.handle_key(NavKey::Up);
    assert_eq!(highlighted_code(&selector).as_deref(), Some("AE"));
    selector.handle_key(NavKey::Home);
    assert_eq!(highlighted_code(&selector).as_deref(), Some("GB"));
    selector.handle_key(NavKey::End);

    let chosen = selector.handle_key(NavKey::Enter).map(|c| c.name.clone());
    assert_eq!(chosen.as_deref(), Some("United Arab Emirates"));
}

#[test]
fn escape_clears_query_and_highlight() {
    let mut selector = CountrySelector::builtin();
    selector.set_query("ger");
    assert_eq!(highlighted_code(&selector).as_deref(), Some("DE"));
    assert!(selector.handle_key(NavKey::Escape).is_none());
    assert_eq!(selector.query(), "");
    assert!(selector.handle_key(NavKey::Enter).is_none());
    assert_eq!(selector.visible().len(), 31);
}

#[test]
fn no_matches_means_no_highlight() {
    let mut selector = CountrySelector::builtin();
    selector.set_query("atlantis");
    assert!(selector.visible().is_empty());
    selector.handle_key(NavKey::Down);
    assert!(selector.highlighted().is_none());
    assert!(selector.handle_key(NavKey::Enter).is_none());
}

#[test]
fn find_is_case_insensitive() {
    let selector = CountrySelector::builtin();
    assert_eq!(selector.find(" jp ").map(|c| c.name.as_str()), Some("Japan"));
    assert!(selector.find("XX").is_none());
}
