use langstats::colors::{colors_or_default, count_languages, get_colors, ColorPair};

#[test]
fn test_count_languages() {
    assert!(
        count_languages() >= 16,
        "Expected at least 16 languages, got {}",
        count_languages()
    );
}

#[test]
fn test_common_languages_exist() {
    for lang in ["Python", "Rust", "Go", "C++", "Java", "TypeScript", "Shell"] {
        assert!(get_colors(lang).is_some(), "missing colors for {}", lang);
    }
}

#[test]
fn test_color_mapping() {
    assert_eq!(
        get_colors("Rust"),
        Some(ColorPair {
            primary: "#dea584",
            secondary: "#ce422b",
        })
    );
    assert_eq!(get_colors("Python").unwrap().primary, "#3776ab");

    assert_eq!(get_colors("UnknownLanguage"), None);
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert!(get_colors("Rust").is_some());
    assert_eq!(get_colors("rust"), None);
    assert_eq!(get_colors("RUST"), None);
}

#[test]
fn test_unknown_language_falls_back_to_default() {
    assert_eq!(colors_or_default("Brainfuck"), ColorPair::DEFAULT);
    assert_eq!(colors_or_default(""), ColorPair::DEFAULT);
    assert_ne!(colors_or_default("Go"), ColorPair::DEFAULT);
}
