use super::*;

#[test]
fn test_parse_dotted_numeric() {
    let v = VersionKey::parse("1.2.3");
    assert_eq!(
        v.components(),
        &[
            Component::Integer(1),
            Component::Integer(2),
            Component::Integer(3)
        ]
    );
}

#[test]
fn test_parse_v_prefix() {
    let v = VersionKey::parse("v2");
    assert_eq!(v.components(), &[Component::Integer(2)]);

    let v = VersionKey::parse("V10.1");
    assert_eq!(
        v.components(),
        &[Component::Integer(10), Component::Integer(1)]
    );
}

#[test]
fn test_v_prefix_not_stripped_from_words() {
    // "views" starts with 'v' but is not a version token
    assert_eq!(VersionKey::parse("views"), VersionKey::fallback());
}

#[test]
fn test_parse_empty_is_fallback() {
    assert_eq!(VersionKey::parse(""), VersionKey::fallback());
    assert_eq!(VersionKey::parse("   "), VersionKey::fallback());
}

#[test]
fn test_parse_non_numeric_is_fallback() {
    assert_eq!(VersionKey::parse("abc"), VersionKey::fallback());
    assert_eq!(VersionKey::parse("create"), VersionKey::fallback());
}

#[test]
fn test_parse_mixed_keeps_text_parts() {
    let v = VersionKey::parse("1.2.beta");
    assert_eq!(
        v.components(),
        &[
            Component::Integer(1),
            Component::Integer(2),
            Component::Text("beta".to_string())
        ]
    );
}

#[test]
fn test_fallback_sorts_first() {
    assert!(VersionKey::fallback() < VersionKey::parse("1"));
    assert!(VersionKey::fallback() < VersionKey::parse("0.1"));
}

#[test]
fn test_numeric_order_not_lexicographic() {
    assert!(VersionKey::parse("2") < VersionKey::parse("10"));
    assert!(VersionKey::parse("1.9") < VersionKey::parse("1.10"));
}

#[test]
fn test_integer_sorts_before_text() {
    // At a mismatched position, the numeric component wins
    assert!(VersionKey::parse("1.2") < VersionKey::parse("1.beta"));
    assert!(VersionKey::parse("1.999") < VersionKey::parse("1.alpha"));
}

#[test]
fn test_prefix_sorts_first() {
    assert!(VersionKey::parse("1") < VersionKey::parse("1.0"));
    assert!(VersionKey::parse("1.2") < VersionKey::parse("1.2.0"));
}

#[test]
fn test_order_is_total_and_transitive() {
    let keys = vec![
        VersionKey::parse(""),
        VersionKey::parse("1"),
        VersionKey::parse("1.0"),
        VersionKey::parse("1.2"),
        VersionKey::parse("1.2.3"),
        VersionKey::parse("1.beta"),
        VersionKey::parse("2"),
        VersionKey::parse("10"),
        VersionKey::parse("v2.1"),
    ];

    for a in &keys {
        for b in &keys {
            // Trichotomy: exactly one relation holds
            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|r| **r).count(), 1);

            for c in &keys {
                if a < b && b < c {
                    assert!(a < c, "{} < {} < {} must imply {} < {}", a, b, c, a, c);
                }
            }
        }
    }
}

#[test]
fn test_sorting_is_deterministic() {
    let mut a = vec![
        VersionKey::parse("2"),
        VersionKey::parse("1.10"),
        VersionKey::parse(""),
        VersionKey::parse("1.2"),
    ];
    let mut b = a.clone();
    a.sort();
    b.sort();
    assert_eq!(a, b);
    assert_eq!(a[0], VersionKey::fallback());
    assert_eq!(a.last().map(|v| v.to_string()), Some("2".to_string()));
}

#[test]
fn test_version_token_before_underscore() {
    assert_eq!(version_token("1.2.3_add_column"), "1.2.3");
    assert_eq!(version_token("v2_orders"), "v2");
    assert_eq!(version_token("_leading"), "");
}

#[test]
fn test_version_token_whole_stem_without_underscore() {
    assert_eq!(version_token("1.2.3"), "1.2.3");
    assert_eq!(version_token("create"), "create");
}

#[test]
fn test_display_roundtrip() {
    assert_eq!(VersionKey::parse("1.2.3").to_string(), "1.2.3");
    assert_eq!(VersionKey::parse("v2").to_string(), "2");
    assert_eq!(VersionKey::fallback().to_string(), "0");
}
