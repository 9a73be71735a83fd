//! Property tests for the normalizer.

use averia_resolve::normalize;
use proptest::prelude::*;

proptest! {
    /// Normalizing a normalized token changes nothing.
    #[test]
    fn normalize_is_idempotent(raw in "\\PC{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Case and separator style never change the token.
    #[test]
    fn separator_and_case_variants_collapse(
        words in proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..4),
        separator in prop::sample::select(vec![" ", "_", "-", ".", "  ", " - "]),
        uppercase in any::<bool>(),
    ) {
        let plain = words.join("_");
        let mut variant = words.join(separator);
        if uppercase {
            variant = variant.to_uppercase();
        }
        prop_assert_eq!(normalize(&variant), normalize(&plain));
    }

    /// The token alphabet is underscore-separated `[a-z0-9]`.
    #[test]
    fn token_alphabet_is_closed(raw in "\\PC{0,40}") {
        let token = normalize(&raw);
        prop_assert!(token.chars().all(|ch| ch.is_ascii_lowercase()
            || ch.is_ascii_digit()
            || ch == '_'));
        prop_assert!(!token.starts_with('_'));
        prop_assert!(!token.ends_with('_'));
        prop_assert!(!token.contains("__"));
    }
}

#[test]
fn accent_variants_match_their_plain_spelling() {
    let pairs = [
        ("Tecnología", "tecnologia"),
        ("FECHA CREACIÓN", "fecha_creacion"),
        ("Año", "ano"),
        ("número sol", "numero_sol"),
    ];
    for (accented, expected) in pairs {
        assert_eq!(normalize(accented), expected);
        assert_eq!(normalize(expected), expected);
    }
}
