//! Header text canonicalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes a raw header or candidate name into its comparable token
/// form: trimmed, NBSP-folded, lowercased, accents stripped via NFKD with
/// combining marks discarded, and every run of characters outside
/// `[a-z0-9]` collapsed into a single underscore.
///
/// Pure and idempotent; two spellings a human would read as the same
/// column name produce the same token.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().replace('\u{a0}', " ").to_lowercase();
    let mut token = String::with_capacity(lowered.len());
    for ch in lowered.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            token.push(ch);
        } else if !token.ends_with('_') {
            token.push('_');
        }
    }
    token.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_of_the_same_name_collapse() {
        for raw in [
            "CASO_REPETIDO",
            "Caso Repetido",
            "  caso  repetido ",
            "caso-repetido",
            "Caso\u{a0}Repetido",
        ] {
            assert_eq!(normalize(raw), "caso_repetido", "raw: {raw:?}");
        }
    }

    #[test]
    fn accents_are_stripped() {
        assert_eq!(normalize("Tecnología"), "tecnologia");
        assert_eq!(normalize("Sí"), "si");
        assert_eq!(normalize("AÑO_CREACIÓN"), "ano_creacion");
    }

    #[test]
    fn punctuation_runs_become_one_underscore() {
        assert_eq!(normalize("Fecha de Cierre (real)"), "fecha_de_cierre_real");
        assert_eq!(normalize("__ya__normalizado__"), "ya_normalizado");
    }

    #[test]
    fn degenerate_input_is_safe() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("123"), "123");
    }
}
