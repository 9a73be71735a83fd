//! Binding semantic fields to actual dataset columns.

use averia_model::{FieldCatalog, ResolvedColumns, SemanticField};

use crate::normalize::normalize;

/// Resolves one semantic field against the dataset columns.
///
/// Pass 1 looks the normalized candidates up in an insertion-ordered map
/// of normalized dataset columns. When two dataset columns normalize to
/// the same token, the later column shadows the earlier one's value while
/// keeping the earlier position, so duplicate handling stays stable
/// across loads.
///
/// Pass 2 runs only when pass 1 misses: each candidate's normalized form
/// is split on `_` and the first dataset column (in dataset order) whose
/// normalized token contains every sub-token as a substring wins. This
/// catches headers with extra qualifier words appended.
#[must_use]
pub fn resolve(columns: &[String], candidates: &[String]) -> Option<String> {
    let mut normalized: Vec<(String, String)> = Vec::with_capacity(columns.len());
    for column in columns {
        let token = normalize(column);
        if let Some(entry) = normalized.iter_mut().find(|(existing, _)| *existing == token) {
            entry.1 = column.clone();
        } else {
            normalized.push((token, column.clone()));
        }
    }

    for candidate in candidates {
        let token = normalize(candidate);
        if let Some((_, column)) = normalized.iter().find(|(existing, _)| *existing == token) {
            return Some(column.clone());
        }
    }

    for candidate in candidates {
        let token = normalize(candidate);
        let sub_tokens: Vec<&str> = token.split('_').filter(|part| !part.is_empty()).collect();
        for (column_token, column) in &normalized {
            if sub_tokens.iter().all(|part| column_token.contains(part)) {
                return Some(column.clone());
            }
        }
    }

    None
}

/// Resolves every semantic field once, producing the session's column map.
#[must_use]
pub fn resolve_columns(columns: &[String], catalog: &FieldCatalog) -> ResolvedColumns {
    let mut resolved = ResolvedColumns::default();
    for field in SemanticField::ALL {
        let column = resolve(columns, catalog.candidates(field));
        match &column {
            Some(name) => tracing::debug!(field = %field, column = %name, "resolved column"),
            None => tracing::debug!(field = %field, "column not found"),
        }
        resolved.set(field, column);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn exact_normalized_match_wins() {
        let cols = columns(&["Numero Sol", "Caso Repetido"]);
        let cands = columns(&["NUMERO_SOL", "numero_sol"]);
        assert_eq!(resolve(&cols, &cands), Some("Numero Sol".to_string()));
    }

    #[test]
    fn candidate_order_encodes_preference() {
        let cols = columns(&["distrito", "Nombre del Distrito"]);
        let cands = columns(&["Nombre del Distrito", "distrito"]);
        assert_eq!(
            resolve(&cols, &cands),
            Some("Nombre del Distrito".to_string())
        );
    }

    #[test]
    fn later_duplicate_shadows_earlier() {
        // Both headers normalize to "caso_repetido"; the later column wins.
        let cols = columns(&["CASO_REPETIDO", "Caso Repetido"]);
        let cands = columns(&["caso_repetido"]);
        assert_eq!(resolve(&cols, &cands), Some("Caso Repetido".to_string()));
    }

    #[test]
    fn token_subset_fallback_matches_extended_headers() {
        let cols = columns(&["ID", "FECHA_CIERRE_REAL_AUDITORIA"]);
        let cands = columns(&["fecha_cierre"]);
        assert_eq!(
            resolve(&cols, &cands),
            Some("FECHA_CIERRE_REAL_AUDITORIA".to_string())
        );
    }

    #[test]
    fn exact_pass_takes_priority_over_fallback() {
        // "fecha_cierre" matches both exactly (second column) and by token
        // subset (first column); the exact pass must win.
        let cols = columns(&["FECHA_CIERRE_REAL", "Fecha Cierre"]);
        let cands = columns(&["fecha_cierre"]);
        assert_eq!(resolve(&cols, &cands), Some("Fecha Cierre".to_string()));
    }

    #[test]
    fn unresolvable_field_returns_none() {
        let cols = columns(&["NUMERO_SOL"]);
        let cands = columns(&["DESC_SECTOR", "sector"]);
        assert_eq!(resolve(&cols, &cands), None);
    }

    #[test]
    fn default_catalog_resolves_the_usual_export() {
        let cols = columns(&[
            "NUMERO_SOL",
            "CASO_REPETIDO",
            "FC_CREACION",
            "Fecha de Cierre",
            "Nombre del Distrito",
            "Producto Agrupado",
            "Tecnología",
            "DESC_CIUDAD",
            "DESC_SECTOR",
        ]);
        let resolved = resolve_columns(&cols, &FieldCatalog::default());
        assert_eq!(resolved.resolved_count(), 9);
        assert_eq!(resolved.incident_id.as_deref(), Some("NUMERO_SOL"));
        assert_eq!(resolved.technology.as_deref(), Some("Tecnología"));
        assert_eq!(resolved.date_column(), Some("FC_CREACION"));
    }
}
