//! The resolved column map and per-column diagnostics.

use serde::{Deserialize, Serialize};

use crate::field::SemanticField;

/// Session-scoped binding from semantic field to the actual dataset column.
///
/// Built once per dataset load and treated as read-only afterward; an
/// unresolved field means every feature gated on it is unavailable, which
/// downstream code must treat as degradation, not as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumns {
    pub incident_id: Option<String>,
    pub repeat_flag: Option<String>,
    pub creation_date: Option<String>,
    pub closure_date: Option<String>,
    pub district: Option<String>,
    pub product: Option<String>,
    pub technology: Option<String>,
    pub city: Option<String>,
    pub sector: Option<String>,
}

impl ResolvedColumns {
    /// The dataset column bound to `field`, if any.
    #[must_use]
    pub fn get(&self, field: SemanticField) -> Option<&str> {
        match field {
            SemanticField::IncidentId => self.incident_id.as_deref(),
            SemanticField::RepeatFlag => self.repeat_flag.as_deref(),
            SemanticField::CreationDate => self.creation_date.as_deref(),
            SemanticField::ClosureDate => self.closure_date.as_deref(),
            SemanticField::District => self.district.as_deref(),
            SemanticField::Product => self.product.as_deref(),
            SemanticField::Technology => self.technology.as_deref(),
            SemanticField::City => self.city.as_deref(),
            SemanticField::Sector => self.sector.as_deref(),
        }
    }

    pub fn set(&mut self, field: SemanticField, column: Option<String>) {
        match field {
            SemanticField::IncidentId => self.incident_id = column,
            SemanticField::RepeatFlag => self.repeat_flag = column,
            SemanticField::CreationDate => self.creation_date = column,
            SemanticField::ClosureDate => self.closure_date = column,
            SemanticField::District => self.district = column,
            SemanticField::Product => self.product = column,
            SemanticField::Technology => self.technology = column,
            SemanticField::City => self.city = column,
            SemanticField::Sector => self.sector = column,
        }
    }

    /// (field, resolved column) pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (SemanticField, Option<&str>)> {
        SemanticField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
    }

    /// The date column the trend and date filters should use: creation
    /// date when resolved, closure date as the fallback.
    #[must_use]
    pub fn date_column(&self) -> Option<&str> {
        self.creation_date
            .as_deref()
            .or(self.closure_date.as_deref())
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.entries().filter(|(_, column)| column.is_some()).count()
    }
}

/// Shape summary for one dataset column, shown in the diagnostic view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnHint {
    /// Every non-empty value parses as a number.
    pub is_numeric: bool,
    /// Distinct non-empty values over non-empty values.
    pub unique_ratio: f64,
    /// Empty values over row count.
    pub null_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_column_prefers_creation_date() {
        let mut columns = ResolvedColumns::default();
        assert!(columns.date_column().is_none());

        columns.closure_date = Some("Fecha de Cierre".to_string());
        assert_eq!(columns.date_column(), Some("Fecha de Cierre"));

        columns.creation_date = Some("FC_CREACION".to_string());
        assert_eq!(columns.date_column(), Some("FC_CREACION"));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut columns = ResolvedColumns::default();
        columns.set(SemanticField::Sector, Some("DESC_SECTOR".to_string()));
        assert_eq!(columns.get(SemanticField::Sector), Some("DESC_SECTOR"));
        assert_eq!(columns.resolved_count(), 1);
    }
}
