use std::fmt;

use serde::{Deserialize, Serialize};

/// A logical data concept, independent of the literal column header it is
/// stored under in any particular export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    IncidentId,
    RepeatFlag,
    CreationDate,
    ClosureDate,
    District,
    Product,
    Technology,
    City,
    Sector,
}

impl SemanticField {
    /// Every semantic field, in resolution/display order.
    pub const ALL: [SemanticField; 9] = [
        SemanticField::IncidentId,
        SemanticField::RepeatFlag,
        SemanticField::CreationDate,
        SemanticField::ClosureDate,
        SemanticField::District,
        SemanticField::Product,
        SemanticField::Technology,
        SemanticField::City,
        SemanticField::Sector,
    ];

    /// Stable machine-readable key (used in JSON payloads and config files).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SemanticField::IncidentId => "incident_id",
            SemanticField::RepeatFlag => "repeat_flag",
            SemanticField::CreationDate => "creation_date",
            SemanticField::ClosureDate => "closure_date",
            SemanticField::District => "district",
            SemanticField::Product => "product",
            SemanticField::Technology => "technology",
            SemanticField::City => "city",
            SemanticField::Sector => "sector",
        }
    }

    /// Human-readable label for diagnostic output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SemanticField::IncidentId => "Incident id",
            SemanticField::RepeatFlag => "Repeat flag",
            SemanticField::CreationDate => "Creation date",
            SemanticField::ClosureDate => "Closure date",
            SemanticField::District => "District",
            SemanticField::Product => "Product",
            SemanticField::Technology => "Technology",
            SemanticField::City => "City",
            SemanticField::Sector => "Sector",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
