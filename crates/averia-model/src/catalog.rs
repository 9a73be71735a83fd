//! Candidate header names per semantic field.
//!
//! Exports of the incident dataset rename columns freely between systems
//! ("CASO_REPETIDO", "Caso Repetido", ...). The catalog carries an ordered
//! list of known aliases per field; order encodes preference among exact
//! matches. The defaults cover the exports seen so far and individual
//! fields can be overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::SemanticField;

/// Ordered candidate header names for every semantic field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCatalog {
    #[serde(default = "incident_id_candidates")]
    pub incident_id: Vec<String>,
    #[serde(default = "repeat_flag_candidates")]
    pub repeat_flag: Vec<String>,
    #[serde(default = "creation_date_candidates")]
    pub creation_date: Vec<String>,
    #[serde(default = "closure_date_candidates")]
    pub closure_date: Vec<String>,
    #[serde(default = "district_candidates")]
    pub district: Vec<String>,
    #[serde(default = "product_candidates")]
    pub product: Vec<String>,
    #[serde(default = "technology_candidates")]
    pub technology: Vec<String>,
    #[serde(default = "city_candidates")]
    pub city: Vec<String>,
    #[serde(default = "sector_candidates")]
    pub sector: Vec<String>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self {
            incident_id: incident_id_candidates(),
            repeat_flag: repeat_flag_candidates(),
            creation_date: creation_date_candidates(),
            closure_date: closure_date_candidates(),
            district: district_candidates(),
            product: product_candidates(),
            technology: technology_candidates(),
            city: city_candidates(),
            sector: sector_candidates(),
        }
    }
}

impl FieldCatalog {
    /// Candidate names for one field, in preference order.
    #[must_use]
    pub fn candidates(&self, field: SemanticField) -> &[String] {
        match field {
            SemanticField::IncidentId => &self.incident_id,
            SemanticField::RepeatFlag => &self.repeat_flag,
            SemanticField::CreationDate => &self.creation_date,
            SemanticField::ClosureDate => &self.closure_date,
            SemanticField::District => &self.district,
            SemanticField::Product => &self.product,
            SemanticField::Technology => &self.technology,
            SemanticField::City => &self.city,
            SemanticField::Sector => &self.sector,
        }
    }

    /// Replace the candidate list for one field.
    #[must_use]
    pub fn with_candidates(mut self, field: SemanticField, candidates: Vec<String>) -> Self {
        match field {
            SemanticField::IncidentId => self.incident_id = candidates,
            SemanticField::RepeatFlag => self.repeat_flag = candidates,
            SemanticField::CreationDate => self.creation_date = candidates,
            SemanticField::ClosureDate => self.closure_date = candidates,
            SemanticField::District => self.district = candidates,
            SemanticField::Product => self.product = candidates,
            SemanticField::Technology => self.technology = candidates,
            SemanticField::City => self.city = candidates,
            SemanticField::Sector => self.sector = candidates,
        }
        self
    }

    /// Load a catalog from a JSON file. Fields absent from the file keep
    /// their default candidate lists.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| ModelError::Catalog {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn incident_id_candidates() -> Vec<String> {
    to_owned(&["NUMERO_SOL", "numero_sol", "numero sol"])
}

fn repeat_flag_candidates() -> Vec<String> {
    to_owned(&["CASO_REPETIDO", "CASO REPETIDO", "caso_repetido"])
}

fn creation_date_candidates() -> Vec<String> {
    to_owned(&["FC_CREACION", "FC CREACION", "fc_creacion", "fecha_creacion"])
}

fn closure_date_candidates() -> Vec<String> {
    to_owned(&[
        "Fecha de Cierre",
        "fecha de cierre",
        "fecha_cierre",
        "fecha cierre",
    ])
}

fn district_candidates() -> Vec<String> {
    to_owned(&["Nombre del Distrito", "distrito", "desc_distrito_municipal"])
}

fn product_candidates() -> Vec<String> {
    to_owned(&["Producto Agrupado", "producto", "producto_agrupado"])
}

fn technology_candidates() -> Vec<String> {
    to_owned(&["Tecnologia", "tecnología", "tecnologia"])
}

fn city_candidates() -> Vec<String> {
    to_owned(&["DESC_CIUDAD", "desc_ciudad", "ciudad"])
}

fn sector_candidates() -> Vec<String> {
    to_owned(&["DESC_SECTOR", "desc_sector", "sector"])
}
