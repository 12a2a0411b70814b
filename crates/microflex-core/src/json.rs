//! JSON mapping for plate lists
//!
//! Plates serialize as
//! `{"plates": [{"type", "label", "descriptor", "rows", "columns", "size", "wells": [{"index", "values"}]}]}`
//! with `"A1"`-style well indices and values written as decimal strings.
//! Groups are not part of the document.

use crate::{Plate, Result, Well};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Value type tag written into every plate document
pub const VALUE_TYPE: &str = "BigDecimal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellDocument {
    pub index: String,
    pub values: Vec<BigDecimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub descriptor: String,
    pub rows: usize,
    pub columns: usize,
    pub size: usize,
    pub wells: Vec<WellDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlateListDocument {
    pub plates: Vec<PlateDocument>,
}

impl From<&Well> for WellDocument {
    fn from(well: &Well) -> Self {
        Self {
            index: well.index(),
            values: well.data().to_vec(),
        }
    }
}

impl TryFrom<WellDocument> for Well {
    type Error = crate::Error;

    fn try_from(document: WellDocument) -> Result<Self> {
        let (row, column) = crate::well::parse_index(&document.index)?;
        Ok(Well::with_data(row, column, document.values))
    }
}

impl From<&Plate> for PlateDocument {
    fn from(plate: &Plate) -> Self {
        Self {
            kind: VALUE_TYPE.to_string(),
            label: plate.label().to_string(),
            descriptor: plate.descriptor(),
            rows: plate.rows(),
            columns: plate.columns(),
            size: plate.size(),
            wells: plate.iter().map(WellDocument::from).collect(),
        }
    }
}

impl TryFrom<PlateDocument> for Plate {
    type Error = crate::Error;

    fn try_from(document: PlateDocument) -> Result<Self> {
        let mut plate = Plate::new(document.rows, document.columns, document.label);
        for well in document.wells {
            plate.add_well(Well::try_from(well)?)?;
        }
        Ok(plate)
    }
}

impl<'a> FromIterator<&'a Plate> for PlateListDocument {
    fn from_iter<I: IntoIterator<Item = &'a Plate>>(iter: I) -> Self {
        Self {
            plates: iter.into_iter().map(PlateDocument::from).collect(),
        }
    }
}

/// Serialize `plates` as a plate-list document
pub fn to_json(plates: &[Plate]) -> Result<String> {
    debug!(plates = plates.len(), "serializing plate list");
    let document: PlateListDocument = plates.iter().collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a plate-list document back into plates
pub fn from_json(text: &str) -> Result<Vec<Plate>> {
    let document: PlateListDocument = serde_json::from_str(text)?;
    debug!(plates = document.plates.len(), "parsed plate list");
    document.plates.into_iter().map(Plate::try_from).collect()
}
