//! Cargo manifest records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::wire;

/// Special handling requirement declared on a shipment.
///
/// Codes outside the known set are kept verbatim in
/// [`SpecialHandling::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecialHandling {
    TemperatureControlled,
    Fragile,
    Heavy,
    HighValue,
    Perishable,
    DangerousGoods,
    Other(String),
}

impl SpecialHandling {
    /// Returns the wire label for this handling code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TemperatureControlled => "TEMPERATURE_CONTROLLED",
            Self::Fragile => "FRAGILE",
            Self::Heavy => "HEAVY",
            Self::HighValue => "HIGH_VALUE",
            Self::Perishable => "PERISHABLE",
            Self::DangerousGoods => "DANGEROUS_GOODS",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for SpecialHandling {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "TEMPERATURE_CONTROLLED" => Self::TemperatureControlled,
            "FRAGILE" => Self::Fragile,
            "HEAVY" => Self::Heavy,
            "HIGH_VALUE" => Self::HighValue,
            "PERISHABLE" => Self::Perishable,
            "DANGEROUS_GOODS" => Self::DangerousGoods,
            _ => Self::Other(label),
        }
    }
}

impl From<SpecialHandling> for String {
    fn from(handling: SpecialHandling) -> Self {
        match handling {
            SpecialHandling::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SpecialHandling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One air waybill loaded on a flight.
///
/// `(flight_number, waybill_number)` identifies an item for display, but the
/// backend does not guarantee uniqueness; duplicates are kept side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub flight_number: String,
    pub waybill_number: String,
    pub shipper_name: String,
    pub consignee_name: String,
    pub cargo_description: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub volume_cubic_m: Option<f64>,
    #[serde(default)]
    pub special_handling: Option<SpecialHandling>,
    #[serde(default, deserialize_with = "wire::flag")]
    pub hazardous_material: bool,
    /// IATA dangerous goods class, e.g. `Class 9`.
    #[serde(default)]
    pub hazmat_class: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl CargoItem {
    /// Display key for the item.
    pub fn identity(&self) -> (&str, &str) {
        (&self.flight_number, &self.waybill_number)
    }
}

/// Cargo loaded on a single flight, as returned by the per-flight lookup.
///
/// Items in a manifest omit their flight number; it is carried once on the
/// manifest itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoManifest {
    pub flight_number: String,
    #[serde(default)]
    pub cargo_items: Vec<ManifestLine>,
    #[serde(default)]
    pub total_weight_kg: f64,
    pub item_count: usize,
}

/// A waybill entry inside a [`CargoManifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestLine {
    pub waybill_number: String,
    pub shipper_name: String,
    pub consignee_name: String,
    pub cargo_description: String,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub special_handling: Option<SpecialHandling>,
    #[serde(default, deserialize_with = "wire::flag")]
    pub hazardous_material: bool,
}
