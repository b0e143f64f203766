use std::collections::HashSet;

use aerodesk_types::CargoItem;

/// Totals shown under the cargo list.
///
/// Always computed from the items currently on screen, i.e. after the
/// search filter, never from the full set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CargoSummary {
    pub total_weight_kg: f64,
    pub shipment_count: usize,
    pub hazardous_count: usize,
    pub unique_flight_count: usize,
}

impl CargoSummary {
    /// Items without a weight add nothing to the total but still count as
    /// shipments.
    pub fn compute(items: &[CargoItem]) -> Self {
        let flights: HashSet<&str> = items.iter().map(|i| i.flight_number.as_str()).collect();
        Self {
            total_weight_kg: items.iter().filter_map(|i| i.weight_kg).sum(),
            shipment_count: items.len(),
            hazardous_count: items.iter().filter(|i| i.hazardous_material).count(),
            unique_flight_count: flights.len(),
        }
    }
}
