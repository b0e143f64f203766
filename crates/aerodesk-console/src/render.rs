//! Plain-text rendering of session and record state.

use aerodesk_records::{CargoSummary, SourceState};
use aerodesk_types::{CargoItem, CargoManifest, ConversationTurn, Flight, HealthStatus};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn turn(turn: &ConversationTurn) -> String {
    match turn {
        ConversationTurn::User { text, context } => format!("you [{context}]: {text}"),
        ConversationTurn::Assistant { text, citations } => {
            let mut lines = vec![format!("assistant: {text}")];
            for (n, citation) in citations.iter().enumerate() {
                lines.push(format!(
                    "  [{}] {} ({}): {}",
                    n + 1,
                    citation.origin_or_default(),
                    citation.category_or_default(),
                    citation.preview()
                ));
            }
            lines.join("\n")
        }
        ConversationTurn::Error { text } => format!("error: {text}"),
    }
}

pub fn transcript(turns: &[ConversationTurn]) -> String {
    if turns.is_empty() {
        return "(no conversation yet)".to_string();
    }
    turns.iter().map(turn).collect::<Vec<_>>().join("\n")
}

/// Leading advisory line, if any.
fn advisory_line(lines: &mut Vec<String>, advisory: Option<&str>) {
    if let Some(advisory) = advisory {
        lines.push(format!("! {advisory}"));
    }
}

pub fn flights(rows: &[Flight], shown_of_total: (usize, usize), advisory: Option<&str>) -> String {
    let mut lines = Vec::new();
    advisory_line(&mut lines, advisory);
    for f in rows {
        let delay = match f.departure_delay_minutes() {
            Some(m) if m > 0 => format!("  +{m}m"),
            _ => String::new(),
        };
        lines.push(format!(
            "{:<8} {}-{}  {:<10} {}{}",
            f.flight_number,
            f.departure_airport,
            f.arrival_airport,
            f.status.as_str(),
            f.scheduled_departure.format(TIME_FORMAT),
            delay
        ));
    }
    let (shown, total) = shown_of_total;
    lines.push(format!("showing {shown} of {total} flights"));
    lines.join("\n")
}

fn weight(kg: Option<f64>) -> String {
    kg.map_or_else(|| "-".to_string(), |kg| format!("{kg:.1} kg"))
}

pub fn cargo(
    rows: &[CargoItem],
    summary: CargoSummary,
    shown_of_total: (usize, usize),
    advisory: Option<&str>,
) -> String {
    let mut lines = Vec::new();
    advisory_line(&mut lines, advisory);
    for item in rows {
        let (flight, waybill) = item.identity();
        let handling = item
            .special_handling
            .as_ref()
            .map(|h| format!(" [{h}]"))
            .unwrap_or_default();
        let hazmat = match (&item.hazardous_material, &item.hazmat_class) {
            (true, Some(class)) => format!(" HAZMAT {class}"),
            (true, None) => " HAZMAT".to_string(),
            _ => String::new(),
        };
        lines.push(format!(
            "{flight:<8} {waybill:<16} {}  {}{handling}{hazmat}",
            item.cargo_description,
            weight(item.weight_kg)
        ));
    }
    lines.push(format!(
        "total {:.1} kg | {} shipments | {} hazardous | {} flights",
        summary.total_weight_kg,
        summary.shipment_count,
        summary.hazardous_count,
        summary.unique_flight_count
    ));
    let (shown, total) = shown_of_total;
    lines.push(format!("showing {shown} of {total} shipments"));
    lines.join("\n")
}

pub fn manifest(manifest: &CargoManifest) -> String {
    let mut lines = vec![format!(
        "manifest {}: {} items, {:.1} kg",
        manifest.flight_number, manifest.item_count, manifest.total_weight_kg
    )];
    for line in &manifest.cargo_items {
        let flag = if line.hazardous_material { " HAZMAT" } else { "" };
        lines.push(format!(
            "  {:<16} {}  {:.1} kg{flag}",
            line.waybill_number, line.cargo_description, line.weight_kg
        ));
    }
    lines.join("\n")
}

/// Where the records on screen came from.
pub fn origin(state: SourceState) -> &'static str {
    match state {
        SourceState::Loading => "(loading)",
        SourceState::ReadyRemote => "backend",
        SourceState::ReadyFallback => "sample data",
    }
}

pub fn health(status: &HealthStatus) -> String {
    format!("{}: {}", status.status, status.message)
}
