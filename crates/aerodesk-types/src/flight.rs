//! Flight records as served by the flight data service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::wire;

/// Operational status of a flight.
///
/// Labels the client does not know are kept verbatim in
/// [`FlightStatus::Other`] so they still display and match searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    InFlight,
    Arrived,
    Delayed,
    Cancelled,
    Other(String),
}

impl FlightStatus {
    /// Returns the wire label for this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Boarding => "BOARDING",
            Self::Departed => "DEPARTED",
            Self::InFlight => "IN_FLIGHT",
            Self::Arrived => "ARRIVED",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for FlightStatus {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "SCHEDULED" => Self::Scheduled,
            "BOARDING" => Self::Boarding,
            "DEPARTED" => Self::Departed,
            "IN_FLIGHT" => Self::InFlight,
            "ARRIVED" => Self::Arrived,
            "DELAYED" => Self::Delayed,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Other(label),
        }
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        match status {
            FlightStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scheduled flight leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    #[serde(default)]
    pub airline_code: Option<String>,
    /// IATA code of the origin airport.
    pub departure_airport: String,
    /// IATA code of the destination airport.
    pub arrival_airport: String,
    #[serde(deserialize_with = "wire::timestamp")]
    pub scheduled_departure: NaiveDateTime,
    #[serde(deserialize_with = "wire::timestamp")]
    pub scheduled_arrival: NaiveDateTime,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub actual_departure: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub actual_arrival: Option<NaiveDateTime>,
    pub status: FlightStatus,
    #[serde(default)]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl Flight {
    /// Departure delay in whole minutes, if the flight has actually departed.
    ///
    /// Negative when the flight left early.
    pub fn departure_delay_minutes(&self) -> Option<i64> {
        self.actual_departure
            .map(|actual| (actual - self.scheduled_departure).num_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UA901: &str = r#"{
        "flight_number": "UA901",
        "airline_code": "UAL",
        "departure_airport": "JFK",
        "arrival_airport": "LHR",
        "scheduled_departure": "2024-01-15T18:30:00",
        "scheduled_arrival": "2024-01-16T06:45:00",
        "actual_departure": "2024-01-15T18:45:00",
        "status": "ARRIVED",
        "aircraft_type": "Boeing 777-300ER",
        "distance_km": 5534
    }"#;

    #[test]
    fn flight_deserializes_backend_shape() {
        let flight: Flight = serde_json::from_str(UA901).unwrap();
        assert_eq!(flight.flight_number, "UA901");
        assert_eq!(flight.status, FlightStatus::Arrived);
        assert_eq!(flight.actual_arrival, None);
        assert_eq!(flight.distance_km, Some(5534.0));
        assert_eq!(flight.departure_delay_minutes(), Some(15));
    }

    #[test]
    fn minimal_flight_defaults_optional_fields() {
        let flight: Flight = serde_json::from_str(
            r#"{
                "flight_number": "AA1",
                "departure_airport": "LAX",
                "arrival_airport": "JFK",
                "scheduled_departure": "2024-01-15T14:00:00",
                "scheduled_arrival": "2024-01-15T22:30:00",
                "status": "SCHEDULED"
            }"#,
        )
        .unwrap();
        assert!(flight.airline_code.is_none());
        assert!(flight.aircraft_type.is_none());
        assert_eq!(flight.departure_delay_minutes(), None);
    }

    #[test]
    fn unknown_status_keeps_raw_label() {
        let json = UA901.replace("ARRIVED", "DIVERTED");
        let flight: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight.status, FlightStatus::Other("DIVERTED".into()));
        assert_eq!(flight.status.as_str(), "DIVERTED");
        assert_eq!(serde_json::to_string(&flight.status).unwrap(), "\"DIVERTED\"");
    }

    #[test]
    fn status_labels_are_case_insensitive() {
        let json = UA901.replace("ARRIVED", "in_flight");
        let flight: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight.status, FlightStatus::InFlight);
    }

    #[test]
    fn offset_timestamps_are_accepted() {
        let json = UA901
            .replace("2024-01-15T18:30:00", "2024-01-15T18:30:00+00:00")
            .replace("2024-01-15T18:45:00", "2024-01-15T18:45:00Z");
        let flight: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight.departure_delay_minutes(), Some(15));
    }

    #[test]
    fn null_actual_times_are_absent() {
        let json = UA901.replace("\"2024-01-15T18:45:00\"", "null");
        let flight: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight.actual_departure, None);
    }

    #[test]
    fn status_labels_match_wire_format() {
        for status in [
            FlightStatus::Scheduled,
            FlightStatus::InFlight,
            FlightStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
