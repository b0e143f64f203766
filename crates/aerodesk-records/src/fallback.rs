//! Sample datasets shown when a collection cannot be loaded.

use aerodesk_types::{CargoItem, Flight, FlightStatus, SpecialHandling};
use chrono::{NaiveDate, NaiveDateTime};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn flight(
    number: &str,
    airline: &str,
    route: (&str, &str),
    scheduled: (NaiveDateTime, NaiveDateTime),
    actual: (Option<NaiveDateTime>, Option<NaiveDateTime>),
    status: FlightStatus,
    aircraft: &str,
    distance_km: f64,
) -> Flight {
    Flight {
        flight_number: number.to_string(),
        airline_code: Some(airline.to_string()),
        departure_airport: route.0.to_string(),
        arrival_airport: route.1.to_string(),
        scheduled_departure: scheduled.0,
        scheduled_arrival: scheduled.1,
        actual_departure: actual.0,
        actual_arrival: actual.1,
        status,
        aircraft_type: Some(aircraft.to_string()),
        distance_km: Some(distance_km),
    }
}

/// Four long-haul and domestic legs from 15-16 January 2024.
pub fn sample_flights() -> Vec<Flight> {
    vec![
        flight(
            "UA901",
            "UAL",
            ("JFK", "LHR"),
            (at(2024, 1, 15, 18, 30), at(2024, 1, 16, 6, 45)),
            (Some(at(2024, 1, 15, 18, 45)), Some(at(2024, 1, 16, 7, 0))),
            FlightStatus::Arrived,
            "Boeing 777-300ER",
            5534.0,
        ),
        flight(
            "BA117",
            "BAW",
            ("LHR", "DXB"),
            (at(2024, 1, 15, 20, 15), at(2024, 1, 16, 7, 30)),
            (Some(at(2024, 1, 15, 20, 30)), Some(at(2024, 1, 16, 7, 45))),
            FlightStatus::Arrived,
            "Airbus A380",
            5490.0,
        ),
        flight(
            "EK202",
            "UAE",
            ("DXB", "SIN"),
            (at(2024, 1, 16, 2, 0), at(2024, 1, 16, 13, 30)),
            (Some(at(2024, 1, 16, 2, 15)), None),
            FlightStatus::InFlight,
            "Boeing 777-200LR",
            5845.0,
        ),
        flight(
            "AA1234",
            "AAL",
            ("LAX", "JFK"),
            (at(2024, 1, 15, 14, 0), at(2024, 1, 15, 22, 30)),
            (Some(at(2024, 1, 15, 14, 20)), Some(at(2024, 1, 15, 22, 50))),
            FlightStatus::Arrived,
            "Boeing 737-800",
            3975.0,
        ),
    ]
}

/// One general and one dangerous-goods shipment.
pub fn sample_cargo() -> Vec<CargoItem> {
    vec![
        CargoItem {
            flight_number: "FX5101".to_string(),
            waybill_number: "FX7894561230".to_string(),
            shipper_name: "MedTech Solutions Inc.".to_string(),
            consignee_name: "Alaska Medical Supplies".to_string(),
            cargo_description: "Medical equipment and supplies".to_string(),
            weight_kg: Some(4500.50),
            volume_cubic_m: Some(12.5),
            special_handling: Some(SpecialHandling::TemperatureControlled),
            hazardous_material: false,
            hazmat_class: None,
            created_at: Some(at(2024, 1, 15, 10, 0)),
        },
        CargoItem {
            flight_number: "5Y800".to_string(),
            waybill_number: "5Y20240115002".to_string(),
            shipper_name: "ChemTech Laboratories".to_string(),
            consignee_name: "Shanghai Pharmaceutical Co.".to_string(),
            cargo_description: "Lithium-ion batteries for medical devices".to_string(),
            weight_kg: Some(650.25),
            volume_cubic_m: Some(2.1),
            special_handling: Some(SpecialHandling::DangerousGoods),
            hazardous_material: true,
            hazmat_class: Some("Class 9".to_string()),
            created_at: Some(at(2024, 1, 15, 15, 0)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_flights_cover_in_flight_and_arrived() {
        let flights = sample_flights();
        assert_eq!(flights.len(), 4);
        assert_eq!(
            flights
                .iter()
                .filter(|f| f.status == FlightStatus::InFlight)
                .count(),
            1
        );
        assert_eq!(flights[0].departure_delay_minutes(), Some(15));
        assert!(flights[2].actual_arrival.is_none());
    }

    #[test]
    fn sample_cargo_has_one_hazmat_item() {
        let cargo = sample_cargo();
        assert_eq!(cargo.len(), 2);
        assert!(!cargo[0].hazardous_material);
        assert!(cargo[1].hazardous_material);
        assert_eq!(cargo[1].special_handling, Some(SpecialHandling::DangerousGoods));
    }
}
