use std::future::Future;
use std::marker::PhantomData;

use aerodesk_records::{FetchedRecords, RecordKind, RecordSource};
use aerodesk_types::{BackendError, CargoItem, Flight};
use chrono::NaiveDate;

use crate::service::BackendClient;

/// Optional narrowing of `GET /flights`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightFilter {
    pub flight_number: Option<String>,
    pub date: Option<NaiveDate>,
}

impl FlightFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(number) = &self.flight_number {
            pairs.push(("flight_number", number.clone()));
        }
        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// A backend collection endpoint, e.g. `GET /cargo`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource<T> {
    client: BackendClient,
    query: Vec<(&'static str, String)>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: RecordKind> HttpRecordSource<T> {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            query: Vec::new(),
            _kind: PhantomData,
        }
    }
}

impl HttpRecordSource<Flight> {
    pub fn flights(client: BackendClient, filter: &FlightFilter) -> Self {
        Self {
            query: filter.query_pairs(),
            ..Self::new(client)
        }
    }
}

impl HttpRecordSource<CargoItem> {
    pub fn cargo(client: BackendClient) -> Self {
        Self::new(client)
    }
}

impl<T: RecordKind> RecordSource<T> for HttpRecordSource<T> {
    fn fetch(&self) -> impl Future<Output = Result<FetchedRecords<T>, BackendError>> + Send {
        let client = self.client.clone();
        let query = self.query.clone();
        async move {
            let payload = client.collection(T::COLLECTION, &query).await?;
            FetchedRecords::from_payload(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_filter_builds_query_pairs() {
        let filter = FlightFilter {
            flight_number: Some("UA901".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("flight_number", "UA901".to_string()),
                ("date", "2024-01-15".to_string())
            ]
        );
        assert!(FlightFilter::default().query_pairs().is_empty());
    }
}
