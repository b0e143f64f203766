//! The operator console: one assistant session plus the flight and cargo
//! views, driven one command at a time.

use aerodesk_client::{BackendClient, FlightFilter, HttpRecordSource};
use aerodesk_records::{CargoView, RecordFetcher, RecordView};
use aerodesk_session::ConversationSession;
use aerodesk_types::{CargoItem, Flight, QueryContext};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::render;

type FlightFetcher = RecordFetcher<Flight, HttpRecordSource<Flight>>;
type CargoFetcher = RecordFetcher<CargoItem, HttpRecordSource<CargoItem>>;

pub struct Console {
    client: BackendClient,
    session: ConversationSession,
    flights: FlightFetcher,
    cargo: CargoFetcher,
    flight_view: RecordView<Flight>,
    cargo_view: CargoView,
}

impl Console {
    pub fn new(client: BackendClient) -> Self {
        let flights = RecordFetcher::with_default_fallback(HttpRecordSource::flights(
            client.clone(),
            &FlightFilter::default(),
        ));
        let cargo = RecordFetcher::with_default_fallback(HttpRecordSource::cargo(client.clone()));
        Self {
            client,
            session: ConversationSession::new(),
            flights,
            cargo,
            flight_view: RecordView::new(),
            cargo_view: CargoView::new(),
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Runs one command and returns its output, or `None` to quit.
    pub async fn execute(&mut self, command: Command) -> Option<String> {
        debug!(?command, "console command");
        let output = match command {
            Command::Ask { context, question } => self.ask(context, question).await,
            Command::Context(context) => {
                self.session.set_pending_context(context);
                format!("context set to {context}")
            }
            Command::History => render::transcript(self.session.transcript()),
            Command::Reset => {
                self.session.reset();
                "conversation cleared".to_string()
            }
            Command::Flights(term) => {
                self.flight_view.set_term(term);
                self.show_flights().await
            }
            Command::Cargo(term) => {
                self.cargo_view.set_term(term);
                self.show_cargo().await
            }
            Command::Refresh => {
                let (flights, cargo) = tokio::join!(self.flights.refresh(), self.cargo.refresh());
                format!(
                    "flights: {} records from {}\ncargo: {} records from {}",
                    flights.record_count,
                    render::origin(flights.source_state),
                    cargo.record_count,
                    render::origin(cargo.source_state)
                )
            }
            Command::Manifest(flight_number) => {
                match self.client.cargo_for_flight(&flight_number).await {
                    Ok(manifest) => render::manifest(&manifest),
                    Err(e) => format!("manifest lookup failed: {e}"),
                }
            }
            Command::Health => match self.client.health().await {
                Ok(status) => render::health(&status),
                Err(e) => format!("backend unreachable: {e}"),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return None,
        };
        Some(output)
    }

    async fn ask(&mut self, context: Option<QueryContext>, question: String) -> String {
        if let Some(context) = context {
            self.session.set_pending_context(context);
        }
        self.session.set_draft(question);

        let before = self.session.transcript().len();
        match self.session.submit_draft(&self.client).await {
            Ok(_) => render::transcript(&self.session.transcript()[before..]),
            Err(rejection) => format!("not sent: {rejection}"),
        }
    }

    async fn show_flights(&mut self) -> String {
        if !self.flights.source_state().is_ready() {
            self.flights.load().await;
        }
        let set = self.flights.snapshot();
        self.flight_view.refresh(&set);
        match (self.flight_view.filtered(), self.flight_view.shown_of_total()) {
            (Some(rows), Some(counts)) => render::flights(rows, counts, set.advisory.as_deref()),
            _ => "loading flights...".to_string(),
        }
    }

    async fn show_cargo(&mut self) -> String {
        if !self.cargo.source_state().is_ready() {
            self.cargo.load().await;
        }
        let set = self.cargo.snapshot();
        self.cargo_view.refresh(&set);
        match (
            self.cargo_view.filtered(),
            self.cargo_view.summary(),
            self.cargo_view.shown_of_total(),
        ) {
            (Some(rows), Some(summary), Some(counts)) => {
                render::cargo(rows, summary, counts, set.advisory.as_deref())
            }
            _ => "loading cargo...".to_string(),
        }
    }
}
