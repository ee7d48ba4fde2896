//! Nearby bhandaras feed
//!
//! State of the listing screen. A fetch runs in three steps so that a
//! refresh can overlap a focus-triggered load: [`NearbyFeed::begin`] marks
//! the feed busy and hands out a ticket, [`fetch_nearby`] does the remote
//! work without touching the feed, and [`NearbyFeed::complete`] writes the
//! outcome. Outcomes land in completion order and the last one written wins;
//! nothing in flight is cancelled.

use tracing::{debug, warn};
use crate::models::Bhandara;
use crate::services::{BhandaraService, LocationProvider};
use crate::utils::errors::FeedError;
use crate::utils::logging::log_location_outcome;

/// How a fetch was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Screen gained focus or the user asked to retry
    Load,
    /// Pull-to-refresh; the current list stays visible
    Refresh,
}

/// Identifies one fetch from `begin` to `complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What the screen should render
#[derive(Debug, PartialEq)]
pub enum FeedView<'a> {
    Loading,
    Error(&'a FeedError),
    Empty,
    Events(&'a [Bhandara]),
}

#[derive(Debug, Default)]
pub struct NearbyFeed {
    bhandaras: Vec<Bhandara>,
    error: Option<FeedError>,
    loading: usize,
    refreshing: usize,
    issued: u64,
    last_completed: Option<FetchTicket>,
}

impl NearbyFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bhandaras(&self) -> &[Bhandara] {
        &self.bhandaras
    }

    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing > 0
    }

    pub fn last_completed(&self) -> Option<FetchTicket> {
        self.last_completed
    }

    pub fn view(&self) -> FeedView<'_> {
        if self.is_loading() && !self.is_refreshing() {
            return FeedView::Loading;
        }
        if let Some(error) = &self.error {
            if !self.is_refreshing() {
                return FeedView::Error(error);
            }
        }
        if self.bhandaras.is_empty() {
            FeedView::Empty
        } else {
            FeedView::Events(&self.bhandaras)
        }
    }

    /// Mark a fetch as started and clear the previous error
    pub fn begin(&mut self, mode: FetchMode) -> FetchTicket {
        match mode {
            FetchMode::Load => self.loading += 1,
            FetchMode::Refresh => self.refreshing += 1,
        }
        self.error = None;
        self.issued += 1;

        let ticket = FetchTicket(self.issued);
        debug!(ticket = ticket.0, mode = ?mode, "Nearby fetch started");
        ticket
    }

    /// Write the outcome of a fetch started with `begin`
    pub fn complete(&mut self, ticket: FetchTicket, mode: FetchMode, outcome: Result<Vec<Bhandara>, FeedError>) {
        match mode {
            FetchMode::Load => self.loading = self.loading.saturating_sub(1),
            FetchMode::Refresh => self.refreshing = self.refreshing.saturating_sub(1),
        }

        match outcome {
            Ok(bhandaras) => {
                debug!(ticket = ticket.0, count = bhandaras.len(), "Nearby fetch completed");
                self.bhandaras = bhandaras;
                self.error = None;
            }
            Err(e) => {
                warn!(ticket = ticket.0, error = %e, "Nearby fetch failed");
                self.error = Some(e);
            }
        }
        self.last_completed = Some(ticket);
    }

    /// Run a whole fetch: begin, fetch, complete
    pub async fn run(
        &mut self,
        mode: FetchMode,
        provider: &dyn LocationProvider,
        service: &dyn BhandaraService,
    ) -> Result<usize, FeedError> {
        let ticket = self.begin(mode);
        let outcome = fetch_nearby(provider, service).await;
        let result = outcome.as_ref().map(Vec::len).map_err(|e| e.clone());
        self.complete(ticket, mode, outcome);
        result
    }

    pub async fn load(&mut self, provider: &dyn LocationProvider, service: &dyn BhandaraService) -> Result<usize, FeedError> {
        self.run(FetchMode::Load, provider, service).await
    }

    pub async fn refresh(&mut self, provider: &dyn LocationProvider, service: &dyn BhandaraService) -> Result<usize, FeedError> {
        self.run(FetchMode::Refresh, provider, service).await
    }
}

/// Permission, then a fix, then the listing request
pub async fn fetch_nearby(
    provider: &dyn LocationProvider,
    service: &dyn BhandaraService,
) -> Result<Vec<Bhandara>, FeedError> {
    if !provider.request_permission().await {
        log_location_outcome("nearby", false, None);
        return Err(FeedError::PermissionDenied);
    }

    let fix = provider.current_location().await;
    log_location_outcome("nearby", true, fix);
    let coords = fix.ok_or(FeedError::LocationUnavailable)?;

    service.nearby_bhandaras(coords).await.map_err(FeedError::FetchFailed)
}
