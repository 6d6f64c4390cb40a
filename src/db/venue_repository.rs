use std::path::{Path, PathBuf};
use std::sync::Arc;

use dwed_chat_core::matcher::fits;
use dwed_chat_core::Venue;
use tracing::error;

use crate::errors::AppError;
use crate::models::SearchFilter;

/// Venues served when no fixture file is configured.
const BUILTIN_VENUES: &str = include_str!("../../data/venues.json");

/// Read-only venue catalog loaded once at startup.
#[derive(Clone)]
pub struct VenueRepository {
    venues: Arc<Vec<Venue>>,
}

impl VenueRepository {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues: Arc::new(venues) }
    }

    pub fn builtin() -> Result<Self, AppError> {
        Self::parse(BUILTIN_VENUES, PathBuf::from("<built-in>"))
    }

    pub async fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!("Failed to read venue file {}: {e}", path.display());
            AppError::VenueFileUnreadable { path: path.to_path_buf(), source: e }
        })?;
        Self::parse(&raw, path.to_path_buf())
    }

    fn parse(raw: &str, path: PathBuf) -> Result<Self, AppError> {
        serde_json::from_str::<Vec<Venue>>(raw)
            .map(Self::new)
            .map_err(|source| AppError::VenueFileInvalid { path, source })
    }

    pub fn find_all(&self) -> &[Venue] {
        &self.venues
    }

    /// Distinct venue locations, in catalog order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for venue in self.venues.iter() {
            if !seen.iter().any(|l| l.eq_ignore_ascii_case(&venue.location)) {
                seen.push(&venue.location);
            }
        }
        seen
    }

    /// Venues matching `filter`, each stamped with the requested capacity (0 = none).
    ///
    /// With a capacity, a venue qualifies only if one of its halls fits the
    /// requested guest count window.
    pub fn search(&self, filter: &SearchFilter) -> Vec<Venue> {
        let requested = filter.capacity.unwrap_or(0);
        let location = filter.location.as_deref().map(str::to_lowercase);

        self.venues
            .iter()
            .filter(|venue| match &location {
                Some(location) => venue.location.to_lowercase().contains(location),
                None => true,
            })
            .filter(|venue| match filter.price_max {
                Some(max) => venue.banquets.iter().any(|hall| hall.price <= f64::from(max)),
                None => true,
            })
            .filter(|venue| {
                requested == 0 || venue.banquets.iter().any(|hall| fits(hall.capacity, requested))
            })
            .cloned()
            .map(|mut venue| {
                venue.requested_capacity = Some(requested);
                venue
            })
            .collect()
    }
}
