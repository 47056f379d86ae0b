//! Entity provider for the moment catalog.
//!
//! The provider owns the in-memory catalog and the rules for refreshing it
//! from an optional remote feed: full-replace ingestion (no diffing,
//! at-least-once tolerant), failures logged and the previous set retained,
//! and a purely client-side prepend for locally created moments. The
//! transport itself lives at the application edge; this crate only sees
//! fetch *results*.

use catalog::mock;
use catalog::records::{Creator, CreatorId, Moment, MomentId};
use catalog::store::MomentCatalog;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// The fetch itself failed (connection, HTTP status, timeout).
    Transport(String),
    /// The payload arrived but did not decode as a moment list.
    Decode(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "feed transport error: {msg}"),
            FeedError::Decode(msg) => write!(f, "feed payload error: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Decodes a fetched JSON array of moments.
pub fn decode_moments(json: &str) -> Result<Vec<Moment>, FeedError> {
    serde_json::from_str(json).map_err(|e| FeedError::Decode(e.to_string()))
}

#[derive(Debug)]
pub struct MomentProvider {
    catalog: MomentCatalog,
    stale: bool,
}

impl MomentProvider {
    pub fn new(moments: Vec<Moment>, creators: Vec<Creator>) -> Self {
        Self {
            catalog: MomentCatalog::new(moments, creators),
            stale: false,
        }
    }

    /// Provider seeded with the built-in dataset; the configuration used
    /// when no remote feed is present.
    pub fn with_mock_data() -> Self {
        Self::new(mock::moments(), mock::creators())
    }

    pub fn catalog(&self) -> &MomentCatalog {
        &self.catalog
    }

    pub fn moments(&self) -> &[Moment] {
        self.catalog.moments()
    }

    pub fn creators(&self) -> &[Creator] {
        self.catalog.creators()
    }

    pub fn moment(&self, id: &MomentId) -> Option<&Moment> {
        self.catalog.moment(id)
    }

    pub fn creator(&self, id: &CreatorId) -> Option<&Creator> {
        self.catalog.creator(id)
    }

    /// A change notification arrived; the active set should be re-fetched.
    pub fn notify_changed(&mut self) {
        self.stale = true;
    }

    /// Whether the driver should issue a fetch.
    pub fn needs_refresh(&self) -> bool {
        self.stale
    }

    /// Applies a fetch result.
    ///
    /// `Ok` replaces the whole active set. `Err` is logged and the previous
    /// set is retained; the stale flag clears either way, so there is no
    /// automatic retry until the next change notification re-arms it.
    pub fn ingest(&mut self, fetched: Result<Vec<Moment>, FeedError>) {
        self.stale = false;
        match fetched {
            Ok(moments) => {
                debug!(count = moments.len(), "moment feed replaced");
                self.catalog.replace_moments(moments);
            }
            Err(error) => {
                warn!(%error, "moment fetch failed; keeping previous set");
            }
        }
    }

    /// Prepends a locally created moment. Never synchronized upstream.
    pub fn add_moment(&mut self, moment: Moment) {
        self.catalog.prepend(moment);
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedError, MomentProvider, decode_moments};
    use catalog::mock;
    use catalog::records::MomentId;
    use pretty_assertions::assert_eq;

    #[test]
    fn ingest_replaces_the_full_set() {
        let mut provider = MomentProvider::with_mock_data();
        let replacement = vec![mock::moments().remove(1)];
        provider.ingest(Ok(replacement));
        assert_eq!(provider.moments().len(), 1);
        assert_eq!(provider.moments()[0].id, MomentId::from("m10"));
    }

    #[test]
    fn fetch_error_retains_previous_set() {
        let mut provider = MomentProvider::with_mock_data();
        let before = provider.moments().len();
        provider.notify_changed();
        provider.ingest(Err(FeedError::Transport("connection refused".to_string())));
        assert_eq!(provider.moments().len(), before);
        // No retry: the error consumed the stale flag.
        assert!(!provider.needs_refresh());
    }

    #[test]
    fn notification_marks_the_set_stale() {
        let mut provider = MomentProvider::with_mock_data();
        assert!(!provider.needs_refresh());
        provider.notify_changed();
        assert!(provider.needs_refresh());
        provider.ingest(Ok(mock::moments()));
        assert!(!provider.needs_refresh());
    }

    #[test]
    fn add_moment_prepends() {
        let mut provider = MomentProvider::with_mock_data();
        let mut m = mock::moments().remove(0);
        m.id = MomentId::from("local-1");
        provider.add_moment(m);
        assert_eq!(provider.moments()[0].id, MomentId::from("local-1"));
        assert_eq!(provider.moments()[1].id, MomentId::from("m1"));
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert!(decode_moments("[]").is_ok());
        let err = decode_moments("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }
}
