use serde::{Deserialize, Serialize};

use super::entities::{MarketEntry, Role};
use super::market::seed_market;
use super::pricing::{PriceQuote, PricingEngine};

/// Default backend base URL. The backend is an external collaborator the
/// demo build never requires; see `infra::api`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Quotes kept on the calculator page before old ones are dropped.
const QUOTE_HISTORY_LIMIT: usize = 8;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Currently selected user role.
    pub role: Role,
    /// Region label stamped onto calculator quotes.
    pub region: String,
    /// Shared pricing engine; immutable after startup.
    pub engine: PricingEngine,
    /// Market board rows, perturbed in place by the ticker.
    pub market: Vec<MarketEntry>,
    /// Most recent calculator quotes, newest first.
    pub quote_history: Vec<PriceQuote>,
    pub api_base_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        let engine = PricingEngine::default();
        let market = seed_market(&engine);
        Self {
            role: Role::default(),
            region: "Demo Region".to_string(),
            engine,
            market,
            quote_history: Vec::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppState {
    pub fn push_quote(&mut self, quote: PriceQuote) {
        self.quote_history.insert(0, quote);
        self.quote_history.truncate(QUOTE_HISTORY_LIMIT);
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.role = persisted.role;
        if !persisted.region.is_empty() {
            self.region = persisted.region;
        }
        if !persisted.api_base_url.is_empty() {
            self.api_base_url = persisted.api_base_url;
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            role: self.role,
            region: self.region.clone(),
            api_base_url: self.api_base_url.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub api_base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::QuoteRequest;

    #[test]
    fn quote_history_is_bounded() {
        let mut state = AppState::default();
        for i in 0..20 {
            let quote = state
                .engine
                .calculate(&QuoteRequest::new("Test", 100.0, 100.0 + i as f64, 10.0))
                .expect("valid input");
            state.push_quote(quote);
        }
        assert_eq!(state.quote_history.len(), QUOTE_HISTORY_LIMIT);
        // Newest first.
        assert_eq!(state.quote_history[0].demand, 119.0);
    }

    #[test]
    fn persisted_round_trip() {
        let mut state = AppState::default();
        state.role = Role::Farmer;
        state.region = "Southeast Asia".to_string();
        state.api_base_url = "http://localhost:9000".to_string();

        let json = serde_json::to_string(&state.to_persisted()).expect("serialize");
        let restored: PersistedState = serde_json::from_str(&json).expect("deserialize");

        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.role, Role::Farmer);
        assert_eq!(fresh.region, "Southeast Asia");
        assert_eq!(fresh.api_base_url, "http://localhost:9000");
    }

    #[test]
    fn empty_persisted_fields_keep_defaults() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState::default());
        assert_eq!(state.region, "Demo Region");
        assert_eq!(state.api_base_url, DEFAULT_API_BASE_URL);
    }
}
