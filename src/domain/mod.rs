//! Domain logic for price stabilization lives here.

pub mod app_state;
pub mod entities;
pub mod market;
pub mod pricing;
pub mod simulator;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, DEFAULT_API_BASE_URL};
#[allow(unused_imports)]
pub use entities::{Availability, MarketEntry, ProductKind, Region, Role, Trend, PRODUCT_KINDS};
#[allow(unused_imports)]
pub use market::{countries_in, provinces_in, seed_market, MarketFilter, REGIONS};
#[allow(unused_imports)]
pub use pricing::{
    HardLimits, PriceQuote, PricingConfig, PricingEngine, PricingError, PricingTier, QuoteRequest,
    Rounding, TierId,
};
#[allow(unused_imports)]
pub use simulator::{tick_market, MAX_STEP_PCT, TICK_INTERVAL};
