//! Rule-based pricing engine.
//!
//! - Maps (supply, demand, base price, seasonal factor) to a fair price,
//!   a tier classification, and an auditable explanation string.
//! - Deterministic and side-effect free; every page shares the same engine
//!   instead of carrying its own copy of the tier table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifiers for the four supply/demand regimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierId {
    CriticalShortage,
    Shortage,
    Balanced,
    Surplus,
}

/// One ratio band of the piecewise adjustment rule.
///
/// Bands are inclusive on the lower bound and exclusive on the upper;
/// `ratio_max == None` marks the open-ended top tier.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub id: TierId,
    pub label: &'static str,
    pub summary: &'static str,
    pub ratio_min: f64,
    pub ratio_max: Option<f64>,
    pub multiplier: f64,
}

impl PricingTier {
    pub fn matches(&self, ratio: f64) -> bool {
        ratio >= self.ratio_min && self.ratio_max.map(|max| ratio < max).unwrap_or(true)
    }

    /// Signed adjustment in percent, e.g. `15.0` for a 1.15 multiplier.
    pub fn adjustment_pct(&self) -> f64 {
        (self.multiplier - 1.0) * 100.0
    }

    /// Display form of the adjustment, e.g. "+15%", "-10%" or "0%".
    pub fn adjustment_label(&self) -> String {
        let pct = self.adjustment_pct();
        if pct.abs() < f64::EPSILON {
            "0%".to_string()
        } else {
            format!("{pct:+.0}%")
        }
    }
}

/// Outer clamp on total price movement, applied after tier and season.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HardLimits {
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl HardLimits {
    fn clamp(&self, base_price: f64, raw: f64) -> f64 {
        raw.clamp(
            base_price * self.min_multiplier,
            base_price * self.max_multiplier,
        )
    }
}

/// Static engine configuration: tier table, hard limits and the accepted
/// seasonal factor band. Loaded once at startup and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingConfig {
    pub tiers: Vec<PricingTier>,
    pub limits: HardLimits,
    pub seasonal_band: (f64, f64),
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                PricingTier {
                    id: TierId::CriticalShortage,
                    label: "Critical Shortage",
                    summary: "demand far exceeds supply",
                    ratio_min: 1.30,
                    ratio_max: None,
                    multiplier: 1.15,
                },
                PricingTier {
                    id: TierId::Shortage,
                    label: "Shortage",
                    summary: "demand exceeds supply",
                    ratio_min: 1.10,
                    ratio_max: Some(1.30),
                    multiplier: 1.08,
                },
                PricingTier {
                    id: TierId::Balanced,
                    label: "Balanced",
                    summary: "supply and demand in equilibrium",
                    ratio_min: 0.80,
                    ratio_max: Some(1.10),
                    multiplier: 1.00,
                },
                PricingTier {
                    id: TierId::Surplus,
                    label: "Surplus",
                    summary: "supply exceeds demand",
                    ratio_min: 0.0,
                    ratio_max: Some(0.80),
                    multiplier: 0.90,
                },
            ],
            limits: HardLimits {
                min_multiplier: 0.70,
                max_multiplier: 1.50,
            },
            seasonal_band: (0.5, 2.0),
        }
    }
}

impl PricingConfig {
    /// Checks that the tiers partition `[0, ∞)` with no gaps or overlaps.
    pub fn validate(&self) -> Result<(), PricingError> {
        let mut tiers = self.tiers.clone();
        tiers.sort_by(|a, b| {
            a.ratio_min
                .partial_cmp(&b.ratio_min)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let Some(first) = tiers.first() else {
            return Err(PricingError::InvalidInput(
                "pricing config has no tiers".to_string(),
            ));
        };
        if first.ratio_min != 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "tier table does not start at ratio 0 (starts at {})",
                first.ratio_min
            )));
        }

        for pair in tiers.windows(2) {
            match pair[0].ratio_max {
                Some(max) if max == pair[1].ratio_min => {}
                Some(max) => {
                    return Err(PricingError::InvalidInput(format!(
                        "gap or overlap between tiers at ratio {max} vs {}",
                        pair[1].ratio_min
                    )));
                }
                None => {
                    return Err(PricingError::InvalidInput(
                        "open-ended tier is not the last tier".to_string(),
                    ));
                }
            }
        }

        if let Some(last) = tiers.last() {
            if last.ratio_max.is_some() {
                return Err(PricingError::InvalidInput(
                    "tier table does not cover the open-ended top of the ratio domain".to_string(),
                ));
            }
        }

        if self.limits.min_multiplier <= 0.0 || self.limits.max_multiplier < self.limits.min_multiplier
        {
            return Err(PricingError::InvalidInput(
                "hard limits are not a valid band".to_string(),
            ));
        }

        Ok(())
    }

    pub fn tier_for_ratio(&self, ratio: f64) -> Option<&PricingTier> {
        self.tiers.iter().find(|tier| tier.matches(ratio))
    }
}

/// How the final price is rounded before being handed to the caller.
/// Presentation concern, so it is a parameter rather than baked in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Nearest whole currency unit (the reference behavior).
    #[default]
    WholeUnits,
    /// Two decimal places, for currencies quoted in minor units.
    Cents,
    /// No rounding at all.
    Exact,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::WholeUnits => value.round(),
            Rounding::Cents => (value * 100.0).round() / 100.0,
            Rounding::Exact => value,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Inputs for one price calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRequest {
    pub region: String,
    pub supply: f64,
    pub demand: f64,
    pub base_price: f64,
    pub seasonal_factor: f64,
    pub rounding: Rounding,
}

impl QuoteRequest {
    pub fn new(region: impl Into<String>, supply: f64, demand: f64, base_price: f64) -> Self {
        Self {
            region: region.into(),
            supply,
            demand,
            base_price,
            seasonal_factor: 1.0,
            rounding: Rounding::default(),
        }
    }

    pub fn with_seasonal_factor(mut self, factor: f64) -> Self {
        self.seasonal_factor = factor;
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

/// A computed price, produced fresh on every calculation and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceQuote {
    pub region: String,
    pub base_price: f64,
    pub supply: f64,
    pub demand: f64,
    /// `None` in the degenerate no-supply case.
    pub ratio: Option<f64>,
    /// `None` in the degenerate no-supply case.
    pub tier: Option<PricingTier>,
    pub raw_adjusted_price: f64,
    pub final_price: f64,
    pub reason: String,
}

impl PriceQuote {
    pub fn adjustment_label(&self) -> String {
        self.tier
            .as_ref()
            .map(|tier| tier.adjustment_label())
            .unwrap_or_else(|| "0%".to_string())
    }
}

/// The engine itself: an immutable config plus a pure `calculate`.
#[derive(Clone, Debug)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self {
            config: PricingConfig::default(),
        }
    }
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Computes a fair price for the given market snapshot.
    ///
    /// Either returns a complete quote or fails with `InvalidInput`;
    /// callers must not fall back to a stale quote on failure.
    pub fn calculate(&self, request: &QuoteRequest) -> Result<PriceQuote, PricingError> {
        self.validate_request(request)?;

        if request.supply == 0.0 {
            let final_price = request.rounding.apply(request.base_price);
            return Ok(PriceQuote {
                region: request.region.clone(),
                base_price: request.base_price,
                supply: request.supply,
                demand: request.demand,
                ratio: None,
                tier: None,
                raw_adjusted_price: request.base_price,
                final_price,
                reason: "No supply available - using base price".to_string(),
            });
        }

        let ratio = request.demand / request.supply;
        let tier = self
            .config
            .tier_for_ratio(ratio)
            .ok_or_else(|| {
                PricingError::InvalidInput(format!("no pricing tier matches ratio {ratio}"))
            })?
            .clone();

        let raw_adjusted_price = request.base_price * tier.multiplier * request.seasonal_factor;
        let clamped = self.config.limits.clamp(request.base_price, raw_adjusted_price);
        let final_price = request.rounding.apply(clamped);

        let reason = format!(
            "{} - {} ({})",
            tier.label,
            tier.summary,
            tier.adjustment_label()
        );

        Ok(PriceQuote {
            region: request.region.clone(),
            base_price: request.base_price,
            supply: request.supply,
            demand: request.demand,
            ratio: Some(ratio),
            tier: Some(tier),
            raw_adjusted_price,
            final_price,
            reason,
        })
    }

    fn validate_request(&self, request: &QuoteRequest) -> Result<(), PricingError> {
        if !request.base_price.is_finite() || request.base_price <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "base price must be positive (got {})",
                request.base_price
            )));
        }
        if !request.supply.is_finite() || request.supply < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "supply must be non-negative (got {})",
                request.supply
            )));
        }
        if !request.demand.is_finite() || request.demand < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "demand must be non-negative (got {})",
                request.demand
            )));
        }
        let (lo, hi) = self.config.seasonal_band;
        if !request.seasonal_factor.is_finite()
            || request.seasonal_factor < lo
            || request.seasonal_factor > hi
        {
            return Err(PricingError::InvalidInput(format!(
                "seasonal factor must be within [{lo}, {hi}] (got {})",
                request.seasonal_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    fn quote(supply: f64, demand: f64, base_price: f64) -> PriceQuote {
        engine()
            .calculate(&QuoteRequest::new("Test Region", supply, demand, base_price))
            .expect("valid input")
    }

    #[test]
    fn critical_shortage_scenario() {
        let result = quote(100.0, 150.0, 10_000.0);
        assert_eq!(result.ratio, Some(1.5));
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::CriticalShortage));
        assert_eq!(result.final_price, 11_500.0);
        assert_eq!(
            result.reason,
            "Critical Shortage - demand far exceeds supply (+15%)"
        );
    }

    #[test]
    fn shortage_scenario() {
        let result = quote(100.0, 120.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::Shortage));
        assert_eq!(result.final_price, 10_800.0);
    }

    #[test]
    fn balanced_scenario() {
        let result = quote(100.0, 100.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::Balanced));
        assert_eq!(result.final_price, 10_000.0);
        assert_eq!(
            result.reason,
            "Balanced - supply and demand in equilibrium (0%)"
        );
    }

    #[test]
    fn surplus_scenario() {
        let result = quote(100.0, 70.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::Surplus));
        assert_eq!(result.final_price, 9_000.0);
        assert_eq!(result.reason, "Surplus - supply exceeds demand (-10%)");
    }

    #[test]
    fn no_supply_uses_base_price() {
        let result = quote(0.0, 50.0, 10_000.0);
        assert_eq!(result.final_price, 10_000.0);
        assert_eq!(result.ratio, None);
        assert!(result.tier.is_none());
        assert!(result.reason.contains("No supply"));

        // Demand does not matter once supply is gone.
        let heavy = quote(0.0, 9_999.0, 10_000.0);
        assert_eq!(heavy.final_price, 10_000.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive_lower_exclusive_upper() {
        // ratio == 1.30 -> Critical Shortage, not Shortage
        let result = quote(100.0, 130.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::CriticalShortage));

        // ratio == 1.10 -> Shortage, not Balanced
        let result = quote(100.0, 110.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::Shortage));

        // ratio == 0.80 -> Balanced, not Surplus
        let result = quote(100.0, 80.0, 10_000.0);
        assert_eq!(result.tier.as_ref().map(|t| t.id), Some(TierId::Balanced));
    }

    #[test]
    fn every_ratio_matches_exactly_one_tier() {
        let config = PricingConfig::default();
        let mut ratio = 0.0;
        while ratio < 3.0 {
            let matched = config.tiers.iter().filter(|tier| tier.matches(ratio)).count();
            assert_eq!(matched, 1, "ratio {ratio} matched {matched} tiers");
            ratio += 0.01;
        }
    }

    #[test]
    fn negative_base_price_is_rejected() {
        let result = engine().calculate(&QuoteRequest::new("Test", 100.0, 100.0, -5.0));
        assert!(matches!(result, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn negative_supply_and_demand_are_rejected() {
        let err = engine().calculate(&QuoteRequest::new("Test", -1.0, 100.0, 10.0));
        assert!(matches!(err, Err(PricingError::InvalidInput(_))));
        let err = engine().calculate(&QuoteRequest::new("Test", 100.0, -1.0, 10.0));
        assert!(matches!(err, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn seasonal_factor_outside_band_is_rejected() {
        for factor in [0.49, 2.01, 0.0, -1.0, f64::NAN] {
            let request =
                QuoteRequest::new("Test", 100.0, 100.0, 10.0).with_seasonal_factor(factor);
            let result = engine().calculate(&request);
            assert!(
                matches!(result, Err(PricingError::InvalidInput(_))),
                "factor {factor} should be rejected"
            );
        }
    }

    #[test]
    fn final_price_stays_within_hard_limits() {
        let engine = engine();
        let base_price = 10_000.0;
        let scenarios = [
            (100.0, 500.0), // deep critical shortage
            (100.0, 130.0),
            (100.0, 110.0),
            (100.0, 100.0),
            (100.0, 10.0), // deep surplus
        ];
        let mut factor = 0.5;
        while factor <= 2.0 {
            for (supply, demand) in scenarios {
                let request = QuoteRequest::new("Test", supply, demand, base_price)
                    .with_seasonal_factor(factor)
                    .with_rounding(Rounding::Exact);
                let result = engine.calculate(&request).expect("valid input");
                assert!(
                    result.final_price >= base_price * 0.70 - 1e-9,
                    "price {} below floor at factor {factor}",
                    result.final_price
                );
                assert!(
                    result.final_price <= base_price * 1.50 + 1e-9,
                    "price {} above ceiling at factor {factor}",
                    result.final_price
                );
            }
            factor += 0.1;
        }
    }

    #[test]
    fn hard_limit_caps_stacked_multipliers() {
        // 1.15 tier x 2.0 season = 2.30 raw, clamped to +50%.
        let request = QuoteRequest::new("Test", 100.0, 150.0, 10_000.0).with_seasonal_factor(2.0);
        let result = engine().calculate(&request).expect("valid input");
        assert!((result.raw_adjusted_price - 23_000.0).abs() < 1e-6);
        assert_eq!(result.final_price, 15_000.0);
    }

    #[test]
    fn identical_inputs_yield_identical_quotes() {
        let request = QuoteRequest::new("Test", 87.0, 113.0, 4_250.0).with_seasonal_factor(1.3);
        let engine = engine();
        let first = engine.calculate(&request).expect("valid input");
        let second = engine.calculate(&request).expect("valid input");
        assert_eq!(first, second);
    }

    #[test]
    fn rounding_modes() {
        let request = QuoteRequest::new("Test", 100.0, 120.0, 99.99);
        let whole = engine().calculate(&request.clone()).expect("valid input");
        assert_eq!(whole.final_price, 108.0);

        let cents = engine()
            .calculate(&request.clone().with_rounding(Rounding::Cents))
            .expect("valid input");
        assert_eq!(cents.final_price, 107.99);

        let exact = engine()
            .calculate(&request.with_rounding(Rounding::Exact))
            .expect("valid input");
        assert!((exact.final_price - 107.9892).abs() < 1e-9);
    }

    #[test]
    fn config_with_gap_is_rejected() {
        let mut config = PricingConfig::default();
        // Open a gap between Balanced and Shortage.
        config.tiers[2].ratio_max = Some(1.05);
        assert!(PricingEngine::new(config).is_err());
    }

    #[test]
    fn config_without_open_top_is_rejected() {
        let mut config = PricingConfig::default();
        config.tiers[0].ratio_max = Some(10.0);
        assert!(PricingEngine::new(config).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }
}
