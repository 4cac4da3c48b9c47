//! Mock market catalog and the location filters over it.
//!
//! All rows are demo data; the ticker perturbs a copy held in `AppState`,
//! never this seed table.

use super::entities::{Availability, MarketEntry, ProductKind, Region, PRODUCT_KINDS};
use super::pricing::PricingEngine;

pub const REGIONS: &[Region] = &[
    Region { id: 1, name: "Southeast Asia" },
    Region { id: 2, name: "East Asia" },
    Region { id: 3, name: "South Asia" },
    Region { id: 4, name: "Middle East" },
    Region { id: 5, name: "Africa" },
    Region { id: 6, name: "Europe" },
    Region { id: 7, name: "North America" },
    Region { id: 8, name: "South America" },
];

struct SeedRow {
    region: &'static str,
    country: &'static str,
    province: &'static str,
    flag: &'static str,
    product: &'static str,
    price_usd: f64,
    supply: f64,
    demand: f64,
    availability: Availability,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow { region: "Southeast Asia", country: "Indonesia", province: "Java", flag: "🇮🇩", product: "rice", price_usd: 0.68, supply: 120.0, demand: 135.0, availability: Availability::InStock },
    SeedRow { region: "Southeast Asia", country: "Indonesia", province: "Sumatra", flag: "🇮🇩", product: "corn", price_usd: 0.42, supply: 140.0, demand: 110.0, availability: Availability::InStock },
    SeedRow { region: "Southeast Asia", country: "Thailand", province: "Central Thailand", flag: "🇹🇭", product: "rice", price_usd: 0.58, supply: 150.0, demand: 145.0, availability: Availability::InStock },
    SeedRow { region: "Southeast Asia", country: "Philippines", province: "Luzon", flag: "🇵🇭", product: "rice", price_usd: 0.72, supply: 90.0, demand: 128.0, availability: Availability::Limited },
    SeedRow { region: "Southeast Asia", country: "Vietnam", province: "Southern Vietnam", flag: "🇻🇳", product: "rice", price_usd: 0.60, supply: 160.0, demand: 150.0, availability: Availability::InStock },
    SeedRow { region: "East Asia", country: "China", province: "Shanghai", flag: "🇨🇳", product: "rice", price_usd: 0.72, supply: 200.0, demand: 210.0, availability: Availability::InStock },
    SeedRow { region: "East Asia", country: "Japan", province: "Kanto", flag: "🇯🇵", product: "rice", price_usd: 1.25, supply: 80.0, demand: 112.0, availability: Availability::Limited },
    SeedRow { region: "South Asia", country: "India", province: "Maharashtra", flag: "🇮🇳", product: "rice", price_usd: 0.52, supply: 220.0, demand: 260.0, availability: Availability::InStock },
    SeedRow { region: "South Asia", country: "Bangladesh", province: "Dhaka", flag: "🇧🇩", product: "rice", price_usd: 0.48, supply: 70.0, demand: 105.0, availability: Availability::Scarce },
    SeedRow { region: "Middle East", country: "Egypt", province: "Cairo", flag: "🇪🇬", product: "wheat", price_usd: 0.48, supply: 60.0, demand: 95.0, availability: Availability::Scarce },
    SeedRow { region: "Middle East", country: "Saudi Arabia", province: "Riyadh", flag: "🇸🇦", product: "wheat", price_usd: 0.75, supply: 110.0, demand: 100.0, availability: Availability::InStock },
    SeedRow { region: "Africa", country: "Nigeria", province: "Lagos", flag: "🇳🇬", product: "corn", price_usd: 0.62, supply: 95.0, demand: 118.0, availability: Availability::Limited },
    SeedRow { region: "Africa", country: "Kenya", province: "Nairobi", flag: "🇰🇪", product: "corn", price_usd: 0.58, supply: 130.0, demand: 96.0, availability: Availability::InStock },
    SeedRow { region: "Europe", country: "Germany", province: "Bavaria", flag: "🇩🇪", product: "wheat", price_usd: 0.68, supply: 180.0, demand: 140.0, availability: Availability::InStock },
    SeedRow { region: "Europe", country: "France", province: "Île-de-France", flag: "🇫🇷", product: "wheat", price_usd: 0.72, supply: 170.0, demand: 165.0, availability: Availability::InStock },
    SeedRow { region: "North America", country: "United States", province: "California", flag: "🇺🇸", product: "vegetables", price_usd: 0.52, supply: 210.0, demand: 190.0, availability: Availability::InStock },
    SeedRow { region: "North America", country: "Mexico", province: "Jalisco", flag: "🇲🇽", product: "corn", price_usd: 0.38, supply: 230.0, demand: 205.0, availability: Availability::InStock },
    SeedRow { region: "South America", country: "Brazil", province: "São Paulo", flag: "🇧🇷", product: "corn", price_usd: 0.38, supply: 260.0, demand: 180.0, availability: Availability::InStock },
    SeedRow { region: "South America", country: "Argentina", province: "Buenos Aires", flag: "🇦🇷", product: "wheat", price_usd: 0.42, supply: 190.0, demand: 175.0, availability: Availability::InStock },
    SeedRow { region: "South America", country: "Colombia", province: "Bogotá", flag: "🇨🇴", product: "tubers", price_usd: 0.52, supply: 85.0, demand: 120.0, availability: Availability::Limited },
];

fn product_kind(id: &str) -> ProductKind {
    PRODUCT_KINDS
        .iter()
        .copied()
        .find(|kind| kind.id == id)
        .unwrap_or(PRODUCT_KINDS[0])
}

/// Builds the initial market board, classifying every row through the
/// shared engine so the seed data and the rules page can never disagree.
pub fn seed_market(engine: &PricingEngine) -> Vec<MarketEntry> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let ratio = row.demand / row.supply;
            let tier = engine.config().tier_for_ratio(ratio).map(|tier| tier.id);
            MarketEntry {
                id: index as u32 + 1,
                region: row.region,
                country: row.country,
                province: row.province,
                flag: row.flag,
                product: product_kind(row.product),
                base_price_usd: row.price_usd,
                price_usd: row.price_usd,
                supply: row.supply,
                demand: row.demand,
                change_pct: 0.0,
                availability: row.availability,
                tier,
            }
        })
        .collect()
}

/// Cascading region -> country -> province filter for the Global Prices page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketFilter {
    pub region: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
}

impl MarketFilter {
    pub fn select_region(&mut self, region: Option<String>) {
        self.region = region;
        self.country = None;
        self.province = None;
    }

    pub fn select_country(&mut self, country: Option<String>) {
        self.country = country;
        self.province = None;
    }

    pub fn matches(&self, entry: &MarketEntry) -> bool {
        if let Some(region) = &self.region {
            if entry.region != region.as_str() {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if entry.country != country.as_str() {
                return false;
            }
        }
        if let Some(province) = &self.province {
            if entry.province != province.as_str() {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, entries: &'a [MarketEntry]) -> Vec<&'a MarketEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

pub fn countries_in(entries: &[MarketEntry], region: &str) -> Vec<&'static str> {
    let mut countries: Vec<&'static str> = entries
        .iter()
        .filter(|entry| entry.region == region)
        .map(|entry| entry.country)
        .collect();
    countries.sort_unstable();
    countries.dedup();
    countries
}

pub fn provinces_in(entries: &[MarketEntry], country: &str) -> Vec<&'static str> {
    let mut provinces: Vec<&'static str> = entries
        .iter()
        .filter(|entry| entry.country == country)
        .map(|entry| entry.province)
        .collect();
    provinces.sort_unstable();
    provinces.dedup();
    provinces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::TierId;

    #[test]
    fn seed_rows_all_classify() {
        let engine = PricingEngine::default();
        let market = seed_market(&engine);
        assert_eq!(market.len(), SEED_ROWS.len());
        for entry in &market {
            assert!(entry.tier.is_some(), "{} has no tier", entry.country);
            assert!(entry.supply > 0.0);
        }
    }

    #[test]
    fn seed_tier_matches_ratio() {
        let engine = PricingEngine::default();
        let market = seed_market(&engine);
        // Java: 135/120 = 1.125 -> Shortage
        let java = market.iter().find(|e| e.province == "Java").unwrap();
        assert_eq!(java.tier, Some(TierId::Shortage));
        // São Paulo: 180/260 ≈ 0.69 -> Surplus
        let sp = market.iter().find(|e| e.province == "São Paulo").unwrap();
        assert_eq!(sp.tier, Some(TierId::Surplus));
    }

    #[test]
    fn filter_cascades() {
        let engine = PricingEngine::default();
        let market = seed_market(&engine);

        let mut filter = MarketFilter::default();
        assert_eq!(filter.apply(&market).len(), market.len());

        filter.select_region(Some("Southeast Asia".to_string()));
        let rows = filter.apply(&market);
        assert!(rows.iter().all(|entry| entry.region == "Southeast Asia"));
        assert_eq!(rows.len(), 5);

        filter.country = Some("Indonesia".to_string());
        assert_eq!(filter.apply(&market).len(), 2);

        // Changing region resets the narrower selections.
        filter.select_region(Some("Europe".to_string()));
        assert!(filter.country.is_none());
        assert!(filter.province.is_none());
    }

    #[test]
    fn country_and_province_lookups_dedup() {
        let engine = PricingEngine::default();
        let market = seed_market(&engine);
        let countries = countries_in(&market, "Southeast Asia");
        assert_eq!(
            countries,
            vec!["Indonesia", "Philippines", "Thailand", "Vietnam"]
        );
        let provinces = provinces_in(&market, "Indonesia");
        assert_eq!(provinces, vec!["Java", "Sumatra"]);
    }
}
