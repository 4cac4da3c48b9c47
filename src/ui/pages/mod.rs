pub mod calculator;
pub mod global_prices;
pub mod market;
pub mod role_select;
pub mod settings;
pub mod stability_rules;

pub use calculator::CalculatorPage;
pub use global_prices::GlobalPricesPage;
pub use market::MarketPage;
pub use role_select::RoleSelectPage;
pub use settings::SettingsPage;
pub use stability_rules::StabilityRulesPage;
