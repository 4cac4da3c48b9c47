pub mod kpi_card;
pub mod market_table;
pub mod price_card;
pub mod tier_badge;
pub mod toast;
