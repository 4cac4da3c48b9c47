use serde::{Deserialize, Serialize};

use super::pricing::TierId;

/// User role for the current session. Governs theming and the copy shown
/// across the dashboard; the data underneath is the same for everyone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    None,
    Farmer,
    Distributor,
    Buyer,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::None => "None",
            Role::Farmer => "Farmer",
            Role::Distributor => "Distributor",
            Role::Buyer => "Buyer",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Role::None => "❓",
            Role::Farmer => "👨‍🌾",
            Role::Distributor => "🚚",
            Role::Buyer => "🛒",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Role::None => "",
            Role::Farmer => "fair prices for what you grow",
            Role::Distributor => "move food where it's needed",
            Role::Buyer => "stable prices, every day",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Role::None)
    }
}

/// A market region the demo can quote prices for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: u32,
    pub name: &'static str,
}

/// Staple product categories shown across the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductKind {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const PRODUCT_KINDS: &[ProductKind] = &[
    ProductKind { id: "rice", name: "Rice", emoji: "🌾" },
    ProductKind { id: "corn", name: "Corn", emoji: "🌽" },
    ProductKind { id: "wheat", name: "Wheat", emoji: "🥖" },
    ProductKind { id: "vegetables", name: "Vegetables", emoji: "🥬" },
    ProductKind { id: "tubers", name: "Tubers", emoji: "🥔" },
];

/// Stock availability shown in the market tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    InStock,
    Limited,
    Scarce,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::Limited => "Limited",
            Availability::Scarce => "Scarce",
        }
    }
}

/// Direction of the last simulated price move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "●",
        }
    }
}

/// One row of the global market board. Mock data perturbed by the ticker;
/// `base_price_usd` is the anchor the hard safety band is measured from.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketEntry {
    pub id: u32,
    pub region: &'static str,
    pub country: &'static str,
    pub province: &'static str,
    pub flag: &'static str,
    pub product: ProductKind,
    pub base_price_usd: f64,
    pub price_usd: f64,
    pub supply: f64,
    pub demand: f64,
    pub change_pct: f64,
    pub availability: Availability,
    pub tier: Option<TierId>,
}

impl MarketEntry {
    pub fn trend(&self) -> Trend {
        if self.change_pct > 0.05 {
            Trend::Up
        } else if self.change_pct < -0.05 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}
