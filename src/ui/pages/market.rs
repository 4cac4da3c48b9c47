use dioxus::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::domain::{tick_market, AppState, TierId, TICK_INTERVAL};
use crate::ui::components::{kpi_card::KpiCard, market_table::MarketTable};
use crate::ui::theme;
use crate::util::format::format_usd;

#[component]
pub fn MarketPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.role);

    // Background ticker that nudges the mock market every few seconds.
    let _ticker = use_future({
        let state = state.clone();
        move || {
            let mut state = state.clone();
            async move {
                let mut rng = StdRng::from_entropy();
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    state.with_mut(|st| {
                        let engine = st.engine.clone();
                        tick_market(&mut st.market, &engine, &mut rng);
                    });
                }
            }
        }
    });

    let rows = state.with(|st| st.market.clone());

    let market_count = rows.len();
    let shortage_count = rows
        .iter()
        .filter(|row| {
            matches!(
                row.tier,
                Some(TierId::CriticalShortage) | Some(TierId::Shortage)
            )
        })
        .count();
    let surplus_count = rows
        .iter()
        .filter(|row| row.tier == Some(TierId::Surplus))
        .count();
    let avg_price = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|row| row.price_usd).sum::<f64>() / rows.len() as f64
    };

    rsx! {
        div { class: "space-y-8",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-lg font-semibold {theme::text_secondary(role)}", "Market Overview" }
                div {
                    class: "flex items-center gap-2 text-xs text-slate-400",
                    span { class: "live-dot inline-block h-2 w-2 rounded-full bg-emerald-400" }
                    "Live · updates every 5s"
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard {
                    title: "Markets Tracked".to_string(),
                    value: market_count.to_string(),
                    description: Some("Across all regions".to_string()),
                    role,
                }
                KpiCard {
                    title: "Shortage Markets".to_string(),
                    value: shortage_count.to_string(),
                    description: Some("Price raised to slow demand".to_string()),
                    role,
                }
                KpiCard {
                    title: "Surplus Markets".to_string(),
                    value: surplus_count.to_string(),
                    description: Some("Price lowered to move stock".to_string()),
                    role,
                }
                KpiCard {
                    title: "Average Price".to_string(),
                    value: format_usd(avg_price),
                    description: Some("Mean across market rows (USD/kg)".to_string()),
                    role,
                }
            }

            MarketTable { rows, role }
        }
    }
}
