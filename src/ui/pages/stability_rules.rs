use dioxus::prelude::*;

use crate::domain::{AppState, PricingTier, QuoteRequest};
use crate::ui::components::tier_badge::TierBadge;
use crate::ui::theme;
use crate::util::format::format_usd;

/// Explains how prices are stabilized. Everything shown here is read from
/// the live engine config, so this page can never drift from what the
/// calculator actually does.
#[component]
pub fn StabilityRulesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.role);
    let config = state.with(|st| st.engine.config().clone());

    let min_pct = config.limits.min_multiplier * 100.0;
    let max_pct = config.limits.max_multiplier * 100.0;
    let band_label = format!("{min_pct:.0}% to {max_pct:.0}% of base price");
    let (season_min, season_max) = config.seasonal_band;
    let season_label = format!("{season_min:.1} to {season_max:.1}");

    let examples = state.with(|st| {
        [
            ("Severe shortage", 100.0, 150.0),
            ("Mild shortage", 100.0, 120.0),
            ("Balanced market", 100.0, 100.0),
            ("Oversupply", 150.0, 100.0),
        ]
        .into_iter()
        .filter_map(|(name, supply, demand)| {
            let request = QuoteRequest::new("Example", supply, demand, 100.0);
            st.engine
                .calculate(&request)
                .ok()
                .map(|quote| (name, supply, demand, quote))
        })
        .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "text-lg font-semibold {theme::text_secondary(role)}", "Stability Rules" }
                p { class: "mt-1 text-sm text-slate-400",
                    "Prices respond to the demand-to-supply ratio in four steps, then a hard safety band caps the total move."
                }
            }

            section {
                class: "{theme::table_container(role)}",
                table {
                    class: "min-w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "{theme::table_header(role)} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Tier" }
                            th { class: "px-4 py-3 font-medium", "Demand / Supply" }
                            th { class: "px-4 py-3 font-medium text-right", "Adjustment" }
                            th { class: "px-4 py-3 font-medium", "Meaning" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-800",
                        for tier in config.tiers.clone() {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3", TierBadge { tier: Some(tier.id) } }
                                td { class: "px-4 py-3 text-slate-300", "{ratio_range_label(&tier)}" }
                                td { class: "px-4 py-3 text-right font-medium text-slate-100", "{tier.adjustment_label()}" }
                                td { class: "px-4 py-3 text-slate-400", "{tier.summary}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "grid gap-4 sm:grid-cols-2",
                div {
                    class: "{theme::panel_border(role)} p-5",
                    h2 { class: "{theme::label_class(role)}", "Hard Safety Band" }
                    p { class: "mt-2 text-xl font-semibold {theme::text_secondary(role)}", "{band_label}" }
                    p { class: "mt-2 text-xs text-slate-500",
                        "No matter how extreme the market or the season, the final price never leaves this band around the base price."
                    }
                }
                div {
                    class: "{theme::panel_border(role)} p-5",
                    h2 { class: "{theme::label_class(role)}", "Seasonal Factor" }
                    p { class: "mt-2 text-xl font-semibold {theme::text_secondary(role)}", "{season_label}" }
                    p { class: "mt-2 text-xs text-slate-500",
                        "Optional multiplier for harvest cycles, applied before the safety band. Values outside this range are rejected."
                    }
                }
            }

            section {
                class: "space-y-3",
                h2 { class: "text-sm font-semibold text-slate-200", "Worked Examples" }
                p { class: "text-xs text-slate-500", "Base price $100.00, computed by the same engine the calculator uses." }
                div {
                    class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                    for (name, supply, demand, quote) in examples {
                        div {
                            class: "{theme::panel_border(role)} p-4",
                            p { class: "text-xs uppercase text-slate-500", "{name}" }
                            p { class: "mt-1 text-xs text-slate-400", "Supply {supply:.0}t · Demand {demand:.0}t" }
                            p { class: "mt-2 text-lg font-semibold {theme::text_accent(role)}", "{format_usd(quote.final_price)}" }
                            div { class: "mt-2", TierBadge { tier: quote.tier.as_ref().map(|t| t.id) } }
                        }
                    }
                }
            }
        }
    }
}

fn ratio_range_label(tier: &PricingTier) -> String {
    match tier.ratio_max {
        Some(max) => format!("{:.2} to {:.2}", tier.ratio_min, max),
        None => format!("{:.2} and above", tier.ratio_min),
    }
}
