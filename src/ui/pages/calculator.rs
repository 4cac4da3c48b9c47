use dioxus::prelude::*;

use crate::domain::{AppState, PriceQuote};
use crate::ui::components::{price_card::PriceCard, tier_badge::TierBadge};
use crate::ui::theme;
use crate::util::format::{format_ratio, format_usd};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.role);
    let region = state.with(|st| st.region.clone());

    let on_quote = {
        let mut state = state.clone();
        move |quote: PriceQuote| {
            state.with_mut(|st| st.push_quote(quote));
        }
    };

    let history = state.with(|st| st.quote_history.clone());

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-lg font-semibold {theme::text_secondary(role)}", "Price Calculator" }
                p { class: "text-xs text-slate-500", "Quoting for {region}. Change the region in settings." }
            }

            div {
                class: "grid gap-6 lg:grid-cols-[3fr,2fr]",
                PriceCard { role, on_quote }

                div {
                    class: "space-y-3",
                    h2 { class: "text-sm font-semibold text-slate-200", "Recent Quotes" }
                    if history.is_empty() {
                        p {
                            class: "rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-6 text-sm text-slate-500",
                            "No quotes yet this session."
                        }
                    } else {
                        ul { class: "space-y-2",
                            for quote in history {
                                HistoryRow { quote }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(quote: PriceQuote) -> Element {
    let tier_id = quote.tier.as_ref().map(|tier| tier.id);
    let final_price = format_usd(quote.final_price);
    let base_price = format_usd(quote.base_price);
    let ratio = format_ratio(quote.ratio);
    let supply = format!("{:.0}", quote.supply);
    let demand = format!("{:.0}", quote.demand);

    rsx! {
        li {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 px-4 py-3",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm font-semibold text-slate-100", "{final_price}" }
                TierBadge { tier: tier_id }
            }
            p { class: "mt-1 text-xs text-slate-500",
                "{quote.region} · base {base_price} · supply {supply}t / demand {demand}t · ratio {ratio}"
            }
        }
    }
}
