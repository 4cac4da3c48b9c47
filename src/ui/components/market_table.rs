use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::domain::{Availability, MarketEntry, Role, Trend};
use crate::ui::components::tier_badge::TierBadge;
use crate::ui::theme;
use crate::util::format::{format_change_pct, format_usd};

#[component]
pub fn MarketTable(rows: Vec<MarketEntry>, role: Role) -> Element {
    let sort_mode = use_signal(|| SortMode::Change);
    let current_sort = sort_mode();
    let count = rows.len();
    let is_empty = rows.is_empty();

    let mut rendered_rows = rows;
    sort_rows(&mut rendered_rows, current_sort);

    rsx! {
        div {
            class: "{theme::table_container(role)}",
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "Market Board" }
                span { class: "text-xs text-slate-500", "{count} markets" }
            }
            if !is_empty {
                div {
                    class: "flex flex-wrap items-center gap-2 border-b border-slate-800 bg-slate-950/40 px-4 py-2 text-xs uppercase tracking-wide text-slate-400",
                    span { "Sort:" }
                    button {
                        class: sort_button_class(current_sort == SortMode::Change),
                        onclick: {
                            let mut sort_mode = sort_mode.clone();
                            move |_| sort_mode.set(SortMode::Change)
                        },
                        "Change"
                    }
                    button {
                        class: sort_button_class(current_sort == SortMode::Price),
                        onclick: {
                            let mut sort_mode = sort_mode.clone();
                            move |_| sort_mode.set(SortMode::Price)
                        },
                        "Price"
                    }
                    button {
                        class: sort_button_class(current_sort == SortMode::Supply),
                        onclick: {
                            let mut sort_mode = sort_mode.clone();
                            move |_| sort_mode.set(SortMode::Supply)
                        },
                        "Supply"
                    }
                    button {
                        class: sort_button_class(current_sort == SortMode::Demand),
                        onclick: {
                            let mut sort_mode = sort_mode.clone();
                            move |_| sort_mode.set(SortMode::Demand)
                        },
                        "Demand"
                    }
                }
            }
            if is_empty {
                p { class: "px-4 py-6 text-sm text-slate-500", "No markets match the current filters." }
            } else {
                table {
                    class: "min-w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "sticky top-0 z-10 {theme::table_header(role)} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Product" }
                            th { class: "px-4 py-3 font-medium", "Market" }
                            th { class: "px-4 py-3 font-medium text-right", "Price (USD/kg)" }
                            th { class: "px-4 py-3 font-medium text-right", "Change" }
                            th { class: "px-4 py-3 font-medium text-right", "Supply (t)" }
                            th { class: "px-4 py-3 font-medium text-right", "Demand (t)" }
                            th { class: "px-4 py-3 font-medium", "Availability" }
                            th { class: "px-4 py-3 font-medium", "Tier" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-800",
                        for row in rendered_rows {
                            MarketRow { row }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MarketRow(row: MarketEntry) -> Element {
    let trend = row.trend();
    let price = format_usd(row.price_usd);
    let change = format_change_pct(row.change_pct);
    let arrow = trend.arrow();
    let supply = format!("{:.0}", row.supply);
    let demand = format!("{:.0}", row.demand);

    rsx! {
        tr {
            class: "hover:bg-slate-800/40",
            td {
                class: "px-4 py-3 font-medium text-slate-100",
                span { class: "mr-2", "{row.product.emoji}" }
                "{row.product.name}"
            }
            td {
                class: "px-4 py-3 text-slate-300",
                div { class: "flex flex-col",
                    span { class: "text-sm", "{row.flag} {row.province}" }
                    span { class: "text-xs text-slate-500", "{row.country} · {row.region}" }
                }
            }
            td { class: "px-4 py-3 text-right font-medium text-slate-100", "{price}" }
            td {
                class: "px-4 py-3 text-right {trend_class(trend)}",
                "{arrow} {change}"
            }
            td { class: "px-4 py-3 text-right text-slate-300", "{supply}" }
            td { class: "px-4 py-3 text-right text-slate-300", "{demand}" }
            td {
                class: "px-4 py-3",
                span {
                    class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {availability_class(row.availability)}",
                    "{row.availability.label()}"
                }
            }
            td {
                class: "px-4 py-3",
                TierBadge { tier: row.tier }
            }
        }
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-rose-300",
        Trend::Down => "text-emerald-300",
        Trend::Stable => "text-slate-400",
    }
}

fn availability_class(availability: Availability) -> &'static str {
    match availability {
        Availability::InStock => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        Availability::Limited => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        Availability::Scarce => "bg-rose-500/10 text-rose-300 border-rose-500/40",
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SortMode {
    Price,
    Change,
    Supply,
    Demand,
}

fn sort_button_class(active: bool) -> &'static str {
    if active {
        "rounded-md border border-indigo-500/60 bg-indigo-500/15 px-2 py-1 text-[11px] font-semibold text-indigo-100"
    } else {
        "rounded-md border border-slate-800 px-2 py-1 text-[11px] text-slate-400 transition hover:border-slate-600 hover:text-slate-200"
    }
}

fn sort_rows(rows: &mut Vec<MarketEntry>, mode: SortMode) {
    match mode {
        SortMode::Price => rows.sort_by(|a, b| compare_f64_desc(a.price_usd, b.price_usd)),
        SortMode::Change => {
            rows.sort_by(|a, b| compare_f64_desc(a.change_pct.abs(), b.change_pct.abs()))
        }
        SortMode::Supply => rows.sort_by(|a, b| compare_f64_desc(a.supply, b.supply)),
        SortMode::Demand => rows.sort_by(|a, b| compare_f64_desc(a.demand, b.demand)),
    }
}

fn compare_f64_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
