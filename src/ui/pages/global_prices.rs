use dioxus::prelude::*;

use crate::domain::{countries_in, provinces_in, AppState, MarketFilter, REGIONS};
use crate::ui::components::market_table::MarketTable;
use crate::ui::theme;

/// Worldwide comparison board with region, country and province drill-down.
#[component]
pub fn GlobalPricesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.role);

    let mut filter = use_signal(MarketFilter::default);

    let entries = state.with(|st| st.market.clone());
    let current = filter();

    let countries = current
        .region
        .as_deref()
        .map(|region| countries_in(&entries, region))
        .unwrap_or_default();
    let provinces = current
        .country
        .as_deref()
        .map(|country| provinces_in(&entries, country))
        .unwrap_or_default();

    let rows = current
        .apply(&entries)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    let selected_region = current.region.clone().unwrap_or_default();
    let selected_country = current.country.clone().unwrap_or_default();
    let selected_province = current.province.clone().unwrap_or_default();

    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-lg font-semibold {theme::text_secondary(role)}", "Global Prices" }

            div {
                class: "{theme::panel_border(role)} flex flex-wrap items-end gap-4 px-4 py-4",
                div { class: "min-w-[180px]",
                    label { class: "{theme::label_class(role)}", "Region" }
                    select {
                        class: "mt-1 w-full {theme::select_class(role)}",
                        value: selected_region,
                        onchange: move |evt| {
                            let value = evt.value();
                            filter.with_mut(|f| {
                                f.select_region(if value.is_empty() { None } else { Some(value) })
                            });
                        },
                        option { value: "", "All regions" }
                        for region in REGIONS {
                            option { value: region.name, "{region.name}" }
                        }
                    }
                }
                div { class: "min-w-[180px]",
                    label { class: "{theme::label_class(role)}", "Country" }
                    select {
                        class: "mt-1 w-full {theme::select_class(role)}",
                        value: selected_country,
                        disabled: countries.is_empty(),
                        onchange: move |evt| {
                            let value = evt.value();
                            filter.with_mut(|f| {
                                f.select_country(if value.is_empty() { None } else { Some(value) })
                            });
                        },
                        option { value: "", "All countries" }
                        for country in countries.clone() {
                            option { value: country, "{country}" }
                        }
                    }
                }
                div { class: "min-w-[180px]",
                    label { class: "{theme::label_class(role)}", "Province" }
                    select {
                        class: "mt-1 w-full {theme::select_class(role)}",
                        value: selected_province,
                        disabled: provinces.is_empty(),
                        onchange: move |evt| {
                            let value = evt.value();
                            filter.with_mut(|f| {
                                f.province = if value.is_empty() { None } else { Some(value) };
                            });
                        },
                        option { value: "", "All provinces" }
                        for province in provinces.clone() {
                            option { value: province, "{province}" }
                        }
                    }
                }
                button {
                    class: "{theme::btn_secondary(role)}",
                    onclick: move |_| filter.set(MarketFilter::default()),
                    "Clear Filters"
                }
            }

            MarketTable { rows, role }
        }
    }
}
