use dioxus::prelude::*;

use crate::domain::{
    AppState, HardLimits, PriceQuote, PricingError, QuoteRequest, Role, Rounding,
};
use crate::infra::api::{ApiClient, CalculateRequest, RemoteQuote};
use crate::ui::components::tier_badge::TierBadge;
use crate::ui::theme;
use crate::util::format::{format_ratio, format_usd};

/// Supply/demand price calculator. Reads the shared engine, never a private
/// copy, so the result always agrees with the published stability rules.
#[component]
pub fn PriceCard(role: Role, on_quote: EventHandler<PriceQuote>) -> Element {
    let state = use_context::<Signal<AppState>>();

    let mut supply_input = use_signal(String::new);
    let mut demand_input = use_signal(String::new);
    let mut base_price_input = use_signal(String::new);
    let mut seasonal_input = use_signal(|| "1.0".to_string());
    let mut rounding_choice = use_signal(|| Rounding::WholeUnits);
    let mut result = use_signal(|| None::<Result<PriceQuote, PricingError>>);
    let remote_result = use_signal(|| None::<Result<RemoteQuote, String>>);
    let verifying = use_signal(|| false);

    let on_submit = {
        let state = state.clone();
        let supply_input = supply_input.clone();
        let demand_input = demand_input.clone();
        let base_price_input = base_price_input.clone();
        let seasonal_input = seasonal_input.clone();
        let rounding_choice = rounding_choice.clone();
        let mut result = result.clone();
        let on_quote = on_quote.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let supply = match parse_field(&supply_input(), "supply") {
                Ok(value) => value,
                Err(err) => {
                    result.set(Some(Err(err)));
                    return;
                }
            };
            let demand = match parse_field(&demand_input(), "demand") {
                Ok(value) => value,
                Err(err) => {
                    result.set(Some(Err(err)));
                    return;
                }
            };
            let base_price = match parse_field(&base_price_input(), "base price") {
                Ok(value) => value,
                Err(err) => {
                    result.set(Some(Err(err)));
                    return;
                }
            };
            let seasonal = match parse_field(&seasonal_input(), "seasonal factor") {
                Ok(value) => value,
                Err(err) => {
                    result.set(Some(Err(err)));
                    return;
                }
            };

            let quote = state.with(|st| {
                let request = QuoteRequest::new(st.region.clone(), supply, demand, base_price)
                    .with_seasonal_factor(seasonal)
                    .with_rounding(rounding_choice());
                st.engine.calculate(&request)
            });

            if let Ok(ref quote) = quote {
                on_quote.call(quote.clone());
            }
            result.set(Some(quote));
        }
    };

    // Optional cross-check against the backend's authoritative calculation.
    let on_verify = {
        let state = state.clone();
        let supply_input = supply_input.clone();
        let demand_input = demand_input.clone();
        let base_price_input = base_price_input.clone();
        let seasonal_input = seasonal_input.clone();
        let mut remote_result = remote_result.clone();
        let verifying = verifying.clone();
        move |_| {
            if verifying() {
                return;
            }
            let parsed = parse_field(&supply_input(), "supply").and_then(|supply| {
                let demand = parse_field(&demand_input(), "demand")?;
                let base_price = parse_field(&base_price_input(), "base price")?;
                let seasonal_factor = parse_field(&seasonal_input(), "seasonal factor")?;
                Ok(CalculateRequest {
                    supply,
                    demand,
                    base_price,
                    seasonal_factor,
                })
            });
            let request = match parsed {
                Ok(request) => request,
                Err(err) => {
                    remote_result.set(Some(Err(err.to_string())));
                    return;
                }
            };

            let base_url = state.with(|st| st.api_base_url.clone());
            let mut remote_result = remote_result.clone();
            let mut verifying = verifying.clone();
            verifying.set(true);
            spawn(async move {
                let outcome = match ApiClient::with_base_url(&base_url) {
                    Ok(client) => client
                        .calculate(&request)
                        .await
                        .map_err(|err| err.to_string()),
                    Err(err) => Err(err.to_string()),
                };
                remote_result.set(Some(outcome));
                verifying.set(false);
            });
        }
    };

    let current_result = result();
    let current_remote = remote_result();
    let current_rounding = rounding_choice();
    let limits = state.with(|st| st.engine.config().limits);

    rsx! {
        div {
            class: "{theme::panel_border(role)} p-5 space-y-5",
            h2 { class: "text-sm font-semibold {theme::text_secondary(role)}", "Price Calculator" }
            form {
                class: "grid gap-4 sm:grid-cols-2",
                onsubmit: on_submit,
                div {
                    label { class: "{theme::label_class(role)}", "Supply (tons)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "decimal",
                        value: supply_input(),
                        oninput: move |evt| supply_input.set(evt.value().to_string()),
                        placeholder: "100",
                    }
                }
                div {
                    label { class: "{theme::label_class(role)}", "Demand (tons)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "decimal",
                        value: demand_input(),
                        oninput: move |evt| demand_input.set(evt.value().to_string()),
                        placeholder: "120",
                    }
                }
                div {
                    label { class: "{theme::label_class(role)}", "Base Price (USD)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "decimal",
                        value: base_price_input(),
                        oninput: move |evt| base_price_input.set(evt.value().to_string()),
                        placeholder: "10000",
                    }
                }
                div {
                    label { class: "{theme::label_class(role)}", "Seasonal Factor (0.5 - 2.0)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "decimal",
                        value: seasonal_input(),
                        oninput: move |evt| seasonal_input.set(evt.value().to_string()),
                        placeholder: "1.0",
                    }
                }
                div {
                    label { class: "{theme::label_class(role)}", "Rounding" }
                    select {
                        class: "mt-1 w-full {theme::select_class(role)}",
                        value: rounding_value(current_rounding),
                        onchange: move |evt| rounding_choice.set(parse_rounding(&evt.value())),
                        option { value: "whole", "Whole units" }
                        option { value: "cents", "Cents" }
                        option { value: "exact", "Exact" }
                    }
                }
                div {
                    class: "flex items-end gap-3",
                    button {
                        class: "{theme::btn_primary(role)} flex-1",
                        r#type: "submit",
                        "Calculate Price"
                    }
                    button {
                        class: "{theme::btn_secondary(role)}",
                        r#type: "button",
                        disabled: verifying(),
                        onclick: on_verify,
                        if verifying() { "Verifying..." } else { "Verify with Backend" }
                    }
                }
            }
            match current_result {
                Some(Ok(quote)) => rsx! { QuoteResult { quote, role, limits } },
                Some(Err(err)) => rsx! {
                    div {
                        class: "rounded-lg border border-rose-500/40 bg-rose-500/10 px-4 py-3",
                        p { class: "text-sm font-semibold text-rose-200", "Unable to calculate a price" }
                        p { class: "mt-1 text-xs text-rose-300/80", "{err}" }
                    }
                },
                None => rsx! {
                    p { class: "text-xs text-slate-500", "Enter supply, demand and a base price to get a stabilized quote." }
                },
            }
            match current_remote {
                Some(Ok(remote)) => {
                    let remote_price = format_usd(remote.final_price);
                    let method = remote.method.clone().unwrap_or_else(|| "backend".to_string());
                    rsx! {
                        div {
                            class: "rounded-lg border border-slate-700 bg-slate-950/60 px-4 py-3",
                            p { class: "text-xs uppercase text-slate-500", "Backend Verification ({method})" }
                            p { class: "mt-1 text-sm text-slate-200", "Backend quotes {remote_price} for {remote.region}." }
                            p { class: "mt-1 text-xs text-slate-400", "{remote.reason}" }
                        }
                    }
                }
                Some(Err(message)) => rsx! {
                    div {
                        class: "rounded-lg border border-amber-500/40 bg-amber-500/10 px-4 py-3",
                        p { class: "text-sm font-semibold text-amber-200", "Backend verification failed" }
                        p { class: "mt-1 text-xs text-amber-300/80", "{message}" }
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn QuoteResult(quote: PriceQuote, role: Role, limits: HardLimits) -> Element {
    let tier_id = quote.tier.as_ref().map(|tier| tier.id);
    let final_price = format_usd(quote.final_price);
    let base_price = format_usd(quote.base_price);
    let ratio = format_ratio(quote.ratio);
    let adjustment = quote.adjustment_label();
    // Rounding also moves the final price, so detect clamping from the raw
    // value against the band rather than comparing raw and final.
    let band_min = quote.base_price * limits.min_multiplier;
    let band_max = quote.base_price * limits.max_multiplier;
    let clamped = quote.raw_adjusted_price < band_min - 1e-9
        || quote.raw_adjusted_price > band_max + 1e-9;
    let band_note = format!(
        "Safety band applied: the adjusted price was pulled back inside {:.0}%-{:.0}% of base.",
        limits.min_multiplier * 100.0,
        limits.max_multiplier * 100.0
    );

    rsx! {
        div {
            class: "rounded-lg border border-slate-700 bg-slate-950/60 px-4 py-4 space-y-3",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-xs uppercase text-slate-500", "Stabilized Price" }
                    p { class: "text-3xl font-bold {theme::text_accent(role)}", "{final_price}" }
                }
                TierBadge { tier: tier_id }
            }
            div {
                class: "grid grid-cols-3 gap-3 text-xs text-slate-400",
                div {
                    p { class: "uppercase text-slate-500", "Base" }
                    p { class: "text-sm text-slate-200", "{base_price}" }
                }
                div {
                    p { class: "uppercase text-slate-500", "Demand / Supply" }
                    p { class: "text-sm text-slate-200", "{ratio}" }
                }
                div {
                    p { class: "uppercase text-slate-500", "Adjustment" }
                    p { class: "text-sm text-slate-200", "{adjustment}" }
                }
            }
            p { class: "text-xs text-slate-400", "{quote.reason}" }
            if clamped {
                p {
                    class: "text-xs text-amber-300",
                    "{band_note}"
                }
            }
        }
    }
}

fn parse_field(raw: &str, label: &str) -> Result<f64, PricingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PricingError::InvalidInput(format!("{label} must be a number")))
}

fn rounding_value(rounding: Rounding) -> &'static str {
    match rounding {
        Rounding::WholeUnits => "whole",
        Rounding::Cents => "cents",
        Rounding::Exact => "exact",
    }
}

fn parse_rounding(raw: &str) -> Rounding {
    match raw {
        "cents" => Rounding::Cents,
        "exact" => Rounding::Exact,
        _ => Rounding::WholeUnits,
    }
}
