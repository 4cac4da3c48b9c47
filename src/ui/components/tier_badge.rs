use dioxus::prelude::*;

use crate::domain::TierId;

#[component]
pub fn TierBadge(tier: Option<TierId>) -> Element {
    let (label, color) = match tier {
        Some(TierId::CriticalShortage) => (
            "Critical Shortage",
            "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ),
        Some(TierId::Shortage) => (
            "Shortage",
            "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ),
        Some(TierId::Balanced) => (
            "Balanced",
            "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ),
        Some(TierId::Surplus) => ("Surplus", "bg-sky-500/10 text-sky-300 border-sky-500/40"),
        None => ("Base Price", "bg-slate-700/40 text-slate-300 border-slate-600/60"),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
        }
    }
}
