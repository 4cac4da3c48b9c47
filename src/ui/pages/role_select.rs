//! Role selection screen shown before anything else.

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::{AppState, Role};

#[component]
pub fn RoleSelectPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center p-8",
            div {
                class: "max-w-4xl w-full",
                div { class: "text-center mb-12",
                    h1 {
                        class: "text-4xl font-bold text-slate-100 mb-3",
                        "ETHANI Price Dashboard"
                    }
                    p {
                        class: "text-xl text-slate-400",
                        "Who are you in the food chain?"
                    }
                }

                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    RoleCard {
                        role: Role::Farmer,
                        description: "Sell your harvest at a price the market can't crash.",
                        features: vec![
                            "Live market board for your region",
                            "Stabilized price quotes per crop",
                            "Shortage and surplus early warnings",
                        ],
                        on_select: {
                            let state = state.clone();
                            move |_| pick_role(state.clone(), Role::Farmer)
                        },
                    }

                    RoleCard {
                        role: Role::Distributor,
                        description: "Spot shortages early and move stock where it pays.",
                        features: vec![
                            "Global price comparison across regions",
                            "Supply and demand volumes per market",
                            "Tier badges on every market row",
                        ],
                        on_select: {
                            let state = state.clone();
                            move |_| pick_role(state.clone(), Role::Distributor)
                        },
                    }

                    RoleCard {
                        role: Role::Buyer,
                        description: "Know what staples should cost before you commit.",
                        features: vec![
                            "Price calculator with safety band",
                            "Plain-language price explanations",
                            "Published stabilization rules",
                        ],
                        on_select: {
                            let state = state.clone();
                            move |_| pick_role(state.clone(), Role::Buyer)
                        },
                    }
                }

                div { class: "text-center mt-12",
                    p { class: "text-sm text-slate-600",
                        "You can switch roles any time from the header."
                    }
                }
            }
        }
    }
}

fn pick_role(mut state: Signal<AppState>, role: Role) {
    state.with_mut(|st| st.role = role);
    persist_user_state(&state);
}

#[component]
fn RoleCard(
    role: Role,
    description: &'static str,
    features: Vec<&'static str>,
    on_select: EventHandler<()>,
) -> Element {
    let border_color = match role {
        Role::Farmer => "border-emerald-500/30 hover:border-emerald-500/60 hover:bg-emerald-500/5",
        Role::Distributor => "border-sky-500/30 hover:border-sky-500/60 hover:bg-sky-500/5",
        Role::Buyer => "border-amber-500/30 hover:border-amber-500/60 hover:bg-amber-500/5",
        Role::None => "border-slate-700",
    };

    let accent_color = match role {
        Role::Farmer => "text-emerald-400",
        Role::Distributor => "text-sky-400",
        Role::Buyer => "text-amber-400",
        Role::None => "text-slate-400",
    };

    rsx! {
        div {
            class: "group relative rounded-2xl border-2 p-6 cursor-pointer transition-all duration-200 {border_color} bg-slate-900/60",
            onclick: move |_| on_select.call(()),

            div {
                class: "text-5xl mb-4 transition-transform group-hover:scale-110",
                "{role.emoji()}"
            }

            h2 {
                class: "text-2xl font-bold {accent_color} mb-2",
                "{role.name()}"
            }

            p {
                class: "text-sm text-slate-400 mb-4",
                "{description}"
            }

            ul { class: "space-y-1",
                for feature in features {
                    li {
                        class: "text-xs text-slate-500 flex items-center gap-2",
                        span { class: "text-slate-600", "›" }
                        "{feature}"
                    }
                }
            }

            div {
                class: "mt-6 text-center opacity-0 group-hover:opacity-100 transition-opacity",
                span {
                    class: "text-xs font-semibold {accent_color} uppercase tracking-wide",
                    "Select →"
                }
            }
        }
    }
}
