use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Role};
use crate::ui::pages::RoleSelectPage;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|s| s.role);

    // Everything is role-themed, so force a pick before showing the app.
    if !role.is_selected() {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                RoleSelectPage {}
            }
        };
    }

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let state_mut = state;

    let header_class = match role {
        Role::Farmer => "border-b border-emerald-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Role::Distributor => "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Role::Buyer => "border-b border-amber-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Role::None => "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
    };

    let title_class = match role {
        Role::Farmer => "text-xl font-semibold tracking-tight text-emerald-200",
        Role::Distributor => "text-xl font-semibold tracking-tight text-sky-200",
        Role::Buyer => "text-xl font-semibold tracking-tight text-amber-200",
        Role::None => "text-xl font-semibold tracking-tight",
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "{header_class}",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "{role.emoji()}" }
                        div {
                            h1 { class: "{title_class}", "{role.name()}" }
                            p { class: "text-xs text-slate-500 italic", "{role.tagline()}" }
                        }
                    }

                    div { class: "flex gap-1 justify-center",
                        RoleButton {
                            active: role == Role::Farmer,
                            onclick: {
                                let state_mut = state_mut.clone();
                                move |_| switch_role(state_mut.clone(), Role::Farmer)
                            },
                            label: "👨‍🌾 Farmer",
                            theme: Role::Farmer,
                        }
                        RoleButton {
                            active: role == Role::Distributor,
                            onclick: {
                                let state_mut = state_mut.clone();
                                move |_| switch_role(state_mut.clone(), Role::Distributor)
                            },
                            label: "🚚 Distributor",
                            theme: Role::Distributor,
                        }
                        RoleButton {
                            active: role == Role::Buyer,
                            onclick: {
                                let state_mut = state_mut.clone();
                                move |_| switch_role(state_mut.clone(), Role::Buyer)
                            },
                            label: "🛒 Buyer",
                            theme: Role::Buyer,
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton { active: matches!(current_route, Route::Market {}), onclick: move |_| { nav.push(Route::Market {}); }, label: "📊 Market", role: role }
                        NavButton { active: matches!(current_route, Route::GlobalPrices {}), onclick: move |_| { nav.push(Route::GlobalPrices {}); }, label: "🌍 Global", role: role }
                        NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "🧮 Calculator", role: role }
                        NavButton { active: matches!(current_route, Route::StabilityRules {}), onclick: move |_| { nav.push(Route::StabilityRules {}); }, label: "🛡️ Rules", role: role }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️", role: role }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

fn switch_role(mut state: Signal<AppState>, role: Role) {
    state.with_mut(|st| st.role = role);
    persist_user_state(&state);
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, role: Role) -> Element {
    let class = match (role, active) {
        (Role::Farmer, true) => {
            "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300 farmer-glow"
        }
        (Role::Farmer, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-emerald-700 hover:bg-emerald-900/20 hover:text-emerald-300"
        }
        (Role::Distributor, true) => {
            "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300 distributor-glow"
        }
        (Role::Distributor, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
        }
        (Role::Buyer, true) => {
            "min-w-[5.5rem] rounded-lg border border-amber-500/60 bg-amber-500/15 px-4 py-2 font-semibold text-amber-300 buyer-glow"
        }
        (Role::Buyer, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-amber-700 hover:bg-amber-900/20 hover:text-amber-300"
        }
        (_, true) => {
            "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
        }
        (_, false) => {
            "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn RoleButton(active: bool, onclick: EventHandler<()>, label: &'static str, theme: Role) -> Element {
    let class = match (theme, active) {
        (Role::Farmer, true) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40 farmer-glow"
        }
        (Role::Farmer, false) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-emerald-600 hover:text-emerald-400 transition"
        }
        (Role::Distributor, true) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40 distributor-glow"
        }
        (Role::Distributor, false) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-sky-600 hover:text-sky-400 transition"
        }
        (Role::Buyer, true) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm font-semibold bg-amber-500/20 text-amber-300 border border-amber-500/40 buyer-glow"
        }
        (Role::Buyer, false) => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-amber-600 hover:text-amber-400 transition"
        }
        _ => {
            "min-w-[6rem] rounded-lg px-3 py-1.5 text-sm text-slate-500 border border-slate-800 hover:border-slate-600 hover:text-slate-300 transition"
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
