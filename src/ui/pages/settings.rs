use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, Role, DEFAULT_API_BASE_URL, REGIONS},
    infra::api::ApiClient,
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    ui::theme,
    util::{
        persistence::clear_persisted_state,
        version::{check_for_update, version_label, APP_NAME, APP_REPO_URL},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let role = state.with(|st| st.role);

    let mut region_input = use_signal(|| state.with(|st| st.region.clone()));
    let mut api_url_input = use_signal(|| state.with(|st| st.api_base_url.clone()));
    let checking_backend = use_signal(|| false);
    let checking_update = use_signal(|| false);

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let region_input = region_input.clone();
        let api_url_input = api_url_input.clone();
        move |_| {
            let region = region_input().trim().to_string();
            if region.is_empty() {
                push_toast(toasts.clone(), ToastKind::Error, "Region cannot be empty.");
                return;
            }
            let api_url = api_url_input().trim().to_string();
            if api_url.is_empty() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Backend URL cannot be empty.",
                );
                return;
            }

            state.with_mut(|st| {
                st.region = region;
                st.api_base_url = api_url;
            });
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Success, "Settings saved.");
        }
    };

    let on_check_backend = {
        let toasts = toasts.clone();
        let api_url_input = api_url_input.clone();
        let checking_backend = checking_backend.clone();
        move |_| {
            if checking_backend() {
                return;
            }
            let url = api_url_input().trim().to_string();
            let toasts = toasts.clone();
            let mut checking = checking_backend.clone();
            checking.set(true);
            spawn(async move {
                match ApiClient::with_base_url(&url) {
                    Ok(client) => match client.health().await {
                        Ok(status) => {
                            let version = status
                                .version
                                .map(|v| format!(" (backend {v})"))
                                .unwrap_or_default();
                            push_toast(
                                toasts.clone(),
                                ToastKind::Success,
                                format!("Backend is {}{version}.", status.status),
                            );
                        }
                        Err(err) => {
                            push_toast(
                                toasts.clone(),
                                ToastKind::Error,
                                format!("Backend unreachable: {err}"),
                            );
                        }
                    },
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Invalid backend URL: {err}"),
                        );
                    }
                }
                checking.set(false);
            });
        }
    };

    let on_reset_role = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.role = Role::None);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Role cleared. Pick a new one to continue.",
            );
        }
    };

    let on_clear_data = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut region_input = region_input.clone();
        let mut api_url_input = api_url_input.clone();
        move |_| {
            if let Err(err) = clear_persisted_state() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to clear stored data: {err}"),
                );
                return;
            }
            state.set(AppState::default());
            region_input.set(state.with(|st| st.region.clone()));
            api_url_input.set(DEFAULT_API_BASE_URL.to_string());
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Stored data cleared and defaults restored.",
            );
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        let checking_update = checking_update.clone();
        move |_| {
            if checking_update() {
                return;
            }
            let toasts = toasts.clone();
            let mut checking = checking_update.clone();
            checking.set(true);
            spawn(async move {
                match check_for_update().await {
                    Ok(info) => {
                        let kind = if info.update_available() {
                            ToastKind::Warning
                        } else {
                            ToastKind::Success
                        };
                        push_toast(toasts.clone(), kind, info.to_string());
                    }
                    Err(err) => {
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
                checking.set(false);
            });
        }
    };

    let version = version_label();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border(role)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Preferences" }
                div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: "{theme::label_class(role)}", "Your Region" }
                        input {
                            class: "mt-1 w-full {theme::input_class(role)}",
                            value: region_input(),
                            oninput: move |evt| region_input.set(evt.value()),
                            list: "region-list",
                        }
                        datalist {
                            id: "region-list",
                            for region in REGIONS {
                                option { value: region.name }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class(role)}", "Backend URL" }
                        input {
                            class: "mt-1 w-full {theme::input_class(role)}",
                            value: api_url_input(),
                            oninput: move |evt| api_url_input.set(evt.value()),
                            placeholder: DEFAULT_API_BASE_URL,
                        }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary(role)}", onclick: on_apply, "Apply" }
                    button {
                        class: "{theme::btn_secondary(role)}",
                        disabled: checking_backend(),
                        onclick: on_check_backend,
                        if checking_backend() { "Checking..." } else { "Check Backend" }
                    }
                }
                p { class: "mt-3 text-xs text-slate-500",
                    "The calculator works fully offline; the backend is only used when remote quoting is wired up."
                }
            }

            section {
                class: "{theme::panel_border(role)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Stored Data" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Role, region and backend URL are stored on this machine. Quotes and market data are session-only."
                }
                div { class: "mt-3 flex gap-3",
                    button { class: "{theme::btn_secondary(role)}", onclick: on_reset_role, "Switch Role" }
                    button {
                        class: "rounded-lg border border-rose-500/40 px-4 py-2 text-sm text-rose-200 hover:bg-rose-500/10",
                        onclick: on_clear_data,
                        "Clear Stored Data"
                    }
                }
            }

            section {
                class: "{theme::panel_border(role)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-2 text-sm text-slate-300", "{APP_NAME} {version}" }
                p { class: "mt-1 text-xs text-slate-500",
                    "Demonstration build. All market data is simulated; no real prices are set here."
                }
                div { class: "mt-3 flex items-center gap-3",
                    button {
                        class: "{theme::btn_secondary(role)}",
                        disabled: checking_update(),
                        onclick: on_check_update,
                        if checking_update() { "Checking..." } else { "Check for Updates" }
                    }
                    a {
                        class: "text-xs {theme::text_accent(role)} hover:underline",
                        href: APP_REPO_URL,
                        target: "_blank",
                        rel: "noreferrer",
                        "Source repository"
                    }
                }
            }
        }
    }
}
