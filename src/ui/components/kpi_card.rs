use dioxus::prelude::*;

use crate::domain::Role;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, role: Role) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border(role)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(role)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_secondary(role)}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted(role)}", "{desc}" }
            }
        }
    }
}
