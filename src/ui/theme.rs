//! Role-specific theme helpers for consistent styling across pages.

use crate::domain::Role;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(role: Role) -> &'static str {
    match role {
        Role::Farmer => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
        Role::Distributor => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400",
        Role::Buyer => "rounded-lg bg-amber-500 px-4 py-2 text-sm font-semibold text-white hover:bg-amber-400",
        Role::None => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
    }
}

pub fn btn_secondary(role: Role) -> &'static str {
    match role {
        Role::Farmer => "rounded-lg border border-emerald-700 px-4 py-2 text-sm text-emerald-200 hover:bg-emerald-900/30",
        Role::Distributor => "rounded-lg border border-sky-700 px-4 py-2 text-sm text-sky-200 hover:bg-sky-900/30",
        Role::Buyer => "rounded-lg border border-amber-700 px-4 py-2 text-sm text-amber-200 hover:bg-amber-900/30",
        Role::None => "rounded-lg border border-slate-600 px-4 py-2 text-sm text-slate-200 hover:bg-slate-800",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(role: Role) -> &'static str {
    match role {
        Role::Farmer => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
        Role::Distributor => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        Role::Buyer => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-amber-500 focus:outline-none",
        Role::None => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
    }
}

pub fn select_class(role: Role) -> &'static str {
    input_class(role)
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border(role: Role) -> &'static str {
    match role {
        Role::Farmer => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
        Role::Distributor => "rounded-xl border border-sky-800/50 bg-slate-900/40",
        Role::Buyer => "rounded-xl border border-amber-800/50 bg-slate-900/40",
        Role::None => "rounded-xl border border-slate-800 bg-slate-900/40",
    }
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container(role: Role) -> &'static str {
    match role {
        Role::Farmer => "rounded-xl border border-emerald-900/40 bg-slate-900/40 overflow-hidden",
        Role::Distributor => "rounded-xl border border-sky-900/40 bg-slate-900/40 overflow-hidden",
        Role::Buyer => "rounded-xl border border-amber-900/40 bg-slate-900/40 overflow-hidden",
        Role::None => "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(role: Role) -> &'static str {
    match role {
        Role::Farmer => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
        Role::Distributor => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
        Role::Buyer => "border-b border-amber-900/40 bg-amber-950/30 text-xs uppercase text-amber-400/70",
        Role::None => "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_accent(role: Role) -> &'static str {
    match role {
        Role::Farmer => "text-emerald-300",
        Role::Distributor => "text-sky-300",
        Role::Buyer => "text-amber-300",
        Role::None => "text-indigo-300",
    }
}

pub fn text_secondary(role: Role) -> &'static str {
    match role {
        Role::Farmer => "text-emerald-100",
        Role::Distributor => "text-sky-100",
        Role::Buyer => "text-amber-100",
        Role::None => "text-slate-100",
    }
}

pub fn text_muted(_role: Role) -> &'static str {
    "text-slate-500"
}

pub fn label_class(_role: Role) -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}
