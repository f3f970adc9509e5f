//! Stand-in theme page.
//!
//! Individual theme layouts live outside this crate; this page only shows
//! which theme is active so the switcher has something to switch.

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/page/page.module.css");

#[component]
pub fn ThemePage(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <main
            class=css::page
            style=move || format!("--theme-accent: {}", theme.with(|t| t.accent_color.clone()))
        >
            <span class=css::glyph>{move || theme.with(|t| t.icon.clone())}</span>
            <h1 class=css::title>{move || theme.with(|t| t.name.clone())}</h1>
            <p class=css::owner>{APP_NAME}</p>
        </main>
    }
}
