//! Expandable grid of every theme.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{DrawerEvent, VisitedSet};

stylance::import_crate_style!(css, "src/components/switcher/drawer.module.css");

/// Theme grid shown while the drawer is open.
///
/// Marks the current theme and every visited one. Picking an entry calls
/// `on_select` with its path.
#[component]
pub fn ThemeDrawer(
    current_index: Memo<usize>,
    visited: RwSignal<VisitedSet>,
    visited_count: RwSignal<usize>,
    on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let themes = ctx.registry.with_value(|r| r.themes().to_vec());
    let total = themes.len();

    let on_close = move |_: leptos::ev::MouseEvent| {
        ctx.switcher.dispatch(DrawerEvent::Toggle);
    };

    let items = themes
        .into_iter()
        .enumerate()
        .map(|(index, theme)| {
            let is_current = move || current_index.get() == index;
            let visited_path = theme.path.clone();
            let select_path = theme.path.clone();

            view! {
                <li>
                    <button
                        class=move || {
                            if is_current() {
                                format!("{} {}", css::item, css::itemCurrent)
                            } else {
                                css::item.to_string()
                            }
                        }
                        style=format!("--item-accent: {}", theme.accent_color)
                        aria-current=move || is_current().then_some("page")
                        on:click=move |_| on_select.run(select_path.clone())
                    >
                        <span class=css::itemIcon>{theme.icon.clone()}</span>
                        <span class=css::itemName>{theme.name.clone()}</span>
                        <Show when=move || visited.with(|v| v.contains(&visited_path))>
                            <span class=css::visitedMark title="Visited">
                                <Icon icon=ic::VISITED />
                            </span>
                        </Show>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=css::drawer role="dialog" aria-label="All themes">
            <div class=css::header>
                <span class=css::headerIcon><Icon icon=ic::PALETTE /></span>
                <span class=css::headerTitle>"Themes"</span>
                <span class=css::progress>
                    {move || format!("{} / {} visited", visited_count.get(), total)}
                </span>
                <button class=css::closeButton on:click=on_close title="Close" aria-label="Close">
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <ul class=css::grid>{items}</ul>
        </div>
    }
}
