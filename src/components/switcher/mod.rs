//! Global theme switcher widget.
//!
//! A floating control bar (previous, trigger, copy, next) with an expandable
//! grid of every theme. Composes the core controllers:
//! - navigation and visited bookkeeping through [`SwitcherSession`]
//! - the drawer state machine via [`hooks::use_drawer`]
//! - viewport, swipe, keyboard and clipboard hooks

mod drawer;
mod hooks;

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use self::drawer::ThemeDrawer;
use self::hooks::{
    use_clipboard_exporter, use_compact_layout, use_drawer, use_keyboard_navigation,
    use_swipe_navigation,
};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::VISITED_STORAGE_KEY;
use crate::core::{DrawerEvent, KeyCommand, SwipeDirection, SwitcherSession, VisitedStore};
use crate::utils::browser::{BrowserStorage, HashRouter};

stylance::import_crate_style!(css, "src/components/switcher/switcher.module.css");

/// The theme switcher widget.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.switcher;
    let registry = ctx.registry.get_value();
    let total = registry.len();

    let session = StoredValue::new(SwitcherSession::new(
        registry.clone(),
        HashRouter,
        VisitedStore::new(BrowserStorage, VISITED_STORAGE_KEY),
    ));

    // Hydrate on first run, then record every route change as visited.
    Effect::new(move |mounted: Option<()>| {
        ctx.route.track();
        let synced = session.try_update_value(|s| {
            match mounted {
                None => s.mount(),
                Some(()) => s.sync_route(),
            };
            (s.visited().clone(), s.visited_count())
        });
        if let Some((visited, count)) = synced {
            state.visited.set(visited);
            state.visited_count.set(count);
        }
    });

    let current_index = {
        let registry = registry.clone();
        Memo::new(move |_| ctx.route.with(|r| registry.index_of(r.path())))
    };
    let current_theme = Memo::new(move |_| ctx.route.with(|r| registry.current(r.path()).clone()));

    let go_next = move || {
        session.with_value(|s| s.next());
    };
    let go_prev = move || {
        session.with_value(|s| s.prev());
    };
    let on_select = Callback::new(move |path: String| {
        state.dispatch(DrawerEvent::ThemeSelected);
        session.with_value(|s| s.select(&path));
    });

    let root = NodeRef::<leptos::html::Div>::new();
    use_compact_layout(state);
    use_drawer(state, root);
    use_swipe_navigation(move |direction| {
        if state.drawer.get_untracked().is_open() {
            return;
        }
        match direction {
            SwipeDirection::Next => go_next(),
            SwipeDirection::Prev => go_prev(),
        }
    });
    use_keyboard_navigation(move |command| match command {
        KeyCommand::Next => go_next(),
        KeyCommand::Prev => go_prev(),
    });

    let exporter = use_clipboard_exporter(state);
    let on_copy = move |_: leptos::ev::MouseEvent| {
        let Some(exporter) = exporter.try_get_value() else {
            return;
        };
        let name = current_theme.with_untracked(|t| t.name.clone());
        spawn_local(async move {
            exporter.copy(&name).await;
        });
    };

    let root_class = move || {
        if state.compact.get() {
            format!("{} {}", css::switcher, css::compact)
        } else {
            css::switcher.to_string()
        }
    };

    view! {
        // Pointer-downs anywhere in the widget, bar included, count as inside.
        <div
            class=root_class
            node_ref=root
            style=move || format!("--theme-accent: {}", current_theme.with(|t| t.accent_color.clone()))
        >
            <Show when=move || state.is_open()>
                <ThemeDrawer
                    current_index=current_index
                    visited=state.visited
                    visited_count=state.visited_count
                    on_select=on_select
                />
            </Show>

            <div class=css::bar>
                <button
                    class=css::navButton
                    on:click=move |_| go_prev()
                    title="Previous theme"
                    aria-label="Previous theme"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>

                <button
                    class=css::trigger
                    on:click=move |_| state.dispatch(DrawerEvent::Toggle)
                    aria-haspopup="true"
                    aria-expanded=move || state.is_open().to_string()
                    title="Browse all themes"
                >
                    <span class=css::triggerIcon>{move || current_theme.with(|t| t.icon.clone())}</span>
                    <span class=css::triggerName>{move || current_theme.with(|t| t.name.clone())}</span>
                    <span class=css::position>
                        {move || format!("{}/{}", current_index.get() + 1, total)}
                    </span>
                </button>

                <button
                    class=move || {
                        if state.copied.get() {
                            format!("{} {}", css::copyButton, css::copied)
                        } else {
                            css::copyButton.to_string()
                        }
                    }
                    on:click=on_copy
                    title=move || if state.copied.get() { "Copied!" } else { "Copy style prompt" }
                    aria-label="Copy style prompt"
                >
                    {move || if state.copied.get() {
                        view! { <Icon icon=ic::CHECK /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CLIPBOARD /> }.into_any()
                    }}
                </button>

                <button
                    class=css::navButton
                    on:click=move |_| go_next()
                    title="Next theme"
                    aria-label="Next theme"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </div>
    }
}
