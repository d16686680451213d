//! Terminal window component.
//!
//! Title bar, welcome banner, output history and the input line.

use leptos::prelude::*;
use leptos_icons::Icon;

use cvterm_core::config::{APP_TITLE, WELCOME_BANNER};
use cvterm_core::{AutocompleteResult, HistoryEntry, Recall, Session};

use super::input::HistoryNav;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::terminal::{Input, Output};
use crate::config::INPUT_SELECTOR;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector(INPUT_SELECTOR).ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

/// Auto-scroll output to bottom when the session changes.
fn setup_autoscroll_effect(session: RwSignal<Session>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let prompt = Signal::derive(move || ctx.prompt());
    let entries = move || ctx.session.with(|s| s.entries().to_vec());

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);

    setup_autoscroll_effect(ctx.session, output_ref);

    view! {
        <div class=css::window on:click=move |_| focus_input()>
            <div class=css::titleBar>
                <div class=css::title>
                    <span class=css::titleIcon><Icon icon=ic::TERMINAL /></span>
                    <span>{APP_TITLE}</span>
                </div>
                <div class=css::controls>
                    <span class=format!("{} {}", css::dot, css::dotRed)></span>
                    <span class=format!("{} {}", css::dot, css::dotYellow)></span>
                    <span class=format!("{} {}", css::dot, css::dotGreen)></span>
                </div>
            </div>

            <div node_ref=output_ref class=css::output>
                <div class=css::banner>{WELCOME_BANNER}</div>
                <For
                    each=entries
                    key=|entry: &HistoryEntry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />
                <Input
                    prompt=prompt
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_autocomplete=on_autocomplete
                />
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| {
        ctx.session.update(|s| {
            s.submit(&input);
        });
    })
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<HistoryNav, Recall> {
    Callback::new(move |nav: HistoryNav| {
        // Recall only moves the cursor; nothing rendered depends on it.
        let mut recall = Recall::Unchanged;
        ctx.session.update_untracked(|s| {
            recall = match nav {
                HistoryNav::Previous => s.recall_previous(),
                HistoryNav::Next => s.recall_next(),
            };
        });
        recall
    })
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| ctx.session.with_untracked(|s| s.complete(&input)))
}
