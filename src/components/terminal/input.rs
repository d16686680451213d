//! Terminal input line with Tab completion and history recall.

use leptos::prelude::*;
use leptos::{ev, prelude::CollectView};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use cvterm_core::config::PROMPT_SYMBOL;
use cvterm_core::{AutocompleteResult, Candidate, Recall};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Direction of a history recall request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryNav {
    Previous,
    Next,
}

/// What a key press means to the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Submit,
    Recall(HistoryNav),
    Complete,
    /// Typing; the browser handles it.
    Other,
}

impl KeyAction {
    fn from_key(key: &str) -> Self {
        match key {
            "Enter" => Self::Submit,
            "ArrowUp" => Self::Recall(HistoryNav::Previous),
            "ArrowDown" => Self::Recall(HistoryNav::Next),
            "Tab" => Self::Complete,
            _ => Self::Other,
        }
    }
}

/// Terminal input field.
///
/// Enter submits, ArrowUp/ArrowDown recall earlier lines, Tab completes.
/// When Tab finds several candidates they are listed below the input and
/// can be clicked.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<HistoryNav, Recall>,
    on_autocomplete: Callback<String, AutocompleteResult>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());
    let suggestions = RwSignal::new(Vec::<Candidate>::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_tab = move |value: String| match on_autocomplete.run(value) {
        AutocompleteResult::Single(completed) => {
            suggestions.set(Vec::new());
            set_input_value.set(completed);
            move_cursor_to_end();
        }
        AutocompleteResult::Multiple(candidates) => suggestions.set(candidates),
        AutocompleteResult::None => {}
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match KeyAction::from_key(&ev.key()) {
        KeyAction::Submit => {
            suggestions.set(Vec::new());
            on_submit.run(input_value.get_untracked());
            set_input_value.set(String::new());
        }
        KeyAction::Recall(nav) => {
            ev.prevent_default();
            match on_history_nav.run(nav) {
                Recall::Line(line) => {
                    set_input_value.set(line);
                    move_cursor_to_end();
                }
                Recall::Blank => set_input_value.set(String::new()),
                Recall::Unchanged => {}
            }
        }
        KeyAction::Complete => {
            ev.prevent_default();
            handle_tab(input_value.get_untracked());
        }
        KeyAction::Other => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    let suggestions_view = move || {
        let candidates = suggestions.get();
        if candidates.is_empty() {
            return None;
        }
        Some(view! {
            <div class=css::suggestions>
                {candidates.into_iter().map(|candidate| {
                    let Candidate { label, completion } = candidate;
                    let pick = move |_| {
                        set_input_value.set(completion.clone());
                        suggestions.set(Vec::new());
                        if let Some(input) = input_ref.get() {
                            let _ = input.focus();
                        }
                    };
                    view! {
                        <div class=css::suggestion on:click=pick>{label}</div>
                    }
                }).collect_view()}
            </div>
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::chevron>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </span>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>{PROMPT_SYMBOL}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    data-terminal-input=""
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>

            {suggestions_view}
        </div>
    }
}
