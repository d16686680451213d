use leptos::prelude::*;
use leptos_icons::Icon;

use cvterm_core::config::PROMPT_SYMBOL;
use cvterm_core::{CommandOutput, HistoryEntry, ListEntry};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// One `ls` entry with its icon.
fn list_entry(entry: ListEntry) -> impl IntoView {
    let (class, icon) = if entry.is_dir {
        (css::directory, ic::FOLDER)
    } else {
        (css::file, ic::FILE_TEXT)
    };
    view! {
        <div class=format!("{} {}", css::listEntry, class)>
            <Icon icon=icon />
            <span>{entry.name}</span>
        </div>
    }
}

fn result_view(output: CommandOutput) -> AnyView {
    match output {
        CommandOutput::Text(text) => view! {
            <div class=css::text>{text}</div>
        }
        .into_any(),
        CommandOutput::Listing(entries) => view! {
            <div class=css::listing>
                {entries.into_iter().map(list_entry).collect_view()}
            </div>
        }
        .into_any(),
        CommandOutput::Error(err) => view! {
            <div class=css::error>{err.to_string()}</div>
        }
        .into_any(),
        CommandOutput::Empty => ().into_any(),
    }
}

/// A submitted line: the prompt it was typed at, then its result.
#[component]
pub fn Output(entry: HistoryEntry) -> impl IntoView {
    let HistoryEntry {
        prompt,
        input,
        output,
        ..
    } = entry;

    view! {
        <div class=css::entry>
            <div class=css::command>
                <span class=css::chevron><Icon icon=ic::CHEVRON_RIGHT /></span>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>{PROMPT_SYMBOL}</span>
                <span class=css::input>{input}</span>
            </div>
            {result_view(output)}
        </div>
    }
}
