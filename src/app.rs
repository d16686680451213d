//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] holding the
//! terminal session.

use std::sync::Arc;

use leptos::prelude::*;

use cvterm_core::{Session, VirtualFs};

use crate::components::Terminal;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available to children
/// through `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal, which is
/// just a handle to the underlying reactive state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Working directory, displayed entries and recall history.
    pub session: RwSignal<Session>,
}

impl AppContext {
    /// Creates a context with a fresh session over the embedded CV.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new(Arc::new(load_filesystem()))),
        }
    }

    /// Prompt path for the input line.
    pub fn prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the filesystem, falling back to an empty tree if the embedded
/// manifest is broken.
fn load_filesystem() -> VirtualFs {
    match VirtualFs::embedded() {
        Ok(fs) => fs,
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to load CV: {}", err).into());
            VirtualFs::empty()
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Terminal component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    padding: 2rem;
                    background: #111827;
                    color: #f87171;
                    font-family: monospace;
                ">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}
