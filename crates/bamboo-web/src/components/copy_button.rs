use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::clipboard::HostClipboard;
use crate::copy_state::CopyState;
#[cfg(feature = "hydrate")]
use crate::copy_state::{COPY_FEEDBACK_MS, ClearTicket};
use crate::snippets::{Snippet, SnippetId};

/// Copy state of a page plus the handle of its pending clear.
///
/// The timer handle lives in the page's reactive owner: replacing it cancels
/// the previous clear, and disposing the page cancels the last one.
#[derive(Clone, Copy)]
pub struct CopyFeedback {
    state: RwSignal<CopyState>,
    #[cfg(feature = "hydrate")]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CopyState::new()),
            #[cfg(feature = "hydrate")]
            pending: StoredValue::new_local(None),
        }
    }

    /// Copy the snippet's text and flag it until the feedback window ends.
    pub fn copy(&self, snippet: &'static Snippet) {
        let Some(ticket) = self.state.try_update(|state| state.copy(snippet, &HostClipboard)) else {
            return;
        };
        self.schedule_clear(ticket);
    }

    #[cfg(feature = "hydrate")]
    fn schedule_clear(&self, ticket: ClearTicket) {
        let state = self.state;
        let timeout = gloo_timers::callback::Timeout::new(COPY_FEEDBACK_MS, move || {
            state.update(|state| {
                state.clear(ticket);
            });
        });
        // Dropping the previous handle cancels its clear.
        self.pending.update_value(|pending| *pending = Some(timeout));
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_clear(&self, _ticket: crate::copy_state::ClearTicket) {}

    /// Reactive: is `id` the snippet copied last?
    pub fn is_copied(&self, id: SnippetId) -> bool {
        self.state.with(|state| state.is_copied(id))
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

/// Icon button copying one snippet, showing a check while it is flagged
#[component]
pub fn CopyButton(snippet: &'static Snippet, feedback: CopyFeedback) -> impl IntoView {
    let copied = move || feedback.is_copied(snippet.id);

    view! {
        <button
            type="button"
            class="copy-button absolute top-2 right-2 p-1 bg-gray-800 rounded-md hover:bg-gray-700"
            aria-label=move || if copied() { "Copied" } else { "Copy code" }
            data-copied=move || copied().to_string()
            on:click=move |_| feedback.copy(snippet)
        >
            {move || {
                if copied() {
                    view! { <Icon kind=IconKind::CopyCheck class="text-green-500" /> }.into_any()
                } else {
                    view! { <Icon kind=IconKind::Copy class="text-white" /> }.into_any()
                }
            }}
        </button>
    }
}

/// Read-only code sample with its copy button
#[component]
pub fn CodeBlock(snippet: &'static Snippet, feedback: CopyFeedback) -> impl IntoView {
    view! {
        <div class="relative" data-snippet=snippet.id.as_str()>
            <pre class="bg-gray-900 text-white p-4 rounded-md overflow-x-auto">
                <code class=snippet.language.code_class()>{snippet.code}</code>
            </pre>
            <CopyButton snippet=snippet feedback=feedback />
        </div>
    }
}
