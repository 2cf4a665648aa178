//! Which snippet was copied most recently.
//!
//! A copy marks its snippet and hands back a [`ClearTicket`]. The caller
//! schedules [`CopyState::clear`] with that ticket after [`COPY_FEEDBACK_MS`].
//! Each mark starts a new generation, so a clear scheduled by an older copy
//! never erases a newer one.

use crate::clipboard::ClipboardWriter;
use crate::snippets::{Snippet, SnippetId};

/// How long the "copied" indicator stays up.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Ties a pending clear to the copy that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ClearTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyState {
    copied: Option<SnippetId>,
    generation: u64,
}

impl CopyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the snippet's text to `clipboard` and mark it as copied.
    ///
    /// The mark is set whether or not the write later succeeds.
    pub fn copy(&mut self, snippet: &Snippet, clipboard: &impl ClipboardWriter) -> ClearTicket {
        clipboard.write_text(snippet.code);
        self.mark(snippet.id)
    }

    pub fn mark(&mut self, id: SnippetId) -> ClearTicket {
        self.generation = self.generation.wrapping_add(1);
        self.copied = Some(id);
        ClearTicket { generation: self.generation }
    }

    /// Clear the mark if `ticket` belongs to the latest copy.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, ticket: ClearTicket) -> bool {
        if ticket.generation != self.generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        true
    }

    pub fn copied(&self) -> Option<SnippetId> {
        self.copied
    }

    pub fn is_copied(&self, id: SnippetId) -> bool {
        self.copied == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::{StyleTab, pane};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) {
            self.writes.borrow_mut().push(text.to_owned());
        }
    }

    /// Simulated clock firing scheduled clears in deadline order.
    #[derive(Default)]
    struct ManualTimers {
        now_ms: u64,
        pending: Vec<(u64, ClearTicket)>,
    }

    impl ManualTimers {
        fn schedule(&mut self, ticket: ClearTicket) {
            self.pending.push((self.now_ms + u64::from(COPY_FEEDBACK_MS), ticket));
        }

        fn advance(&mut self, ms: u64, state: &mut CopyState) {
            self.now_ms += ms;
            self.pending.sort_by_key(|(due, _)| *due);
            let now = self.now_ms;
            let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _)| *at <= now);
            self.pending = rest;
            for (_, ticket) in due {
                state.clear(ticket);
            }
        }
    }

    fn css_snippets() -> (&'static Snippet, &'static Snippet) {
        let snippets = pane(StyleTab::Css).snippets;
        (&snippets[0], &snippets[1])
    }

    #[test]
    fn starts_with_nothing_copied() {
        let state = CopyState::new();
        assert_eq!(state.copied(), None);
    }

    #[test]
    fn copy_marks_immediately_and_clears_after_window() {
        let (first, _) = css_snippets();
        let clipboard = RecordingClipboard::default();
        let mut timers = ManualTimers::default();
        let mut state = CopyState::new();

        let ticket = state.copy(first, &clipboard);
        timers.schedule(ticket);
        assert!(state.is_copied(first.id));

        timers.advance(u64::from(COPY_FEEDBACK_MS) - 1, &mut state);
        assert!(state.is_copied(first.id), "still marked 1ms before the window ends");

        timers.advance(1, &mut state);
        assert_eq!(state.copied(), None);
    }

    #[test]
    fn stale_clear_does_not_erase_newer_copy() {
        let (first, second) = css_snippets();
        let clipboard = RecordingClipboard::default();
        let mut timers = ManualTimers::default();
        let mut state = CopyState::new();

        let ticket = state.copy(first, &clipboard);
        timers.schedule(ticket);
        timers.advance(1_500, &mut state);

        let ticket = state.copy(second, &clipboard);
        timers.schedule(ticket);
        assert!(state.is_copied(second.id));
        assert!(!state.is_copied(first.id));

        // First copy's window ends here; the second copy must survive it.
        timers.advance(500, &mut state);
        assert!(state.is_copied(second.id));

        timers.advance(1_499, &mut state);
        assert!(state.is_copied(second.id));
        timers.advance(1, &mut state);
        assert_eq!(state.copied(), None);
    }

    #[test]
    fn recopying_same_snippet_restarts_window() {
        let (first, _) = css_snippets();
        let clipboard = RecordingClipboard::default();
        let mut state = CopyState::new();

        let old = state.copy(first, &clipboard);
        let new = state.copy(first, &clipboard);
        assert!(!state.clear(old));
        assert!(state.is_copied(first.id));
        assert!(state.clear(new));
        assert!(!state.clear(new), "second clear is a no-op");
    }

    #[test]
    fn clipboard_receives_exact_snippet_text() {
        let clipboard = RecordingClipboard::default();
        let mut state = CopyState::new();

        for snippet in crate::snippets::all_snippets() {
            let _ = state.copy(snippet, &clipboard);
            assert_eq!(state.copied(), Some(snippet.id));
        }

        let expected: Vec<String> = crate::snippets::all_snippets().map(|s| s.code.to_owned()).collect();
        assert_eq!(*clipboard.writes.borrow(), expected);
    }

    #[test]
    fn only_one_snippet_is_marked_at_a_time() {
        let clipboard = RecordingClipboard::default();
        let mut state = CopyState::new();
        let (first, second) = css_snippets();

        let _ = state.copy(first, &clipboard);
        let _ = state.copy(second, &clipboard);
        let marked = crate::snippets::all_snippets().filter(|s| state.is_copied(s.id)).count();
        assert_eq!(marked, 1);
    }
}
