//! Tab list and tab panes sharing one selection signal.
//!
//! Every pane stays in the document; the unselected ones carry `hidden`, so
//! exactly one pane is visible at a time and server HTML matches the client.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

/// A value that identifies one tab.
pub trait TabKey: Copy + PartialEq + Send + Sync + 'static {
    /// Stable identifier, used for element ids and `data-value`
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;
}

fn trigger_id<T: TabKey>(tab: T) -> String {
    format!("tab-{}", tab.value())
}

fn pane_id<T: TabKey>(tab: T) -> String {
    format!("tabpanel-{}", tab.value())
}

fn data_state(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

/// Tab selected after pressing `key` while `current` has focus.
///
/// Arrow keys wrap around, Home/End jump to the ends. Other keys and tabs
/// missing from `tabs` give `None`.
pub fn step<T: TabKey>(tabs: &[T], current: T, key: &str) -> Option<T> {
    let index = tabs.iter().position(|tab| *tab == current)?;
    let last = tabs.len() - 1;
    let next = match key {
        "ArrowRight" => {
            if index == last {
                0
            } else {
                index + 1
            }
        }
        "ArrowLeft" => {
            if index == 0 {
                last
            } else {
                index - 1
            }
        }
        "Home" => 0,
        "End" => last,
        _ => return None,
    };
    Some(tabs[next])
}

/// Row of triggers, one per tab
#[component]
pub fn TabList<T: TabKey>(
    tabs: &'static [T],
    selected: RwSignal<T>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = format!(
        "inline-flex h-10 items-center justify-center rounded-md bg-muted p-1 text-muted-foreground {}",
        class
    )
    .trim_end()
    .to_string();

    let on_keydown = move |ev: KeyboardEvent| {
        if let Some(next) = step(tabs, selected.get_untracked(), &ev.key()) {
            ev.prevent_default();
            selected.set(next);
        }
    };

    view! {
        <div role="tablist" aria-orientation="horizontal" class=class on:keydown=on_keydown>
            {tabs.iter().map(|&tab| {
                let active = move || selected.get() == tab;
                view! {
                    <button
                        type="button"
                        role="tab"
                        id=trigger_id(tab)
                        aria-controls=pane_id(tab)
                        aria-selected=move || active().to_string()
                        tabindex=move || if active() { "0" } else { "-1" }
                        data-state=move || data_state(active())
                        data-value=tab.value()
                        class="inline-flex items-center justify-center whitespace-nowrap rounded-sm px-3 py-1.5 text-sm font-medium transition-all data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm"
                        on:click=move |_| selected.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Content region for `tab`, hidden unless selected
#[component]
pub fn TabPane<T: TabKey>(tab: T, selected: RwSignal<T>, children: Children) -> impl IntoView {
    let active = move || selected.get() == tab;

    view! {
        <div
            role="tabpanel"
            id=pane_id(tab)
            aria-labelledby=trigger_id(tab)
            data-state=move || data_state(active())
            data-value=tab.value()
            hidden=move || !active()
            class="mt-2"
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl TabKey for Fruit {
        fn value(self) -> &'static str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Pear => "pear",
                Fruit::Plum => "plum",
            }
        }

        fn label(self) -> &'static str {
            self.value()
        }
    }

    const FRUITS: [Fruit; 3] = [Fruit::Apple, Fruit::Pear, Fruit::Plum];

    #[test]
    fn arrows_wrap_around() {
        assert_eq!(step(&FRUITS, Fruit::Apple, "ArrowRight"), Some(Fruit::Pear));
        assert_eq!(step(&FRUITS, Fruit::Plum, "ArrowRight"), Some(Fruit::Apple));
        assert_eq!(step(&FRUITS, Fruit::Apple, "ArrowLeft"), Some(Fruit::Plum));
        assert_eq!(step(&FRUITS, Fruit::Pear, "ArrowLeft"), Some(Fruit::Apple));
    }

    #[test]
    fn home_and_end() {
        assert_eq!(step(&FRUITS, Fruit::Pear, "Home"), Some(Fruit::Apple));
        assert_eq!(step(&FRUITS, Fruit::Pear, "End"), Some(Fruit::Plum));
    }

    #[test]
    fn other_keys_and_unknown_tabs_do_nothing() {
        assert_eq!(step(&FRUITS, Fruit::Pear, "Enter"), None);
        assert_eq!(step(&FRUITS[..1], Fruit::Plum, "ArrowRight"), None);
    }

    #[test]
    fn ids_pair_triggers_with_panes() {
        assert_eq!(trigger_id(Fruit::Pear), "tab-pear");
        assert_eq!(pane_id(Fruit::Pear), "tabpanel-pear");
        assert_eq!(data_state(true), "active");
        assert_eq!(data_state(false), "inactive");
    }
}
