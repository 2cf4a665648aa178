//! Code samples shown on the style guide code page.
//!
//! The sample sources live under `snippets/` and are embedded at compile time,
//! so the text rendered on the page is the text written to the clipboard.

use crate::components::TabKey;

/// Stable identity of a snippet, unique across [`PANES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnippetId(&'static str);

impl SnippetId {
    pub const fn new(slug: &'static str) -> Self {
        Self(slug)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

/// Declared language of a snippet, used only for display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Css,
    Html,
    Tsx,
    TypeScript,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Css => "css",
            Language::Html => "html",
            Language::Tsx => "tsx",
            Language::TypeScript => "typescript",
        }
    }

    /// Class for the `<code>` element, e.g. `language-css`
    pub fn code_class(self) -> String {
        format!("language-{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub id: SnippetId,
    /// Sub-heading rendered above the block
    pub heading: Option<&'static str>,
    pub language: Language,
    pub code: &'static str,
}

/// Tabs of the style guide code page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTab {
    #[default]
    Css,
    Html,
    JavaScript,
    TailwindConfig,
}

impl StyleTab {
    pub const ALL: [StyleTab; 4] = [StyleTab::Css, StyleTab::Html, StyleTab::JavaScript, StyleTab::TailwindConfig];
}

impl TabKey for StyleTab {
    fn value(self) -> &'static str {
        match self {
            StyleTab::Css => "css",
            StyleTab::Html => "html",
            StyleTab::JavaScript => "javascript",
            StyleTab::TailwindConfig => "tailwind",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StyleTab::Css => "CSS",
            StyleTab::Html => "HTML",
            StyleTab::JavaScript => "JavaScript",
            StyleTab::TailwindConfig => "Tailwind Config",
        }
    }
}

/// Content of one tab.
#[derive(Debug, Clone, Copy)]
pub struct Pane {
    pub tab: StyleTab,
    pub title: &'static str,
    pub intro: &'static str,
    pub snippets: &'static [Snippet],
}

const fn snippet(slug: &'static str, heading: Option<&'static str>, language: Language, code: &'static str) -> Snippet {
    Snippet { id: SnippetId::new(slug), heading, language, code }
}

pub static PANES: [Pane; 4] = [
    Pane {
        tab: StyleTab::Css,
        title: "CSS Variables & Base Styles",
        intro: "The Bamboo design system uses CSS variables to maintain a consistent look and feel across the website.",
        snippets: &[
            snippet("css-base", None, Language::Css, include_str!("../snippets/css_base.css")),
            snippet(
                "css-components",
                Some("Component Specific Styles"),
                Language::Css,
                include_str!("../snippets/css_components.css"),
            ),
        ],
    },
    Pane {
        tab: StyleTab::Html,
        title: "Component HTML Structure",
        intro: "Example HTML structure for key components in the Bamboo design system.",
        snippets: &[
            snippet("html-hero", Some("Hero Component"), Language::Html, include_str!("../snippets/html_hero.html")),
            snippet(
                "html-product-card",
                Some("Product Card"),
                Language::Html,
                include_str!("../snippets/html_product_card.html"),
            ),
            snippet("html-buttons", Some("Button Styles"), Language::Html, include_str!("../snippets/html_buttons.html")),
        ],
    },
    Pane {
        tab: StyleTab::JavaScript,
        title: "Component Implementation",
        intro: "React component implementations used in the Bamboo design system.",
        snippets: &[
            snippet("tsx-hero", Some("Hero Component"), Language::Tsx, include_str!("../snippets/tsx_hero.tsx")),
            snippet(
                "tsx-product-card",
                Some("Product Card Component"),
                Language::Tsx,
                include_str!("../snippets/tsx_product_card.tsx"),
            ),
            snippet("tsx-button", Some("Button Component"), Language::Tsx, include_str!("../snippets/tsx_button.tsx")),
        ],
    },
    Pane {
        tab: StyleTab::TailwindConfig,
        title: "Tailwind Configuration",
        intro: "The Tailwind configuration that powers the Bamboo design system.",
        snippets: &[snippet(
            "tailwind-config",
            None,
            Language::TypeScript,
            include_str!("../snippets/tailwind_config.ts"),
        )],
    },
];

/// Pane shown for `tab`.
pub fn pane(tab: StyleTab) -> &'static Pane {
    match tab {
        StyleTab::Css => &PANES[0],
        StyleTab::Html => &PANES[1],
        StyleTab::JavaScript => &PANES[2],
        StyleTab::TailwindConfig => &PANES[3],
    }
}

pub fn all_snippets() -> impl Iterator<Item = &'static Snippet> {
    PANES.iter().flat_map(|pane| pane.snippets.iter())
}

pub fn find(id: SnippetId) -> Option<&'static Snippet> {
    all_snippets().find(|snippet| snippet.id == id)
}
