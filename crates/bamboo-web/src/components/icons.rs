//! Inline Lucide SVG icons, rendered the same on server and client

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    ShoppingCart,
    Instagram,
    Twitter,
    Facebook,
    Copy,
    CopyCheck,
}

impl IconKind {
    /// Lucide icon name, also used as the `lucide-*` class
    pub fn name(self) -> &'static str {
        match self {
            IconKind::ShoppingCart => "shopping-cart",
            IconKind::Instagram => "instagram",
            IconKind::Twitter => "twitter",
            IconKind::Facebook => "facebook",
            IconKind::Copy => "copy",
            IconKind::CopyCheck => "copy-check",
        }
    }
}

fn glyph(kind: IconKind) -> AnyView {
    match kind {
        IconKind::ShoppingCart => view! {
            <circle cx="8" cy="21" r="1" />
            <circle cx="19" cy="21" r="1" />
            <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" />
        }
        .into_any(),
        IconKind::Instagram => view! {
            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
        }
        .into_any(),
        IconKind::Twitter => view! {
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
        }
        .into_any(),
        IconKind::Facebook => view! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        }
        .into_any(),
        IconKind::Copy => view! {
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        }
        .into_any(),
        IconKind::CopyCheck => view! {
            <path d="m12 15 2 2 4-4" />
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        }
        .into_any(),
    }
}

/// Stroke icon in a 24x24 box, coloured with `currentColor`
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = "18")] size: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = format!("lucide lucide-{} {}", kind.name(), class).trim_end().to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {glyph(kind)}
        </svg>
    }
}
