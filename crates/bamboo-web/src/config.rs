//! Compile-time site content for the Bamboo storefront.

use crate::components::IconKind;

/// A top-level navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Icon rendered before the label
    pub icon: Option<IconKind>,
}

/// An icon-only link to a social account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Accessible name, not rendered as text
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub name: &'static str,
    /// Small line rendered above the brand name in the logo
    pub tagline: &'static str,
    pub home: &'static str,
    pub nav_links: &'static [NavLink],
    pub social_links: &'static [SocialLink],
    pub style_guide_href: &'static str,
    pub footer_blurb: &'static str,
    pub copyright: &'static str,
}

/// Social accounts are not wired up yet, every icon points at `#`.
pub const SOCIAL_PLACEHOLDER: &str = "#";

pub const CONFIG: SiteConfig = SiteConfig {
    name: "Bamboo",
    tagline: "Shop",
    home: "/",
    nav_links: &[
        NavLink { label: "Community", href: "/community", icon: None },
        NavLink { label: "Portfolio", href: "/portfolio", icon: None },
        NavLink { label: "Shop", href: "/shop", icon: None },
        NavLink { label: "Cart", href: "/cart", icon: Some(IconKind::ShoppingCart) },
        NavLink { label: "Login", href: "/login", icon: None },
    ],
    social_links: &[
        SocialLink { label: "Instagram", href: SOCIAL_PLACEHOLDER, icon: IconKind::Instagram },
        SocialLink { label: "Twitter", href: SOCIAL_PLACEHOLDER, icon: IconKind::Twitter },
        SocialLink { label: "Facebook", href: SOCIAL_PLACEHOLDER, icon: IconKind::Facebook },
    ],
    style_guide_href: "/style-guide",
    footer_blurb: "Sustainable goods and home essentials, made with care.",
    copyright: "\u{00A9} 2025 Bamboo Store. All rights reserved.",
};
