use crate::config::CONFIG;
use leptos::prelude::*;

use super::icons::Icon;

/// Site header: logo, navigation links and social icons
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="bg-bamboo-beige py-4 border-b border-bamboo-light/30">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center">
                // Logo
                <div class="mb-4 md:mb-0">
                    <a href=CONFIG.home class="flex flex-col">
                        <span class="text-sm text-bamboo-text-light">{CONFIG.tagline}</span>
                        <span class="text-4xl font-raleway font-semibold text-bamboo-charcoal">{CONFIG.name}</span>
                    </a>
                </div>

                <nav class="flex gap-8 items-center">
                    {CONFIG.nav_links.iter().map(|link| match link.icon {
                        Some(icon) => view! {
                            <a href=link.href class="nav-link flex items-center gap-1">
                                <Icon kind=icon />
                                <span>{link.label}</span>
                            </a>
                        }.into_any(),
                        None => view! {
                            <a href=link.href class="nav-link">{link.label}</a>
                        }.into_any(),
                    }).collect_view()}

                    <div class="flex gap-3 items-center">
                        {CONFIG.social_links.iter().map(|social| view! {
                            <a
                                href=social.href
                                aria-label=social.label
                                class="social-link text-bamboo-charcoal hover:text-bamboo-teal transition-colors"
                            >
                                <Icon kind=social.icon />
                            </a>
                        }).collect_view()}
                    </div>
                </nav>
            </div>
        </header>
    }
}
