use crate::config::CONFIG;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-bamboo-beige border-t border-bamboo-light/30 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4">
                <div>
                    <a href=CONFIG.home class="text-2xl font-raleway font-semibold text-bamboo-charcoal">
                        {CONFIG.name}
                    </a>
                    <p class="text-sm text-bamboo-text-light">{CONFIG.footer_blurb}</p>
                </div>
                <p class="text-sm text-bamboo-text-light">{CONFIG.copyright}</p>
            </div>
        </footer>
    }
}
