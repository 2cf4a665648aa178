use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ButtonVariant, Footer, LinkButton, Navbar};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page not found - Bamboo" />
        <div class="min-h-screen flex flex-col bg-bamboo-beige">
            <Navbar />
            <main class="flex-grow py-24">
                <div class="container mx-auto px-4 text-center space-y-6">
                    <h1>"404"</h1>
                    <p class="text-bamboo-text-light">"This page could not be found."</p>
                    <LinkButton href=CONFIG.home variant=ButtonVariant::Primary>
                        "Back to the shop"
                    </LinkButton>
                </div>
            </main>
            <Footer />
        </div>
    }
}
