use leptos::prelude::*;

/// Titled block of a page with a short lead paragraph
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] intro: String,
    children: Children,
) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-10">
            <h2 class="text-2xl font-raleway font-medium mb-4">
                {title}
                <a href=anchor_href class="section-anchor ml-2 text-bamboo-light">"#"</a>
            </h2>
            <p class="text-bamboo-text-light mb-6">{intro}</p>
            {children()}
        </section>
    }
}
