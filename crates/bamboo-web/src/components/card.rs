use leptos::prelude::*;

/// Bordered surface that groups a block of content
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="rounded-lg border bg-card text-card-foreground shadow-sm">
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = format!("p-6 {}", class).trim_end().to_string();

    view! {
        <div class=class>
            {children()}
        </div>
    }
}
