use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{
    ButtonVariant, Card, CardContent, CodeBlock, CopyFeedback, Footer, LinkButton, Navbar, Section, TabKey, TabList,
    TabPane,
};
use crate::snippets::{StyleTab, pane};

const TABS: &[StyleTab] = &StyleTab::ALL;

#[component]
pub fn StyleGuideCodePage() -> impl IntoView {
    let selected = RwSignal::new(StyleTab::default());
    let feedback = CopyFeedback::new();

    view! {
        <Title text="Bamboo Style Guide Code" />
        <Meta name="description" content="The HTML, CSS, and JavaScript code behind the Bamboo Store design system." />
        <div class="min-h-screen flex flex-col bg-bamboo-beige">
            <Navbar />

            <main class="flex-grow py-12">
                <div class="container mx-auto px-4">
                    <div class="flex items-center justify-between mb-8">
                        <h1 class="text-4xl md:text-5xl font-raleway font-semibold">"Bamboo Style Guide Code"</h1>
                        <LinkButton href=CONFIG.style_guide_href variant=ButtonVariant::Outline>
                            "View Style Guide"
                        </LinkButton>
                    </div>

                    <p class="text-lg text-bamboo-text-light max-w-3xl mb-8">
                        "This page shows the HTML, CSS, and JavaScript code that powers the Bamboo Store's design system."
                    </p>

                    <div class="tabs">
                        <TabList tabs=TABS selected=selected class="mb-6" />
                        {TABS.iter().map(|&tab| view! {
                            <TabPane tab=tab selected=selected>
                                <StylePane tab=tab feedback=feedback />
                            </TabPane>
                        }).collect_view()}
                    </div>
                </div>
            </main>

            <Footer />
        </div>
    }
}

/// Card holding one tab's code samples
#[component]
fn StylePane(tab: StyleTab, feedback: CopyFeedback) -> impl IntoView {
    let content = pane(tab);

    view! {
        <Card>
            <CardContent class="pt-6">
                <Section id=format!("{}-code", tab.value()) title=content.title intro=content.intro>
                    {content.snippets.iter().enumerate().map(|(i, snippet)| {
                        let heading_class = if i == 0 {
                            "text-xl font-raleway font-medium mb-3"
                        } else {
                            "text-xl font-raleway font-medium mt-8 mb-3"
                        };
                        view! {
                            {snippet.heading.map(|heading| view! { <h3 class=heading_class>{heading}</h3> })}
                            <CodeBlock snippet=snippet feedback=feedback />
                        }
                    }).collect_view()}
                </Section>
            </CardContent>
        </Card>
    }
}
