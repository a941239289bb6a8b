use leptos::prelude::*;

use super::SectionHeading;
use crate::{
    app::{persona::use_persona, theme::palette},
    content::{about, Section, HIGHLIGHTS, OWNER_NAME},
};

#[component]
pub fn About() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::About.anchor()
            class=move || format!("py-20 theme-transition {}", colors().section)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="About P.K."
                    subtitle=Signal::derive(move || about(persona.get()).subtitle)
                />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class="space-y-6">
                        {move || {
                            let colors = colors();
                            about(persona.get())
                                .paragraphs
                                .iter()
                                .map(|paragraph| {
                                    view! {
                                        <p class=format!("text-lg leading-relaxed {}", colors.body)>
                                            {*paragraph}
                                        </p>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="grid sm:grid-cols-2 gap-6">
                        {HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div class=move || {
                                        format!("card-hover p-6 rounded-xl {}", colors().card)
                                    }>
                                        <h3 class=move || {
                                            format!("font-semibold mb-2 {}", colors().heading)
                                        }>{highlight.title}</h3>
                                        <p class=move || {
                                            format!("text-sm {}", colors().muted)
                                        }>{highlight.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class=move || format!("mt-12 text-center text-sm {}", colors().muted)>
                    {OWNER_NAME}
                </p>
            </div>
        </section>
    }
}
