use leptos::prelude::*;

use super::SectionHeading;
use crate::{
    app::{persona::use_persona, theme::palette},
    content::{timeline, Section},
};

#[component]
pub fn Timeline() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::Timeline.anchor()
            class=move || format!("py-20 theme-transition {}", colors().section_alt)
        >
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title=Signal::derive(move || timeline(persona.get()).title)
                    subtitle=Signal::derive(move || timeline(persona.get()).subtitle)
                />
                <ol class="relative border-l-2 border-gray-300 ml-4 space-y-10">
                    {move || {
                        let colors = colors();
                        timeline(persona.get())
                            .entries
                            .iter()
                            .map(|entry| {
                                view! {
                                    <li class="ml-8">
                                        <span class="absolute -left-2 w-4 h-4 rounded-full bg-blue-600"></span>
                                        <p class=format!(
                                            "text-sm font-semibold mb-1 {}",
                                            colors.accent,
                                        )>{entry.period}</p>
                                        <div class=format!("p-6 rounded-xl {}", colors.card)>
                                            <h3 class=format!(
                                                "text-xl font-bold mb-2 {}",
                                                colors.heading,
                                            )>{entry.title}</h3>
                                            <p class=format!("mb-4 {}", colors.body)>{entry.description}</p>
                                            <div class="flex flex-wrap gap-2">
                                                {entry
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class=format!(
                                                                "px-3 py-1 rounded-full text-xs {}",
                                                                colors.badge,
                                                            )>{*tag}</span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </div>
        </section>
    }
}
