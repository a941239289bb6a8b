use leptos::prelude::*;

use super::SectionHeading;
use crate::{
    app::{persona::use_persona, submit::use_downloads, theme::palette},
    content::{case_studies, Section, CASE_STUDIES_SUBTITLE, CASE_STUDIES_TITLE},
    resources::ResourceKind,
};

#[component]
pub fn CaseStudies() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::CaseStudies.anchor()
            class=move || format!("py-20 theme-transition {}", colors().section)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title=CASE_STUDIES_TITLE subtitle=CASE_STUDIES_SUBTITLE />
                <div class="grid lg:grid-cols-3 gap-8 mb-20">
                    {move || {
                        let colors = colors();
                        case_studies(persona.get())
                            .iter()
                            .map(|study| {
                                view! {
                                    <div class=format!("card-hover p-6 rounded-xl {}", colors.card)>
                                        <span class=format!(
                                            "inline-block px-3 py-1 rounded-full text-xs font-medium mb-4 {}",
                                            colors.badge,
                                        )>{study.badge}</span>
                                        <h3 class=format!(
                                            "text-xl font-bold mb-3 {}",
                                            colors.heading,
                                        )>{study.title}</h3>
                                        <p class=format!("mb-4 {}", colors.body)>{study.description}</p>
                                        <ul class="space-y-1 text-sm">
                                            {study
                                                .metrics
                                                .iter()
                                                .map(|metric| {
                                                    view! {
                                                        <li class=colors.accent>"• "{*metric}</li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <h3 class=move || {
                    format!("text-2xl font-bold mb-8 text-center {}", colors().heading)
                }>"Downloadable Resources"</h3>
                <div class="grid md:grid-cols-3 gap-6">
                    {ResourceKind::ALL
                        .into_iter()
                        .map(|kind| view! { <ResourceCard kind /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ResourceCard(kind: ResourceKind) -> impl IntoView {
    let persona = use_persona();
    let downloads = use_downloads();
    let colors = move || palette(persona.get());

    view! {
        <div class=move || format!("card-hover p-6 rounded-xl {}", colors().card)>
            <h4 class=move || format!("font-semibold {}", colors().heading)>{kind.title()}</h4>
            <p class=move || format!("text-sm mb-4 {}", colors().muted)>{kind.description()}</p>
            <button
                class=move || format!("w-full py-2 rounded-lg font-medium {}", colors().button_outline)
                disabled=move || downloads.is_busy()
                on:click=move |_| downloads.start(kind)
            >
                {move || {
                    if downloads.pending() == Some(kind) { "Preparing..." } else { "Download" }
                }}
            </button>
        </div>
    }
}
