use leptos::prelude::*;

use crate::{
    app::{
        navigation::use_navigation, persona::use_persona, submit::use_downloads, theme::palette,
    },
    content::{hero, Section},
    resources::ResourceKind,
};

#[component]
pub fn Hero() -> impl IntoView {
    let persona = use_persona();
    let downloads = use_downloads();
    let nav = use_navigation();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::Hero.anchor()
            class=move || format!("pt-32 pb-20 theme-transition {}", colors().section)
        >
            {move || {
                let p = persona.get();
                let copy = hero(p);
                let colors = palette(p);
                view! {
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                        <span class=format!(
                            "inline-block px-4 py-1 rounded-full text-sm font-medium mb-6 {}",
                            colors.badge,
                        )>{copy.badge}</span>
                        <h1 class=format!(
                            "text-4xl md:text-5xl lg:text-6xl font-bold mb-4 {}",
                            colors.heading,
                        )>{copy.title}</h1>
                        <p class=format!(
                            "text-lg md:text-xl mb-8 max-w-3xl mx-auto {}",
                            colors.body,
                        )>{copy.subtitle}</p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                class=format!("font-medium px-8 py-3 rounded-lg {}", colors.button)
                                on:click=move |_| nav.scroll_to(Section::CaseStudies.anchor())
                            >
                                "View Case Studies"
                            </button>
                            <button
                                class=format!(
                                    "font-medium px-8 py-3 rounded-lg {}",
                                    colors.button_outline,
                                )
                                disabled=move || downloads.is_busy()
                                on:click=move |_| downloads.start(ResourceKind::Resume)
                            >
                                {move || {
                                    if downloads.pending() == Some(ResourceKind::Resume) {
                                        "Preparing..."
                                    } else {
                                        "Download Resume"
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                }
            }}
        </section>
    }
}
