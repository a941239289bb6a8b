use leptos::prelude::*;

use super::SectionHeading;
use crate::{
    app::{persona::use_persona, theme::palette},
    content::{testimonials, Section, TESTIMONIALS_SUBTITLE, TESTIMONIALS_TITLE},
};

#[component]
pub fn Testimonials() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::Testimonials.anchor()
            class=move || format!("py-20 theme-transition {}", colors().section_alt)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title=TESTIMONIALS_TITLE subtitle=TESTIMONIALS_SUBTITLE />
                <div class="grid md:grid-cols-3 gap-8">
                    {move || {
                        let colors = colors();
                        testimonials(persona.get())
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class=format!("p-8 rounded-xl text-center {}", colors.card)>
                                        <div class=format!(
                                            "text-3xl font-bold mb-2 {}",
                                            colors.accent,
                                        )>{item.metric}</div>
                                        <h3 class=format!(
                                            "text-lg font-semibold mb-3 {}",
                                            colors.heading,
                                        )>{item.title}</h3>
                                        <p class=format!("text-sm {}", colors.body)>{item.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
