use leptos::prelude::*;

use crate::{
    app::{persona::use_persona, theme::palette},
    content::{stats, Section},
};

#[component]
pub fn Stats() -> impl IntoView {
    let persona = use_persona();

    view! {
        <section id=Section::Stats.anchor() class="py-16 theme-transition">
            {move || {
                let p = persona.get();
                let colors = palette(p);
                view! {
                    <div class=format!("py-12 {}", colors.section_alt)>
                        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-2 lg:grid-cols-4 gap-8">
                            {stats(p)
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class=format!("text-center p-6 rounded-xl {}", colors.card)>
                                            <div class=format!(
                                                "text-4xl font-bold mb-2 {}",
                                                colors.accent,
                                            )>{stat.value}</div>
                                            <div class=colors.body>{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            }}
        </section>
    }
}
