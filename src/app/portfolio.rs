use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    footer::Footer,
    navigation::{provide_navigation, Navigation},
    persona::use_persona,
    sections::{About, CaseStudies, Contact, Hero, Stats, Testimonials, Timeline},
    theme::palette,
};
use crate::content::hero;

/// The full page for the chosen persona.
#[component]
pub fn Portfolio(on_back: Callback<()>) -> impl IntoView {
    let persona = use_persona();
    provide_navigation();

    view! {
        <Title text=move || hero(persona.get()).badge.to_string() />
        <div class=move || format!("min-h-screen theme-transition {}", palette(persona.get()).page)>
            <Navigation on_back />
            <main>
                <Hero />
                <Stats />
                <About />
                <Timeline />
                <CaseStudies />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
