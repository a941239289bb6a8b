use leptos::prelude::*;
use leptos_meta::Title;

use super::logo::Logo;
use crate::{
    content::{landing, LANDING_SUBTITLE, LANDING_TITLE},
    persona::Persona,
};

/// The persona selection page. Renders the same for every visitor so the
/// server and the hydrated client agree.
#[component]
pub fn Landing(on_choose: Callback<Persona>) -> impl IntoView {
    view! {
        <Title text="Choose Your Leadership Journey" />
        <section class="min-h-screen bg-gradient-to-br from-gray-50 to-white flex items-center justify-center">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="text-center mb-8">
                    <div class="mb-6 flex justify-center">
                        <Logo />
                    </div>
                    <h1 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">{LANDING_TITLE}</h1>
                    <p class="text-lg text-gray-600 max-w-3xl mx-auto">{LANDING_SUBTITLE}</p>
                </div>
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {Persona::ALL
                        .into_iter()
                        .map(|persona| view! { <ChoiceCard persona on_choose /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-8">
                    <p class="text-base font-medium text-gray-900 mb-1">"Can't decide?"</p>
                    <p class="text-gray-600 mb-3 text-sm">
                        "Both paths showcase the same achievements through different perspectives"
                    </p>
                    <button
                        class="text-gray-600 hover:text-blue-600 text-sm underline font-medium px-4 py-2 rounded-lg hover:bg-gray-100 transition-colors"
                        on:click=move |_| on_choose.run(Persona::default())
                    >
                        "Continue with the professional view"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChoiceCard(persona: Persona, on_choose: Callback<Persona>) -> impl IntoView {
    let card = landing(persona);
    let (frame, pitch, highlight, button) = match persona {
        Persona::Professional => (
            "bg-white border-blue-200 hover:border-blue-500",
            "text-gray-900 font-medium",
            "text-blue-600",
            "bg-blue-600 hover:bg-blue-700",
        ),
        Persona::Disruptor => (
            "bg-gradient-to-br from-gray-900 to-gray-800 text-white border-gray-700 hover:border-orange-500",
            "text-gray-100",
            "text-orange-400",
            "bg-orange-500 hover:bg-orange-600",
        ),
    };

    view! {
        <div
            class=format!(
                "card-hover cursor-pointer border-2 rounded-xl p-6 text-center transition-all duration-300 hover:shadow-2xl {frame}",
            )
            on:click=move |_| on_choose.run(persona)
        >
            <h3 class="text-xl font-bold mb-3">{card.title}</h3>
            <p class=format!("mb-4 text-base {pitch}")>{card.pitch}</p>
            <ul class="space-y-2 text-sm pl-4 text-left">
                {card
                    .highlights
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center">
                                <span class=format!("mr-2 {highlight}")>"✓"</span>
                                <span>{*item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class=format!(
                "mt-6 w-full font-semibold py-3 rounded-lg shadow-lg text-white {button}",
            )>{card.call_to_action}</button>
        </div>
    }
}
