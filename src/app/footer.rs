use leptos::prelude::*;

use super::{
    logo::{Logo, LogoSize},
    persona::use_persona,
};
use crate::content::{copyright_year, footer, FOCUS_AREAS, OWNER_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    let persona = use_persona();

    view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-3 gap-8">
                <div>
                    <div class="bg-white inline-block px-3 py-1 rounded mb-4">
                        <Logo size=LogoSize::Small />
                    </div>
                    <p class="text-sm">{move || footer(persona.get()).tagline}</p>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">"Focus Areas"</h4>
                    <ul class="space-y-2 text-sm">
                        {FOCUS_AREAS.iter().map(|area| view! { <li>{*area}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-white font-semibold mb-4">"Connect"</h4>
                    {move || {
                        let details = footer(persona.get());
                        view! {
                            <ul class="space-y-2 text-sm">
                                <li>{details.location}</li>
                                <li>
                                    <a class="hover:text-white" href=format!("mailto:{}", details.email)>
                                        {details.email}
                                    </a>
                                </li>
                                <li>
                                    <a
                                        class="hover:text-white"
                                        href=format!("https://{}", details.linkedin)
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {details.linkedin}
                                    </a>
                                </li>
                            </ul>
                        }
                    }}
                </div>
            </div>
            <p class="text-center text-xs text-gray-500 mt-10">
                {format!("© {} {OWNER_NAME}. All rights reserved.", copyright_year())}
            </p>
        </footer>
    }
}
