use leptos::prelude::*;

use crate::persona::Persona;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogoSize {
    Small,
    #[default]
    Default,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "text-xl",
            Self::Default => "text-2xl md:text-3xl",
        }
    }
}

/// The "P.K. KODURI" word mark. Without a persona it uses the neutral
/// landing colors.
#[component]
pub fn Logo(
    #[prop(optional)] size: LogoSize,
    #[prop(optional, into)] persona: Option<Signal<Persona>>,
) -> impl IntoView {
    let name_class = move || match persona.map(|p| p.get()) {
        Some(Persona::Disruptor) => "ml-1 text-white",
        _ => "ml-1 text-gray-900",
    };

    view! {
        <div class=format!("font-bold tracking-tight {}", size.class())>
            <span class="text-blue-600">"P.K."</span>
            <span class=name_class>"KODURI"</span>
        </div>
    }
}
