mod about;
mod case_studies;
mod contact;
mod hero;
mod stats;
mod testimonials;
mod timeline;

pub use about::About;
pub use case_studies::CaseStudies;
pub use contact::Contact;
pub use hero::Hero;
pub use stats::Stats;
pub use testimonials::Testimonials;
pub use timeline::Timeline;

use leptos::prelude::*;

use super::{persona::use_persona, theme::palette};

/// Centered title and subtitle opening most sections.
#[component]
fn SectionHeading(
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] subtitle: Signal<&'static str>,
) -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <div class="text-center mb-16">
            <h2 class=move || format!("text-4xl font-bold mb-6 {}", colors().heading)>
                {move || title.get()}
            </h2>
            <p class=move || format!("text-xl max-w-3xl mx-auto {}", colors().muted)>
                {move || subtitle.get()}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::{
            navigation::provide_navigation, persona::provide_persona, submit::provide_downloads,
            toast::provide_notifier,
        },
        content::stats,
        persona::Persona,
    };

    #[test]
    fn test_stats_render_once_on_the_page() {
        let owner = Owner::new();
        owner.set();
        provide_persona();
        provide_notifier();
        provide_downloads();
        provide_navigation();

        let html = view! {
            <Hero />
            <Stats />
        }
        .to_html();
        for stat in stats(Persona::default()) {
            assert_eq!(html.matches(stat.label).count(), 1, "{}", stat.label);
        }
    }
}
