use leptos::{either::Either, ev::MouseEvent, prelude::*};

use super::{
    logo::{Logo, LogoSize},
    persona::use_persona,
    theme::palette,
};
use crate::{
    content::nav_tagline,
    navigation::{NavigationController, Viewport, HOME_ANCHOR, NAV_ITEMS},
    persona::Persona,
};

/// Scrolls the live document.
struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_into_view(&self, id: &str) -> bool {
        match document().get_element_by_id(id) {
            Some(element) => {
                element.scroll_into_view();
                true
            }
            None => false,
        }
    }
}

/// The page's navigation controller, shared by the nav bar and in-page links.
#[derive(Clone, Copy)]
pub struct PageNavigation(RwSignal<NavigationController>);

impl PageNavigation {
    pub fn scroll_to(&self, anchor: &str) {
        self.scroll_within(anchor, &DocumentViewport);
    }

    fn scroll_within(&self, anchor: &str, viewport: &impl Viewport) {
        self.0.update(|n| {
            if !n.scroll_to(anchor, viewport) {
                log::debug!("no section with id {anchor}");
            }
        });
    }

    fn toggle_menu(&self) {
        self.0.update(NavigationController::toggle_menu);
    }

    fn is_menu_open(&self) -> bool {
        self.0.with(NavigationController::is_menu_open)
    }
}

pub fn provide_navigation() -> PageNavigation {
    let nav = PageNavigation(RwSignal::new(NavigationController::new()));
    provide_context(nav);
    nav
}

pub fn use_navigation() -> PageNavigation {
    expect_context::<PageNavigation>()
}

#[component]
pub fn Navigation(on_back: Callback<()>) -> impl IntoView {
    let persona = use_persona();
    let nav = use_navigation();

    let scroll_to = move |anchor: &'static str| nav.scroll_to(anchor);
    let toggle_theme = move |_: MouseEvent| {
        persona.update_context(|ctx| {
            nav.0.update(|n| {
                n.toggle_theme(ctx);
            })
        });
    };
    let colors = move || palette(persona.get());
    let link_class = move || {
        format!(
            "px-3 py-2 rounded-md text-sm font-medium transition-colors {}",
            colors().nav_link
        )
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 w-full z-50 backdrop-blur-sm border-b theme-transition {}",
                colors().nav,
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <button
                        class="flex items-center min-w-0 flex-1"
                        on:click=move |_| scroll_to(HOME_ANCHOR)
                    >
                        <Logo size=LogoSize::Small persona=Signal::derive(move || persona.get()) />
                        <span class=move || {
                            format!("ml-3 text-sm hidden sm:inline font-medium {}", colors().muted)
                        }>{move || nav_tagline(persona.get())}</span>
                    </button>
                    <div class="hidden md:flex items-baseline space-x-4 ml-10">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <button class=link_class on:click=move |_| scroll_to(item.anchor)>
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex items-center space-x-2">
                        <button
                            class=move || format!("hidden lg:flex {}", link_class())
                            title=move || match persona.get() {
                                Persona::Professional => "Switch to the disruptor view",
                                Persona::Disruptor => "Switch to the professional view",
                            }
                            on:click=toggle_theme
                        >
                            "◐"
                        </button>
                        <button class=link_class on:click=move |_| on_back.run(())>
                            "Change view"
                        </button>
                        <button
                            class=move || format!("md:hidden {}", link_class())
                            aria-label="Menu"
                            on:click=move |_| nav.toggle_menu()
                        >
                            "☰"
                        </button>
                    </div>
                </div>
                {move || {
                    if nav.is_menu_open() {
                        Either::Left(
                            view! {
                                <div class="md:hidden pb-3 space-y-1">
                                    {NAV_ITEMS
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <button
                                                    class=move || format!("block w-full text-left {}", link_class())
                                                    on:click=move |_| scroll_to(item.anchor)
                                                >
                                                    {item.label}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                    <button
                                        class=move || format!("block w-full text-left {}", link_class())
                                        on:click=toggle_theme
                                    >
                                        "Switch view"
                                    </button>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(())
                    }
                }}
            </div>
        </nav>
    }
}
