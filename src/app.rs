mod footer;
mod landing;
mod logo;
mod navigation;
mod persona;
mod portfolio;
mod sections;
mod submit;
mod theme;
mod toast;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::OWNER_NAME, navigation::PageView, persona::Persona};
use landing::Landing;
use persona::provide_persona;
use portfolio::Portfolio;
use submit::provide_downloads;
use toast::{provide_notifier, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/pk-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_persona();
    provide_notifier();
    provide_downloads();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="P.K. Koduri: medical device marketing leader. Two perspectives on the same track record."
        />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <Toaster />
    }
}

/// Persona choice first, then the portfolio. Always starts at the choice.
#[component]
fn HomePage() -> impl IntoView {
    let persona = persona::use_persona();
    let (page, set_page) = signal(PageView::default());

    let choose = Callback::new(move |choice: Persona| {
        persona.update_context(|ctx| set_page.update(|page| page.choose(choice, ctx)));
    });
    let back = Callback::new(move |_: ()| set_page.update(PageView::back));

    move || match page.get() {
        PageView::Selecting => Either::Left(view! { <Landing on_choose=choose /> }),
        PageView::Viewing => Either::Right(view! { <Portfolio on_back=back /> }),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 text-gray-900">
            <h1 class="text-3xl font-bold">"404 - Page not found"</h1>
            <p class="text-gray-600">"The page you are looking for does not exist."</p>
            <a href="/" class="text-blue-600 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}
