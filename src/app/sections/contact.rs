use leptos::prelude::*;

use super::SectionHeading;
use crate::{
    app::{persona::use_persona, submit::Submitter, theme::palette},
    contact::{ContactSubmission, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_MESSAGE},
    content::{contact, Section},
};

#[component]
pub fn Contact() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());

    view! {
        <section
            id=Section::Contact.anchor()
            class=move || format!("py-20 theme-transition {}", colors().section)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title=Signal::derive(move || contact(persona.get()).title)
                    subtitle=Signal::derive(move || contact(persona.get()).subtitle)
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactForm />
                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let persona = use_persona();
    let colors = move || palette(persona.get());
    let form = Submitter::<ContactSubmission>::new();
    let input = form.input;
    let input_class = move || {
        format!(
            "w-full px-4 py-2 rounded-md focus:outline-none focus:ring-2 {}",
            colors().input
        )
    };
    let label_class = move || format!("block text-sm font-medium mb-1 {}", colors().body);

    view! {
        <div class=move || format!("p-8 rounded-xl shadow-lg {}", colors().card)>
            <h3 class=move || {
                format!("text-2xl font-bold mb-6 {}", colors().heading)
            }>"Send a Message"</h3>
            <form
                class="space-y-6"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit();
                }
            >
                <div class="grid md:grid-cols-2 gap-6">
                    <div>
                        <label for="firstName" class=label_class>
                            "First Name"
                        </label>
                        <input
                            id="firstName"
                            class=input_class
                            placeholder="John"
                            prop:value=move || input.with(|s| s.first_name.clone())
                            on:input=move |ev| input.update(|s| s.first_name = event_target_value(&ev))
                        />
                        <FieldError form field=FIELD_FIRST_NAME />
                    </div>
                    <div>
                        <label for="lastName" class=label_class>
                            "Last Name"
                        </label>
                        <input
                            id="lastName"
                            class=input_class
                            placeholder="Doe"
                            prop:value=move || input.with(|s| s.last_name.clone())
                            on:input=move |ev| input.update(|s| s.last_name = event_target_value(&ev))
                        />
                        <FieldError form field=FIELD_LAST_NAME />
                    </div>
                </div>
                <div>
                    <label for="email" class=label_class>
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=input_class
                        placeholder="john@company.com"
                        prop:value=move || input.with(|s| s.email.clone())
                        on:input=move |ev| input.update(|s| s.email = event_target_value(&ev))
                    />
                    <FieldError form field=FIELD_EMAIL />
                </div>
                <div>
                    <label for="company" class=label_class>
                        "Company"
                    </label>
                    <input
                        id="company"
                        class=input_class
                        placeholder="Medical Device Company"
                        prop:value=move || input.with(|s| s.company.clone().unwrap_or_default())
                        on:input=move |ev| input.update(|s| s.company = Some(event_target_value(&ev)))
                    />
                </div>
                <div>
                    <label for="message" class=label_class>
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        rows=4
                        class=input_class
                        placeholder="Tell me about your project or opportunity..."
                        prop:value=move || input.with(|s| s.message.clone())
                        on:input=move |ev| input.update(|s| s.message = event_target_value(&ev))
                    ></textarea>
                    <FieldError form field=FIELD_MESSAGE />
                </div>
                <button
                    type="submit"
                    class=move || {
                        format!(
                            "w-full py-3 rounded-lg font-medium disabled:opacity-60 {}",
                            colors().button,
                        )
                    }
                    disabled=move || form.is_submitting()
                >
                    {move || if form.is_submitting() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldError(form: Submitter<ContactSubmission>, field: &'static str) -> impl IntoView {
    move || {
        form.error_for(field)
            .map(|message| view! { <p class="text-sm text-red-500 mt-1">{message}</p> })
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let persona = use_persona();

    move || {
        let p = persona.get();
        let colors = palette(p);
        let info = contact(p);
        view! {
            <div class="space-y-8">
                <div>
                    <h3 class=format!("text-2xl font-bold mb-6 {}", colors.heading)>"Get in Touch"</h3>
                    <ul class="space-y-4">
                        {info
                            .details
                            .iter()
                            .map(|detail| {
                                let value = match detail.href {
                                    Some(href) => {
                                        view! {
                                            <a class=format!("hover:underline {}", colors.accent) href=href>
                                                {detail.value}
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <span class=colors.body>{detail.value}</span> }.into_any(),
                                };
                                view! {
                                    <li class="flex flex-col">
                                        <span class=format!("text-sm {}", colors.muted)>{detail.label}</span>
                                        {value}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class=format!("p-6 rounded-xl {}", colors.card)>
                    <h4 class=format!("text-lg font-semibold mb-4 {}", colors.heading)>"Quick Facts"</h4>
                    {info
                        .quick_facts
                        .iter()
                        .map(|fact| {
                            view! {
                                <div class="flex justify-between text-sm py-1">
                                    <span class=colors.muted>{fact.label}</span>
                                    <span class=format!("font-medium {}", colors.body)>{fact.value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    }
}
