use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::tilt::Tilt;
use crate::config;
use crate::contact::{deliver, ContactAction, ContactForm, Field, SubmitStatus};
use crate::motion::reveal::Stagger;
use crate::motion::variants::Variant;

const OFFICE: &str = "Addis Ababa, Ethiopia";
const PHONE: &str = "+251 911 111 111";

const SOCIALS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/"),
    ("GitHub", "https://github.com/"),
    ("Twitter", "https://twitter.com/"),
];

/// Label shown on the submit button and the note beside it for a given status.
pub fn status_copy(status: SubmitStatus) -> (&'static str, Option<&'static str>) {
    match status {
        SubmitStatus::Idle => ("Send message", None),
        SubmitStatus::Sending => ("Sending…", None),
        SubmitStatus::Sent => ("Send message", Some("Thanks! We'll be in touch.")),
        SubmitStatus::Error => ("Send message", Some("Something went wrong. Try again.")),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);

    {
        let status = form.status;
        let form = form.clone();
        use_effect_with_deps(
            move |status| {
                if status.is_sending() {
                    let message = form.fields.clone();
                    let dispatcher = form.dispatcher();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = deliver(message).await;
                        dispatcher.dispatch(ContactAction::Delivered(result));
                    });
                }
                || ()
            },
            status,
        );
    }

    let edit_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);
        })
    };

    let sending = form.status.is_sending();
    let (button_label, note) = status_copy(form.status);
    let note_class = match form.status {
        SubmitStatus::Error => "form-note form-note--error",
        _ => "form-note form-note--ok",
    };

    html! {
        <main class="page contact-page">
            <div class="contact-glow" aria-hidden="true"></div>
            <section class="section page-hero">
                <RevealGroup
                    class="container container--narrow text-center"
                    variant={Variant::ITEM}
                    stagger={Stagger::new(0.0, 100.0)}
                    threshold={0.0}
                >
                    <h1 class="page-title">{"Let’s build something great"}</h1>
                    <p class="muted lead">{"Tell us about your project. We’ll get back within 1–2 business days."}</p>
                </RevealGroup>

                <div class="container split contact-grid">
                    <Reveal variant={Variant::FADE_IN} threshold={0.0}>
                        <Tilt>
                            <div class="card contact-card">
                                <h2 class="card__title">{"Send us a message"}</h2>
                                <form class="contact-form" {onsubmit}>
                                    <div class="form-row">
                                        <label>
                                            {"Name"}
                                            <input
                                                name="name"
                                                placeholder="Your name"
                                                required={true}
                                                value={form.fields.name.clone()}
                                                oninput={edit_input(Field::Name)}
                                            />
                                        </label>
                                        <label>
                                            {"Email"}
                                            <input
                                                name="email"
                                                type="email"
                                                placeholder="you@company.com"
                                                required={true}
                                                value={form.fields.email.clone()}
                                                oninput={edit_input(Field::Email)}
                                            />
                                        </label>
                                    </div>
                                    <div class="form-row">
                                        <label>
                                            {"Company"}
                                            <input
                                                name="company"
                                                placeholder="(Optional)"
                                                value={form.fields.company.clone()}
                                                oninput={edit_input(Field::Company)}
                                            />
                                        </label>
                                        <label>
                                            {"Budget"}
                                            <input
                                                name="budget"
                                                placeholder="$500 - $1k"
                                                value={form.fields.budget.clone()}
                                                oninput={edit_input(Field::Budget)}
                                            />
                                        </label>
                                    </div>
                                    <label>
                                        {"Project details"}
                                        <textarea
                                            name="message"
                                            placeholder="What are you building? Goals, timeline, scope…"
                                            required={true}
                                            value={form.fields.message.clone()}
                                            oninput={edit_message}
                                        />
                                    </label>
                                    <div class="form-actions">
                                        <button type="submit" class="btn btn--primary" disabled={sending}>
                                            { button_label }
                                        </button>
                                        if let Some(note) = note {
                                            <span class={note_class} role="status">{ note }</span>
                                        }
                                    </div>
                                </form>
                            </div>
                        </Tilt>
                    </Reveal>

                    <RevealGroup class="stack" variant={Variant::ITEM} stagger={Stagger::new(0.0, 100.0)} threshold={0.0}>
                        <Tilt>
                            <div class="card contact-info">
                                <div class="contact-info__item">
                                    <span class="muted">{"Email"}</span>
                                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                                </div>
                                <div class="contact-info__item">
                                    <span class="muted">{"Office"}</span>
                                    <span>{ OFFICE }</span>
                                </div>
                                <div class="contact-info__item">
                                    <span class="muted">{"Phone"}</span>
                                    <span>{ PHONE }</span>
                                </div>
                            </div>
                        </Tilt>
                        <Tilt>
                            <div class="card">
                                <h2 class="card__title">{"Connect with us"}</h2>
                                <div class="tag-row">
                                    { for SOCIALS.iter().map(|(label, href)| html! {
                                        <a class="pill social-link" href={*href} target="_blank" rel="noopener noreferrer">
                                            { *label }
                                        </a>
                                    }) }
                                </div>
                            </div>
                        </Tilt>
                    </RevealGroup>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_reads_sending_only_while_in_flight() {
        assert_eq!(status_copy(SubmitStatus::Sending).0, "Sending…");
        assert_eq!(status_copy(SubmitStatus::Idle).0, "Send message");
        assert_eq!(status_copy(SubmitStatus::Sent).0, "Send message");
    }

    #[test]
    fn outcome_notes_match_status() {
        assert_eq!(status_copy(SubmitStatus::Idle).1, None);
        assert_eq!(status_copy(SubmitStatus::Sent).1, Some("Thanks! We'll be in touch."));
        assert_eq!(
            status_copy(SubmitStatus::Error).1,
            Some("Something went wrong. Try again.")
        );
    }
}
