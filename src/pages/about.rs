use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::tilt::Tilt;
use crate::config;
use crate::motion::reveal::Stagger;
use crate::motion::variants::Variant;
use crate::Route;

const STATS: [(&str, &str); 4] = [
    ("12+", "Projects Delivered"),
    ("9.5+", "Avg. Rating"),
    ("98%", "Client Satisfaction"),
    ("3+", "Years of Experience"),
];

const VALUES: [(&str, &str); 3] = [
    ("Human-centered", "We design for people first: accessible, clear and delightful experiences that build trust."),
    ("Reliability", "Quality engineering and maintainable systems that scale with your product and team."),
    ("Focus & Impact", "We prioritize what moves the needle, shipping meaningful value with polish."),
];

const MILESTONES: [(&str, &str, &str); 4] = [
    ("2019", "Founded Zemenay", "Started with a clear mission: build modern, reliable products."),
    ("2021", "Global Clients", "Scaled our processes and quality bar across larger engagements."),
    ("2023", "Motion & Systems", "Codified motion patterns and a robust design system for velocity."),
    ("2025", "Beyond", "Partnering deeper with clients to drive measurable outcomes."),
];

const TEAM: [(&str, &str); 3] = [
    ("John Doe", "CEO & Founder"),
    ("Jane Smith", "Lead Designer"),
    ("Mike Johnson", "Senior Developer"),
];

const STAGGER: Stagger = Stagger::new(0.0, 100.0);

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="page about-page">
            <section class="section page-hero">
                <RevealGroup class="container container--narrow text-center" variant={Variant::ITEM} stagger={STAGGER}>
                    <h1 class="page-title">{ format!("About {}", config::SITE_NAME) }</h1>
                    <p class="muted lead">
                        {"Discover the story behind our passion for innovation and commitment to excellence. \
                          We're on a mission to transform the digital landscape, one project at a time."}
                    </p>
                    <div class="button-row">
                        <a href="#story" class="btn btn--primary">{"Our Mission"}</a>
                        <a href="#team" class="btn btn--secondary">{"Meet the Team"}</a>
                    </div>
                </RevealGroup>
            </section>

            <section class="section section--tight">
                <RevealGroup class="container grid grid--4" variant={Variant::ITEM} stagger={STAGGER}>
                    { for STATS.iter().map(|(value, label)| html! {
                        <Tilt class="card stat">
                            <span class="stat__label">{ *label }</span>
                            <span class="stat__value">{ *value }</span>
                        </Tilt>
                    }) }
                </RevealGroup>
            </section>

            <section class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"People First"}</h2>
                    </Reveal>
                    <RevealGroup class="grid grid--3" variant={Variant::ITEM} stagger={STAGGER}>
                        { for VALUES.iter().map(|(title, text)| html! {
                            <div class="card card--feature">
                                <h3 class="card__title">{ *title }</h3>
                                <p class="muted">{ *text }</p>
                                <Link<Route> to={Route::Services} classes="text-link">{"Learn more"}</Link<Route>>
                            </div>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="story" class="section">
                <div class="container container--narrow">
                    <Reveal class="section-head">
                        <h2 class="section-title">{"Our Story"}</h2>
                        <p class="muted">{"Milestones that shaped our craft and culture."}</p>
                    </Reveal>
                    <RevealGroup class="timeline" item_class="timeline__step" variant={Variant::ITEM} stagger={STAGGER}>
                        { for MILESTONES.iter().map(|(year, title, text)| html! {
                            <div class="timeline__card">
                                <span class="timeline__year">{ *year }</span>
                                <h3>{ *title }</h3>
                                <p class="muted">{ *text }</p>
                            </div>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="team" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"Meet the Team"}</h2>
                    </Reveal>
                    <RevealGroup class="grid grid--3" variant={Variant::ZOOM_IN} stagger={STAGGER}>
                        { for TEAM.iter().map(|(name, role)| html! {
                            <Tilt class="card team-card">
                                <div class="team-card__avatar" aria-hidden="true">
                                    { name.chars().next().map(String::from).unwrap_or_default() }
                                </div>
                                <h3 class="card__title">{ *name }</h3>
                                <p class="muted">{ *role }</p>
                            </Tilt>
                        }) }
                    </RevealGroup>
                </div>
            </section>
        </main>
    }
}
