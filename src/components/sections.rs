use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::tilt::Tilt;
use crate::config;
use crate::motion::reveal::Stagger;
use crate::motion::variants::Variant;
use crate::pricing::{format_price, BillingCycle, TIERS};

const SERVICES: [(&str, &str); 6] = [
    ("Product Design", "UX research, wireframes, and pixel-perfect UI for web and mobile."),
    ("Full-Stack Development", "Next.js apps, APIs, and integrations built for performance."),
    ("Design Systems", "Scalable component libraries with accessibility baked in."),
    ("Growth Websites", "Marketing sites that are fast, SEO-friendly, and easy to update."),
    ("Best Practices", "Security, testing, observability, and CI/CD from day one."),
    ("Launch & Beyond", "Analytics, A/B testing, and ongoing iteration after launch."),
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="section">
            <div class="container">
                <Reveal class="section-head">
                    <h2 class="section-title">{"Services"}</h2>
                    <p class="muted">{"Everything you need to go from idea to production-grade product."}</p>
                </Reveal>
                <RevealGroup
                    class="grid grid--3"
                    variant={Variant::ITEM}
                    stagger={Stagger::new(0.0, config::REVEAL_STAGGER_MS)}
                >
                    { for SERVICES.iter().map(|(title, desc)| html! {
                        <Tilt class="card">
                            <h3 class="card__title">{ *title }</h3>
                            <p class="muted">{ *desc }</p>
                        </Tilt>
                    }) }
                </RevealGroup>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container split">
                <Reveal>
                    <h2 class="section-title">{ format!("About {}", config::SITE_NAME) }</h2>
                    <p class="muted">
                        {"We craft delightful, performant, and scalable experiences using modern web technologies. \
                          Our team partners closely with founders, startups, and enterprises to deliver elegant \
                          products that move the needle."}
                    </p>
                    <p class="muted">
                        {"From design systems and marketing sites to robust SaaS platforms, we care about the details: \
                          accessibility, animations, and architecture that stands the test of time."}
                    </p>
                </Reveal>
                <Reveal variant={Variant::ZOOM_IN} delay_ms={100.0}>
                    <div class="studio-visual" role="img" aria-label="Our studio workspace"></div>
                </Reveal>
            </div>
        </section>
    }
}

/// Tier cards with a monthly/yearly switch; yearly is selected first.
#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let cycle = use_state(BillingCycle::default);

    let toggle = {
        let cycle = cycle.clone();
        Callback::from(move |_: Event| cycle.set(cycle.toggled()))
    };
    let yearly = *cycle == BillingCycle::Yearly;

    html! {
        <section id="pricing" class="section">
            <div class="container">
                <div class="section-head section-head--split">
                    <div>
                        <h2 class="section-title">{"Pricing"}</h2>
                        <p class="muted">{ cycle.subtitle() }</p>
                    </div>
                    <label class="billing-switch">
                        <span class={classes!((!yearly).then_some("active"))}>{"Monthly"}</span>
                        <input
                            type="checkbox"
                            role="switch"
                            aria-label="Toggle yearly billing"
                            checked={yearly}
                            onchange={toggle}
                        />
                        <span class={classes!(yearly.then_some("active"))}>{"Yearly"}</span>
                    </label>
                </div>
                <RevealGroup
                    class="grid grid--3"
                    variant={Variant::ITEM}
                    stagger={Stagger::new(0.0, config::REVEAL_STAGGER_MS)}
                >
                    { for TIERS.iter().map(|tier| html! {
                        <div class={classes!("card", "tier", tier.highlighted.then_some("tier--highlighted"))}>
                            <div class="tier__head">
                                <span class="tier__name">{ tier.name }</span>
                                <span class="tier__price">{ format_price(tier.monthly_price, *cycle) }</span>
                            </div>
                            <ul class="checklist">
                                { for tier.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                            </ul>
                            <a
                                href="/contact"
                                class={classes!("btn", "btn--block", if tier.highlighted { "btn--primary" } else { "btn--secondary" })}
                            >
                                { tier.cta }
                            </a>
                        </div>
                    }) }
                </RevealGroup>
            </div>
        </section>
    }
}
