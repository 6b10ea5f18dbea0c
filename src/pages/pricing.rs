use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::tilt::Tilt;
use crate::motion::reveal::Stagger;
use crate::motion::variants::Variant;
use crate::pricing::{plan_by_id, COMPARISON, DEFAULT_PLAN, PLANS};

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let active_plan = use_state(|| DEFAULT_PLAN);

    let active_name = plan_by_id(*active_plan).map(|p| p.name).unwrap_or_default();

    html! {
        <main class="page pricing-page">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <section class="section page-hero">
                <div class="container container--narrow text-center">
                    <Reveal>
                        <h1 class="page-title">{"Simple, Transparent Pricing"}</h1>
                    </Reveal>
                    <Reveal delay_ms={200.0}>
                        <p class="muted lead">
                            {"Choose the perfect plan for your needs. From free community options to enterprise \
                              solutions, we've got you covered."}
                        </p>
                    </Reveal>
                    <Reveal delay_ms={400.0} class="button-row">
                        <a href="#compare" class="btn btn--primary">{"Compare Plans"}</a>
                    </Reveal>
                </div>
            </section>

            <section class="section section--tight">
                <RevealGroup class="container grid grid--3" variant={Variant::ITEM} stagger={Stagger::new(0.0, 100.0)}>
                    { for PLANS.iter().map(|plan| {
                        let is_active = *active_plan == plan.id;
                        let onclick = {
                            let active_plan = active_plan.clone();
                            let id = plan.id;
                            Callback::from(move |_: MouseEvent| {
                                log::debug!("active plan -> {}", id);
                                active_plan.set(id);
                            })
                        };
                        html! {
                            <Tilt class={classes!("plan-tilt", is_active.then_some("plan-tilt--active"))}>
                                <div
                                    class={classes!(
                                        "card",
                                        "plan",
                                        plan.accent_class,
                                        plan.highlighted.then_some("plan--highlighted"),
                                        is_active.then_some("plan--active")
                                    )}
                                    {onclick}
                                >
                                    if let Some(badge) = plan.badge {
                                        <span class="plan__badge">{ badge }</span>
                                    }
                                    <h3 class="plan__name">{ plan.name }</h3>
                                    <p class="muted">{ plan.subtitle }</p>
                                    <div class="plan__price">{ plan.price }</div>
                                    <ul class="checklist">
                                        { for plan.features.iter().map(|f| html! { <li>{ *f }</li> }) }
                                    </ul>
                                    <a
                                        href="/contact"
                                        class={classes!("btn", "btn--block", if plan.highlighted { "btn--primary" } else { "btn--secondary" })}
                                    >
                                        { plan.cta }
                                    </a>
                                </div>
                            </Tilt>
                        }
                    }) }
                </RevealGroup>
            </section>

            <section id="compare" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"Compare Plans"}</h2>
                        <p class="muted">{ format!("Selected: {}", active_name) }</p>
                    </Reveal>
                    <Reveal variant={Variant::FADE_IN}>
                        <div class="table-scroll">
                            <table class="compare-table">
                                <thead>
                                    <tr>
                                        <th scope="col">{"Feature"}</th>
                                        { for PLANS.iter().map(|plan| html! {
                                            <th
                                                scope="col"
                                                class={classes!(plan.accent_class, (*active_plan == plan.id).then_some("active"))}
                                            >
                                                { plan.name }
                                            </th>
                                        }) }
                                    </tr>
                                </thead>
                                <tbody>
                                    { for COMPARISON.iter().map(|row| html! {
                                        <tr>
                                            <th scope="row">{ row.feature }</th>
                                            { for row.included.iter().map(|included| if *included {
                                                html! { <td class="cell cell--yes" aria-label="Included">{"✓"}</td> }
                                            } else {
                                                html! { <td class="cell cell--no" aria-label="Not included">{"✕"}</td> }
                                            }) }
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </Reveal>
                </div>
            </section>

            <FaqSection />
        </main>
    }
}
