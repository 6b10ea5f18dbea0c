use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};
use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::globe::{OrbitingIcons, WireframeGlobe};
use crate::components::magnetic::MagneticCta;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::sections::{AboutSection, PricingSection, ServicesSection};
use crate::components::tilt::Tilt;
use crate::config;
use crate::motion::preference::MotionPreference;
use crate::motion::reveal::Stagger;
use crate::motion::scroll::{parallax_offset, scroll_progress, SmoothScrollGuard};
use crate::motion::variants::Variant;

const HEADLINE: [&str; 2] = ["Revolutionize Your ", "DigitalExperience"];
const TEXT_DELAY_MS: f64 = 100.0;
const CHAR_STAGGER_MS: f64 = 20.0;
const SECTION_STAGGER: Stagger = Stagger::new(100.0, 120.0);

const WORK: [&str; 3] = ["Commerce Redesign", "SaaS Dashboard", "Brand Microsite"];

const REASONS: [(&str, &str); 3] = [
    ("Design that Performs", "Elegant interfaces with accessibility and performance baked in from day one."),
    ("Built to Last", "Modern architecture, testing, and best practices for long-term maintainability."),
    ("Speed to Impact", "Rapid iterations that ship value quickly without compromising quality."),
];

const PROCESS: [(&str, &str); 4] = [
    ("Discovery", "We align on goals, constraints, and opportunities."),
    ("Design", "We craft accessible interfaces and systemize components."),
    ("Build", "We ship robust, tested, and performant experiences."),
    ("Launch + Iterate", "We monitor, learn, and continuously improve."),
];

const CLIENTS: [&str; 8] = [
    "Acme Co",
    "Globex",
    "Umbrella",
    "Wayne Tech",
    "Stark Industries",
    "Hooli",
    "Initech",
    "Wonka",
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Amina K.",
        "Product Lead, Globex",
        "Zemenay delivered a blazing-fast site and a design system our team loves. Velocity and quality in one.",
    ),
    (
        "Samuel T.",
        "Founder, Initech",
        "From kickoff to launch, they were collaborative, thoughtful, and laser-focused on outcomes.",
    ),
    (
        "Lina O.",
        "Marketing Director, Hooli",
        "Our traffic and conversions jumped immediately. The attention to performance really shows.",
    ),
];

/// Per-line stagger so the second headline line continues where the first stopped.
fn headline_stagger(line: usize) -> Stagger {
    let before: usize = HEADLINE[..line].iter().map(|l| l.chars().count()).sum();
    Stagger::new(TEXT_DELAY_MS + before as f64 * CHAR_STAGGER_MS, CHAR_STAGGER_MS)
}

fn paint_parallax(window: &Window, hero: &Element, visual: &HtmlElement) {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = hero.get_bounding_client_rect();
    let offset = parallax_offset(
        scroll_progress(rect.top(), rect.height(), viewport),
        config::PARALLAX_MAX_PX,
    );
    let _ = visual
        .style()
        .set_property("transform", &format!("translate3d(0, {:.1}px, 0)", offset));
}

#[function_component(Hero)]
fn hero() -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let hero_ref = use_node_ref();
    let visual_ref = use_node_ref();

    {
        let hero_ref = hero_ref.clone();
        let visual_ref = visual_ref.clone();
        use_effect_with_deps(
            move |reduced| {
                let mut listener = None;
                if !*reduced {
                    if let (Some(window), Some(hero), Some(visual)) = (
                        web_sys::window(),
                        hero_ref.cast::<Element>(),
                        visual_ref.cast::<HtmlElement>(),
                    ) {
                        paint_parallax(&window, &hero, &visual);
                        let target = window.clone();
                        listener = Some(EventListener::new(&target, "scroll", move |_| {
                            paint_parallax(&window, &hero, &visual);
                        }));
                    }
                }
                move || drop(listener)
            },
            motion.reduced,
        );
    }

    html! {
        <section id="home" class="hero" ref={hero_ref}>
            <div class="hero__aurora" aria-hidden="true"></div>
            <Tilt
                class="hero__tilt"
                perspective={config::HERO_PERSPECTIVE_PX}
                spring={config::HERO_TILT_SPRING}
            >
                <div class="container hero__grid">
                    <div class="hero__copy">
                        <h1 class="hero__headline">
                            { for HEADLINE.iter().enumerate().map(|(i, line)| html! {
                                <RevealGroup
                                    class="hero__line"
                                    item_class="char"
                                    inline={true}
                                    variant={Variant::CHAR_UP}
                                    stagger={headline_stagger(i)}
                                    threshold={0.0}
                                >
                                    { for line.chars().map(|c| {
                                        let c = if c == ' ' { '\u{a0}' } else { c };
                                        html! { { c.to_string() } }
                                    }) }
                                </RevealGroup>
                            }) }
                        </h1>
                        <Reveal delay_ms={TEXT_DELAY_MS} threshold={0.0}>
                            <p class="hero__lead muted">
                                { format!(
                                    "At {}, we build clean, scalable, and elegant digital experiences for forward-thinking businesses.",
                                    config::SITE_NAME
                                ) }
                            </p>
                        </Reveal>
                        <Reveal delay_ms={TEXT_DELAY_MS} threshold={0.0} class="hero__cta">
                            <MagneticCta href="#why">{"Let's Build Together"}</MagneticCta>
                        </Reveal>
                    </div>
                    <Reveal variant={Variant::ZOOM_IN} threshold={0.0} class="hero__visual-wrap">
                        <div class="hero__visual" ref={visual_ref}>
                            <div class="hero__frame" aria-hidden="true"></div>
                            <WireframeGlobe class="hero__globe" />
                            <OrbitingIcons />
                        </div>
                    </Reveal>
                </div>
            </Tilt>
            <a href="#work" class={classes!("scroll-hint", (!motion.reduced).then_some("scroll-hint--float"))}>
                <span aria-hidden="true">{"🤝"}</span>
                <span class="sr-only">{"Scroll"}</span>
            </a>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            let guard = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .and_then(|root| root.dyn_into::<HtmlElement>().ok())
                .map(SmoothScrollGuard::install);
            move || drop(guard)
        },
        (),
    );

    html! {
        <main class="home">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <Hero />

            <section id="work" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"Featured Work"}</h2>
                        <p class="muted">{"Selected projects showcasing clarity, speed, and delightful UX."}</p>
                    </Reveal>
                    <RevealGroup class="grid grid--3" stagger={SECTION_STAGGER}>
                        { for WORK.iter().map(|title| html! {
                            <div class="card card--lift work-card">
                                <div class="work-card__preview"><span>{ *title }</span></div>
                                <h3 class="card__title">{ *title }</h3>
                                <p class="muted">{"High-performance build with nuanced motion and robust accessibility."}</p>
                            </div>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="why" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title section-title--accent">{ format!("Why {}", config::SITE_NAME) }</h2>
                        <p class="muted">
                            {"We combine thoughtful design, robust engineering, and an obsession with detail to craft \
                              experiences customers love and teams can scale."}
                        </p>
                    </Reveal>
                    <RevealGroup class="grid grid--3" stagger={SECTION_STAGGER}>
                        { for REASONS.iter().map(|(title, body)| html! {
                            <Tilt class="card card--feature">
                                <h3 class="card__title">{ *title }</h3>
                                <p class="muted">{ *body }</p>
                            </Tilt>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="process" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"How We Work"}</h2>
                        <p class="muted">{"Transparent, collaborative, outcome-driven."}</p>
                    </Reveal>
                    <RevealGroup class="timeline" item_class="timeline__step" stagger={SECTION_STAGGER}>
                        { for PROCESS.iter().map(|(title, desc)| html! {
                            <div class="timeline__card">
                                <span class="timeline__dot" aria-hidden="true"></span>
                                <h3>{ *title }</h3>
                                <p class="muted">{ *desc }</p>
                            </div>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="clients" class="section section--tight">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h3 class="section-title">{"Our Clients"}</h3>
                        <p class="muted">{"Trusted by innovative teams and forward-thinking organizations."}</p>
                    </Reveal>
                    <div class="marquee">
                        <div class="marquee__track">
                            { for CLIENTS.iter().chain(CLIENTS.iter()).map(|client| html! {
                                <span class="pill">{ *client }</span>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="testimonials" class="section">
                <div class="container">
                    <Reveal class="section-head section-head--center">
                        <h2 class="section-title">{"What Our Clients Say"}</h2>
                        <p class="muted">
                            {"Don't just take our word for it. Here's what industry professionals have to say about \
                              our services and solutions."}
                        </p>
                    </Reveal>
                    <RevealGroup class="grid grid--3" threshold={0.15} stagger={SECTION_STAGGER}>
                        { for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                            <figure class="card testimonial">
                                <blockquote>{ *quote }</blockquote>
                                <figcaption>
                                    <strong>{ *name }</strong>
                                    <span class="muted">{ *role }</span>
                                </figcaption>
                            </figure>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <ServicesSection />
            <AboutSection />
            <PricingSection />
            <FaqSection />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_headline_line_starts_after_the_first() {
        let first = headline_stagger(0);
        let second = headline_stagger(1);
        let first_len = HEADLINE[0].chars().count();
        assert_eq!(first.delay_for(0), TEXT_DELAY_MS);
        assert_eq!(second.delay_for(0), first.delay_for(first_len));
    }
}
