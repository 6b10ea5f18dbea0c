use yew::prelude::*;

use crate::components::magnetic::MagneticCta;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::components::tilt::Tilt;
use crate::motion::reveal::Stagger;
use crate::motion::variants::Variant;

struct Service {
    title: &'static str,
    description: &'static str,
}

struct Project {
    title: &'static str,
    description: &'static str,
    stack: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Full stack Website Development",
        description: "Custom-built websites from front to back, optimized for performance, scalability, and user experience.",
    },
    Service {
        title: "WordPress Development with Elementor Pro",
        description: "Beautiful, responsive websites powered by WordPress and designed with the flexibility of Elementor Pro.",
    },
    Service {
        title: "SEO Management",
        description: "Improve your visibility with tailored SEO strategies that drive traffic and boost rankings.",
    },
    Service {
        title: "Website Maintenance",
        description: "Keep your site secure, updated, and running smoothly with our ongoing support and maintenance plans.",
    },
];

const PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        description: "A modern, scalable e-commerce solution with real-time inventory management and advanced analytics.",
        stack: "React, Node.js, MongoDB",
    },
    Project {
        title: "Enterprise CRM",
        description: "Custom CRM system with AI-powered customer insights and automated workflow management.",
        stack: "Next.js, TypeScript, PostgreSQL",
    },
    Project {
        title: "Mobile Banking App",
        description: "Secure, user-friendly banking application with biometric authentication and real-time transactions.",
        stack: "React Native, Node.js, AWS",
    },
    Project {
        title: "AI Chatbot Platform",
        description: "Enterprise-grade chatbot solution with natural language processing and multi-channel integration.",
        stack: "Python, TensorFlow, Redis",
    },
    Project {
        title: "Healthcare Management System",
        description: "Comprehensive healthcare management solution with HIPAA compliance and telemedicine capabilities.",
        stack: "Vue.js, Java, MongoDB",
    },
    Project {
        title: "Real Estate Marketplace",
        description: "Modern real estate platform with virtual tours and AI property valuation.",
        stack: "Angular, .NET, SQL Server",
    },
];

const GRID_STAGGER: Stagger = Stagger::new(200.0, 150.0);

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    eyebrow: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <Reveal variant={Variant::SPRING_UP} class="section-head section-head--center">
            <span class="eyebrow"><span class="eyebrow__dot"></span>{ props.eyebrow.clone() }</span>
            <h2 class="section-title">{ props.title.clone() }</h2>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <main class="page services-page">
            <div class="grid-backdrop" aria-hidden="true"></div>
            <section class="section page-hero">
                <div class="container container--narrow text-center">
                    <h1 class="page-title">{"Our Expertise, Your Solutions."}</h1>
                    <p class="muted lead">
                        {"Innovative software, web development, AI, and more to help your business thrive."}
                    </p>
                    <div class="button-row">
                        <MagneticCta href="#services">{"Explore Our Services"}</MagneticCta>
                    </div>
                </div>
            </section>

            <section id="services" class="section">
                <div class="container">
                    <SectionHeader title="Our Services" eyebrow="What we do" />
                    <RevealGroup class="grid grid--4" variant={Variant::SPRING_UP} stagger={GRID_STAGGER}>
                        { for SERVICES.iter().map(|s| html! {
                            <Tilt class="card card--lift">
                                <h3 class="card__title">{ s.title }</h3>
                                <p class="muted">{ s.description }</p>
                            </Tilt>
                        }) }
                    </RevealGroup>
                </div>
            </section>

            <section id="projects" class="section">
                <div class="container">
                    <SectionHeader title="Showcase of Our Work" eyebrow="Our Projects" />
                    <RevealGroup class="grid grid--3" variant={Variant::SPRING_UP} stagger={GRID_STAGGER}>
                        { for PROJECTS.iter().map(|p| html! {
                            <article class="card card--lift project-card">
                                <div class="project-card__preview" aria-hidden="true"></div>
                                <h3 class="card__title">{ p.title }</h3>
                                <p class="muted">{ p.description }</p>
                                <div class="tag-row">
                                    { for p.stack.split(", ").map(|tag| html! { <span class="pill pill--small">{ tag }</span> }) }
                                </div>
                            </article>
                        }) }
                    </RevealGroup>
                </div>
            </section>
        </main>
    }
}
