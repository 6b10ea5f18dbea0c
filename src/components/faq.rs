use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most marketing sites ship in 2–6 weeks. SaaS apps vary based on scope, but we work in clear, weekly iterations.",
    },
    FaqEntry {
        question: "Do you work with existing teams?",
        answer: "Yes. We can integrate with your designers and engineers or operate as a turnkey squad.",
    },
    FaqEntry {
        question: "Which stack do you use?",
        answer: "We specialize in React, Next.js, TypeScript, Tailwind CSS, and modern tooling on Vercel.",
    },
    FaqEntry {
        question: "What is your engagement model?",
        answer: "Fixed-scope projects for websites, and monthly retainers for ongoing product work.",
    },
];

/// Index of the open item after clicking `clicked`: clicking the open item closes it.
pub fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">{ props.answer }</div>
            }
        </div>
    }
}

/// Accordion with at most one answer open at a time.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section faq-section">
            <div class="container container--narrow">
                <h2 class="section-title">{"FAQ"}</h2>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(i, entry)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(next_open(*open, i)))
                        };
                        html! {
                            <FaqItem
                                key={entry.question}
                                question={entry.question}
                                answer={entry.answer}
                                open={*open == Some(i)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_item_closes_the_first() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(next_open(Some(1), 1), None);
    }
}
