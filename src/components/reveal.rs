use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::motion::preference::MotionPreference;
use crate::motion::reveal::{RevealSequencer, Stagger};
use crate::motion::variants::{Variant, VariantState};

const INDEX_ATTR: &str = "data-reveal-index";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps an IntersectionObserver and its callback alive; disconnects on drop.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Variant::FADE_IN_UP)]
    pub variant: Variant,
    #[prop_or(Stagger::NONE)]
    pub stagger: Stagger,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    /// Wrap items in `<span>` instead of `<div>`, for inline runs such as headline letters.
    #[prop_or_default]
    pub inline: bool,
}

/// Inputs that rebuild the group's sequencer and observer when any of them change.
fn reveal_deps(
    motion: MotionPreference,
    count: usize,
    props: &RevealGroupProps,
) -> (bool, usize, f64, Stagger) {
    (motion.reduced, count, props.threshold, props.stagger)
}

/// Plays `variant` once for each child as it scrolls into view, staggered by position.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let container = use_node_ref();
    let count = props.children.len();
    let revealed = use_state(|| vec![motion.reduced; count]);

    {
        let container = container.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(reduced, count, threshold, stagger)| {
                let mut sequencer = RevealSequencer::new(*count, *threshold, *stagger);
                if *reduced {
                    sequencer.reveal_all();
                }
                let mask = sequencer.revealed_mask();
                if *revealed != mask {
                    revealed.set(mask);
                }

                let mut observer = None;
                if !*reduced && !sequencer.is_empty() {
                    if let Some(root) = container.cast::<Element>() {
                        observer = watch(&root, sequencer, revealed);
                    }
                }
                move || drop(observer)
            },
            reveal_deps(motion, count, props),
        );
    }

    let items = props.children.iter().enumerate().map(|(index, child)| {
        let is_revealed = revealed.get(index).copied().unwrap_or(motion.reduced);
        let style = if motion.reduced {
            String::new()
        } else if is_revealed {
            props
                .variant
                .style(VariantState::Shown, props.stagger.delay_for(index))
        } else {
            props.variant.style(VariantState::Hidden, 0.0)
        };
        let class = classes!("reveal", props.item_class.clone());
        let index = index.to_string();
        if props.inline {
            html! { <span {class} {style} data-reveal-index={index}>{ child }</span> }
        } else {
            html! { <div {class} {style} data-reveal-index={index}>{ child }</div> }
        }
    });

    html! {
        <div ref={container} class={props.class.clone()}>
            { for items }
        </div>
    }
}

fn watch(
    root: &Element,
    mut sequencer: RevealSequencer,
    revealed: UseStateHandle<Vec<bool>>,
) -> Option<ViewportObserver> {
    let threshold = sequencer.threshold();
    let all_shown = vec![true; sequencer.revealed_mask().len()];
    let fallback = revealed.clone();
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            let mut changed = false;
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Some(index) = entry
                    .target()
                    .get_attribute(INDEX_ATTR)
                    .and_then(|raw| raw.parse::<usize>().ok())
                else {
                    continue;
                };
                if let Some(trigger) = sequencer.observe(index, entry.intersection_ratio()) {
                    log::debug!("reveal #{} in {}ms", trigger.index, trigger.delay_ms);
                    changed = true;
                }
            }
            if changed {
                revealed.set(sequencer.revealed_mask());
            }
            if sequencer.all_revealed() {
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                fallback.set(all_shown);
                return None;
            }
        };

    let children = root.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            observer.observe(&child);
        }
    }

    Some(ViewportObserver {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Variant::FADE_IN_UP)]
    pub variant: Variant,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Single-element [`RevealGroup`].
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <RevealGroup
            variant={props.variant}
            stagger={Stagger::new(props.delay_ms, 0.0)}
            threshold={props.threshold}
            item_class={props.class.clone()}
        >
            <>{ for props.children.iter() }</>
        </RevealGroup>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(stagger: Stagger) -> RevealGroupProps {
        RevealGroupProps {
            children: Children::default(),
            variant: Variant::FADE_IN_UP,
            stagger,
            threshold: config::REVEAL_THRESHOLD,
            class: Classes::new(),
            item_class: Classes::new(),
            inline: false,
        }
    }

    #[test]
    fn changing_stagger_rebuilds_the_sequencer() {
        let slow = props(Stagger::new(0.0, 150.0));
        let fast = props(Stagger::new(0.0, 100.0));
        let full = MotionPreference::FULL;
        assert_ne!(reveal_deps(full, 3, &slow), reveal_deps(full, 3, &fast));
        assert_eq!(reveal_deps(full, 3, &fast), reveal_deps(full, 3, &props(Stagger::new(0.0, 100.0))));
    }
}
