use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::tilt::{attach_follower, FollowGuards};
use crate::config;
use crate::motion::preference::MotionPreference;
use crate::motion::tilt::PointerFollower;

#[derive(Properties, PartialEq)]
pub struct MagneticCtaProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or(config::MAGNETIC_MAX_PX)]
    pub max: f64,
}

/// Call-to-action link that leans toward the pointer and springs back on leave.
#[function_component(MagneticCta)]
pub fn magnetic_cta(props: &MagneticCtaProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let anchor = use_node_ref();

    {
        let anchor = anchor.clone();
        use_effect_with_deps(
            move |(motion, max)| {
                let mut guards: Option<FollowGuards> = None;
                if motion.follows_pointer() {
                    if let (Some(track), Some(paint)) =
                        (anchor.cast::<Element>(), anchor.cast::<HtmlElement>())
                    {
                        let follower =
                            PointerFollower::magnetic(*max, config::MAGNETIC_SPRING, false);
                        guards = Some(attach_follower(&track, paint, follower, 0));
                    }
                }
                move || drop(guards)
            },
            (motion, props.max),
        );
    }

    html! {
        <a ref={anchor} href={props.href.clone()} class="magnetic-cta">
            <span class="btn btn--primary btn--lg">
                { for props.children.iter() }
            </span>
        </a>
    }
}
