use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::motion::frame::FrameLoop;
use crate::motion::pointer::PointerTracker;
use crate::motion::preference::MotionPreference;
use crate::motion::spring::SpringConfig;
use crate::motion::tilt::PointerFollower;

/// Listener and frame loop kept alive for one pointer-following element.
pub type FollowGuards = (PointerTracker, Rc<FrameLoop>);

/// Wires `track` pointer events into `follower` and paints the smoothed
/// transform onto `paint` every frame until it settles.
pub fn attach_follower(
    track: &Element,
    paint: HtmlElement,
    follower: PointerFollower,
    perspective_px: u32,
) -> FollowGuards {
    let follower = Rc::new(RefCell::new(follower));

    let frames = {
        let follower = follower.clone();
        Rc::new(FrameLoop::new(move |dt| {
            let mut follower = follower.borrow_mut();
            let moving = follower.step(dt);
            let transform = follower.css_transform(perspective_px);
            if paint.style().set_property("transform", &transform).is_err() {
                return false;
            }
            moving
        }))
    };

    let tracker = {
        let frames = frames.clone();
        PointerTracker::element(track, move |signal| {
            follower.borrow_mut().apply(signal);
            frames.wake();
        })
    };

    (tracker, frames)
}

#[derive(Properties, PartialEq)]
pub struct TiltProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(config::TILT_MAX_DEG)]
    pub max: f64,
    #[prop_or(config::CARD_PERSPECTIVE_PX)]
    pub perspective: u32,
    #[prop_or(config::CARD_TILT_SPRING)]
    pub spring: SpringConfig,
    #[prop_or_default]
    pub class: Classes,
}

/// Tilts its children in 3D toward the pointer while hovered.
#[function_component(Tilt)]
pub fn tilt(props: &TiltProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let outer = use_node_ref();
    let inner = use_node_ref();

    {
        let outer = outer.clone();
        let inner = inner.clone();
        use_effect_with_deps(
            move |(motion, max, perspective, spring)| {
                let mut guards: Option<FollowGuards> = None;
                if motion.follows_pointer() {
                    if let (Some(track), Some(paint)) =
                        (outer.cast::<Element>(), inner.cast::<HtmlElement>())
                    {
                        let follower = PointerFollower::tilt(*max, *spring, false);
                        guards = Some(attach_follower(&track, paint, follower, *perspective));
                    }
                }
                move || drop(guards)
            },
            (motion, props.max, props.perspective, props.spring),
        );
    }

    html! {
        <div ref={outer} class={classes!("tilt", props.class.clone())}>
            <div ref={inner} class="tilt__inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}
