use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::motion::frame::FrameLoop;
use crate::motion::pointer::{PointerSignal, PointerTracker};
use crate::motion::preference::MotionPreference;
use crate::motion::spring::SpringPair;
use crate::theme::{ResolvedTheme, SpotlightPalette, ThemeContext};

/// Palette for the spotlight layer, or `None` when no layer should exist.
pub fn spotlight_layer(motion: MotionPreference, theme: ResolvedTheme) -> Option<SpotlightPalette> {
    motion.follows_pointer().then(|| theme.spotlight())
}

/// Soft light that follows the cursor across the whole viewport.
///
/// The gradient centre is the spring-smoothed pointer position, starting from
/// the top-left corner and sweeping toward the first sample. Renders nothing,
/// and listens to nothing, when reduced motion is preferred.
#[function_component(CursorSpotlight)]
pub fn cursor_spotlight() -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let resolved = use_context::<ThemeContext>()
        .map(|ctx| ctx.resolved)
        .unwrap_or(ResolvedTheme::Light);
    let layer = use_node_ref();
    let palette = spotlight_layer(motion, resolved);

    {
        let layer = layer.clone();
        use_effect_with_deps(
            move |palette| {
                let guards = palette.and_then(|palette| attach(layer, palette));
                move || drop(guards)
            },
            palette,
        );
    }

    let Some(palette) = palette else {
        return html! {};
    };

    html! {
        <div
            ref={layer}
            class="cursor-spotlight"
            aria-hidden="true"
            style={palette.layer_style()}
        />
    }
}

fn attach(
    layer: NodeRef,
    palette: SpotlightPalette,
) -> Option<(PointerTracker, Rc<FrameLoop>)> {
    let window = web_sys::window()?;
    let element = layer.cast::<HtmlElement>()?;
    let springs = Rc::new(RefCell::new(SpringPair::new(config::SPOTLIGHT_SPRING, (0.0, 0.0))));

    let frames = {
        let springs = springs.clone();
        Rc::new(FrameLoop::new(move |dt| {
            let mut springs = springs.borrow_mut();
            let moving = springs.step(dt);
            let (x, y) = springs.value();
            if element
                .style()
                .set_property("background", &palette.gradient(x, y))
                .is_err()
            {
                return false;
            }
            moving
        }))
    };

    let tracker = {
        let frames = frames.clone();
        PointerTracker::viewport(&window, move |signal| {
            if let PointerSignal::Move(sample) = signal {
                springs.borrow_mut().set_target((sample.x, sample.y));
            }
            frames.wake();
        })
    };

    Some((tracker, frames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_renders_no_layer() {
        let reduced = MotionPreference { reduced: true };
        assert_eq!(spotlight_layer(reduced, ResolvedTheme::Light), None);
        assert_eq!(spotlight_layer(reduced, ResolvedTheme::Dark), None);
    }

    #[test]
    fn layer_uses_the_resolved_theme_palette() {
        let full = MotionPreference::FULL;
        assert_eq!(
            spotlight_layer(full, ResolvedTheme::Dark),
            Some(ResolvedTheme::Dark.spotlight())
        );
        assert_ne!(
            spotlight_layer(full, ResolvedTheme::Light),
            spotlight_layer(full, ResolvedTheme::Dark)
        );
    }
}
