use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, MouseEvent, Window};

/// Latest raw pointer position. Only the newest sample is kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn from_event(event: &MouseEvent) -> Self {
        Self::new(event.client_x() as f64, event.client_y() as f64)
    }
}

/// Measured box of a tracked element, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_rect(rect: &DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Maps a viewport sample into `[0,1]×[0,1]` relative to this box.
    ///
    /// Returns `None` for an empty or unmeasurable box (e.g. an element that is
    /// `display: none`), which callers treat as "no input".
    pub fn normalize(&self, sample: PointerSample) -> Option<(f64, f64)> {
        let measurable = self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite();
        if !measurable {
            return None;
        }
        let px = ((sample.x - self.left) / self.width).clamp(0.0, 1.0);
        let py = ((sample.y - self.top) / self.height).clamp(0.0, 1.0);
        Some((px, py))
    }

    /// Element-relative move signal for a viewport sample.
    pub fn signal(&self, sample: PointerSample) -> Option<PointerSignal> {
        self.normalize(sample)
            .map(|(px, py)| PointerSignal::Move(PointerSample::new(px, py)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    /// Viewport coordinates for viewport trackers, normalized ones for element trackers.
    Move(PointerSample),
    /// The pointer left a tracked element.
    Leave,
}

/// Pointer subscription on the viewport or a single element.
///
/// Listeners are passive and are removed when the tracker is dropped.
pub struct PointerTracker {
    _listeners: Vec<EventListener>,
}

impl PointerTracker {
    /// Emits absolute viewport coordinates for every pointer move on the window.
    pub fn viewport<F>(window: &Window, on_signal: F) -> Self
    where
        F: FnMut(PointerSignal) + 'static,
    {
        let mut on_signal = on_signal;
        let moved = EventListener::new_with_options(
            window,
            "pointermove",
            passive(),
            move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    on_signal(PointerSignal::Move(PointerSample::from_event(event)));
                }
            },
        );
        log::debug!("pointer tracker attached to viewport");
        Self {
            _listeners: vec![moved],
        }
    }

    /// Emits coordinates normalized to `element`'s bounding box, and
    /// [`PointerSignal::Leave`] when the pointer exits it.
    pub fn element<F>(element: &Element, on_signal: F) -> Self
    where
        F: FnMut(PointerSignal) + 'static,
    {
        let on_signal = Rc::new(RefCell::new(on_signal));

        let moved = {
            let on_signal = on_signal.clone();
            let tracked = element.clone();
            EventListener::new_with_options(
                element.as_ref(),
                "pointermove",
                passive(),
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let bounds = Bounds::from_rect(&tracked.get_bounding_client_rect());
                    if let Some(signal) = bounds.signal(PointerSample::from_event(event)) {
                        (on_signal.borrow_mut())(signal);
                    }
                },
            )
        };

        let left = EventListener::new_with_options(
            element.as_ref(),
            "pointerleave",
            passive(),
            move |_: &Event| {
                (on_signal.borrow_mut())(PointerSignal::Leave);
            },
        );

        log::debug!("pointer tracker attached to <{}>", element.tag_name().to_lowercase());
        Self {
            _listeners: vec![moved, left],
        }
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        log::debug!("pointer tracker detached");
    }
}

fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_into_unit_square() {
        let bounds = Bounds::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(
            bounds.normalize(PointerSample::new(200.0, 100.0)),
            Some((0.5, 0.5))
        );
        assert_eq!(
            bounds.normalize(PointerSample::new(100.0, 50.0)),
            Some((0.0, 0.0))
        );
        assert_eq!(
            bounds.normalize(PointerSample::new(300.0, 150.0)),
            Some((1.0, 1.0))
        );
    }

    #[test]
    fn samples_outside_the_box_are_clamped() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            bounds.normalize(PointerSample::new(-5.0, 25.0)),
            Some((0.0, 1.0))
        );
    }

    #[test]
    fn empty_box_yields_nothing() {
        let sample = PointerSample::new(1.0, 1.0);
        assert_eq!(Bounds::new(0.0, 0.0, 0.0, 10.0).normalize(sample), None);
        assert_eq!(Bounds::new(0.0, 0.0, 10.0, -1.0).normalize(sample), None);
        assert_eq!(Bounds::new(0.0, 0.0, f64::NAN, 10.0).normalize(sample), None);
    }

    #[test]
    fn element_moves_carry_normalized_coordinates() {
        let bounds = Bounds::new(40.0, 20.0, 80.0, 40.0);
        assert_eq!(
            bounds.signal(PointerSample::new(60.0, 30.0)),
            Some(PointerSignal::Move(PointerSample::new(0.25, 0.25)))
        );
        assert_eq!(Bounds::new(0.0, 0.0, 0.0, 0.0).signal(PointerSample::new(1.0, 1.0)), None);
    }
}
