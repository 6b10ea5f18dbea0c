use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Frame time assumed for the first tick after waking.
const FIRST_FRAME_DT: f64 = 1.0 / 60.0;

type Tick = Box<dyn FnMut(f64) -> bool>;

struct FrameState {
    handle: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    tick: RefCell<Tick>,
}

/// Per-frame driver that runs only while there is something to animate.
///
/// The tick receives the frame delta in seconds and returns whether it wants
/// another frame. Input handlers call [`FrameLoop::wake`] after changing a
/// target. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn new<F>(tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self {
            state: Rc::new(FrameState {
                handle: RefCell::new(None),
                last_timestamp: Cell::new(None),
                tick: RefCell::new(Box::new(tick)),
            }),
        }
    }

    pub fn wake(&self) {
        if self.is_running() {
            return;
        }
        schedule(&self.state);
    }

    pub fn is_running(&self) -> bool {
        self.state.handle.borrow().is_some()
    }

    pub fn stop(&self) {
        self.state.handle.borrow_mut().take();
        self.state.last_timestamp.set(None);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Breaks the cycle between the state and the pending frame callback.
        self.stop();
    }
}

fn schedule(state: &Rc<FrameState>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |timestamp| {
        let dt = match next.last_timestamp.replace(Some(timestamp)) {
            Some(previous) => ((timestamp - previous) / 1000.0).max(0.0),
            None => FIRST_FRAME_DT,
        };
        let keep_going = (next.tick.borrow_mut())(dt);
        if keep_going {
            schedule(&next);
        } else {
            next.handle.borrow_mut().take();
            next.last_timestamp.set(None);
        }
    });
    *state.handle.borrow_mut() = Some(handle);
}
