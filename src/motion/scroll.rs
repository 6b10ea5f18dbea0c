use web_sys::HtmlElement;

/// Progress of an element through the viewport: 0 when its top edge enters
/// from below, 1 when its bottom edge leaves at the top.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Vertical parallax offset in pixels, moving up to `max_px` against the scroll.
pub fn parallax_offset(progress: f64, max_px: f64) -> f64 {
    -progress.clamp(0.0, 1.0) * max_px
}

/// Turns on smooth anchor scrolling for the document root while alive and
/// restores whatever was set before on drop.
pub struct SmoothScrollGuard {
    root: HtmlElement,
    previous: String,
}

impl SmoothScrollGuard {
    pub fn install(root: HtmlElement) -> Self {
        let style = root.style();
        let previous = style
            .get_property_value("scroll-behavior")
            .unwrap_or_default();
        if style.set_property("scroll-behavior", "smooth").is_err() {
            log::warn!("could not enable smooth scrolling");
        }
        Self { root, previous }
    }
}

impl Drop for SmoothScrollGuard {
    fn drop(&mut self) {
        let style = self.root.style();
        let restored = if self.previous.is_empty() {
            style.remove_property("scroll-behavior").map(|_| ())
        } else {
            style.set_property("scroll-behavior", &self.previous)
        };
        if restored.is_err() {
            log::warn!("could not restore scroll behavior");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        // 800px viewport, 400px tall element
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn progress_is_clamped_outside_the_viewport() {
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5000.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(0.0, 60.0), 0.0);
        assert_eq!(parallax_offset(0.5, 60.0), -30.0);
        assert_eq!(parallax_offset(1.0, 60.0), -60.0);
    }
}
