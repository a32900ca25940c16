use gloo_timers::callback::Timeout;
use web_sys::window;

/// Which top-level page is currently displayed. The whole site runs on this
/// one value; there is no URL routing and nothing survives a reload.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Home,
    Download,
    Film,
    Topic(String),
}

impl View {
    pub fn is_home(&self) -> bool {
        matches!(self, View::Home)
    }
}

/// Seam over the browser viewport so the router stays host-testable.
/// `restore_after_render` must run its scroll write after the current render
/// pass has committed, otherwise it targets stale layout.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&self, y: f64);
    fn restore_after_render(&self, y: f64);
}

/// Real viewport backed by `web_sys::window()`. The deferred restore uses a
/// zero-delay timeout, which fires after Yew has committed the re-render.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, y);
        }
    }

    fn restore_after_render(&self, y: f64) {
        Timeout::new(0, move || {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, y);
            }
        })
        .forget();
    }
}

/// Single source of truth for the displayed view, plus the one piece of UX
/// continuity the site has: the scroll position of the home page is captured
/// on departure and restored on return.
pub struct ViewRouter {
    current: View,
    saved_offset: f64,
    left_home_once: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            current: View::Home,
            saved_offset: 0.0,
            left_home_once: false,
        }
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    /// Switch to `target`. Leaving home records the scroll offset and arms
    /// the slide-from-left re-entry; arriving anywhere else jumps to the top.
    /// Any `Topic(id)` is accepted here, even an unknown one — the topic
    /// page owns the lookup-miss behavior.
    pub fn navigate(&mut self, target: View, viewport: &dyn Viewport) {
        if self.current.is_home() && !target.is_home() {
            self.saved_offset = viewport.scroll_y();
            self.left_home_once = true;
        }
        self.current = target;
        if self.current.is_home() {
            viewport.restore_after_render(self.saved_offset);
        } else {
            viewport.scroll_to(0.0);
        }
    }

    /// CSS class for the home wrapper: plain fade-in on first load, slide in
    /// from the left once the user has been away and come back.
    pub fn home_transition(&self) -> &'static str {
        if self.left_home_once {
            "page-enter-left"
        } else {
            "page-fade-in"
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Visibility flags for the two full-screen overlays. Independent of each
/// other and of the view state; a modal stays open across page switches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overlays {
    pub deploy: bool,
    pub schedule: bool,
}

impl Overlays {
    pub fn open_deploy(self) -> Self {
        Self { deploy: true, ..self }
    }

    pub fn close_deploy(self) -> Self {
        Self { deploy: false, ..self }
    }

    pub fn open_schedule(self) -> Self {
        Self { schedule: true, ..self }
    }

    pub fn close_schedule(self) -> Self {
        Self { schedule: false, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records every viewport interaction. Restores are applied immediately,
    /// standing in for "after the next render pass".
    #[derive(Default)]
    struct StubViewport {
        y: Cell<f64>,
        restores: RefCell<Vec<f64>>,
    }

    impl StubViewport {
        fn at(y: f64) -> Self {
            let stub = Self::default();
            stub.y.set(y);
            stub
        }
    }

    impl Viewport for StubViewport {
        fn scroll_y(&self) -> f64 {
            self.y.get()
        }

        fn scroll_to(&self, y: f64) {
            self.y.set(y);
        }

        fn restore_after_render(&self, y: f64) {
            self.restores.borrow_mut().push(y);
            self.y.set(y);
        }
    }

    #[test]
    fn current_tracks_last_navigate() {
        let viewport = StubViewport::default();
        let mut router = ViewRouter::new();
        assert_eq!(*router.current(), View::Home);

        router.navigate(View::Film, &viewport);
        router.navigate(View::Download, &viewport);
        router.navigate(View::Topic("narrative-design".into()), &viewport);
        assert_eq!(*router.current(), View::Topic("narrative-design".into()));

        router.navigate(View::Home, &viewport);
        assert_eq!(*router.current(), View::Home);
    }

    #[test]
    fn offset_saved_only_when_departing_home() {
        let viewport = StubViewport::at(420.0);
        let mut router = ViewRouter::new();

        // Home -> Home leaves the saved offset alone.
        router.navigate(View::Home, &viewport);
        router.navigate(View::Download, &viewport);
        assert_eq!(router.saved_offset, 420.0);

        // Non-home -> non-home must not touch it either, even though the
        // live scroll position has changed since.
        viewport.y.set(999.0);
        router.navigate(View::Film, &viewport);
        assert_eq!(router.saved_offset, 420.0);
    }

    #[test]
    fn navigate_home_twice_is_idempotent() {
        let viewport = StubViewport::at(800.0);
        let mut router = ViewRouter::new();
        router.navigate(View::Film, &viewport);

        router.navigate(View::Home, &viewport);
        router.navigate(View::Home, &viewport);
        assert_eq!(*router.current(), View::Home);
        // Both re-entries restore the same captured offset; the second is a
        // harmless repeat, not a different final state.
        assert_eq!(*viewport.restores.borrow(), vec![800.0, 800.0]);
        assert_eq!(viewport.y.get(), 800.0);
    }

    #[test]
    fn depart_and_return_round_trip() {
        let viewport = StubViewport::at(800.0);
        let mut router = ViewRouter::new();

        router.navigate(View::Topic("self-clarity".into()), &viewport);
        assert_eq!(*router.current(), View::Topic("self-clarity".into()));
        assert_eq!(viewport.y.get(), 0.0);
        assert_eq!(router.saved_offset, 800.0);

        router.navigate(View::Home, &viewport);
        assert_eq!(*router.current(), View::Home);
        assert_eq!(viewport.y.get(), 800.0);
    }

    #[test]
    fn unknown_topic_id_is_accepted() {
        let viewport = StubViewport::default();
        let mut router = ViewRouter::new();
        router.navigate(View::Topic("not-a-real-id".into()), &viewport);
        assert_eq!(*router.current(), View::Topic("not-a-real-id".into()));
        assert!(crate::content::find_topic("not-a-real-id").is_none());
    }

    #[test]
    fn home_transition_switches_after_first_departure() {
        let viewport = StubViewport::default();
        let mut router = ViewRouter::new();
        assert_eq!(router.home_transition(), "page-fade-in");

        router.navigate(View::Download, &viewport);
        router.navigate(View::Home, &viewport);
        assert_eq!(router.home_transition(), "page-enter-left");
    }

    #[test]
    fn overlays_are_independent() {
        let both = Overlays::default().open_schedule().open_deploy();
        assert!(both.deploy && both.schedule);

        let one_closed = both.close_deploy();
        assert!(!one_closed.deploy);
        assert!(one_closed.schedule);
    }
}
