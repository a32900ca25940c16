use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot visibility gate. Hidden until the watched element's intersection
/// ratio reaches the threshold once; from then on permanently visible.
pub struct RevealGate {
    visible: bool,
}

impl RevealGate {
    pub const THRESHOLD: f64 = 0.1;

    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection ratio. Returns true exactly once, on the event
    /// that flips the gate; the caller detaches its observer at that point.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < Self::THRESHOLD {
            return false;
        }
        self.visible = true;
        true
    }
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Transition delay in milliseconds, for staggering cards in a grid.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps content that fades and slides in the first time it scrolls into
/// view. Once revealed it never hides again; the underlying observer is
/// detached on the first trigger.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut gate = RevealGate::new();
                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if gate.observe(entry.intersection_ratio()) {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let mut options = IntersectionObserverInit::new();
                options.threshold(&JsValue::from_f64(RevealGate::THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                if let Some(element) = node.cast::<web_sys::Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    let state_class = if *visible { "reveal reveal-visible" } else { "reveal" };

    html! {
        <div
            ref={node}
            class={classes!(state_class, props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut gate = RevealGate::new();
        assert!(!gate.observe(0.05));
        assert!(!gate.is_visible());

        assert!(gate.observe(0.1));
        assert!(gate.is_visible());

        // Further events never fire again, whatever they report.
        assert!(!gate.observe(1.0));
        assert!(!gate.observe(0.1));
    }

    #[test]
    fn never_reverts_to_hidden() {
        let mut gate = RevealGate::new();
        gate.observe(0.5);
        assert!(gate.is_visible());

        assert!(!gate.observe(0.0));
        assert!(gate.is_visible());
    }
}
