//! Scroll-triggered reveal wrapper
//!
//! Wraps content in a container that starts hidden and fades in the first
//! time it scrolls into view. Every wrapper owns its observer registration
//! and tears it down on unmount, so navigating between pages never leaks
//! callbacks.

use leptos::prelude::*;

/// Reveal-on-scroll wrapper
///
/// The `scroll-reveal` class keeps the content hidden until the observer
/// adds `visible`. Extra classes can stagger the transition delay.
#[component]
pub fn ScrollReveal(
    /// Extra classes on the wrapping element
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let registration_id = StoredValue::new(None::<u64>);

        Effect::new(move |_| {
            if registration_id.get_value().is_some() {
                return;
            }
            let Some(el) = node_ref.get() else {
                return;
            };
            registration_id.set_value(observer::observe(&el));
        });

        on_cleanup(move || {
            if let Some(id) = registration_id.try_get_value().flatten() {
                observer::unobserve(id);
            }
        });
    }

    view! {
        <div node_ref=node_ref class=format!("scroll-reveal {}", class)>
            {children()}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
mod observer {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use leptos::wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use leptos::web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    /// How much of an element must be visible before it reveals.
    const REVEAL_THRESHOLD: f64 = 0.1;
    /// Pulls the trigger line 50px above the bottom of the viewport.
    const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

    type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    // Live registrations, keyed so cleanup closures only capture an id.
    thread_local! {
        static REGISTRATIONS: RefCell<HashMap<u64, (IntersectionObserver, RevealCallback)>> =
            RefCell::new(HashMap::new());
        static NEXT_ID: Cell<u64> = const { Cell::new(0) };
    }

    /// Observe an element, revealing it the first time it scrolls into view.
    ///
    /// Returns a registration id for [`unobserve`], or None when the
    /// observer cannot be constructed.
    pub fn observe(element: &Element) -> Option<u64> {
        let callback: RevealCallback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("visible");
                        // Reveal happens once, so stop watching this element
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);

        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        REGISTRATIONS.with(|registrations| {
            registrations.borrow_mut().insert(id, (observer, callback));
        });
        Some(id)
    }

    /// Disconnect a registration and drop its callback.
    pub fn unobserve(id: u64) {
        REGISTRATIONS.with(|registrations| {
            if let Some((observer, callback)) = registrations.borrow_mut().remove(&id) {
                observer.disconnect();
                drop(callback);
            }
        });
    }
}
