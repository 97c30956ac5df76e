use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;
/// Class the style layer interprets as "revealed".
const REVEAL_CLASS: &str = "in";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Reveals every `[data-reveal]` element exactly once when 12% of it enters
/// the viewport. Each element is unobserved after its reveal; the whole
/// observer is torn down on unmount.
#[hook]
pub fn use_reveal() {
    use_effect_with_deps(
        |_| {
            let attached = attach();
            move || {
                if let Some((observer, callback)) = attached {
                    observer.disconnect();
                    drop(callback);
                }
            }
        },
        (),
    );
}

fn attach() -> Option<(IntersectionObserver, ObserverCallback)> {
    let document = web_sys::window()?.document()?;
    let targets = document.query_selector_all("[data-reveal]").ok()?;

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEAL_CLASS);
                    // one-way transition: never watch this element again
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for index in 0..targets.length() {
        if let Some(node) = targets.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }

    Some((observer, callback))
}
