use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Normalises a client-space pointer position against a bounding box.
/// 0 is the left/top edge, 100 the right/bottom edge. Deliberately
/// unclamped: a pointer outside the box during a fast move may land
/// outside [0, 100].
pub fn glow_position(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let x = (client_x - left) / width * 100.0;
    let y = (client_y - top) / height * 100.0;
    (x, y)
}

/// Latest-wins cell shared between the move listener and the frame
/// callback. Within one frame only the last stored point survives.
#[derive(Default)]
pub struct LatestPoint {
    point: Cell<Option<(f64, f64)>>,
}

impl LatestPoint {
    pub fn store(&self, x: f64, y: f64) {
        self.point.set(Some((x, y)));
    }

    pub fn take(&self) -> Option<(f64, f64)> {
        self.point.take()
    }
}

/// Tracks the pointer over `surface` and publishes `--mx`/`--my` percentage
/// variables on it, coalesced to one style write per animation frame.
/// No-op for the mount if the surface is absent.
#[hook]
pub fn use_pointer_glow(surface: NodeRef) {
    use_effect_with_deps(
        move |surface: &NodeRef| {
            let cleanup: Box<dyn FnOnce()> = match surface.cast::<HtmlElement>() {
                Some(element) => attach(element),
                None => Box::new(|| ()),
            };
            move || cleanup()
        },
        surface,
    );
}

fn attach(element: HtmlElement) -> Box<dyn FnOnce()> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return Box::new(|| ()),
    };

    let latest = Rc::new(LatestPoint::default());
    // at most one pending frame per surface, cancel-and-replace
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let frame = {
        let element = element.clone();
        let latest = latest.clone();
        let pending = pending.clone();
        Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
            pending.set(None);
            if let Some((client_x, client_y)) = latest.take() {
                let rect = element.get_bounding_client_rect();
                let (x, y) = glow_position(
                    client_x,
                    client_y,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                );
                let style = element.style();
                let _ = style.set_property("--mx", &format!("{}%", x));
                let _ = style.set_property("--my", &format!("{}%", y));
            }
        }) as Box<dyn FnMut(f64)>))
    };

    let on_move = {
        let window = window.clone();
        let latest = latest.clone();
        let pending = pending.clone();
        let frame = frame.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            latest.store(event.client_x() as f64, event.client_y() as f64);
            if let Some(handle) = pending.take() {
                let _ = window.cancel_animation_frame(handle);
            }
            if let Ok(handle) =
                window.request_animation_frame(frame.as_ref().as_ref().unchecked_ref())
            {
                pending.set(Some(handle));
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    let _ = element.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());

    Box::new(move || {
        if let Some(handle) = pending.take() {
            let _ = window.cancel_animation_frame(handle);
        }
        let _ =
            element.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        drop(on_move);
        drop(frame);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_the_box_maps_to_fifty_fifty() {
        let (x, y) = glow_position(150.0, 300.0, 100.0, 200.0, 100.0, 200.0);
        assert_eq!((x, y), (50.0, 50.0));
    }

    #[test]
    fn edges_map_to_zero_and_one_hundred() {
        let (x, _) = glow_position(100.0, 0.0, 100.0, 0.0, 400.0, 100.0);
        assert_eq!(x, 0.0);
        let (x, y) = glow_position(500.0, 100.0, 100.0, 0.0, 400.0, 100.0);
        assert_eq!((x, y), (100.0, 100.0));
    }

    #[test]
    fn outside_pointer_is_not_clamped() {
        let (x, y) = glow_position(-50.0, 250.0, 0.0, 0.0, 100.0, 200.0);
        assert_eq!(x, -50.0);
        assert!(y > 100.0);
    }

    #[test]
    fn burst_keeps_only_the_last_point() {
        let latest = LatestPoint::default();
        latest.store(1.0, 1.0);
        latest.store(2.0, 2.0);
        latest.store(3.0, 4.0);
        assert_eq!(latest.take(), Some((3.0, 4.0)));
        // frame callback consumed it; nothing left until the next move
        assert_eq!(latest.take(), None);
    }
}
