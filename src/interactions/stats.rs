use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Session telemetry accumulated from mount, shown by the hidden
/// diagnostics panel. Counters only ever grow; focus mirrors the last
/// window focus/blur event.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SessionStats {
    pub pointer_moves: u64,
    pub max_scroll_px: u64,
    pub focused: bool,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            pointer_moves: 0,
            max_scroll_px: 0,
            focused: true,
        }
    }

    pub fn record_pointer_move(self) -> Self {
        SessionStats {
            pointer_moves: self.pointer_moves + 1,
            ..self
        }
    }

    /// Monotonic max of the scroll offset, rounded to whole pixels.
    pub fn record_scroll(self, offset_px: f64) -> Self {
        let offset = offset_px.max(0.0).round() as u64;
        SessionStats {
            max_scroll_px: self.max_scroll_px.max(offset),
            ..self
        }
    }

    pub fn with_focus(self, focused: bool) -> Self {
        SessionStats { focused, ..self }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        SessionStats::new()
    }
}

pub enum StatsAction {
    PointerMoved,
    Scrolled(f64),
    Focus(bool),
}

impl Reducible for SessionStats {
    type Action = StatsAction;

    fn reduce(self: Rc<Self>, action: StatsAction) -> Rc<Self> {
        Rc::new(match action {
            StatsAction::PointerMoved => self.record_pointer_move(),
            StatsAction::Scrolled(offset) => self.record_scroll(offset),
            StatsAction::Focus(focused) => self.with_focus(focused),
        })
    }
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

pub fn fmt_ms(ms: f64) -> String {
    format!("{}ms", ms.round() as i64)
}

pub fn fmt_px(px: u64) -> String {
    format!("{}px", px)
}

/// Accumulates [`SessionStats`] from window-level scroll, mousemove and
/// focus/blur events for the lifetime of the component. Returns the stats
/// handle and the mount timestamp (`performance.now()` based) so callers
/// can derive elapsed time exactly at render.
#[hook]
pub fn use_session_stats() -> (UseReducerHandle<SessionStats>, f64) {
    let stats = use_reducer(SessionStats::new);
    let mount_at = use_memo(|_| now_ms(), ());

    {
        let dispatcher = stats.dispatcher();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => attach(window, dispatcher),
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            (),
        );
    }

    (stats, *mount_at)
}

fn attach(window: web_sys::Window, dispatcher: UseReducerDispatcher<SessionStats>) -> Box<dyn FnOnce()> {
    let on_scroll = {
        let window = window.clone();
        let dispatcher = dispatcher.clone();
        Closure::wrap(Box::new(move || {
            if let Ok(offset) = window.scroll_y() {
                dispatcher.dispatch(StatsAction::Scrolled(offset));
            }
        }) as Box<dyn FnMut()>)
    };
    let on_move = {
        let dispatcher = dispatcher.clone();
        // every move counts, no coalescing: this is a cumulative counter
        Closure::wrap(Box::new(move || {
            dispatcher.dispatch(StatsAction::PointerMoved);
        }) as Box<dyn FnMut()>)
    };
    let on_focus = {
        let dispatcher = dispatcher.clone();
        Closure::wrap(Box::new(move || {
            dispatcher.dispatch(StatsAction::Focus(true));
        }) as Box<dyn FnMut()>)
    };
    let on_blur = {
        Closure::wrap(Box::new(move || {
            dispatcher.dispatch(StatsAction::Focus(false));
        }) as Box<dyn FnMut()>)
    };

    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());

    Box::new(move || {
        let _ =
            window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        let _ =
            window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        let _ =
            window.remove_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        drop(on_scroll);
        drop(on_move);
        drop(on_focus);
        drop(on_blur);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_depth_is_a_monotonic_max() {
        let stats = SessionStats::new()
            .record_scroll(500.0)
            .record_scroll(100.0);
        assert_eq!(stats.max_scroll_px, 500);
        let stats = stats.record_scroll(800.0);
        assert_eq!(stats.max_scroll_px, 800);
    }

    #[test]
    fn negative_offsets_do_not_underflow() {
        let stats = SessionStats::new().record_scroll(-3.0);
        assert_eq!(stats.max_scroll_px, 0);
    }

    #[test]
    fn every_pointer_move_counts() {
        let mut stats = SessionStats::new();
        for _ in 0..7 {
            stats = stats.record_pointer_move();
        }
        assert_eq!(stats.pointer_moves, 7);
    }

    #[test]
    fn focus_mirrors_the_last_event() {
        let stats = SessionStats::new();
        assert!(stats.focused);
        let stats = stats.with_focus(false);
        assert!(!stats.focused);
        assert!(stats.with_focus(true).focused);
    }

    #[test]
    fn counters_are_independent() {
        let stats = SessionStats::new()
            .record_pointer_move()
            .record_scroll(42.4)
            .with_focus(false);
        assert_eq!(stats.pointer_moves, 1);
        assert_eq!(stats.max_scroll_px, 42);
        assert!(!stats.focused);
    }

    #[test]
    fn formatting_rounds_to_whole_units() {
        assert_eq!(fmt_ms(1234.56), "1235ms");
        assert_eq!(fmt_ms(0.2), "0ms");
        assert_eq!(fmt_px(800), "800px");
    }
}
