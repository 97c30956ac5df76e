use yew::prelude::*;

use crate::interactions::stats::{fmt_ms, fmt_px, SessionStats};

#[derive(Properties, PartialEq)]
pub struct DiagnosticsPanelProps {
    pub open: bool,
    pub stats: SessionStats,
    pub elapsed_ms: f64,
}

/// Hidden session telemetry panel. Sampling runs for the whole page view,
/// so the values are accurate the instant the panel is revealed.
#[function_component(DiagnosticsPanel)]
pub fn diagnostics_panel(props: &DiagnosticsPanelProps) -> Html {
    html! {
        <div class={classes!("secret", props.open.then_some("show"))} aria-live="polite">
            <div class="secret-title">{"Diagnostics (hidden)"}</div>
            <div class="secret-grid">
                <div class="metric">
                    <span>{"Time open"}</span>
                    <b>{fmt_ms(props.elapsed_ms)}</b>
                </div>
                <div class="metric">
                    <span>{"Pointer moves"}</span>
                    <b>{props.stats.pointer_moves}</b>
                </div>
                <div class="metric">
                    <span>{"Scroll depth"}</span>
                    <b>{fmt_px(props.stats.max_scroll_px)}</b>
                </div>
                <div class="metric">
                    <span>{"Focus"}</span>
                    <b>{if props.stats.focused { "On" } else { "Off" }}</b>
                </div>
            </div>
            <div class="secret-hint">{"Show/hide: double-click the logo mark."}</div>
        </div>
    }
}
