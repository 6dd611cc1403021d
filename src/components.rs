//! Yew view components for the range slider UI.
//!
//! The slider is a controlled component: the committed `(value1, value2)`
//! pair lives in the host page, and the widget only proposes new pairs
//! through `on_change`. The only local state is which handle is being
//! dragged.

use gloo_events::EventListener;
use price_range::{
    apply_candidate, format_currency, percent_along, snap_to_nearest, value_from_pointer, Handle,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RangeSliderProps {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value1: f64,
    pub value2: f64,
    pub on_change: Callback<(f64, f64)>,
    /// Optional discrete set of permissible values; when present every
    /// reported value is snapped to its nearest member.
    #[prop_or_default]
    pub fixed_values: Option<Vec<f64>>,
}

/// Dual-handle slider selecting `[value1, value2]` within `[min, max]`.
///
/// Window-scoped `mousemove`/`mouseup` listeners are attached only while
/// a drag session is active and dropped as soon as it ends (or the
/// component unmounts), so the gesture keeps tracking even when the
/// pointer leaves the handle and no listeners leak across renders.
#[function_component(RangeSlider)]
pub fn range_slider(props: &RangeSliderProps) -> Html {
    let dragging_lower = use_state(|| false);
    let dragging_upper = use_state(|| false);
    let track_ref = use_node_ref();

    {
        let dragging_lower = dragging_lower.clone();
        let dragging_upper = dragging_upper.clone();
        let track_ref = track_ref.clone();
        let on_change = props.on_change.clone();
        use_effect_with(
            (
                *dragging_lower,
                *dragging_upper,
                props.value1,
                props.value2,
                props.min,
                props.max,
                props.step,
                props.fixed_values.clone(),
            ),
            move |deps| {
                let (lower_active, upper_active, value1, value2, min, max, step, fixed) =
                    deps.clone();
                let mut listeners: Vec<EventListener> = Vec::new();

                if lower_active || upper_active {
                    let window = gloo_utils::window();

                    let on_move = EventListener::new(&window, "mousemove", move |event| {
                        let event: &MouseEvent = event.unchecked_ref();
                        let Some(track) = track_ref.cast::<Element>() else {
                            return;
                        };
                        let rect = track.get_bounding_client_rect();
                        // A zero-width rect means the track is not laid
                        // out yet; ignore the move instead of guessing.
                        let Some(stepped) = value_from_pointer(
                            event.client_x() as f64,
                            rect.left(),
                            rect.width(),
                            min,
                            max,
                            step,
                        ) else {
                            return;
                        };
                        let candidate = match &fixed {
                            Some(set) => snap_to_nearest(stepped, set),
                            None => stepped,
                        };
                        let handle = if lower_active {
                            Handle::Lower
                        } else {
                            Handle::Upper
                        };
                        match apply_candidate(handle, candidate, value1, value2) {
                            Some(pair) => on_change.emit(pair),
                            // Crossing the other handle: drop the move.
                            None => log::debug!(
                                "rejected {:?} candidate {} against ({}, {})",
                                handle,
                                candidate,
                                value1,
                                value2
                            ),
                        }
                    });

                    let on_up = EventListener::new(&window, "mouseup", move |_| {
                        dragging_lower.set(false);
                        dragging_upper.set(false);
                    });

                    listeners.push(on_move);
                    listeners.push(on_up);
                }

                move || drop(listeners)
            },
        );
    }

    let start_lower = {
        let dragging_lower = dragging_lower.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dragging_lower.set(true);
        })
    };
    let start_upper = {
        let dragging_upper = dragging_upper.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dragging_upper.set(true);
        })
    };

    let percentage1 = percent_along(props.value1, props.min, props.max);
    let percentage2 = percent_along(props.value2, props.min, props.max);

    html! {
        <div class="slider-container">
            <div class="value">{ format_currency(props.value1) }</div>
            <div class="slider" ref={track_ref}>
                <div class="track" />
                <div
                    class={classes!("thumb", (*dragging_lower).then_some("grabbing"))}
                    style={format!("left: {}%", percentage1)}
                    onmousedown={start_lower}
                />
                <div
                    class={classes!("thumb", (*dragging_upper).then_some("grabbing"))}
                    style={format!("left: {}%", percentage2)}
                    onmousedown={start_upper}
                />
            </div>
            <div class="value">{ format_currency(props.value2) }</div>

            { match &props.fixed_values {
                Some(values) => render_fixed_values(values),
                None => html! {},
            } }
        </div>
    }
}

/// Renders the fixed-value set as a reference list, two decimals each.
fn render_fixed_values(values: &[f64]) -> Html {
    html! {
        <div class="fixed-values">
            <h5>{ "Fixed Values:" }</h5>
            { values.iter().map(|val| html! {
                <span class="fixed-value" key={val.to_string()}>
                    { format!("{:.2}", val) }
                </span>
            }).collect::<Html>() }
        </div>
    }
}
