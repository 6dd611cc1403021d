//! Price range demo application built with Yew.
//! Wires the slider component, remote data loading, and page navigation.

use web_sys::MouseEvent;
use yew::prelude::*;

mod components;
mod config;
mod fetch;
mod hooks;

use components::RangeSlider;
use config::{DEFAULT_STEP, FIXED_RANGE_MAX, FIXED_RANGE_MIN, FIXED_VALUES_URL, RANGE_VALUES_URL};
use fetch::{fetch_fixed_values, fetch_range_bounds};
use hooks::{use_remote, FetchState};

/// The demo pages reachable from the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    BoundedRange,
    FixedRange,
}

/// Exercise 1: bounds come from the remote endpoint, values start at the
/// full interval. The page owns the committed pair and applies every
/// accepted change verbatim.
#[function_component(BoundedRangePage)]
fn bounded_range_page() -> Html {
    let bounds = use_remote(|| fetch_range_bounds(RANGE_VALUES_URL));
    let values = use_state(|| None::<(f64, f64)>);

    match &*bounds {
        FetchState::Loading => html! {
            <div class="placeholder">{ "Loading range slider..." }</div>
        },
        FetchState::Failed(_) => html! {
            <div class="placeholder">{ "Range values are unavailable right now." }</div>
        },
        FetchState::Ready(resp) => {
            if resp.min >= resp.max {
                log::warn!("discarding degenerate bounds [{}, {}]", resp.min, resp.max);
                return html! {
                    <div class="placeholder">{ "Range values are unavailable right now." }</div>
                };
            }
            let (value1, value2) = (*values).unwrap_or((resp.min, resp.max));
            let on_change = {
                let values = values.clone();
                Callback::from(move |pair: (f64, f64)| values.set(Some(pair)))
            };
            html! {
                <RangeSlider
                    min={resp.min}
                    max={resp.max}
                    step={DEFAULT_STEP}
                    value1={value1}
                    value2={value2}
                    on_change={on_change}
                />
            }
        }
    }
}

/// Exercise 2: the endpoint supplies only the permissible-value set; the
/// bounds are fixed by configuration.
#[function_component(FixedRangePage)]
fn fixed_range_page() -> Html {
    let data = use_remote(|| fetch_fixed_values(FIXED_VALUES_URL));
    let values = use_state(|| None::<(f64, f64)>);

    match &*data {
        FetchState::Loading => html! {
            <div class="placeholder">{ "Loading range slider..." }</div>
        },
        FetchState::Failed(_) => html! {
            <div class="placeholder">{ "Fixed values are unavailable right now." }</div>
        },
        FetchState::Ready(resp) => {
            let (value1, value2) = (*values).unwrap_or((FIXED_RANGE_MIN, FIXED_RANGE_MAX));
            let on_change = {
                let values = values.clone();
                Callback::from(move |pair: (f64, f64)| values.set(Some(pair)))
            };
            html! {
                <RangeSlider
                    min={FIXED_RANGE_MIN}
                    max={FIXED_RANGE_MAX}
                    step={DEFAULT_STEP}
                    value1={value1}
                    value2={value2}
                    on_change={on_change}
                    fixed_values={Some(resp.fixed_values.clone())}
                />
            }
        }
    }
}

/// Landing view listing the available exercises.
#[derive(Properties, PartialEq)]
struct HomePageProps {
    on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
fn home_page(props: &HomePageProps) -> Html {
    let link = |target: Page, label: &'static str| -> Html {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target);
        });
        html! {
            <li>
                <a href="#" class="exercise-link" {onclick}>{ label }</a>
            </li>
        }
    };

    html! {
        <div class="home">
            <h1>{ "Welcome to the Exercises" }</h1>
            <ul>
                { link(Page::BoundedRange, "Normal Range") }
                { link(Page::FixedRange, "Fixed Values Range") }
            </ul>
        </div>
    }
}

/// Root component holding the current page.
#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };
    let go_home = {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.set(Page::Home);
        })
    };

    html! {
        <div class="container">
            if *page != Page::Home {
                <a href="#" class="back-link" onclick={go_home}>{ "Back" }</a>
            }
            { match *page {
                Page::Home => html! { <HomePage on_navigate={on_navigate} /> },
                Page::BoundedRange => html! { <BoundedRangePage /> },
                Page::FixedRange => html! { <FixedRangePage /> },
            } }
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");
    yew::Renderer::<App>::new().render();
}
