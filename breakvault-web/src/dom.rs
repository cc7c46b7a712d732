//! DOM event plumbing shared by the calculator inputs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Adapter for `<select>` changes: emits the selected value.
#[must_use]
pub fn on_select_value(cb: Callback<String>) -> Callback<web_sys::Event> {
    #[cfg(target_arch = "wasm32")]
    {
        Callback::from(move |e: web_sys::Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(select.value());
            }
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = cb;
        Callback::from(|_e: web_sys::Event| {})
    }
}

/// Adapter for numeric inputs: emits the value clamped to at least 1.
#[must_use]
pub fn on_quantity_value(cb: Callback<u32>) -> Callback<web_sys::InputEvent> {
    #[cfg(target_arch = "wasm32")]
    {
        Callback::from(move |e: web_sys::InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(clamp_quantity(&input.value()));
            }
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = cb;
        Callback::from(|_e: web_sys::InputEvent| {})
    }
}

/// Parse a quantity field; junk, zero, and negatives all clamp to 1.
#[must_use]
pub fn clamp_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}
