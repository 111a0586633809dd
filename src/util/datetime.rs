//! Browser clock helpers.
//!
//! Date formatting goes through the JS `Date` locale API so saved journal
//! entries match what the user's browser would show elsewhere. Non-hydrate
//! builds return an empty label.

/// Today's date as a locale-formatted label (e.g. `"2/3/2026"`).
#[must_use]
pub fn today_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
