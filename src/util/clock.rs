//! Wall-clock access that works both natively and in the browser.
//!
//! `std::time::SystemTime` panics on `wasm32-unknown-unknown`, so the browser
//! build reads `Date.now()` instead.

/// Current Unix time in (fractional) seconds.
pub fn now_secs() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}
