// Utility helpers shared by the engine and the components
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Whole amounts without decimals, anything else to one decimal place.
pub fn format_coins(amount: f64) -> String {
    if (amount - amount.round()).abs() < 1e-9 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Local wall-clock time as HH:MM:SS, used to stamp log entries.
pub fn clock_stamp() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}:{:02}", now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Seeds the game RNG from the browser's entropy and clock.
pub fn seed_rng() -> StdRng {
    let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let millis = js_sys::Date::now() as u64;
    StdRng::seed_from_u64((noise << 32) ^ millis)
}
