//! Console logging
//!
//! `engine_log!` formats like `format!` and writes to the browser console on
//! wasm32. On native targets (unit tests, host tools) there is no console, so
//! the arguments are type-checked and dropped.
//!
//! Usage:
//! ```rust
//! use life_engine::engine_log;
//!
//! let generation = 3;
//! engine_log!("generation {} reached", generation);
//! ```

#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_line(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_line(line: &str) {
    web_sys::console::log_1(&line.into());
}
