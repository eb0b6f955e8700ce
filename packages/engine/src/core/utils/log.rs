//! Console logging
//!
//! The engine runs inside a browser tab, so log lines go straight to the
//! devtools console through `web_sys::console`. Native builds (tests, tooling)
//! compile the calls out but still type-check the format arguments.
//!
//! Usage:
//! ```rust
//! use letterfall_engine::{log_info, log_warn};
//!
//! let word = "abc";
//! log_info!("word submitted: {}", word);
//! log_warn!("image {} failed to load", "images/q.png");
//! ```

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Informational line on `console.log`
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_log(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Degraded-but-running condition on `console.warn`
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::utils::log::console_warn(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
