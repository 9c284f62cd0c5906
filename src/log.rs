//! Log callback hook.
//!
//! The crate has no logging dependency of its own. Hosts that want to see
//! normalization diagnostics install a callback with [`set_log_callback`].

use std::sync::{Arc, Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log message to the registered callback, if any.
///
/// The callback runs outside the registry lock, so it may log again or swap
/// the callback itself.
pub fn emit_log(level: LogLevel, message: &str) {
    let callback = match log_callback().lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };
    if let Some(callback) = callback {
        callback(level, message);
    }
}
