// Logging setup plus conditional macros - the macros compile away in
// release builds so the TUI event loop stays free of logging overhead.

/// Initialize `env_logger`. Quiet unless `RUST_LOG` says otherwise, since
/// stderr output would corrupt the alternate-screen TUI.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
