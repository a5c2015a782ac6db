//! Console logging shim.
//!
//! In the browser everything goes to `console.*`.  Host builds (unit tests,
//! `cargo check` on the dev machine) cannot call imported JS functions, so
//! the same helpers fall back to stderr there.

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(msg: &str) {
    eprintln!("[debug] {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::info_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(msg: &str) {
    eprintln!("[info] {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[warn] {}", msg);
}

#[cfg(target_arch = "wasm32")]
pub fn error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(msg: &str) {
    eprintln!("[error] {}", msg);
}
