//! Small crate-wide convenience macros.

/// Log a formatted line in debug builds only. Release builds compile the
/// arguments away entirely so hot paths (pointer moves, frames) stay free.
///
/// ```rust,ignore
/// debug_log!("dropped {} at ({}, {})", node_id, x, y);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::logging::debug(&format!($($arg)*));
        }
    }};
}

/// Acquire a **mutable** borrow from a `RefCell` (or `Rc<RefCell>`).
/// If another mutable borrow is still active the call panics – the standard
/// panic message emitted by `RefCell::borrow_mut()` is preserved to keep the
/// macro zero-cost.
#[macro_export]
macro_rules! mut_borrow {
    ($cell:expr) => {
        $cell.borrow_mut()
    };
}
