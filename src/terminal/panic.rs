//! Panic hook for terminal restoration.
//!
//! Restores the terminal before the panic message is printed, so the
//! message is readable and the shell is usable afterwards.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal, then defers to the
/// previously installed hook.
///
/// Call after `color_eyre::install()` so its report formatting is kept.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}
