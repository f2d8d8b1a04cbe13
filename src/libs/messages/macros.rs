//! Macros for printing application messages.
//!
//! Each macro checks once whether tsk runs in debug mode and routes the
//! message accordingly:
//!
//! ```text
//! msg_info!(..) ──▶ TSK_DEBUG or RUST_LOG set? ──▶ tracing::info!(..)
//!                                        └─ no ──▶ println!(..)
//! ```
//!
//! - **`msg_print!`**: plain output (command results such as `tsk where`)
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error!`**: ❌ prefix, written to stderr outside debug mode
//! - **`msg_debug!`**: 🔍 prefix, silent outside debug mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//! - **`msg_bail_anyhow!`**: returns early with such an error
//!
//! ## Usage
//!
//! ```rust
//! use tsk::{msg_debug, msg_success};
//! use tsk::libs::messages::Message;
//!
//! msg_success!(Message::TaskDeleted(3));
//! msg_debug!(format!("Deleted {} row(s)", 1));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TSK_DEBUG` or `RUST_LOG` is set. Cached after the
/// first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TSK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error with ❌ prefix. Outside debug mode the message goes to
/// stderr so that scripts can keep it apart from listings.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only output. Nothing is printed unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` whose text is the message. No prefix is added
/// here; `main` prints every error through `msg_error!`.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// `return Err(msg_error_anyhow!(..))`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
