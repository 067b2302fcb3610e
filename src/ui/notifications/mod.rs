// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! Toasts auto-dismiss after ~3s (~5s for warnings). At most 3 are visible at
//! once, the rest wait in a queue. They stack in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
