// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications carry i18n keys rather than resolved strings; resolution
//! happens at render time so locale switches never show stale text.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
