// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`notifications`]: Notification value objects
//!   ([`PoolCapacity`](notifications::PoolCapacity),
//!   [`HistoryCapacity`](notifications::HistoryCapacity),
//!   [`DisplayDuration`](notifications::DisplayDuration),
//!   [`Opacity`](notifications::Opacity))

pub mod notifications;
