// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! This module provides pure domain types for the notification center:
//! - [`PoolCapacity`]: Maximum number of simultaneously visible notifications
//! - [`HistoryCapacity`]: Number of texts kept by the history log
//! - [`DisplayDuration`]: Requested lifetime of a single notification
//! - [`Opacity`]: Global opacity multiplier applied when drawing

mod newtypes;

pub use newtypes::{
    display_duration_bounds, history_capacity_bounds, pool_capacity_bounds, DisplayDuration,
    HistoryCapacity, Opacity, PoolCapacity,
};
