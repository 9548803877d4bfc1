// SPDX-License-Identifier: MPL-2.0
//! `hover_notify` is the notification overlay of a game client.
//!
//! It keeps a bounded pool of hover/toast notifications with time-based
//! expiry and fading, a ring-buffer history of every text shown, and
//! migrates both when their configured capacities change at runtime.
//! Drawing is left to the host through the [`notifications::Renderer`] trait.

#![doc(html_root_url = "https://docs.rs/hover_notify/0.3.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;

#[cfg(test)]
mod test_utils;
