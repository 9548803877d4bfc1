// SPDX-License-Identifier: MPL-2.0
//! Fade envelope for notification opacity.
//!
//! The envelope eases in over the first [`FADE_IN_FRACTION`] of the lifetime,
//! holds full opacity, then eases out over the last [`FADE_OUT_FRACTION`].
//! It depends only on `elapsed` and `duration`, so the cached value can be
//! recomputed every frame in constant time.

use crate::config::defaults::{FADE_IN_FRACTION, FADE_OUT_FRACTION};

/// Returns the opacity for a notification `elapsed` seconds into a lifetime of
/// `duration` seconds, in `0.0..=1.0`.
#[must_use]
pub fn fade_state(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let progress = (elapsed / duration).clamp(0.0, 1.0);

    if progress < FADE_IN_FRACTION {
        smoothstep(progress / FADE_IN_FRACTION)
    } else if progress > 1.0 - FADE_OUT_FRACTION {
        smoothstep((1.0 - progress) / FADE_OUT_FRACTION)
    } else {
        1.0
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
