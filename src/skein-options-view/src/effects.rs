//! Timed alpha transitions.
//!
//! A fade is an opaque awaitable effect: given a surface, a start and end
//! alpha, and a duration, it resolves when the transition finishes or
//! faults. The view launches fades fire-and-forget and only ever observes
//! the outcome for logging, so implementations are free to drive the
//! surface however the host renders.
//!
//! [`TimedFade`] is the stock driver: it steps the surface's alpha on a
//! fixed tick with an ease-in-out curve.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FadeError;
use crate::host::FadeSurface;

/// Tick interval of the stock fade driver (~60 FPS).
const FADE_TICK: Duration = Duration::from_millis(16);

/// An awaitable alpha transition on a [`FadeSurface`].
#[async_trait]
pub trait FadeEffect: Send + Sync {
    /// Drives `surface` from `from` to `to` alpha over `duration`.
    ///
    /// On success the surface must be left exactly at `to`. On failure the
    /// surface may be left at any intermediate alpha; the caller is
    /// responsible for forcing the final state.
    async fn fade(
        &self,
        surface: Arc<dyn FadeSurface>,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Result<(), FadeError>;
}

/// Ease-in-out curve for smooth acceleration and deceleration.
#[inline]
pub(crate) fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Stock fade driver stepping alpha at a fixed tick rate.
///
/// A zero duration completes immediately, leaving the surface at the target
/// alpha. The driver never fails; fault paths come from host-supplied
/// effects (a dropped tween, a torn-down scene node), which is why the
/// trait is fallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedFade;

#[async_trait]
impl FadeEffect for TimedFade {
    async fn fade(
        &self,
        surface: Arc<dyn FadeSurface>,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> Result<(), FadeError> {
        if duration.is_zero() {
            surface.set_alpha(to);
            return Ok(());
        }

        surface.set_alpha(from);
        let started = tokio::time::Instant::now();
        let mut ticks = tokio::time::interval(FADE_TICK);
        // The first tick completes immediately; consume it so the loop
        // measures elapsed time from the alpha we just set.
        ticks.tick().await;

        loop {
            ticks.tick().await;
            let progress =
                (started.elapsed().as_secs_f32() / duration.as_secs_f32()).min(1.0);
            surface.set_alpha(from + (to - from) * ease_in_out(progress));
            if progress >= 1.0 {
                return Ok(());
            }
        }
    }
}
