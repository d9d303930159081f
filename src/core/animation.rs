//! Opacity transitions and the next-frame scheduler that restarts them.
//!
//! An [`Animation`] is a linear opacity ramp with a start instant.  Restarting
//! one is a two-step affair: the controller first drops the running ramp
//! (the reset), then asks the [`FrameScheduler`] to apply the replacement on
//! the next frame.  Only the most recent request survives until that frame.

use std::time::{Duration, Instant};

/// Which way the tooltip fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyframe {
    /// hidden → visible
    PopIn,
    /// visible → hidden
    PopOut,
}

/// A running opacity transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub keyframe: Keyframe,
    pub duration: Duration,
    pub started: Instant,
}

impl Animation {
    pub fn start(keyframe: Keyframe, duration: Duration, now: Instant) -> Self {
        Self {
            keyframe,
            duration,
            started: now,
        }
    }

    /// Fraction of the transition elapsed at `now`, clamped to `0.0..=1.0`.
    /// Zero-length transitions are complete immediately.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Opacity at `now`, interpolating between `hidden` and `visible`.
    /// Holds the end value once finished.
    pub fn opacity(&self, now: Instant, hidden: f32, visible: f32) -> f32 {
        let t = self.progress(now);
        let (from, to) = match self.keyframe {
            Keyframe::PopIn => (hidden, visible),
            Keyframe::PopOut => (visible, hidden),
        };
        from + (to - from) * t
    }
}

/// A deferred animation request waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRequest {
    /// Monotonic id; a higher generation always supersedes a lower one.
    pub generation: u64,
    pub keyframe: Keyframe,
    pub duration: Duration,
}

/// Holds at most one pending [`FrameRequest`].
///
/// Scheduling replaces whatever was pending ("last request wins"), so a
/// stale hide can never be applied on top of a newer show.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<FrameRequest>,
    generation: u64,
}

impl FrameScheduler {
    /// Schedule `keyframe` for the next frame, cancelling any pending request.
    /// Returns the generation of the new request.
    pub fn schedule(&mut self, keyframe: Keyframe, duration: Duration) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        if let Some(old) = self.pending.take() {
            tracing::debug!(
                superseded = old.generation,
                by = self.generation,
                "frame request replaced"
            );
        }
        self.pending = Some(FrameRequest {
            generation: self.generation,
            keyframe,
            duration,
        });
        self.generation
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&FrameRequest> {
        self.pending.as_ref()
    }

    /// Hand the pending request to the frame step.  Yields each request once.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_ramps_linearly_and_holds() {
        let t0 = Instant::now();
        let anim = Animation::start(Keyframe::PopIn, Duration::from_millis(1000), t0);
        assert_eq!(anim.opacity(t0, 0.0, 1.0), 0.0);
        let mid = anim.opacity(t0 + Duration::from_millis(500), 0.0, 1.0);
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(anim.opacity(t0 + Duration::from_secs(5), 0.0, 1.0), 1.0);
        assert!(anim.is_finished(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn pop_out_fades_from_visible_to_hidden() {
        let t0 = Instant::now();
        let anim = Animation::start(Keyframe::PopOut, Duration::from_millis(3000), t0);
        assert_eq!(anim.opacity(t0, 0.0, 1.0), 1.0);
        assert_eq!(anim.opacity(t0 + Duration::from_secs(3), 0.0, 1.0), 0.0);
    }

    #[test]
    fn zero_duration_is_complete_immediately() {
        let t0 = Instant::now();
        let anim = Animation::start(Keyframe::PopOut, Duration::ZERO, t0);
        assert!(anim.is_finished(t0));
        assert_eq!(anim.opacity(t0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn last_request_wins() {
        let mut sched = FrameScheduler::default();
        let first = sched.schedule(Keyframe::PopOut, Duration::from_secs(3));
        let second = sched.schedule(Keyframe::PopIn, Duration::from_secs(1));
        assert!(second > first);

        let due = sched.take_due().unwrap();
        assert_eq!(due.generation, second);
        assert_eq!(due.keyframe, Keyframe::PopIn);
        assert!(sched.take_due().is_none());
    }

    #[test]
    fn cancel_drops_pending_request() {
        let mut sched = FrameScheduler::default();
        sched.schedule(Keyframe::PopIn, Duration::from_secs(1));
        assert!(sched.cancel().is_some());
        assert!(sched.pending().is_none());
        assert!(sched.take_due().is_none());
    }
}
