//! Per-frame timing telemetry
//!
//! [`FrameTelemetry`] replaces the ambient debugger state of earlier
//! engine revisions with an explicit context object: create it when the
//! render loop starts, update it once per frame, and read it from
//! whatever layer draws the numbers.
//!
//! The FPS estimate is refreshed once per half-second window rather than
//! every frame, so displayed values are stable enough to read.

use std::time::{Duration, Instant};

use crate::engine_warn;

/// Accumulated frame time after which the FPS estimate is refreshed.
const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Frame timing context for one render loop.
///
/// Two ways to feed it:
/// - [`begin_frame`](FrameTelemetry::begin_frame) /
///   [`end_frame`](FrameTelemetry::end_frame) capture wall-clock frame
///   time around the loop body.
/// - [`record_frame`](FrameTelemetry::record_frame) takes an explicit
///   duration, which keeps the arithmetic testable without sleeping.
///
/// Single-owner mutable state; pass `&mut` to whoever updates it.
#[derive(Debug, Clone)]
pub struct FrameTelemetry {
    total_frames: u64,
    last_frame_time: Duration,

    // Current flush window
    window_frames: u32,
    window_time: Duration,

    // Values published at the last flush
    fps: f32,
    average_frame_time: Duration,

    frame_started: Option<Instant>,
}

impl FrameTelemetry {
    pub fn new() -> FrameTelemetry {
        FrameTelemetry {
            total_frames: 0,
            last_frame_time: Duration::ZERO,
            window_frames: 0,
            window_time: Duration::ZERO,
            fps: 0.0,
            average_frame_time: Duration::ZERO,
            frame_started: None,
        }
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self) {
        self.frame_started = Some(Instant::now());
    }

    /// Mark the end of a frame and record the elapsed wall-clock time.
    ///
    /// An `end_frame` with no matching [`begin_frame`](Self::begin_frame)
    /// is ignored and logged as a warning.
    pub fn end_frame(&mut self) {
        match self.frame_started.take() {
            Some(started) => self.record_frame(started.elapsed()),
            None => {
                engine_warn!(
                    "bright::telemetry",
                    "end_frame without begin_frame ignored"
                );
            }
        }
    }

    /// Record one frame of duration `dt`.
    ///
    /// Updates the frame count and last frame time immediately. The FPS
    /// estimate and windowed average refresh only once the accumulated
    /// frame time crosses the half-second window, then the window resets.
    pub fn record_frame(&mut self, dt: Duration) {
        self.total_frames += 1;
        self.last_frame_time = dt;

        self.window_frames += 1;
        self.window_time += dt;

        if self.window_time >= FPS_WINDOW {
            let elapsed = self.window_time.as_secs_f32();
            self.fps = self.window_frames as f32 / elapsed;
            self.average_frame_time = self.window_time / self.window_frames;
            self.window_frames = 0;
            self.window_time = Duration::ZERO;
        }
    }

    /// Total frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.total_frames
    }

    /// Duration of the most recently recorded frame.
    pub fn last_frame_time(&self) -> Duration {
        self.last_frame_time
    }

    /// Frames per second over the last completed window, or `0.0` before
    /// the first window completes.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Mean frame time over the last completed window, or zero before
    /// the first window completes.
    pub fn average_frame_time(&self) -> Duration {
        self.average_frame_time
    }
}

impl Default for FrameTelemetry {
    fn default() -> FrameTelemetry {
        FrameTelemetry::new()
    }
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
