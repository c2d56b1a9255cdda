// Copyright 2025 lumistream
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The rolling frame-delivery counter set.

use lumistream_core::FrameSnapshot;

/// Per-period frame counters plus the last finalized snapshot.
///
/// The counters move through two states: **accumulating**, where the
/// live counters grow as pipeline events arrive, and **finalized**,
/// where a completed period's counts are available in the snapshot.
/// [`FrameCounters::update`] is the only transition that produces a new
/// snapshot; [`FrameCounters::reset`] and
/// [`FrameCounters::light_reset`] are administrative transitions back to
/// a cleared accumulating state.
///
/// The live counters are `u16` and wrap silently past 65,535 events of
/// one kind within a single period. With rollovers expected every
/// second that limit is never reached; widen the counters if the
/// reporting cadence ever changes by orders of magnitude.
#[derive(Debug, Clone, Default)]
pub struct FrameCounters {
    start_time: u64,
    total_frames: u16,
    show_frames: u16,
    good_frames: u16,
    snapshot: FrameSnapshot,
}

impl FrameCounters {
    /// Creates a counter set with its first period starting at `now`
    /// (milliseconds, caller-supplied clock).
    pub fn new(now: u64) -> Self {
        Self {
            start_time: now,
            ..Self::default()
        }
    }

    /// Returns the start time of the current period.
    pub fn start_time(&self) -> u64 {
        self.start_time
    }

    /// A new frame was detected on the wire.
    pub fn increase_total(&mut self) {
        self.total_frames = self.total_frames.wrapping_add(1);
    }

    /// A frame was received and shown on the LED output.
    pub fn increase_show(&mut self) {
        self.show_frames = self.show_frames.wrapping_add(1);
    }

    /// A frame was received correctly (not necessarily shown yet).
    pub fn increase_good(&mut self) {
        self.good_frames = self.good_frames.wrapping_add(1);
    }

    /// Returns the number of correctly received frames in the live period.
    pub fn good_frames(&self) -> u16 {
        self.good_frames
    }

    /// Returns the last finalized snapshot.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.snapshot
    }

    /// Period rollover.
    ///
    /// If the live period saw any frames, its counts become the new
    /// finalized snapshot, with `good_frames` clamped to `total_frames`.
    /// An empty period leaves the previous snapshot in place so the next
    /// report still describes the last period in which something
    /// happened. The live counters restart either way.
    pub fn update(&mut self, now: u64) {
        if self.total_frames > 0 {
            self.snapshot = FrameSnapshot {
                total_frames: self.total_frames,
                show_frames: self.show_frames,
                good_frames: self.good_frames.min(self.total_frames),
            };
        }
        self.start_next_period(now);
    }

    /// Abandons the live period without finalizing it.
    ///
    /// Used when the receiver detects a discontinuity: the partial
    /// counts are meaningless, so they are dropped rather than rolled
    /// into a snapshot. The period clock is only restarted when the
    /// abandoned period actually contained data, so a spurious call
    /// does not disturb the reporting cadence.
    pub fn light_reset(&mut self, now: u64, has_data: bool) {
        if has_data {
            self.start_time = now;
        }
        self.total_frames = 0;
        self.show_frames = 0;
        self.good_frames = 0;
    }

    /// Zeroes the live counters and restarts the period clock, leaving
    /// the finalized snapshot untouched.
    pub fn start_next_period(&mut self, now: u64) {
        self.start_time = now;
        self.total_frames = 0;
        self.show_frames = 0;
        self.good_frames = 0;
    }

    /// Full reset: live counters, snapshot, and period clock.
    pub fn reset(&mut self, now: u64) {
        self.snapshot = FrameSnapshot::default();
        self.start_next_period(now);
    }
}
