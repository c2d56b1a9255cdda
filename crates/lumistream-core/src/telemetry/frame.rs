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

//! The finalized result of a completed frame-counting period.

use serde::Serialize;

/// Frame counts for the last completed measurement period.
///
/// Produced by the aggregator's period rollover and retained until the
/// next rollover that actually saw frames, so the reporter always has a
/// meaningful period to describe even if the most recent one was empty.
///
/// Counts are 16-bit like the live counters they are copied from; a
/// period would need more than 65,535 events of one kind before that
/// matters, which the expected one-second reporting cadence never
/// approaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    /// Frames detected on the wire during the period.
    pub total_frames: u16,
    /// Frames that made it to the LED output.
    pub show_frames: u16,
    /// Frames received without errors. Never exceeds `total_frames`;
    /// the rollover clamps it when copying from the live counters.
    pub good_frames: u16,
}

impl FrameSnapshot {
    /// Returns the number of frames that arrived damaged or truncated.
    pub fn incomplete_frames(&self) -> u16 {
        self.total_frames.saturating_sub(self.good_frames)
    }
}
