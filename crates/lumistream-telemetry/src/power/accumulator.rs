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

//! Lifetime accumulator for power-limiter output.

use lumistream_core::{PowerSample, PowerSummary};

/// Cumulative sums over every frame the power limiter has processed.
///
/// Unlike the frame counters, this state is not periodic: it grows for
/// the device's whole uptime and is only cleared by a full reset. The
/// counters and current sums are 64-bit on purpose — a 32-bit frame
/// counter would wrap after roughly 36 hours at 125 frames per second.
/// The ratio sums are `f64`, which adds small integer-valued ratios
/// exactly up to 2^53 and keeps rounding error negligible over millions
/// of additions.
///
/// Invariant: `underpower_frames <= frames`.
#[derive(Debug, Clone, Default)]
pub struct PowerAccumulator {
    frames: u64,
    underpower_frames: u64,
    milliamps_sum: u64,
    requested_milliamps_sum: u64,
    power_percent_sum: f64,
    underpower_percent_sum: f64,
}

impl PowerAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one frame's limiter output into the lifetime sums.
    ///
    /// Every sample contributes to the frame count, the power-ratio sum
    /// and the delivered-current sum. Samples classified as underpower
    /// events (see [`PowerSample::is_underpower`]) additionally
    /// contribute to the underpower count, the limiting-ratio sum and
    /// the requested-current sum, so the requested-current average is an
    /// average over limited frames only.
    pub fn record(&mut self, sample: PowerSample) {
        self.frames += 1;
        self.power_percent_sum += f64::from(sample.power_ratio);
        self.milliamps_sum += u64::from(sample.milliamps);

        if sample.is_underpower() {
            self.underpower_frames += 1;
            self.underpower_percent_sum += f64::from(sample.underpower_ratio);
            self.requested_milliamps_sum += u64::from(sample.requested_milliamps);
        }
    }

    /// Total frames seen by the limiter.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames classified as underpower events.
    pub fn underpower_frames(&self) -> u64 {
        self.underpower_frames
    }

    /// Computes the report-time averages over the accumulated history.
    ///
    /// Each average whose denominator is zero comes back as `None`
    /// rather than a NaN.
    pub fn summary(&self) -> PowerSummary {
        let frames = self.frames;
        let underpower = self.underpower_frames;

        let average_milliamps = (frames > 0)
            .then(|| (self.milliamps_sum as f64 / frames as f64) as u32);
        let average_requested_milliamps = (underpower > 0)
            .then(|| (self.requested_milliamps_sum as f64 / underpower as f64) as u32);

        let requested_overdraw_percent = match (average_milliamps, average_requested_milliamps) {
            (Some(avg), Some(requested)) if avg > 0 => {
                Some(f64::from(requested) * 100.0 / f64::from(avg))
            }
            _ => None,
        };

        PowerSummary {
            frames,
            underpower_frames: underpower,
            underpower_percent: (frames > 0)
                .then(|| underpower as f64 * 100.0 / frames as f64),
            average_power_percent: (frames > 0)
                .then(|| self.power_percent_sum * 100.0 / frames as f64),
            average_milliamps,
            average_underpower_percent: (underpower > 0)
                .then(|| self.underpower_percent_sum * 100.0 / underpower as f64),
            average_requested_milliamps,
            requested_overdraw_percent,
        }
    }

    /// Clears all lifetime sums.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
