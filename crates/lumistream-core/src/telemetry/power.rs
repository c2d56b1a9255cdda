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

//! Power-limiter sample and summary types.

use approx::abs_diff_eq;
use serde::Serialize;

/// Tolerance for deciding that a frame was fully current-limited.
///
/// The limiter computes its ratios in floating point, so a frame capped
/// at the full budget may arrive as 0.99999x rather than exactly 1.0.
pub const UNDERPOWER_EPSILON: f32 = 1e-5;

/// One frame's output from the power limiter.
///
/// Produced once per rendered frame, after the limiter has decided how
/// much the frame's brightness had to be constrained to stay inside the
/// current budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSample {
    /// The frame's power draw as a fraction of the budget, in [0, 1].
    pub power_ratio: f32,
    /// How strongly the frame was limited, in [0, 1]. A value of 1.0
    /// means the frame was capped at the full current budget.
    pub underpower_ratio: f32,
    /// Current the frame draws after limiting, in milliamps.
    pub milliamps: u32,
    /// Current the frame wanted to draw before limiting, in milliamps.
    pub requested_milliamps: u32,
}

impl PowerSample {
    /// Returns true when this frame counts as an underpower event, i.e.
    /// its brightness was fully constrained by the current budget.
    pub fn is_underpower(&self) -> bool {
        abs_diff_eq!(self.underpower_ratio, 1.0, epsilon = UNDERPOWER_EPSILON)
    }
}

/// Averages over the power accumulator's full history, computed at
/// report time.
///
/// Every average carries an explicit "no data" state: `None` means the
/// corresponding denominator (total frames, underpower frames, or the
/// average current itself) was zero. The reporter renders those as
/// `n/a` instead of dividing by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PowerSummary {
    /// Total frames seen by the power limiter.
    pub frames: u64,
    /// Frames classified as underpower events.
    pub underpower_frames: u64,
    /// Share of frames that were underpower events, in percent.
    pub underpower_percent: Option<f64>,
    /// Average power draw across all frames, in percent of the budget.
    pub average_power_percent: Option<f64>,
    /// Average current across all frames, in milliamps.
    pub average_milliamps: Option<u32>,
    /// Average limiting strength across underpower frames, in percent.
    pub average_underpower_percent: Option<f64>,
    /// Average requested current across underpower frames, in milliamps.
    pub average_requested_milliamps: Option<u32>,
    /// How much the average requested current exceeds the average
    /// delivered current, in percent of the delivered average.
    pub requested_overdraw_percent: Option<f64>,
}
