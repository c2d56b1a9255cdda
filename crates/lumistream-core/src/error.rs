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

//! The shared error contract for the diagnostics stack.

use std::fmt::Display;

/// A specialized `Result` type for diagnostics operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// An error that can occur while emitting or assembling diagnostics.
///
/// The aggregation itself is total over its counters and never fails;
/// errors only arise at the boundary with an external collaborator.
#[derive(Debug, Clone)]
pub enum TelemetryError {
    /// The diagnostics sink rejected a line of report text.
    SinkWrite(String),
    /// The runtime probe could not be queried.
    ProbeUnavailable(String),
}

impl Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryError::SinkWrite(msg) => write!(f, "Sink write failed: {msg}"),
            TelemetryError::ProbeUnavailable(msg) => write!(f, "Runtime probe unavailable: {msg}"),
        }
    }
}

impl std::error::Error for TelemetryError {}
