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

//! Runtime statistics aggregation for the lumistream device.
//!
//! The device's receive/render/power-limit pipeline reports events into
//! this crate as they happen; a periodic caller rolls the measurement
//! period over; and, while no host is talking to the device, the
//! accumulated numbers are formatted into a human-readable diagnostic
//! report and handed to a [`lumistream_core::DiagnosticsSink`].
//!
//! The aggregation is purely observational. Nothing here feeds back into
//! frame delivery or power limiting, and nothing here blocks or performs
//! I/O itself.

pub mod frame;
pub mod power;
pub mod report;
pub mod service;

pub use self::frame::FrameCounters;
pub use self::power::PowerAccumulator;
pub use self::report::{DiagnosticsReport, Reporter};
pub use self::service::TelemetryService;
