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

//! Foundational traits and data structures for lumistream diagnostics.
//!
//! This crate defines the "common language" for the device's runtime
//! telemetry: the frame/power data types, the capability traits through
//! which diagnostics text leaves the device and runtime introspection
//! values enter it, and the shared error contract.
//!
//! It defines the abstract "what" of diagnostics, while
//! `lumistream-telemetry` provides the stateful aggregation on top of it
//! and `lumistream-infra` provides the concrete sink and probe
//! implementations.

pub mod diagnostics;
pub mod error;
pub mod runtime;
pub mod telemetry;

pub use self::diagnostics::{DiagnosticsSink, ReportAppendix};
pub use self::error::{TelemetryError, TelemetryResult};
pub use self::runtime::{RuntimeProbe, TaskHandle};
pub use self::telemetry::{FrameSnapshot, PowerSample, PowerSummary, UNDERPOWER_EPSILON};
