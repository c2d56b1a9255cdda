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

//! A diagnostics sink backed by the `log` facade.

use lumistream_core::{DiagnosticsSink, TelemetryResult};

/// Writes each report line at `info` level under the `diagnostics`
/// target. On hosted builds this is the stand-in for the device's
/// serial transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Creates a new log sink.
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticsSink for LogSink {
    fn write_line(&self, line: &str) -> TelemetryResult<()> {
        log::info!(target: "diagnostics", "{line}");
        Ok(())
    }
}
