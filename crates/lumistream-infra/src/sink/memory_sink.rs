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

//! An in-memory capture sink.

use std::sync::Mutex;

use lumistream_core::{DiagnosticsSink, TelemetryError, TelemetryResult};

/// Collects report lines in memory.
///
/// Used by tests to assert on emitted reports, and by callers that
/// forward the assembled block over a transport of their own.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Discards all captured lines.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl DiagnosticsSink for MemorySink {
    fn write_line(&self, line: &str) -> TelemetryResult<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| TelemetryError::SinkWrite("capture buffer poisoned".to_string()))?;
        lines.push(line.to_string());
        Ok(())
    }
}
