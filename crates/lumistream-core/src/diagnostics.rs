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

//! The capability through which diagnostics text leaves the device.
//!
//! The reporter never talks to a transport directly; it writes lines
//! through a [`DiagnosticsSink`]. On the device the sink is the serial
//! transport, on hosted builds it is usually the log facade, and tests
//! capture lines in memory.

use std::fmt::Debug;

use crate::error::TelemetryResult;

/// A destination for formatted diagnostics text, one line at a time.
///
/// Implementations must not block for any meaningful amount of time;
/// the report is emitted from the device's idle path.
pub trait DiagnosticsSink: Send + Sync + Debug {
    /// Writes a single line of report text (without a trailing newline).
    fn write_line(&self, line: &str) -> TelemetryResult<()>;
}

/// A collaborator that appends extra, platform-specific report content.
///
/// Some hardware variants (RGBW strips with a calibration subsystem)
/// attach their calibration dump to the end of the periodic report. The
/// reporter only knows that an appendix may exist; its content is owned
/// entirely by the implementing subsystem.
pub trait ReportAppendix: Send + Sync + Debug {
    /// Writes the appendix through the given sink.
    fn write_appendix(&self, sink: &dyn DiagnosticsSink) -> TelemetryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct VecSink {
        lines: Mutex<Vec<String>>,
    }

    impl DiagnosticsSink for VecSink {
        fn write_line(&self, line: &str) -> TelemetryResult<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct StaticAppendix;

    impl ReportAppendix for StaticAppendix {
        fn write_appendix(&self, sink: &dyn DiagnosticsSink) -> TelemetryResult<()> {
            sink.write_line("calibration: r=255 g=255 b=255")
        }
    }

    #[test]
    fn test_appendix_writes_through_sink() {
        let sink = VecSink::default();
        StaticAppendix.write_appendix(&sink).unwrap();
        assert_eq!(
            sink.lines.lock().unwrap().as_slice(),
            ["calibration: r=255 g=255 b=255"]
        );
    }
}
