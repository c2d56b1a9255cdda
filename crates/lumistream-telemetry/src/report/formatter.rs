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

//! Formats the accumulated statistics into the diagnostic text block.
//!
//! The reporter owns no counters. It is handed a finalized frame
//! snapshot and a power summary, queries the runtime probe for stack and
//! heap figures, and writes the resulting lines through the injected
//! sink. Restarting the measurement period stays with the caller, so
//! everything in this module is side-effect free with respect to the
//! aggregated state.

use std::sync::Arc;

use lumistream_core::{
    DiagnosticsSink, FrameSnapshot, PowerSummary, ReportAppendix, RuntimeProbe, TaskHandle,
    TelemetryResult,
};
use serde::Serialize;

/// Everything one periodic report describes, fully resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    /// The last finalized frame-counting period.
    pub frame: FrameSnapshot,
    /// Stack high-water mark of the receiver task, in words (0 when the
    /// handle was absent or the probe cannot see the task).
    pub stack_watermark_rx: u32,
    /// Stack high-water mark of the render task, in words.
    pub stack_watermark_render: u32,
    /// Free heap, in bytes.
    pub free_heap_bytes: u64,
    /// Lifetime power-limiter averages.
    pub power: PowerSummary,
}

impl DiagnosticsReport {
    /// Renders the report as its diagnostic text lines.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Streamed frames: {} (FPS), receiv.: {}, good: {}, incompl.: {}, stack1: {}, stack2: {}, heap: {}",
                self.frame.show_frames,
                self.frame.total_frames,
                self.frame.good_frames,
                self.frame.incomplete_frames(),
                self.stack_watermark_rx,
                self.stack_watermark_render,
                self.free_heap_bytes,
            ),
            format!(
                "Power limiter: {} frames total ({} underpower ones, {})",
                self.power.frames,
                self.power.underpower_frames,
                fmt_percent(self.power.underpower_percent),
            ),
            format!(
                "{} mA average ({} mA avg requested, {} of the delivered average)",
                fmt_milliamps(self.power.average_milliamps),
                fmt_milliamps(self.power.average_requested_milliamps),
                fmt_percent(self.power.requested_overdraw_percent),
            ),
            format!(
                "{} average load (limited by {})",
                fmt_percent(self.power.average_power_percent),
                fmt_percent(self.power.average_underpower_percent),
            ),
        ]
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}

fn fmt_milliamps(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

/// Assembles and emits diagnostic reports.
#[derive(Debug, Clone)]
pub struct Reporter {
    sink: Arc<dyn DiagnosticsSink>,
    probe: Arc<dyn RuntimeProbe>,
    appendix: Option<Arc<dyn ReportAppendix>>,
}

impl Reporter {
    /// Creates a reporter writing through `sink` and reading runtime
    /// figures from `probe`.
    pub fn new(sink: Arc<dyn DiagnosticsSink>, probe: Arc<dyn RuntimeProbe>) -> Self {
        Self {
            sink,
            probe,
            appendix: None,
        }
    }

    /// Attaches a platform-specific report appendix (e.g. the RGBW
    /// calibration dump).
    pub fn with_appendix(mut self, appendix: Arc<dyn ReportAppendix>) -> Self {
        self.appendix = Some(appendix);
        self
    }

    /// Resolves the runtime figures and bundles them with the given
    /// statistics into a report. Pure with respect to the aggregator.
    pub fn build(
        &self,
        frame: FrameSnapshot,
        power: PowerSummary,
        task_rx: Option<TaskHandle>,
        task_render: Option<TaskHandle>,
    ) -> DiagnosticsReport {
        DiagnosticsReport {
            frame,
            stack_watermark_rx: task_rx
                .map(|task| self.probe.stack_high_water_mark(task))
                .unwrap_or(0),
            stack_watermark_render: task_render
                .map(|task| self.probe.stack_high_water_mark(task))
                .unwrap_or(0),
            free_heap_bytes: self.probe.free_heap_bytes(),
            power,
        }
    }

    /// Writes the report through the sink, followed by the appendix if
    /// one is attached.
    pub fn write(&self, report: &DiagnosticsReport) -> TelemetryResult<()> {
        for line in report.lines() {
            self.sink.write_line(&line)?;
        }
        if let Some(appendix) = &self.appendix {
            appendix.write_appendix(self.sink.as_ref())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumistream_core::TelemetryError;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct VecSink {
        lines: Mutex<Vec<String>>,
    }

    impl VecSink {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl DiagnosticsSink for VecSink {
        fn write_line(&self, line: &str) -> TelemetryResult<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingSink;

    impl DiagnosticsSink for FailingSink {
        fn write_line(&self, _line: &str) -> TelemetryResult<()> {
            Err(TelemetryError::SinkWrite("transport gone".to_string()))
        }
    }

    #[derive(Debug)]
    struct StubProbe;

    impl RuntimeProbe for StubProbe {
        fn stack_high_water_mark(&self, task: TaskHandle) -> u32 {
            task.raw() as u32
        }

        fn free_heap_bytes(&self) -> u64 {
            148_960
        }
    }

    fn sample_report() -> DiagnosticsReport {
        DiagnosticsReport {
            frame: FrameSnapshot {
                total_frames: 3,
                show_frames: 2,
                good_frames: 3,
            },
            stack_watermark_rx: 512,
            stack_watermark_render: 480,
            free_heap_bytes: 148_960,
            power: PowerSummary {
                frames: 1,
                underpower_frames: 1,
                underpower_percent: Some(100.0),
                average_power_percent: Some(50.0),
                average_milliamps: Some(2000),
                average_underpower_percent: Some(100.0),
                average_requested_milliamps: Some(2500),
                requested_overdraw_percent: Some(125.0),
            },
        }
    }

    #[test]
    fn test_report_lines_contain_all_fields() {
        let lines = sample_report().lines();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Streamed frames: 2 (FPS), receiv.: 3, good: 3, incompl.: 0, \
             stack1: 512, stack2: 480, heap: 148960"
        );
        assert_eq!(
            lines[1],
            "Power limiter: 1 frames total (1 underpower ones, 100.00%)"
        );
        assert_eq!(
            lines[2],
            "2000 mA average (2500 mA avg requested, 125.00% of the delivered average)"
        );
        assert_eq!(lines[3], "50.00% average load (limited by 100.00%)");
    }

    #[test]
    fn test_missing_averages_render_as_na() {
        let mut report = sample_report();
        report.power = PowerSummary::default();
        let lines = report.lines();

        assert_eq!(
            lines[1],
            "Power limiter: 0 frames total (0 underpower ones, n/a)"
        );
        assert_eq!(
            lines[2],
            "n/a mA average (n/a mA avg requested, n/a of the delivered average)"
        );
        assert_eq!(lines[3], "n/a average load (limited by n/a)");
    }

    #[test]
    fn test_build_reports_zero_for_absent_handles() {
        let reporter = Reporter::new(Arc::new(VecSink::default()), Arc::new(StubProbe));
        let report = reporter.build(
            FrameSnapshot::default(),
            PowerSummary::default(),
            None,
            Some(TaskHandle::from_raw(480)),
        );

        assert_eq!(report.stack_watermark_rx, 0);
        assert_eq!(report.stack_watermark_render, 480);
        assert_eq!(report.free_heap_bytes, 148_960);
    }

    #[test]
    fn test_write_emits_every_line() {
        let sink = Arc::new(VecSink::default());
        let reporter = Reporter::new(sink.clone(), Arc::new(StubProbe));
        reporter.write(&sample_report()).unwrap();

        assert_eq!(sink.lines(), sample_report().lines());
    }

    #[test]
    fn test_write_appends_appendix_last() {
        #[derive(Debug)]
        struct CalibrationStub;

        impl ReportAppendix for CalibrationStub {
            fn write_appendix(&self, sink: &dyn DiagnosticsSink) -> TelemetryResult<()> {
                sink.write_line("calibration: r=255 g=230 b=210")
            }
        }

        let sink = Arc::new(VecSink::default());
        let reporter = Reporter::new(sink.clone(), Arc::new(StubProbe))
            .with_appendix(Arc::new(CalibrationStub));
        reporter.write(&sample_report()).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "calibration: r=255 g=230 b=210");
    }

    #[test]
    fn test_write_propagates_sink_errors() {
        let reporter = Reporter::new(Arc::new(FailingSink), Arc::new(StubProbe));
        let err = reporter.write(&sample_report()).unwrap_err();
        assert!(matches!(err, TelemetryError::SinkWrite(_)));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""free_heap_bytes":148960"#));
        assert!(json.contains(r#""total_frames":3"#));
    }
}
