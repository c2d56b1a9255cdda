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

//! The caller-owned composition root for device statistics.

use lumistream_core::{PowerSample, TaskHandle, TelemetryResult};

use crate::frame::FrameCounters;
use crate::power::PowerAccumulator;
use crate::report::Reporter;

/// Default measurement period length, in milliseconds. At one second
/// per period the show-frame count of a snapshot reads directly as FPS.
pub const DEFAULT_REPORT_INTERVAL_MS: u64 = 1000;

/// Aggregates frame-delivery and power-limiting statistics for the
/// device's main loop.
///
/// One instance is created at startup and owned by the main loop; the
/// pipeline reports events through the `increase_*` and `record_power`
/// forwarders, and the periodic path drives `tick`/`update` and, while
/// no host communication is active, `print`.
///
/// The service is deliberately not internally synchronized: all
/// mutation goes through `&mut self`, so single-writer access is
/// guaranteed by construction rather than by a lock. Move it between
/// contexts if you must, but do not try to share it.
#[derive(Debug)]
pub struct TelemetryService {
    frames: FrameCounters,
    power: PowerAccumulator,
    reporter: Reporter,
    report_interval_ms: u64,
}

impl TelemetryService {
    /// Creates a service whose first period starts at `now`, reporting
    /// through the given reporter at the default one-second cadence.
    pub fn new(now: u64, reporter: Reporter) -> Self {
        Self::with_interval(now, reporter, DEFAULT_REPORT_INTERVAL_MS)
    }

    /// Creates a service with a custom period length in milliseconds.
    pub fn with_interval(now: u64, reporter: Reporter, report_interval_ms: u64) -> Self {
        Self {
            frames: FrameCounters::new(now),
            power: PowerAccumulator::new(),
            reporter,
            report_interval_ms,
        }
    }

    /// A new frame was detected on the wire.
    pub fn increase_total(&mut self) {
        self.frames.increase_total();
    }

    /// A frame was received and shown on the LED output.
    pub fn increase_show(&mut self) {
        self.frames.increase_show();
    }

    /// A frame was received correctly.
    pub fn increase_good(&mut self) {
        self.frames.increase_good();
    }

    /// One frame's power-limiter output.
    pub fn record_power(&mut self, sample: PowerSample) {
        self.power.record(sample);
    }

    /// Correctly received frames in the live period.
    pub fn good_frames(&self) -> u16 {
        self.frames.good_frames()
    }

    /// Start time of the live period.
    pub fn start_time(&self) -> u64 {
        self.frames.start_time()
    }

    /// Read access to the frame counters.
    pub fn frames(&self) -> &FrameCounters {
        &self.frames
    }

    /// Read access to the power accumulator.
    pub fn power(&self) -> &PowerAccumulator {
        &self.power
    }

    /// Rolls the measurement period over (see [`FrameCounters::update`]).
    pub fn update(&mut self, now: u64) {
        self.frames.update(now);
    }

    /// Rolls the period over once `report_interval_ms` has elapsed since
    /// the period started. Returns true when a rollover happened.
    ///
    /// Call this from the periodic path; it is cheap enough to run every
    /// loop iteration.
    pub fn tick(&mut self, now: u64) -> bool {
        if now.saturating_sub(self.frames.start_time()) >= self.report_interval_ms {
            log::trace!("Frame period rolled over at {now} ms");
            self.update(now);
            true
        } else {
            false
        }
    }

    /// Abandons the live period after a stream discontinuity (see
    /// [`FrameCounters::light_reset`]).
    pub fn light_reset(&mut self, now: u64, has_data: bool) {
        self.frames.light_reset(now, has_data);
    }

    /// Full reset of both counter sets: live frame counters, finalized
    /// snapshot, and the lifetime power sums.
    pub fn reset(&mut self, now: u64) {
        self.frames.reset(now);
        self.power.reset();
    }

    /// Emits the diagnostic report and opens a fresh live period.
    ///
    /// The report describes the last finalized snapshot plus the entire
    /// power history to date. Emitting it also restarts the live frame
    /// counters at `now`, so the next period is measured from the
    /// moment of the report; the snapshot and the power accumulator are
    /// left untouched. Absent task handles report a watermark of 0.
    pub fn print(
        &mut self,
        now: u64,
        task_rx: Option<TaskHandle>,
        task_render: Option<TaskHandle>,
    ) -> TelemetryResult<()> {
        let report = self.reporter.build(
            self.frames.snapshot(),
            self.power.summary(),
            task_rx,
            task_render,
        );
        self.reporter.write(&report)?;
        self.frames.start_next_period(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumistream_core::{DiagnosticsSink, FrameSnapshot, RuntimeProbe};
    use std::sync::{Arc, Mutex};

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
    struct StubProbe;

    impl RuntimeProbe for StubProbe {
        fn stack_high_water_mark(&self, _task: TaskHandle) -> u32 {
            256
        }

        fn free_heap_bytes(&self) -> u64 {
            65_536
        }
    }

    fn service_with_sink() -> (TelemetryService, Arc<VecSink>) {
        let sink = Arc::new(VecSink::default());
        let reporter = Reporter::new(sink.clone(), Arc::new(StubProbe));
        (TelemetryService::new(0, reporter), sink)
    }

    #[test]
    fn test_tick_rolls_over_after_interval() {
        let (mut service, _sink) = service_with_sink();
        service.increase_total();
        service.increase_good();

        assert!(!service.tick(999));
        assert!(service.tick(1000));
        assert_eq!(service.start_time(), 1000);
        assert_eq!(service.frames().snapshot().total_frames, 1);

        // Freshly restarted period does not tick again immediately.
        assert!(!service.tick(1500));
    }

    #[test]
    fn test_print_describes_snapshot_and_restarts_period() {
        let (mut service, sink) = service_with_sink();
        for _ in 0..3 {
            service.increase_total();
            service.increase_good();
        }
        service.increase_show();
        service.increase_show();
        service.update(1000);

        // Events of the next, not-yet-finalized period.
        service.increase_total();

        service.print(1500, None, None).unwrap();

        let lines = sink.lines();
        assert_eq!(
            lines[0],
            "Streamed frames: 2 (FPS), receiv.: 3, good: 3, incompl.: 0, \
             stack1: 0, stack2: 0, heap: 65536"
        );

        // The live period restarted, the snapshot survived.
        assert_eq!(service.start_time(), 1500);
        assert_eq!(service.good_frames(), 0);
        assert_eq!(service.frames().snapshot().total_frames, 3);
    }

    #[test]
    fn test_print_reports_present_handles() {
        let (mut service, sink) = service_with_sink();
        service
            .print(0, Some(TaskHandle::from_raw(1)), Some(TaskHandle::from_raw(2)))
            .unwrap();

        assert!(sink.lines()[0].contains("stack1: 256, stack2: 256"));
    }

    #[test]
    fn test_print_keeps_power_history() {
        let (mut service, _sink) = service_with_sink();
        service.record_power(PowerSample {
            power_ratio: 0.5,
            underpower_ratio: 1.0,
            milliamps: 2000,
            requested_milliamps: 2500,
        });

        service.print(1000, None, None).unwrap();

        assert_eq!(service.power().frames(), 1);
        assert_eq!(service.power().underpower_frames(), 1);
    }

    #[test]
    fn test_reset_clears_both_counter_sets() {
        let (mut service, _sink) = service_with_sink();
        service.increase_total();
        service.update(1000);
        service.record_power(PowerSample {
            power_ratio: 0.5,
            underpower_ratio: 0.0,
            milliamps: 1000,
            requested_milliamps: 1000,
        });

        service.reset(2000);

        assert_eq!(service.start_time(), 2000);
        assert_eq!(service.frames().snapshot(), FrameSnapshot::default());
        assert_eq!(service.power().frames(), 0);
    }
}
