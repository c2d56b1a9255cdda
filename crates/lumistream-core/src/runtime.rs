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

//! Runtime introspection capability.
//!
//! The periodic report includes two task stack high-water marks and the
//! free heap size. Those values come from the scheduler/runtime, never
//! from this crate; the reporter queries them through a [`RuntimeProbe`]
//! so that formatting stays independent of the RTOS and testable with a
//! deterministic probe.

use std::fmt::Debug;

/// An opaque handle identifying a scheduler task to the runtime probe.
///
/// On the device this wraps the RTOS task handle; hosted probes are free
/// to interpret the raw value however they like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Creates a handle from a raw task identifier.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw task identifier.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The runtime introspection capability consumed by the reporter.
pub trait RuntimeProbe: Send + Sync + Debug {
    /// Returns the stack high-water mark for the given task, in words.
    ///
    /// A probe that cannot observe the task returns 0; absent handles
    /// are the caller's concern and also report as 0.
    fn stack_high_water_mark(&self, task: TaskHandle) -> u32;

    /// Returns the number of free heap bytes.
    fn free_heap_bytes(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_handle_round_trip() {
        let handle = TaskHandle::from_raw(0x2000_1c40);
        assert_eq!(handle.raw(), 0x2000_1c40);
        assert_eq!(handle, TaskHandle::from_raw(0x2000_1c40));
    }
}
