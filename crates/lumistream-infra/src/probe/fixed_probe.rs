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

//! A deterministic runtime probe.

use std::collections::HashMap;

use lumistream_core::{RuntimeProbe, TaskHandle};

/// A probe with preset answers.
///
/// Used wherever reproducible runtime figures are needed: unit and
/// integration tests, and simulator runs that replay recorded device
/// sessions.
#[derive(Debug, Clone, Default)]
pub struct FixedProbe {
    free_heap_bytes: u64,
    watermarks: HashMap<TaskHandle, u32>,
}

impl FixedProbe {
    /// Creates a probe reporting the given free-heap size and no task
    /// watermarks.
    pub fn new(free_heap_bytes: u64) -> Self {
        Self {
            free_heap_bytes,
            watermarks: HashMap::new(),
        }
    }

    /// Presets the watermark reported for `task`, in words.
    pub fn with_watermark(mut self, task: TaskHandle, words: u32) -> Self {
        self.watermarks.insert(task, words);
        self
    }
}

impl RuntimeProbe for FixedProbe {
    fn stack_high_water_mark(&self, task: TaskHandle) -> u32 {
        self.watermarks.get(&task).copied().unwrap_or(0)
    }

    fn free_heap_bytes(&self) -> u64 {
        self.free_heap_bytes
    }
}
