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

//! sysinfo-based implementation of the RuntimeProbe trait.

use std::fmt;
use std::sync::Mutex;

use lumistream_core::{RuntimeProbe, TaskHandle};
use sysinfo::System;

/// A runtime probe that uses the `sysinfo` crate.
///
/// Backs the diagnostic report on hosted builds (simulators, the test
/// bench). The free-heap figure is the system's available memory.
pub struct SysinfoProbe {
    system: Mutex<System>,
}

impl SysinfoProbe {
    /// Creates a new probe with freshly polled system data.
    pub fn new() -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        Self {
            system: Mutex::new(system),
        }
    }

    /// Re-polls the memory figures.
    pub fn refresh(&self) {
        if let Ok(mut system) = self.system.lock() {
            system.refresh_memory();
        }
    }
}

impl RuntimeProbe for SysinfoProbe {
    fn stack_high_water_mark(&self, _task: TaskHandle) -> u32 {
        // Hosted platforms expose no per-task stack watermark; only the
        // device's RTOS probe can report real values.
        0
    }

    fn free_heap_bytes(&self) -> u64 {
        if let Ok(system) = self.system.lock() {
            system.available_memory()
        } else {
            0
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SysinfoProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SysinfoProbe").finish_non_exhaustive()
    }
}
