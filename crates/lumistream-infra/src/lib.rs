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

//! Concrete implementations of the diagnostics capabilities.
//!
//! `lumistream-core` defines the sink and probe contracts; this crate
//! provides the hosted implementations: a sink backed by the `log`
//! facade, an in-memory capture sink, and a `sysinfo`-backed runtime
//! probe plus a deterministic one for tests and simulations.

pub mod probe;
pub mod sink;

pub use self::probe::{FixedProbe, SysinfoProbe};
pub use self::sink::{LogSink, MemorySink};

/// Initializes the process-wide logger from the `RUST_LOG` environment.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}
