// Copyright 2025 dentsusoken
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

//! Static and semi-static facts about the host operating system and the
//! active Java runtime: OS family and version, CPU architecture, JVM
//! vendor/version strings, desktop-environment flags, and helper
//! comparisons for version gating.
//!
//! Everything is computed once per process. The only I/O is a lazily
//! memoized read of `/etc/os-release` and two memoized probes for the
//! `xdg-open`/`xdg-mime` executables; every probe failure degrades to an
//! empty or false answer instead of an error.

pub mod error;
pub mod system;
pub mod version;
