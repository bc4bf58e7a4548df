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

//! The process-wide [`SystemInfo`] snapshot.
//!
//! [`SystemInfo::current`] builds the snapshot once from the real
//! environment and serves the same instance to every caller. Tests and
//! embedders that need fabricated facts construct their own [`Props`]
//! and call [`SystemInfo::from_props`] instead.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::version::{macos, version_at_least};

mod desktop;
mod os;
mod release;

pub use os::OsFamily;

/// Raw identity facts a [`SystemInfo`] is derived from.
///
/// All fields are plain data so a fabricated bag can stand in for the
/// real environment in tests.
#[derive(Debug, Clone)]
pub struct Props {
    /// Canonical OS name the family is classified from, e.g. `"linux"`
    /// or `"Mac OS X"`.
    pub os_name: String,
    /// Reported OS version, e.g. `"10.12.6"`.
    pub os_version: String,
    /// Human-readable OS description, e.g. `"macOS 14.4 Sonoma"`.
    pub os_long_name: String,
    /// CPU architecture, e.g. `"x86_64"` or `"aarch64"`.
    pub os_arch: String,
    /// Pointer width of the process, `"32"` or `"64"`. Absent maps to
    /// 32-bit.
    pub arch_data_model: Option<String>,
    /// `java.version` equivalent of the active Java runtime.
    pub java_version: String,
    /// `java.runtime.version` equivalent; used for version gating.
    pub java_runtime_version: String,
    /// `java.vm.vendor` equivalent.
    pub java_vm_vendor: String,
    /// `java.vendor` equivalent.
    pub java_vendor: String,
    /// Value of `KDE_FULL_SESSION`, if set.
    pub kde_full_session: Option<String>,
    /// Whether the Aqua screen-menu-bar flag is on.
    pub use_screen_menu_bar: bool,
    /// Release-info file to parse on Unix systems.
    pub os_release_path: PathBuf,
    /// Directory probed for the optional xdg executables.
    pub unix_bin_dir: PathBuf,
}

impl Props {
    /// Collects the real facts for the running process.
    ///
    /// The family-bearing `os_name` comes from the compiled target
    /// (`std::env::consts::OS`) — the `sysinfo` name is a distribution
    /// name like `"Debian GNU/Linux"` on Linux and only suits display.
    /// OS version and long name come from `sysinfo`; the Java runtime
    /// facts come from the `JAVA_*` environment variables a launcher
    /// exports for the JVM it manages. Anything unavailable is left
    /// empty.
    pub fn from_env() -> Self {
        Props {
            os_name: std::env::consts::OS.to_string(),
            os_version: sysinfo::System::os_version().unwrap_or_default(),
            os_long_name: sysinfo::System::long_os_version()
                .or_else(sysinfo::System::name)
                .unwrap_or_default(),
            os_arch: std::env::consts::ARCH.to_string(),
            arch_data_model: Some(usize::BITS.to_string()),
            java_version: env_or_empty("JAVA_VERSION"),
            java_runtime_version: env_or_empty("JAVA_RUNTIME_VERSION"),
            java_vm_vendor: env_or_empty("JAVA_VM_VENDOR"),
            java_vendor: env_or_empty("JAVA_VENDOR"),
            kde_full_session: std::env::var("KDE_FULL_SESSION").ok(),
            use_screen_menu_bar: std::env::var("APPLE_LAF_USE_SCREEN_MENU_BAR")
                .is_ok_and(|value| value == "true"),
            os_release_path: PathBuf::from("/etc/os-release"),
            unix_bin_dir: PathBuf::from("/usr/bin"),
        }
    }
}

impl Default for Props {
    /// Empty identity strings with the standard probe locations; the
    /// usual starting point for fabricated snapshots.
    fn default() -> Self {
        Props {
            os_name: String::new(),
            os_version: String::new(),
            os_long_name: String::new(),
            os_arch: String::new(),
            arch_data_model: None,
            java_version: String::new(),
            java_runtime_version: String::new(),
            java_vm_vendor: String::new(),
            java_vendor: String::new(),
            kde_full_session: None,
            use_screen_menu_bar: false,
            os_release_path: PathBuf::from("/etc/os-release"),
            unix_bin_dir: PathBuf::from("/usr/bin"),
        }
    }
}

/// Immutable snapshot of host and runtime facts.
///
/// Derived flags are pure functions of the [`Props`] strings. The three
/// lazily probed facts (release info and the two xdg executables) are
/// memoized per instance and never recomputed, even if the probe failed.
#[derive(Debug)]
pub struct SystemInfo {
    props: Props,
    family: OsFamily,
    os_release: OnceLock<HashMap<String, String>>,
    xdg_open: OnceLock<bool>,
    xdg_mime: OnceLock<bool>,
}

impl SystemInfo {
    /// The shared snapshot for the running process.
    pub fn current() -> &'static SystemInfo {
        static CURRENT: OnceLock<SystemInfo> = OnceLock::new();
        CURRENT.get_or_init(|| SystemInfo::from_props(Props::from_env()))
    }

    pub fn from_props(props: Props) -> Self {
        let family = OsFamily::from_os_name(&props.os_name);
        SystemInfo {
            props,
            family,
            os_release: OnceLock::new(),
            xdg_open: OnceLock::new(),
            xdg_mime: OnceLock::new(),
        }
    }

    pub fn os_name(&self) -> &str {
        &self.props.os_name
    }

    pub fn os_version(&self) -> &str {
        &self.props.os_version
    }

    pub fn os_arch(&self) -> &str {
        &self.props.os_arch
    }

    pub fn java_version(&self) -> &str {
        &self.props.java_version
    }

    pub fn java_runtime_version(&self) -> &str {
        &self.props.java_runtime_version
    }

    pub fn java_vm_vendor(&self) -> &str {
        &self.props.java_vm_vendor
    }

    pub fn java_vendor(&self) -> &str {
        &self.props.java_vendor
    }

    pub fn os_family(&self) -> OsFamily {
        self.family
    }

    /// User-facing one-liner, e.g. `"macOS 14.4 Sonoma (aarch64)"`.
    pub fn description(&self) -> String {
        let name = if self.props.os_long_name.is_empty() {
            &self.props.os_name
        } else {
            &self.props.os_long_name
        };
        if self.props.os_arch.is_empty() {
            name.to_string()
        } else {
            format!("{name} ({})", self.props.os_arch)
        }
    }

    // OS family flags

    pub fn is_windows(&self) -> bool {
        self.family.is_windows()
    }

    pub fn is_mac(&self) -> bool {
        self.family.is_mac()
    }

    pub fn is_linux(&self) -> bool {
        self.family.is_linux()
    }

    pub fn is_freebsd(&self) -> bool {
        self.family.is_freebsd()
    }

    pub fn is_solaris(&self) -> bool {
        self.family.is_solaris()
    }

    pub fn is_unix(&self) -> bool {
        self.family.is_unix()
    }

    // Java runtime vendor flags

    pub fn is_oracle_jvm(&self) -> bool {
        contains_ignore_case(&self.props.java_vm_vendor, "Oracle")
    }

    pub fn is_sun_jvm(&self) -> bool {
        contains_ignore_case(&self.props.java_vm_vendor, "Sun")
            && contains_ignore_case(&self.props.java_vm_vendor, "Microsystems")
    }

    pub fn is_ibm_jvm(&self) -> bool {
        contains_ignore_case(&self.props.java_vm_vendor, "IBM")
    }

    pub fn is_apple_jvm(&self) -> bool {
        contains_ignore_case(&self.props.java_vm_vendor, "Apple")
    }

    pub fn is_jetbrains_jvm(&self) -> bool {
        contains_ignore_case(&self.props.java_vendor, "JetBrains")
    }

    // Word size

    /// An absent data model counts as 32-bit, matching the JVM default.
    pub fn is_32_bit(&self) -> bool {
        match &self.props.arch_data_model {
            None => true,
            Some(model) => model == "32",
        }
    }

    pub fn is_64_bit(&self) -> bool {
        !self.is_32_bit()
    }

    /// An Intel Mac, as opposed to Apple silicon.
    pub fn is_mac_intel_64(&self) -> bool {
        self.is_mac() && self.props.os_arch == "x86_64"
    }

    // Desktop environment

    pub fn is_x_window(&self) -> bool {
        self.is_unix() && !self.is_mac()
    }

    pub fn is_kde(&self) -> bool {
        self.props
            .kde_full_session
            .as_deref()
            .is_some_and(|session| !session.trim().is_empty())
    }

    pub fn is_mac_system_menu(&self) -> bool {
        self.is_mac() && self.props.use_screen_menu_bar
    }

    // Filesystem capabilities

    pub fn is_file_system_case_sensitive(&self) -> bool {
        self.is_unix() && !self.is_mac()
    }

    pub fn are_symlinks_supported(&self) -> bool {
        self.is_unix() || self.is_win_vista_or_newer()
    }

    // Version gates

    pub fn os_version_at_least(&self, version: &str) -> bool {
        version_at_least(&self.props.os_version, version)
    }

    pub fn java_version_at_least(&self, version: &str) -> bool {
        version_at_least(&self.props.java_runtime_version, version)
    }

    // Windows release ladder; version numbers from the Win32 docs.

    pub fn is_win2k_or_newer(&self) -> bool {
        self.is_windows() && self.os_version_at_least("5.0")
    }

    pub fn is_win_xp_or_newer(&self) -> bool {
        self.is_windows() && self.os_version_at_least("5.1")
    }

    pub fn is_win_vista_or_newer(&self) -> bool {
        self.is_windows() && self.os_version_at_least("6.0")
    }

    pub fn is_win7_or_newer(&self) -> bool {
        self.is_windows() && self.os_version_at_least("6.1")
    }

    pub fn is_win8_or_newer(&self) -> bool {
        self.is_windows() && self.os_version_at_least("6.2")
    }

    // macOS release ladder

    pub fn is_macos_tiger_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.4")
    }

    pub fn is_macos_leopard_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.5")
    }

    pub fn is_macos_snow_leopard_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.6")
    }

    pub fn is_macos_lion_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.7")
    }

    pub fn is_macos_mountain_lion_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.8")
    }

    pub fn is_macos_mavericks_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.9")
    }

    pub fn is_macos_yosemite_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.10")
    }

    pub fn is_macos_el_capitan_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.11")
    }

    pub fn is_macos_sierra_or_newer(&self) -> bool {
        self.is_mac() && self.os_version_at_least("10.12")
    }

    // macOS version codes for the host version

    pub fn macos_major_version(&self) -> String {
        macos::macos_major_version(&self.props.os_version)
    }

    pub fn macos_version_code(&self) -> String {
        macos::macos_version_code(&self.props.os_version)
    }

    pub fn macos_major_version_code(&self) -> String {
        macos::macos_major_version_code(&self.props.os_version)
    }

    pub fn macos_minor_version_code(&self) -> String {
        macos::macos_minor_version_code(&self.props.os_version)
    }
}

/// Serves the cached value, computing it at most once across concurrent
/// first callers.
pub(crate) fn memoize<T>(cell: &OnceLock<T>, probe: impl FnOnce() -> T) -> &T {
    cell.get_or_init(probe)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fabricated(os_name: &str, os_version: &str) -> SystemInfo {
        SystemInfo::from_props(Props {
            os_name: os_name.to_string(),
            os_version: os_version.to_string(),
            ..Props::default()
        })
    }

    #[test]
    fn test_family_flags() {
        let linux = fabricated("Linux", "6.1");
        assert!(linux.is_linux());
        assert!(linux.is_unix());
        assert!(!linux.is_windows());
        assert!(!linux.is_mac());

        let mac = fabricated("Mac OS X", "10.12.6");
        assert!(mac.is_mac());
        assert!(mac.is_unix());
        assert!(!mac.is_x_window());

        let windows = fabricated("Windows 10", "10.0");
        assert!(windows.is_windows());
        assert!(!windows.is_unix());
    }

    fn with_vm_vendor(vendor: &str) -> SystemInfo {
        SystemInfo::from_props(Props {
            java_vm_vendor: vendor.to_string(),
            ..Props::default()
        })
    }

    #[test]
    fn test_vendor_flags() {
        let oracle = with_vm_vendor("Oracle Corporation");
        assert!(oracle.is_oracle_jvm());
        assert!(!oracle.is_ibm_jvm());
        assert!(!oracle.is_sun_jvm());

        assert!(with_vm_vendor("Sun Microsystems Inc.").is_sun_jvm());
        assert!(!with_vm_vendor("Sun Corporation").is_sun_jvm());
        assert!(with_vm_vendor("ibm corporation").is_ibm_jvm());
        assert!(with_vm_vendor("Apple Inc.").is_apple_jvm());

        let jetbrains = SystemInfo::from_props(Props {
            java_vendor: "JetBrains s.r.o.".to_string(),
            ..Props::default()
        });
        assert!(jetbrains.is_jetbrains_jvm());
        assert!(!jetbrains.is_oracle_jvm());
    }

    #[test]
    fn test_word_size_is_exclusive() {
        for model in [None, Some("32"), Some("64"), Some("128"), Some("")] {
            let info = SystemInfo::from_props(Props {
                arch_data_model: model.map(str::to_string),
                ..Props::default()
            });
            assert_ne!(info.is_32_bit(), info.is_64_bit(), "model {model:?}");
        }

        let unset = SystemInfo::from_props(Props::default());
        assert!(unset.is_32_bit());

        let info = SystemInfo::from_props(Props {
            arch_data_model: Some("64".to_string()),
            ..Props::default()
        });
        assert!(info.is_64_bit());
    }

    #[test]
    fn test_mac_intel_64() {
        let intel_mac = SystemInfo::from_props(Props {
            os_name: "Mac OS X".to_string(),
            os_arch: "x86_64".to_string(),
            ..Props::default()
        });
        assert!(intel_mac.is_mac_intel_64());

        let arm_mac = SystemInfo::from_props(Props {
            os_name: "Mac OS X".to_string(),
            os_arch: "aarch64".to_string(),
            ..Props::default()
        });
        assert!(!arm_mac.is_mac_intel_64());

        let intel_linux = SystemInfo::from_props(Props {
            os_name: "Linux".to_string(),
            os_arch: "x86_64".to_string(),
            ..Props::default()
        });
        assert!(!intel_linux.is_mac_intel_64());
    }

    #[test]
    fn test_kde_flag() {
        let info = SystemInfo::from_props(Props {
            kde_full_session: Some("true".to_string()),
            ..Props::default()
        });
        assert!(info.is_kde());

        let info = SystemInfo::from_props(Props {
            kde_full_session: Some("   ".to_string()),
            ..Props::default()
        });
        assert!(!info.is_kde());

        assert!(!SystemInfo::from_props(Props::default()).is_kde());
    }

    #[test]
    fn test_mac_system_menu() {
        let info = SystemInfo::from_props(Props {
            os_name: "Mac OS X".to_string(),
            use_screen_menu_bar: true,
            ..Props::default()
        });
        assert!(info.is_mac_system_menu());

        let info = SystemInfo::from_props(Props {
            os_name: "Linux".to_string(),
            use_screen_menu_bar: true,
            ..Props::default()
        });
        assert!(!info.is_mac_system_menu());
    }

    #[test]
    fn test_filesystem_flags() {
        assert!(fabricated("Linux", "6.1").is_file_system_case_sensitive());
        assert!(!fabricated("Mac OS X", "10.12").is_file_system_case_sensitive());
        assert!(!fabricated("Windows 10", "10.0").is_file_system_case_sensitive());

        assert!(fabricated("Linux", "6.1").are_symlinks_supported());
        assert!(fabricated("Windows 7", "6.1").are_symlinks_supported());
        assert!(!fabricated("Windows XP", "5.1").are_symlinks_supported());
    }

    #[test]
    fn test_windows_ladder_is_monotonic() {
        let win7 = fabricated("Windows 7", "6.1");
        assert!(win7.is_win2k_or_newer());
        assert!(win7.is_win_xp_or_newer());
        assert!(win7.is_win_vista_or_newer());
        assert!(win7.is_win7_or_newer());
        assert!(!win7.is_win8_or_newer());

        // ladder never fires off-platform
        let linux = fabricated("Linux", "6.1");
        assert!(!linux.is_win7_or_newer());
    }

    #[test]
    fn test_macos_ladder_is_monotonic() {
        let yosemite = fabricated("Mac OS X", "10.10");
        assert!(yosemite.is_macos_tiger_or_newer());
        assert!(yosemite.is_macos_leopard_or_newer());
        assert!(yosemite.is_macos_snow_leopard_or_newer());
        assert!(yosemite.is_macos_lion_or_newer());
        assert!(yosemite.is_macos_mountain_lion_or_newer());
        assert!(yosemite.is_macos_mavericks_or_newer());
        assert!(yosemite.is_macos_yosemite_or_newer());
        assert!(!yosemite.is_macos_el_capitan_or_newer());
        assert!(!yosemite.is_macos_sierra_or_newer());
    }

    #[test]
    fn test_version_gates() {
        let info = fabricated("Linux", "6.1");
        assert!(info.os_version_at_least("5.0"));
        assert!(!fabricated("Linux", "4.0").os_version_at_least("5.0"));

        let info = SystemInfo::from_props(Props {
            java_runtime_version: "17.0.9+9".to_string(),
            ..Props::default()
        });
        assert!(info.java_version_at_least("17"));
        assert!(info.java_version_at_least("11.0.2"));
        assert!(!info.java_version_at_least("21"));
    }

    #[test]
    fn test_description() {
        let info = SystemInfo::from_props(Props {
            os_name: "Linux".to_string(),
            os_long_name: "Ubuntu 24.04 LTS".to_string(),
            os_arch: "x86_64".to_string(),
            ..Props::default()
        });
        assert_eq!(info.description(), "Ubuntu 24.04 LTS (x86_64)");

        let bare = SystemInfo::from_props(Props {
            os_name: "Linux".to_string(),
            ..Props::default()
        });
        assert_eq!(bare.description(), "Linux");
    }

    #[test]
    fn test_memoize_computes_at_most_once() {
        let cell = OnceLock::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    let value = memoize(&cell, || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        true
                    });
                    assert!(*value);
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_current_is_shared() {
        let first = SystemInfo::current() as *const SystemInfo;
        let second = SystemInfo::current() as *const SystemInfo;
        assert_eq!(first, second);
    }
}
