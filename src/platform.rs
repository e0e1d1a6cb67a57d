use std::sync::OnceLock;

// Substrings of a navigator-style platform string that identify Apple devices.
const APPLE_MARKERS: [&str; 4] = ["mac", "iphone", "ipad", "ipod"];

static HOST_IS_APPLE: OnceLock<bool> = OnceLock::new();

/// Answers whether the "primary modifier" is Command (Apple) or Control.
///
/// Consulted by the matcher every time a [`KeyCombo::CmdEnter`] combo is
/// tested, so implementations should be cheap.
///
/// [`KeyCombo::CmdEnter`]: crate::combo::KeyCombo::CmdEnter
pub trait PlatformDetector {
    fn is_apple(&self) -> bool;
}

/// Detection against the platform this process runs on.
///
/// The answer is computed once and memoized for the whole process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPlatform;

impl PlatformDetector for HostPlatform {
    fn is_apple(&self) -> bool {
        is_apple_platform()
    }
}

/// A fixed platform answer.
///
/// Useful for hosts that already know which platform they target, and for
/// tests that must not depend on the machine running them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Apple,
    Other,
}

impl PlatformDetector for Platform {
    fn is_apple(&self) -> bool {
        matches!(self, Platform::Apple)
    }
}

/// A platform identification string supplied by the host, e.g. the value
/// of `navigator.platform` read through a wasm binding.
impl PlatformDetector for &str {
    fn is_apple(&self) -> bool {
        is_apple_platform_name(self)
    }
}

/// Whether a platform identification string names an Apple desktop or
/// mobile device.
///
/// Case-insensitive substring match against `Mac`, `iPhone`, `iPad` and
/// `iPod`.
pub fn is_apple_platform_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    APPLE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// The navigator-style platform string of the compile target, if known.
pub fn host_platform_name() -> Option<&'static str> {
    match std::env::consts::OS {
        "macos" => Some("MacIntel"),
        "ios" => Some("iPhone"),
        "windows" => Some("Win32"),
        "linux" | "android" => Some(match std::env::consts::ARCH {
            "x86_64" => "Linux x86_64",
            "aarch64" => "Linux aarch64",
            "arm" => "Linux armv7l",
            "x86" => "Linux i686",
            _ => "Linux",
        }),
        "freebsd" => Some("FreeBSD"),
        "openbsd" => Some("OpenBSD"),
        _ => None,
    }
}

/// Whether the host platform is Apple's.
///
/// Returns `false` when the host exposes no platform identification. The
/// result is memoized process-wide.
pub fn is_apple_platform() -> bool {
    *HOST_IS_APPLE.get_or_init(|| {
        let apple = host_platform_name().is_some_and(is_apple_platform_name);
        tracing::trace!(apple, platform = ?host_platform_name(), "detected host platform");
        apple
    })
}
