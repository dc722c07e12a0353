//! Helpers shared by the windowed integration tests.

/// Whether this machine should be able to open a window.
///
/// On Linux and the BSDs that means an X11 or Wayland display is advertised
/// in the environment. Other platforms always have a window server.
pub fn display_expected() -> bool {
    if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )) {
        ["DISPLAY", "WAYLAND_DISPLAY", "WAYLAND_SOCKET"]
            .iter()
            .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
    } else {
        true
    }
}
