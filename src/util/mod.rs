//! Small helpers for building and opening web links.

/// What: Join a web front-end base URL and an application route path.
///
/// Inputs:
/// - `base`: Scheme and authority, optionally with a trailing slash.
/// - `path`: Route path starting with `/`.
///
/// Output:
/// - `None` for a blank base, otherwise the concatenated URL.
#[must_use]
pub fn join_url(base: &str, path: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return None;
    }
    Some(format!("{base}/{}", path.trim_start_matches('/')))
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems, uses `xdg-open` (Linux) with `open` (macOS) as fallback.
/// - Spawn failures are logged and otherwise ignored.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let spawned = std::process::Command::new("cmd")
                .args(["/c", "start", "", &url])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();
            #[cfg(not(target_os = "windows"))]
            let spawned = std::process::Command::new("xdg-open")
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .or_else(|_| {
                    std::process::Command::new("open")
                        .arg(&url)
                        .stdin(std::process::Stdio::null())
                        .stdout(std::process::Stdio::null())
                        .stderr(std::process::Stdio::null())
                        .spawn()
                });
            if let Err(e) = spawned {
                tracing::warn!(url = %url, error = %e, "failed to open browser");
            }
        });
    }
}
