//! Hand external links to the system browser

use anyhow::Context;
use std::process::Command;
use std::thread;
use url::Url;

/// Platform command that opens `url` in the default browser
#[cfg(target_os = "windows")]
pub fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    // `start` takes a window title before the target.
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(target_os = "macos")]
pub fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Only http(s) links with a host are handed to the OS opener.
pub fn validate_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Malformed URL: {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Not an http(s) URL: {raw:?}");
    }
    if url.host_str().is_none_or(str::is_empty) {
        anyhow::bail!("URL has no host: {raw:?}");
    }
    Ok(url)
}

/// Open `url` in a new browser window without blocking the frame loop.
pub fn open_url(url: &str) -> anyhow::Result<()> {
    let url = validate_url(url)?;
    let mut child = browser_command(url.as_str())
        .spawn()
        .with_context(|| format!("Failed to launch browser for {url}"))?;
    // Reap the opener once it exits.
    thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_health_url() {
        assert!(validate_url("http://localhost:8000/health").is_ok());
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(validate_url("file:///etc/passwd").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("http://").is_err());
        assert!(validate_url("http://local host/").is_err());
    }

    #[test]
    fn test_rejects_missing_or_broken_host() {
        assert!(validate_url("http://:8000/health").is_err());
        assert!(validate_url("http://[::1/health").is_err());
    }

    #[test]
    fn test_normalizes_valid_url() {
        let url = validate_url("  http://localhost:8000/health ").unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8000));
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn test_browser_command_passes_url_last() {
        let cmd = browser_command("http://localhost:8000/health");
        let last = cmd.get_args().last().and_then(|a| a.to_str());
        assert_eq!(last, Some("http://localhost:8000/health"));
    }
}
