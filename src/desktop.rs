//! Clipboard and browser access through the platform's command line tools.

use std::future::Future;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::AppError;

/// How long to wait for a tool before leaving it running in the background
const TOOL_TIMEOUT: Duration = Duration::from_secs(2);

/// Card actions that leave the terminal
pub trait Desktop {
    fn copy_text(&self, text: &str) -> impl Future<Output = Result<(), AppError>>;
    fn open_url(&self, url: &str) -> impl Future<Output = Result<(), AppError>>;
}

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[&[&str]] = &[&["pbcopy"]];
#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[&[&str]] = &[&["clip"]];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_TOOLS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

#[cfg(target_os = "macos")]
const BROWSER_OPENERS: &[&[&str]] = &[&["open"]];
#[cfg(target_os = "windows")]
const BROWSER_OPENERS: &[&[&str]] = &[&["cmd", "/C", "start", ""]];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const BROWSER_OPENERS: &[&[&str]] = &[&["xdg-open"], &["gio", "open"]];

/// Uses the first tool of each list that is installed
pub struct SystemDesktop {
    clipboard_tools: &'static [&'static [&'static str]],
    browser_openers: &'static [&'static [&'static str]],
    timeout: Duration,
}

impl Default for SystemDesktop {
    fn default() -> Self {
        Self {
            clipboard_tools: CLIPBOARD_TOOLS,
            browser_openers: BROWSER_OPENERS,
            timeout: TOOL_TIMEOUT,
        }
    }
}

fn describe(tools: &[&[&str]]) -> String {
    tools.iter().map(|tool| tool.join(" ")).collect::<Vec<_>>().join(", ")
}

/// Run `tool` with `input` on stdin. `Ok(None)` when the program is not installed.
///
/// A tool still running after `timeout` counts as a success and is left alone.
async fn run_tool(
    tool: &[&str],
    extra_arg: Option<&str>,
    input: Option<&str>,
    timeout: Duration,
) -> Result<Option<()>, AppError> {
    let Some((program, args)) = tool.split_first() else {
        return Ok(None);
    };
    let mut command = Command::new(program);
    command.args(args).args(extra_arg);
    command
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::Io(e)),
    };
    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        stdin.write_all(text.as_bytes()).await?;
    }
    let status = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            tracing::debug!(tool = tool.join(" "), ?timeout, "Tool still running, not waiting");
            return Ok(Some(()));
        }
    };
    if !status.success() {
        return Err(AppError::CommandFailed(tool.join(" "), status.to_string()));
    }
    Ok(Some(()))
}

impl Desktop for SystemDesktop {
    async fn copy_text(&self, text: &str) -> Result<(), AppError> {
        for tool in self.clipboard_tools {
            if run_tool(tool, None, Some(text), self.timeout).await?.is_some() {
                tracing::debug!(tool = tool.join(" "), "Copied to clipboard");
                return Ok(());
            }
        }
        Err(AppError::NoClipboardTool(describe(self.clipboard_tools)))
    }

    async fn open_url(&self, url: &str) -> Result<(), AppError> {
        for opener in self.browser_openers {
            if run_tool(opener, Some(url), None, self.timeout).await?.is_some() {
                tracing::debug!(opener = opener.join(" "), url, "Opened in browser");
                return Ok(());
            }
        }
        Err(AppError::NoBrowserOpener(describe(self.browser_openers)))
    }
}
