use sst_client::{Notice, Notifier, Severity};

use crate::progress;

/// Prints backend notices to stderr, above any running spinner.
///
/// A terminal has no toast that dismisses itself, so `dismiss_after` is
/// only logged.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    color: bool,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(
            status = ?notice.status,
            dismiss_after_ms = u64::try_from(notice.dismiss_after.as_millis()).unwrap_or(u64::MAX),
            "notice raised"
        );
        let line = render_notice(&notice, self.color);
        progress::suspend(|| eprintln!("{line}"));
    }
}

fn render_notice(notice: &Notice, color: bool) -> String {
    let (tag, code) = match notice.severity {
        Severity::Error => ("erro", "31"),
        Severity::Warning => ("aviso", "33"),
        Severity::Info => ("info", "36"),
    };
    let tag = if color {
        format!("\u{1b}[{code}m{tag}\u{1b}[0m")
    } else {
        tag.to_string()
    };
    match notice.status {
        Some(status) => format!("{tag} [{status}]: {}", notice.message),
        None => format!("{tag}: {}", notice.message),
    }
}
