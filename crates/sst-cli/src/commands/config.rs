use sst_config::SstConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

const REDACTED: &str = "********";

/// Handle `sst config`: print the merged configuration with secrets masked.
pub fn handle(config: &SstConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&redacted(config), flags.format)
}

fn redacted(config: &SstConfig) -> SstConfig {
    let mut shown = config.clone();
    if shown.api.has_token() {
        shown.api.bearer_token = REDACTED.to_string();
    }
    shown
}
