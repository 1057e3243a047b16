use anyhow::Result;

use scrapbook::Config;
use tracing::{info, warn};

pub async fn execute(config: Config, hash: &str, full: bool) -> Result<()> {
    let mut shell = super::start_shell(config).await?;
    shell.navigate(hash);
    shell.settle().await;

    if shell.location().hash() != scrapbook::shell::normalize_hash(hash) {
        warn!(requested = hash, shown = %shell.location().hash(), "Route redirected");
    }
    info!(hash = %shell.location().hash(), full, "Rendered page");

    if full {
        println!("{}", shell.page_html());
    } else {
        println!("{}", shell.content_html());
    }

    Ok(())
}
