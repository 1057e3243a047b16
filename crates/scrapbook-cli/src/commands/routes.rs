use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;

use scrapbook::{Config, JournalData, MemoryStore, Shell};

pub fn execute(config: Config) -> Result<()> {
    let shell = Shell::new(
        Arc::new(JournalData::default()),
        Arc::new(config),
        Arc::new(MemoryStore::new()),
    )?;

    println!("{}", "Registered routes:".green().bold());
    for pattern in shell.routes() {
        println!("  #{}", highlight(pattern));
    }

    Ok(())
}

/// Colors `:name` segments so parameters stand out
fn highlight(pattern: &str) -> String {
    if pattern == "/" {
        return "/".to_string();
    }
    pattern
        .split('/')
        .map(|segment| {
            if segment.starts_with(':') {
                segment.yellow().to_string()
            } else {
                segment.cyan().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
