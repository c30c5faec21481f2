//! Generate static pages

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::generator::Generator;
use crate::Portal;

/// Generate the page in every language
pub async fn run(portal: &Portal) -> Result<()> {
    let start = std::time::Instant::now();

    let written = Generator::new(portal).generate().await?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        written.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch the content document, host page and assets; regenerate on change
pub async fn watch(portal: &Portal) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<()>(16);

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| match res {
            Ok(events) if !events.is_empty() => {
                let _ = tx.blocking_send(());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Watch error: {:?}", e),
        },
    )?;

    debouncer
        .watcher()
        .watch(&portal.content_path, RecursiveMode::NonRecursive)?;
    debouncer
        .watcher()
        .watch(&portal.template_path, RecursiveMode::NonRecursive)?;
    if portal.assets_dir.exists() {
        debouncer
            .watcher()
            .watch(&portal.assets_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", portal.assets_dir);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    while rx.recv().await.is_some() {
        tracing::info!("File changed, regenerating...");
        if let Err(e) = run(portal).await {
            tracing::error!("Generation failed: {}", e);
        }
    }

    Ok(())
}
