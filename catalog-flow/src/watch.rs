use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::error::Result;
use crate::{build, BuildOptions};

const SETTLE: Duration = Duration::from_millis(150);

fn is_relevant(event: &Event, options: &BuildOptions) -> bool {
    let kind_matches = matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_));
    kind_matches && event.paths.iter().any(|p| !is_output(p, options))
}

fn is_output(path: &Path, options: &BuildOptions) -> bool {
    path == options.out_file || options.public_dir.as_deref().is_some_and(|public| path.starts_with(public))
}

fn rebuild(options: &BuildOptions) {
    match build(options) {
        Ok(report) => tracing::info!(
            records = report.records,
            drafts = report.drafts,
            banners = report.banners,
            outcome = ?report.outcome,
            "rebuild finished"
        ),
        // keep watching; the next save usually fixes it
        Err(e) => tracing::error!("rebuild failed: {}", e),
    }
}

/// Builds once, then rebuilds on every content change until the watcher
/// channel closes. Bursts of events are folded into one rebuild.
pub fn watch(options: &BuildOptions) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(&options.content_dir, RecursiveMode::Recursive)?;
    tracing::info!(dir = %options.content_dir.display(), "watching for changes");

    rebuild(options);
    while let Ok(first) = rx.recv() {
        let mut dirty = false;
        let mut pending = Some(first);
        while let Some(res) = pending.take() {
            match res {
                Ok(event) if is_relevant(&event, options) => {
                    tracing::debug!(kind = ?event.kind, paths = ?event.paths, "content changed");
                    dirty = true;
                }
                Ok(event) => tracing::trace!(kind = ?event.kind, "ignoring event"),
                Err(e) => tracing::warn!("watcher error: {}", e),
            }
            pending = rx.recv_timeout(SETTLE).ok();
        }
        if dirty {
            rebuild(options);
        }
    }
    Ok(())
}
