use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::download::Downloader;
use crate::error::DownloadError;
use crate::models::{DownloadRequest, ItemProgress, ProgressEvent, ProgressScope};

/// Stop flag shared between the UI thread and one batch run.
///
/// Once cancelled it stays cancelled; every run gets a fresh token.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Lifecycle of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Finished,
    Cancelled,
    Failed,
}

/// Runs the URLs of a request one after another through a [`Downloader`].
pub struct BatchController<D> {
    downloader: D,
    state: BatchState,
}

impl<D: Downloader> BatchController<D> {
    pub fn new(downloader: D) -> Self {
        Self {
            downloader,
            state: BatchState::Idle,
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Blocks until the batch reaches a terminal state. Must be called from a
    /// worker thread. Exactly one terminal event is sent to `sink`, and it is
    /// always the last one.
    pub fn run<F>(
        &mut self,
        request: &DownloadRequest,
        token: &CancellationToken,
        mut sink: F,
    ) -> BatchState
    where
        F: FnMut(ProgressEvent),
    {
        self.state = BatchState::Running;
        let total = request.urls().len();

        for (position, url) in request.urls().iter().enumerate() {
            let index = position + 1;

            if token.is_cancelled() {
                log::info!("Stop requested before item {}/{}", index, total);
                return self.finish(BatchState::Cancelled, ProgressEvent::Cancelled, &mut sink);
            }

            log::info!("Downloading item {}/{}: {}", index, total, url);
            let result = self
                .downloader
                .download_one(url, request.options(), token, &mut |tick: ItemProgress| {
                    if !tick.percent.is_finite() {
                        return;
                    }
                    let (item_index, item_count, scope) = match tick.playlist_position {
                        Some((i, n)) if n > 0 => (i, n, ProgressScope::Playlist),
                        _ => (index, total, ProgressScope::Batch),
                    };
                    sink(ProgressEvent::Downloading {
                        percent: tick.percent.clamp(0.0, 100.0),
                        item_index,
                        item_count,
                        scope,
                    });
                });

            match result {
                Ok(()) => sink(ProgressEvent::ItemFinished),
                Err(DownloadError::Cancelled) => {
                    log::info!("Item {}/{} stopped mid-transfer", index, total);
                    return self.finish(BatchState::Cancelled, ProgressEvent::Cancelled, &mut sink);
                }
                Err(DownloadError::Item(message)) => {
                    log::error!("Item {}/{} failed: {}", index, total, message);
                    return self.finish(
                        BatchState::Failed,
                        ProgressEvent::Failed(message),
                        &mut sink,
                    );
                }
            }
        }

        if token.is_cancelled() {
            log::info!("Stop requested after the last item");
            return self.finish(BatchState::Cancelled, ProgressEvent::Cancelled, &mut sink);
        }

        log::info!("All {} item(s) downloaded", total);
        self.finish(BatchState::Finished, ProgressEvent::BatchFinished, &mut sink)
    }

    fn finish<F>(&mut self, state: BatchState, event: ProgressEvent, sink: &mut F) -> BatchState
    where
        F: FnMut(ProgressEvent),
    {
        self.state = state;
        sink(event);
        state
    }
}

/// Asks a running batch to stop at its next check. Safe to call repeatedly or
/// after the batch has ended.
pub fn request_stop(token: &CancellationToken) {
    token.cancel();
}
