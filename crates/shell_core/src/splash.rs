//! Splash startup sequencing: one worker thread, one single-fire signal.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, TryRecvError};

/// How long the splash stays up before handing off to the main window.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_secs(6);

/// Owns the background delay worker and its completion channel.
///
/// The worker's sole job is a blocking sleep followed by one send on a
/// capacity-1 channel. [`SplashSequencer::poll`] surfaces that signal to the
/// UI thread exactly once per run, and [`SplashSequencer::finish`] joins the
/// worker and drops the channel on the single exit path.
pub struct SplashSequencer {
    done_rx: Receiver<()>,
    worker: Option<JoinHandle<()>>,
    observed: bool,
}

impl SplashSequencer {
    pub fn start(delay: Duration) -> Self {
        let (done_tx, done_rx) = bounded::<()>(1);
        let worker = thread::Builder::new()
            .name("splash-delay".into())
            .spawn(move || {
                thread::sleep(delay);
                // The receiver may already be gone on early shutdown.
                let _ = done_tx.send(());
                tracing::debug!("splash delay elapsed, completion signaled");
            });
        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn splash delay worker");
                None
            }
        };
        Self {
            done_rx,
            worker,
            observed: false,
        }
    }

    /// True exactly once: on the first poll after the worker has signaled.
    ///
    /// Every later poll returns `false` regardless of what the worker does,
    /// which also absorbs a hypothetical double emission. A worker that dies
    /// without signaling (spawn failure, panic) counts as completion so the
    /// splash cannot hold the application hostage.
    pub fn poll(&mut self) -> bool {
        if self.observed {
            return false;
        }
        match self.done_rx.try_recv() {
            Ok(()) => {
                self.observed = true;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("splash worker disconnected before signaling; completing handoff");
                self.observed = true;
                true
            }
        }
    }

    /// Join the worker and release the channel. Call after [`poll`] has
    /// returned `true`; the worker has already sent its signal by then, so
    /// the join returns promptly.
    ///
    /// [`poll`]: SplashSequencer::poll
    pub fn finish(mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("splash delay worker panicked");
            } else {
                tracing::debug!("splash delay worker joined");
            }
        }
    }
}
