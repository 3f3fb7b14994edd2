// src/services/animator.rs

//! Loading animation service.
//!
//! While the statistics aggregation is pending, a background task
//! produces a fresh randomized placeholder snapshot on a fixed period.
//! The task holds the only timer; stopping the animator (or dropping
//! it) releases the timer immediately and no further frames are
//! emitted.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::AnimatedSnapshot;

/// Handle to the placeholder animation task.
pub struct LoadingAnimator {
    handle: Option<JoinHandle<()>>,
    stop: watch::Sender<bool>,
    frames: watch::Receiver<AnimatedSnapshot>,
}

impl LoadingAnimator {
    /// Spawn the animation task with the given tick period.
    ///
    /// The first frame is emitted immediately, then one per period.
    pub fn spawn(period: Duration) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let (frame_tx, frame_rx) =
            watch::channel(AnimatedSnapshot::random(&mut rand::thread_rng()));

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let frame = AnimatedSnapshot::random(&mut rand::thread_rng());
                        if frame_tx.send(frame).is_err() {
                            // All receivers are gone; nothing left to animate.
                            break;
                        }
                    }
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            handle: Some(handle),
            stop: stop_tx,
            frames: frame_rx,
        }
    }

    /// Subscribe to placeholder frames.
    pub fn frames(&self) -> watch::Receiver<AnimatedSnapshot> {
        self.frames.clone()
    }

    /// Stop the animation and wait for the timer task to finish.
    pub async fn stop(mut self) {
        let _ = self.stop.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for LoadingAnimator {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::time::timeout;

    use crate::models::AnimatedSnapshot;

    #[tokio::test]
    async fn emits_bounded_frames_within_the_period() {
        let animator = LoadingAnimator::spawn(Duration::from_millis(10));
        let mut frames = animator.frames();

        for _ in 0..5 {
            timeout(Duration::from_millis(500), frames.changed())
                .await
                .expect("frame within deadline")
                .expect("animator alive");
            let frame = *frames.borrow_and_update();
            assert!(AnimatedSnapshot::ARTICLES.contains(&frame.articles));
            assert!(AnimatedSnapshot::BOOKS.contains(&frame.books));
            assert!(AnimatedSnapshot::JOURNALS.contains(&frame.journals));
        }

        animator.stop().await;
    }

    #[tokio::test]
    async fn stop_releases_the_timer_and_ends_the_stream() {
        let animator = LoadingAnimator::spawn(Duration::from_millis(10));
        let mut frames = animator.frames();

        timeout(Duration::from_secs(1), animator.stop())
            .await
            .expect("stop should not hang");

        // Drain any frame sent before the stop landed; after that the
        // sender is gone and the stream ends instead of ticking on.
        let drained = timeout(Duration::from_millis(200), async {
            while frames.changed().await.is_ok() {}
        })
        .await;
        assert!(drained.is_ok(), "no further frames after stop");
    }

    #[tokio::test]
    async fn dropping_the_handle_aborts_the_task() {
        let animator = LoadingAnimator::spawn(Duration::from_millis(10));
        let mut frames = animator.frames();
        drop(animator);

        let drained = timeout(Duration::from_millis(200), async {
            while frames.changed().await.is_ok() {}
        })
        .await;
        assert!(drained.is_ok(), "no further frames after drop");
    }
}
