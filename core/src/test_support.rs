//! Log capture for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts events at one level.
#[derive(Clone)]
pub(crate) struct LevelCounter {
    level: Level,
    count: Arc<AtomicUsize>,
}

impl LevelCounter {
    /// Install a counter for `level` as the thread's default subscriber until
    /// the guard drops. `#[tokio::test]` runs on one thread, so events from
    /// awaited futures are seen.
    pub(crate) fn install(level: Level) -> (Self, tracing::subscriber::DefaultGuard) {
        let counter = Self {
            level,
            count: Arc::new(AtomicUsize::new(0)),
        };
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (counter, guard)
    }

    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == self.level {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
