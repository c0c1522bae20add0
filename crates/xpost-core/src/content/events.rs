use tokio::sync::mpsc;

use super::page::Page;

/// Identity of one content-view instance. A new id is issued every time a post
/// is selected, reselected or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

/// Events emitted by the content view
#[derive(Debug, Clone)]
pub enum ContentEvent {
    LoadStarted,
    /// Load progress in percent (values above 100 are clamped by the consumer)
    ProgressChanged(u8),
    LoadFinished(Page),
    LoadError(String),
    /// Vertical scroll position in dp
    ScrollChanged(f32),
}

/// Sending half handed to the loader of one session
#[derive(Debug, Clone)]
pub struct ContentEventSink {
    session: SessionId,
    tx: mpsc::UnboundedSender<(SessionId, ContentEvent)>,
}

impl ContentEventSink {
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Emit an event. Returns false once the subscriber has gone away.
    pub fn emit(&self, event: ContentEvent) -> bool {
        self.tx.send((self.session, event)).is_ok()
    }

    /// Whether the subscription for this session has been dropped
    pub fn is_detached(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half owned by the viewer. Dropping it unsubscribes: later sends
/// from an abandoned loader fail silently.
#[derive(Debug)]
pub struct ContentSubscription {
    session: SessionId,
    rx: mpsc::UnboundedReceiver<(SessionId, ContentEvent)>,
}

impl ContentSubscription {
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Drain every pending event without blocking
    pub fn drain(&mut self) -> Vec<(SessionId, ContentEvent)> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Open an event channel for one content session
pub fn subscribe(session: SessionId) -> (ContentEventSink, ContentSubscription) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ContentEventSink { session, tx },
        ContentSubscription { session, rx },
    )
}
