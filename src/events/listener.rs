//! Event listeners and their registry

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::{BotContext, Dispatcher};
use crate::platform::MessageEvent;

/// Events emitted by the platform listener
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// A message arrived in a thread
    Message(MessageEvent),
    /// The listener connected and is receiving events
    ListenerStarted,
    /// The listener disconnected
    ListenerStopped,
}

/// Trait for event handlers
///
/// One required method; concrete handlers are registered in an
/// [`EventRegistry`] and invoked in registration order.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Handle one platform event
    async fn on_event(&self, event: &PlatformEvent, ctx: &BotContext) -> Result<()>;
}

/// Registry that holds all event listeners
#[derive(Default)]
pub struct EventRegistry {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl EventRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn register<L: EventListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Arc::new(listener));
    }

    /// Get the number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch an event to every listener in registration order
    ///
    /// A failing listener is logged and does not stop the others.
    pub async fn dispatch(&self, event: &PlatformEvent, ctx: &BotContext) {
        for listener in &self.listeners {
            if let Err(e) = listener.on_event(event, ctx).await {
                tracing::warn!("Event listener failed: {:#}", e);
            }
        }
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Built-in listener that routes messages into the command dispatcher
pub struct CommandListener {
    dispatcher: Dispatcher,
}

impl CommandListener {
    /// Create a command listener with the given dispatcher
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventListener for CommandListener {
    async fn on_event(&self, event: &PlatformEvent, ctx: &BotContext) -> Result<()> {
        if let PlatformEvent::Message(message) = event {
            self.dispatcher.dispatch(message, ctx).await?;
        }
        Ok(())
    }
}
