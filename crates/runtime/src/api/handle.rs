//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the pet or streaming events from specific topics.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, warn};

use pet_content::ShopCatalog;
use pet_core::{CareAction, Message, Operation, PetFields, PetState, Sender};

use super::errors::{Result, RuntimeError};
use super::providers::ResponseProvider;
use crate::chat;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    catalog: Arc<ShopCatalog>,
    responder: Arc<dyn ResponseProvider>,
    chat_delay: Duration,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        catalog: Arc<ShopCatalog>,
        responder: Arc<dyn ResponseProvider>,
        chat_delay: Duration,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            catalog,
            responder,
            chat_delay,
        }
    }

    /// Sends a command built around a fresh reply channel and awaits the reply.
    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Execute a single engine operation.
    pub async fn execute(&self, operation: Operation) -> Result<PetFields> {
        self.request(|reply| Command::Execute { operation, reply })
            .await?
    }

    /// Press a care button (feed, play, clean or rest).
    ///
    /// Applies the stat change, awards experience, checks for a level up and
    /// emits a `CareCompleted` notification. Requires an active pet.
    pub async fn perform(&self, action: CareAction) -> Result<PetFields> {
        self.request(|reply| Command::Care { action, reply }).await?
    }

    /// Buy a shop item by id.
    ///
    /// Fails with `UnknownItem` for ids not in the catalog and with
    /// `InsufficientFunds` (state untouched) when the pet cannot pay.
    pub async fn purchase(&self, item_id: impl Into<String>) -> Result<PetFields> {
        let item_id = item_id.into();
        self.request(|reply| Command::Purchase { item_id, reply })
            .await?
    }

    /// Post a chat message and schedule the pet's reply.
    ///
    /// Returns the user's message once it is in the log. The reply is
    /// appended after the configured delay and announced on [`Topic::State`].
    pub async fn send_chat(&self, text: impl Into<String>) -> Result<Message> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(RuntimeError::EmptyMessage);
        }

        let message = chat::compose(Sender::User, text);
        let posted = message.clone();
        self.request(|reply| Command::UserMessage { message, reply })
            .await??;

        let handle = self.clone();
        let said = posted.text.clone();
        tokio::spawn(async move {
            if let Err(error) = handle.reply_later(&said).await {
                warn!(target: "runtime::chat", %error, "Pet reply dropped");
            }
        });

        Ok(posted)
    }

    async fn reply_later(&self, said: &str) -> Result<()> {
        tokio::time::sleep(self.chat_delay).await;

        let state = self.query_state().await?;
        if !state.is_active() {
            debug!(target: "runtime::chat", "Pet no longer active, skipping reply");
            return Ok(());
        }

        let text = self.responder.respond(&state.pet, said).await;
        let message = chat::compose(Sender::Pet, text);
        self.command_tx
            .send(Command::PetReply { message })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current pet record (read-only snapshot)
    pub async fn query_state(&self) -> Result<PetState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// The last `limit` chat messages, oldest first.
    pub async fn recent_messages(&self, limit: usize) -> Result<Vec<Message>> {
        self.request(|reply| Command::RecentMessages { limit, reply })
            .await
    }

    /// Items for sale.
    pub fn catalog(&self) -> &ShopCatalog {
        &self.catalog
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Notification` - Level ups, low-stat warnings, purchase results
    /// - `Topic::State` - Record changes and new chat messages
    /// - `Topic::Clock` - Applied decay and day ticks
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pet_runtime::Topic;
    ///
    /// let mut rx = handle.subscribe(Topic::Notification);
    /// while let Ok(event) = rx.recv().await {
    ///     // Show a toast
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
