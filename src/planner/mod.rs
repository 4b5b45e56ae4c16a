// src/planner/mod.rs
//
// The planning conversation. It forwards canned prompts to a text generator
// and never touches the catalog.

pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use self::gemini::GeminiClient;
pub use self::prompts::{PromptTemplate, GREETING, PERSONA};

pub const NO_RESPONSE: &str = "No response generated.";
pub const GENERATION_FAILED: &str = "Failed to generate plan. Please check your API Key.";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service responded with {status}: {message}")]
    Service { status: u16, message: String },
}

/// The external text-generation service. `Ok(None)` means the service
/// answered without any text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}

/// Never fails: service errors become [`GENERATION_FAILED`].
pub async fn generate_planning_doc(generator: &dyn TextGenerator, prompt: &str) -> String {
    match generator.generate(prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => NO_RESPONSE.to_string(),
        Err(err) => {
            error!("Text generation failed: {}", err);
            GENERATION_FAILED.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerMessage {
    pub role: Role,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("A planning request is already in progress")]
    Busy,

    #[error("Planner state is unavailable")]
    Poisoned,

    #[error("Planning task failed")]
    TaskFailed,
}

#[derive(Debug)]
struct Conversation {
    messages: Vec<PlannerMessage>,
    pending: bool,
}

/// Settles a pending request: appends the reply (or the failure message when
/// none was recorded) and re-enables requests. Runs even if the generation
/// task panics.
struct Settle {
    conversation: Arc<Mutex<Conversation>>,
    reply: Option<String>,
}

impl Drop for Settle {
    fn drop(&mut self) {
        let content = self.reply.take().unwrap_or_else(|| GENERATION_FAILED.to_string());
        if let Ok(mut conversation) = self.conversation.lock() {
            conversation.messages.push(PlannerMessage {
                role: Role::Model,
                content,
                kind: MessageKind::Markdown,
            });
            conversation.pending = false;
        }
    }
}

pub struct Planner {
    generator: Arc<dyn TextGenerator>,
    conversation: Arc<Mutex<Conversation>>,
}

impl Planner {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Planner {
            generator,
            conversation: Arc::new(Mutex::new(Conversation {
                messages: vec![PlannerMessage {
                    role: Role::Model,
                    content: GREETING.to_string(),
                    kind: MessageKind::Text,
                }],
                pending: false,
            })),
        }
    }

    pub fn messages(&self) -> Result<Vec<PlannerMessage>, PlannerError> {
        let conversation = self.conversation.lock().map_err(|_| PlannerError::Poisoned)?;
        Ok(conversation.messages.clone())
    }

    pub fn is_pending(&self) -> Result<bool, PlannerError> {
        let conversation = self.conversation.lock().map_err(|_| PlannerError::Poisoned)?;
        Ok(conversation.pending)
    }

    /// Appends the template's prompt and, once the generator settles, its
    /// reply. Only one request runs at a time.
    ///
    /// Generation runs in its own task, so the reply still lands in the
    /// conversation and requests are re-enabled when the caller stops
    /// waiting, e.g. because the client disconnected.
    pub async fn request(&self, template: PromptTemplate) -> Result<PlannerMessage, PlannerError> {
        let prompt = template.prompt();
        {
            let mut conversation = self.conversation.lock().map_err(|_| PlannerError::Poisoned)?;
            if conversation.pending {
                return Err(PlannerError::Busy);
            }
            conversation.pending = true;
            conversation.messages.push(PlannerMessage {
                role: Role::User,
                content: prompt.to_string(),
                kind: MessageKind::Text,
            });
        }

        info!("Planner request: {}", template);
        let generator = Arc::clone(&self.generator);
        let mut settle = Settle {
            conversation: Arc::clone(&self.conversation),
            reply: None,
        };
        let task = tokio::spawn(async move {
            let content = generate_planning_doc(generator.as_ref(), prompt).await;
            settle.reply = Some(content.clone());
            drop(settle);
            content
        });

        let content = task.await.map_err(|err| {
            error!("Planning task failed: {}", err);
            PlannerError::TaskFailed
        })?;

        Ok(PlannerMessage {
            role: Role::Model,
            content,
            kind: MessageKind::Markdown,
        })
    }
}
