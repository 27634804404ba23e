//! folio-core: portfolio content core.
//!
//! Four pieces: a key-value content store (sled-backed, with an in-memory
//! fake), a CRUD repository over the project and experience collections, a
//! session gate for the admin surface, and a stateless chat bridge to an
//! OpenAI-compatible generative-text service.

mod chat;
mod config;
mod content;
mod defaults;
mod error;
mod session;
mod store;

pub use chat::{
    ChatBridge, ChatRole, ChatTurn, CHAT_EMPTY_MSG, CHAT_FALLBACK_MSG, CHAT_NOT_CONFIGURED_MSG,
};
pub use config::FolioConfig;
pub use content::{ContentRecord, ContentRepository, Experience, Project};
pub use defaults::{default_experiences, default_projects};
pub use error::{ContentError, StoreError};
pub use session::SessionGuard;
pub use store::{
    ContentStore, MemoryStore, SledStore, EXPERIENCES_KEY, PROJECTS_KEY, SESSION_FLAG_KEY,
};
