pub mod errors;
pub mod events;
pub mod id;
pub mod payloads;

pub use errors::{ConfigError, LayoutError, OpdeckError, PersistError};
pub use events::{Event, EventBus, Subscription};
pub use id::{SessionId, TabId};
pub use payloads::{AgentInfo, ClaudeFile, SessionInfo};

pub type Result<T> = std::result::Result<T, OpdeckError>;
