//! Store Contract
//!
//! The view-model/data layer the screen delegates to. Implementations may
//! talk to a Tauri host, a server, or keep everything in memory.

use async_trait::async_trait;
use crate::model::{ToDo, ToDoId, UserId};

/// Common result type for Store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The call never reached the backing store
    Transport(String),
    /// The backing store refused the operation
    Rejected(String),
    /// The response could not be decoded
    Decode(String),
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Transport(msg) => write!(f, "Transport error: {}", msg),
            StoreError::Rejected(msg) => write!(f, "Rejected: {}", msg),
            StoreError::Decode(msg) => write!(f, "Decode error: {}", msg),
            StoreError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Asynchronous to-do operations, all scoped to a user.
///
/// Futures are not required to be `Send`: on WASM they run on the single
/// UI thread.
#[async_trait(?Send)]
pub trait ToDoStore {
    /// Fetch every to-do of the user, in the store's order
    async fn get_all_todo(&self, user_id: &UserId) -> StoreResult<Vec<ToDo>>;

    /// Create a to-do with the given title
    async fn add_todo(&self, title: &str, user_id: &UserId) -> StoreResult<()>;

    /// Replace title and status of an existing to-do
    async fn edit_todo(&self, id: &ToDoId, title: &str, status: bool, user_id: &UserId) -> StoreResult<()>;

    /// Remove a to-do
    async fn delete_todo(&self, id: &ToDoId, user_id: &UserId) -> StoreResult<()>;
}

/// The Store's observable pair, as last seen by the screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    /// `None` until the first successful load
    pub todos: Option<Vec<ToDo>>,
    pub error: Option<String>,
}

/// Monotonic id of a request issued by one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// What a request asks the Store to do
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    LoadAll,
    Add { title: String },
    Edit { id: ToDoId, title: String, status: bool },
    Delete { id: ToDoId },
}

impl StoreAction {
    /// Mutating actions are fire-and-forget from the UI's point of view
    pub fn is_mutation(&self) -> bool {
        !matches!(self, StoreAction::LoadAll)
    }

    /// The to-do this action targets, if any
    pub fn target(&self) -> Option<&ToDoId> {
        match self {
            StoreAction::Edit { id, .. } | StoreAction::Delete { id } => Some(id),
            StoreAction::LoadAll | StoreAction::Add { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::LoadAll => "get_all_todo",
            StoreAction::Add { .. } => "add_todo",
            StoreAction::Edit { .. } => "edit_todo",
            StoreAction::Delete { .. } => "delete_todo",
        }
    }
}

/// A Store call emitted by the screen, ready to be spawned
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRequest {
    pub id: RequestId,
    pub user_id: UserId,
    pub action: StoreAction,
}

/// Result of running a request; loads carry the fetched list
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome {
    Loaded(Vec<ToDo>),
    Done,
}

impl StoreRequest {
    /// Run the request against a store
    pub async fn execute<S>(&self, store: &S) -> StoreResult<StoreOutcome>
    where
        S: ToDoStore + ?Sized,
    {
        let user = &self.user_id;
        match &self.action {
            StoreAction::LoadAll => store.get_all_todo(user).await.map(StoreOutcome::Loaded),
            StoreAction::Add { title } => store.add_todo(title, user).await.map(|_| StoreOutcome::Done),
            StoreAction::Edit { id, title, status } => store
                .edit_todo(id, title, *status, user)
                .await
                .map(|_| StoreOutcome::Done),
            StoreAction::Delete { id } => store.delete_todo(id, user).await.map(|_| StoreOutcome::Done),
        }
    }
}
