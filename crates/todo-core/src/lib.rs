//! To-do List Core
//!
//! Platform-independent half of the to-do list page:
//! - model: records owned by the Store
//! - store: the Store contract and the requests the screen issues
//! - screen: list/dialog state machine
//! - projection: optimistic edits awaiting the Store
//! - tasks: cancellation scope for spawned Store calls
//! - format: item row display data

mod format;
mod memory;
mod model;
mod projection;
mod screen;
mod store;
mod tasks;


pub use format::{format_timestamp, status_color, ItemRow, COMPLETE_COLOR, INCOMPLETE_COLOR, TIMESTAMP_FORMAT};
pub use memory::MemoryStore;
pub use model::{ToDo, ToDoId, UserId};
pub use projection::Projection;
pub use screen::{AddDraft, DialogState, EditDraft, ListState, ListView, ToDoListScreen, EMPTY_STATE_MESSAGE};
pub use store::{
    RequestId, StoreAction, StoreError, StoreOutcome, StoreRequest, StoreResult, StoreSnapshot, ToDoStore,
};
pub use tasks::TaskScope;
