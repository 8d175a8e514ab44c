//! To-do Commands
//!
//! `ToDoStore` over Tauri IPC. Argument names are camelCase, as Tauri
//! expects.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use todo_core::{StoreError, StoreResult, ToDo, ToDoId, ToDoStore, UserId};

use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserArgs<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddArgs<'a> {
    title: &'a str,
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditArgs<'a> {
    id: &'a str,
    title: &'a str,
    status: bool,
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteArgs<'a> {
    id: &'a str,
    user_id: &'a str,
}

// ========================
// Commands
// ========================

async fn call<A, R>(cmd: &str, args: &A) -> StoreResult<R>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| StoreError::Decode(e.to_string()))?;
    let result = invoke(cmd, js_args).await.map_err(|e| rejection(cmd, e))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Tauri rejects with the command's `Err(String)`; anything else means
/// the call did not get through
fn rejection(cmd: &str, err: JsValue) -> StoreError {
    match err.as_string() {
        Some(msg) => StoreError::Rejected(msg),
        None => StoreError::Transport(format!("{} failed: {:?}", cmd, err)),
    }
}

/// Store backed by the Tauri host
#[derive(Debug, Default, Clone, Copy)]
pub struct TauriStore;

#[async_trait(?Send)]
impl ToDoStore for TauriStore {
    async fn get_all_todo(&self, user_id: &UserId) -> StoreResult<Vec<ToDo>> {
        call("get_all_todo", &UserArgs { user_id: user_id.as_str() }).await
    }

    async fn add_todo(&self, title: &str, user_id: &UserId) -> StoreResult<()> {
        call("add_todo", &AddArgs { title, user_id: user_id.as_str() }).await
    }

    async fn edit_todo(&self, id: &ToDoId, title: &str, status: bool, user_id: &UserId) -> StoreResult<()> {
        let args = EditArgs {
            id: id.as_str(),
            title,
            status,
            user_id: user_id.as_str(),
        };
        call("edit_todo", &args).await
    }

    async fn delete_todo(&self, id: &ToDoId, user_id: &UserId) -> StoreResult<()> {
        call("delete_todo", &DeleteArgs { id: id.as_str(), user_id: user_id.as_str() }).await
    }
}
