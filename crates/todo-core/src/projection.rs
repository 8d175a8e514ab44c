//! Optimistic Projection
//!
//! Local patches shown over the Store's list while an edit is in flight.
//! A patch lives until the Store's snapshot accounts for it.

use std::collections::HashMap;

use crate::model::{ToDo, ToDoId};
use crate::store::RequestId;

#[derive(Debug, Clone, PartialEq)]
struct Patch {
    request: RequestId,
    title: String,
    status: bool,
    /// The edit call returned successfully; the next snapshot is authoritative
    settled: bool,
}

impl Patch {
    fn matches(&self, todo: &ToDo) -> bool {
        todo.title == self.title && todo.status == self.status
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    patches: HashMap<ToDoId, Patch>,
}

impl Projection {
    /// Record an optimistic edit; a later edit of the same to-do replaces it
    pub fn patch(&mut self, id: ToDoId, request: RequestId, title: String, status: bool) {
        self.patches.insert(
            id,
            Patch {
                request,
                title,
                status,
                settled: false,
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn is_patched(&self, id: &ToDoId) -> bool {
        self.patches.contains_key(id)
    }

    /// Overlay pending patches on the Store's items, keeping their order
    pub fn apply(&self, items: &[ToDo]) -> Vec<ToDo> {
        items
            .iter()
            .map(|todo| match self.patches.get(&todo.id) {
                Some(patch) => ToDo {
                    title: patch.title.clone(),
                    status: patch.status,
                    ..todo.clone()
                },
                None => todo.clone(),
            })
            .collect()
    }

    /// Drop every patch the snapshot has caught up with
    pub fn reconcile(&mut self, items: &[ToDo]) {
        self.patches.retain(|id, patch| {
            if patch.settled {
                return false;
            }
            match items.iter().find(|todo| &todo.id == id) {
                Some(todo) => !patch.matches(todo),
                None => false,
            }
        });
    }

    /// The edit behind `request` finished. A failed edit is discarded at
    /// once. After a successful one the loaded items are authoritative;
    /// with nothing loaded yet the patch waits for the next snapshot.
    pub fn settle(&mut self, request: RequestId, succeeded: bool, current: Option<&[ToDo]>) {
        let Some(id) = self
            .patches
            .iter()
            .find(|(_, patch)| patch.request == request)
            .map(|(id, _)| id.clone())
        else {
            return;
        };

        if !succeeded || current.is_some() {
            self.patches.remove(&id);
        } else if let Some(patch) = self.patches.get_mut(&id) {
            patch.settled = true;
        }
    }
}
