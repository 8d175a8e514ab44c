//! To-do List Screen
//!
//! State machine behind the list page. Every user intent is a method that
//! updates the state synchronously and returns the Store call it wants
//! issued; the caller spawns it and reports back through
//! [`ToDoListScreen::complete`].

use std::collections::HashMap;

use crate::model::{ToDo, ToDoId, UserId};
use crate::projection::Projection;
use crate::store::{RequestId, StoreAction, StoreOutcome, StoreRequest, StoreResult, StoreSnapshot};

/// Shown instead of the list whenever the Store reports an error
pub const EMPTY_STATE_MESSAGE: &str = "Nothing new for now";

/// The screen's copy of the Store's list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    NotLoaded,
    Loaded(Vec<ToDo>),
    Failed(String),
}

impl ListState {
    /// An error wins over any items the snapshot still carries
    pub fn from_snapshot(snapshot: &StoreSnapshot) -> Self {
        match (&snapshot.error, &snapshot.todos) {
            (Some(reason), _) => ListState::Failed(reason.clone()),
            (None, Some(items)) => ListState::Loaded(items.clone()),
            (None, None) => ListState::NotLoaded,
        }
    }

    pub fn items(&self) -> Option<&[ToDo]> {
        match self {
            ListState::Loaded(items) => Some(items),
            _ => None,
        }
    }
}

/// Buffer of the add dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddDraft {
    pub title: String,
}

/// Buffer of the edit dialog, always seeded from the selected to-do
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub selection: ToDo,
    pub title: String,
    pub status: bool,
}

impl EditDraft {
    pub fn seed(selection: &ToDo) -> Self {
        Self {
            selection: selection.clone(),
            title: selection.title.clone(),
            status: selection.status,
        }
    }
}

/// At most one dialog is open at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Adding(AddDraft),
    Editing(EditDraft),
}

impl DialogState {
    pub fn is_adding(&self) -> bool {
        matches!(self, DialogState::Adding(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, DialogState::Editing(_))
    }

    /// Title buffer of whichever dialog is open
    pub fn draft_title(&self) -> Option<&str> {
        match self {
            DialogState::Closed => None,
            DialogState::Adding(draft) => Some(&draft.title),
            DialogState::Editing(draft) => Some(&draft.title),
        }
    }

    pub fn draft_status(&self) -> Option<bool> {
        match self {
            DialogState::Editing(draft) => Some(draft.status),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&ToDo> {
        match self {
            DialogState::Editing(draft) => Some(&draft.selection),
            _ => None,
        }
    }
}

/// What the list area renders
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Nothing,
    Rows(Vec<ToDo>),
    Message(&'static str),
}

#[derive(Debug, Clone)]
pub struct ToDoListScreen {
    user_id: UserId,
    list: ListState,
    dialog: DialogState,
    projection: Projection,
    /// Mutations spawned and not yet completed
    in_flight: HashMap<RequestId, StoreAction>,
    next_request: u64,
    mounted: bool,
}

impl ToDoListScreen {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            list: ListState::NotLoaded,
            dialog: DialogState::Closed,
            projection: Projection::default(),
            in_flight: HashMap::new(),
            next_request: 0,
            mounted: false,
        }
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    fn request(&mut self, action: StoreAction) -> StoreRequest {
        self.next_request += 1;
        let request = StoreRequest {
            id: RequestId(self.next_request),
            user_id: self.user_id.clone(),
            action,
        };
        if request.action.is_mutation() {
            self.in_flight.insert(request.id, request.action.clone());
        }
        log::debug!("Issuing {} #{}", request.action.name(), request.id.0);
        request
    }

    /// The single load issued when the screen mounts
    pub fn mount(&mut self) -> Option<StoreRequest> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.request(StoreAction::LoadAll))
    }

    /// Mirror the Store's latest observable state
    pub fn observe(&mut self, snapshot: &StoreSnapshot) {
        self.list = ListState::from_snapshot(snapshot);
        if let Some(items) = self.list.items() {
            self.projection.reconcile(items);
        }
    }

    pub fn list_view(&self) -> ListView {
        match &self.list {
            ListState::NotLoaded => ListView::Nothing,
            ListState::Failed(_) => ListView::Message(EMPTY_STATE_MESSAGE),
            ListState::Loaded(items) => ListView::Rows(self.projection.apply(items)),
        }
    }

    /// Open the add dialog with an empty title
    pub fn begin_create(&mut self) {
        self.dialog = DialogState::Adding(AddDraft::default());
    }

    /// Open the edit dialog for `todo`
    pub fn activate(&mut self, todo: &ToDo) {
        self.dialog = DialogState::Editing(EditDraft::seed(todo));
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        match &mut self.dialog {
            DialogState::Adding(draft) => draft.title = title.into(),
            DialogState::Editing(draft) => draft.title = title.into(),
            DialogState::Closed => {}
        }
    }

    pub fn set_draft_status(&mut self, status: bool) {
        if let DialogState::Editing(draft) = &mut self.dialog {
            draft.status = status;
        }
    }

    /// A create is still waiting for the Store
    pub fn is_adding_pending(&self) -> bool {
        self.in_flight
            .values()
            .any(|action| matches!(action, StoreAction::Add { .. }))
    }

    /// An edit or delete of `id` is still waiting for the Store
    pub fn is_pending(&self, id: &ToDoId) -> bool {
        self.in_flight.values().any(|action| action.target() == Some(id))
    }

    pub fn can_confirm_add(&self) -> bool {
        self.dialog.is_adding() && !self.is_adding_pending()
    }

    pub fn can_confirm_edit(&self) -> bool {
        match &self.dialog {
            DialogState::Editing(draft) => !self.is_pending(&draft.selection.id),
            _ => false,
        }
    }

    /// Create a to-do from the add draft; closes the dialog in the same step
    pub fn confirm_add(&mut self) -> Option<StoreRequest> {
        if !self.can_confirm_add() {
            return None;
        }
        let DialogState::Adding(draft) = std::mem::take(&mut self.dialog) else {
            return None;
        };
        Some(self.request(StoreAction::Add { title: draft.title }))
    }

    /// Save the edit draft; the list shows the new values until the Store
    /// catches up
    pub fn confirm_save(&mut self) -> Option<StoreRequest> {
        if !self.can_confirm_edit() {
            return None;
        }
        let DialogState::Editing(draft) = std::mem::take(&mut self.dialog) else {
            return None;
        };
        let id = draft.selection.id;
        let request = self.request(StoreAction::Edit {
            id: id.clone(),
            title: draft.title.clone(),
            status: draft.status,
        });
        self.projection.patch(id, request.id, draft.title, draft.status);
        Some(request)
    }

    /// Delete the selected to-do
    pub fn confirm_delete(&mut self) -> Option<StoreRequest> {
        if !self.can_confirm_edit() {
            return None;
        }
        let DialogState::Editing(draft) = std::mem::take(&mut self.dialog) else {
            return None;
        };
        Some(self.request(StoreAction::Delete { id: draft.selection.id }))
    }

    /// Close whichever dialog is open, discarding its draft
    pub fn dismiss(&mut self) {
        self.dialog = DialogState::Closed;
    }

    /// A spawned request finished. Mutation failures are only logged; the
    /// Store reports them through its own error signal.
    pub fn complete(&mut self, id: RequestId, result: &StoreResult<StoreOutcome>) {
        let Some(action) = self.in_flight.remove(&id) else {
            if let Err(e) = result {
                log::warn!("Loading to-dos failed: {}", e);
            }
            return;
        };

        if let Err(e) = result {
            log::warn!("{} #{} failed: {}", action.name(), id.0, e);
        }

        if let StoreAction::Edit { .. } = action {
            self.projection.settle(id, result.is_ok(), self.list.items());
        }
    }
}
