//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::DragSession;
use crate::models::TodoRecord;

/// Authoritative application state. The rendered slot sequence is a
/// pure projection of `todos`; state is never read back from the DOM.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered collection; index = slot index = persisted order.
    pub todos: Vec<TodoRecord>,
    /// Live drag gesture, if any.
    pub drag: Option<DragSession>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Replace the whole collection (startup load).
pub fn store_replace_todos(store: &AppStore, todos: Vec<TodoRecord>) {
    store.todos().set(todos);
}

/// Id of the record currently being dragged, if a session is live.
pub fn store_dragged_id(store: &AppStore) -> Option<String> {
    store.drag().with(|d| d.as_ref().map(|s| s.dragged_id.clone()))
}
