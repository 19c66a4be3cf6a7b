//! UI Components
//!
//! Reusable Leptos components.

mod item_slot;
mod new_todo_form;
mod todo_item;

pub use item_slot::ItemSlot;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
