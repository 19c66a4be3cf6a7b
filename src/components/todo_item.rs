//! Todo Item Component
//!
//! A single todo row: drag handle, checkbox, editable text, delete
//! button. Emits intents through the context dispatch; never mutates
//! shared state. Text is rendered as a text node, so user-entered
//! markup is escaped by the framework.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, KeyboardEvent};

use crate::context::AppContext;
use crate::list::Intent;
use crate::models::TodoRecord;

/// A single todo row inside its slot
#[component]
pub fn TodoItem(record: TodoRecord, #[prop(into)] dragging: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = record.id.clone();
    let original_text = record.text.clone();
    let completed = record.completed;

    // Display -> Editing on double-click; back to Display on
    // blur/Enter (commit) or Escape (discard draft).
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let edit_input: NodeRef<html::Input> = NodeRef::new();

    // Focus and select the edit field once it is mounted.
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
                input.select();
            }
        }
    });

    let start_editing = {
        let original = original_text.clone();
        move |_: web_sys::MouseEvent| {
            set_draft.set(original.clone());
            set_editing.set(true);
        }
    };

    let commit_edit = {
        let id = id.clone();
        let original = original_text.clone();
        move || {
            // Escape may already have left edit mode before blur fires.
            if !editing.get_untracked() {
                return;
            }
            set_editing.set(false);
            let new_text = draft.get_untracked().trim().to_string();
            if !new_text.is_empty() && new_text != original {
                ctx.dispatch(Intent::Edit { id: id.clone(), text: new_text });
            }
        }
    };

    let on_drag_start = {
        let id = id.clone();
        move |ev: DragEvent| {
            if let Some(dt) = ev.data_transfer() {
                dt.set_effect_allowed("move");
                let _ = dt.set_data("text/plain", &id);
            }
            ctx.dispatch(Intent::DragStart { id: id.clone() });
        }
    };

    let on_drag_end = move |_: DragEvent| ctx.dispatch(Intent::DragEnd);

    let on_toggle = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            let checked = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(!completed);
            ctx.dispatch(Intent::Toggle { id: id.clone(), completed: checked });
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.dispatch(Intent::Delete { id: id.clone() })
    };

    let text_view = move || {
        if editing.get() {
            let commit_blur = commit_edit.clone();
            let commit_key = commit_edit.clone();
            view! {
                <input
                    type="text"
                    class="todo-input-edit"
                    node_ref=edit_input
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_draft.set(input.value());
                    }
                    on:blur=move |_| commit_blur()
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Enter" => commit_key(),
                        "Escape" => set_editing.set(false),
                        _ => {}
                    }
                />
            }
            .into_any()
        } else {
            let start = start_editing.clone();
            let text = original_text.clone();
            view! {
                <span
                    class=if completed { "todo-text completed" } else { "todo-text" }
                    on:dblclick=start
                >
                    {text}
                </span>
            }
            .into_any()
        }
    };

    view! {
        <div
            class=move || {
                if dragging.get() { "todo-item-container dragging" } else { "todo-item-container" }
            }
            data-id=record.id.clone()
            data-text=record.text.clone()
            data-completed=completed.to_string()
        >
            <span
                class="drag-handle"
                draggable="true"
                on:dragstart=on_drag_start
                on:dragend=on_drag_end
            >
                "⋮⋮"
            </span>
            <input type="checkbox" class="todo-checkbox" checked=completed on:change=on_toggle />
            {text_view}
            <button class="delete-btn" on:click=on_delete>"Delete"</button>
        </div>
    }
}
