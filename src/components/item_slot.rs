//! Item Slot Component
//!
//! A positional single-item container and drop target. Emits a hover
//! intent while a drag crosses it; the highlight affordance is driven
//! entirely by the controller's drag session.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::AppContext;
use crate::list::Intent;

/// One slot in the visual sequence, holding exactly one `TodoItem`
#[component]
pub fn ItemSlot(
    /// Current index of this slot's occupant in the collection
    index: Memo<usize>,
    /// Whether the controller wants this slot highlighted
    highlighted: Memo<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default(); // required to allow drop
        ctx.dispatch(Intent::Hover { slot_index: index.get_untracked() });
    };

    view! {
        <div
            class=move || {
                if highlighted.get() { "todo-item-slot highlight" } else { "todo-item-slot" }
            }
            on:dragover=on_dragover
        >
            {children()}
        </div>
    }
}
