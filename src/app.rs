//! Todo App
//!
//! Composition root: owns the store, the id allocator, and the save
//! queue; interprets intents from the leaf components; renders the
//! slot sequence as a pure projection of the collection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ItemSlot, NewTodoForm, TodoItem};
use crate::context::AppContext;
use crate::list::{self, IdAllocator, Intent};
use crate::saver::{self, SaveQueue};
use crate::store::{self, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let app_store: AppStore = Store::new(AppState::default());

    let ids = StoredValue::new(IdAllocator::new());
    let save_queue = StoredValue::new(SaveQueue::new());

    // The list controller: every leaf intent funnels through here.
    // Mutations are applied to the authoritative state first; the view
    // reconciles from it, and changed collections are queued for
    // persistence.
    let dispatch = move |intent: Intent| {
        let mut todos = app_store.todos().get_untracked();
        let mut drag = app_store.drag().get_untracked();
        let now_ms = js_sys::Date::now() as u64;

        let persist = ids
            .try_update_value(|ids| list::apply_intent(&mut todos, &mut drag, ids, now_ms, intent))
            .unwrap_or(false);

        if app_store.drag().with_untracked(|d| *d != drag) {
            app_store.drag().set(drag);
        }
        if persist {
            saver::schedule_save(save_queue, todos.clone());
        }
        if app_store.todos().with_untracked(|t| *t != todos) {
            app_store.todos().set(todos);
        }
    };
    provide_context(AppContext::new(Callback::new(dispatch)));

    // Load the persisted collection on startup. A failed fetch leaves
    // the list empty; no retry.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[LOAD] {} todos", loaded.len()).into());
                    store::store_replace_todos(&app_store, loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[LOAD] {err}").into());
                }
            }
        });
    });

    view! {
        <div class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <div class="todo-item-slots">
                <For
                    each=move || app_store.todos().get()
                    key=|todo| (todo.id.clone(), todo.text.clone(), todo.completed)
                    children=move |todo| {
                        let slot_index = Memo::new({
                            let id = todo.id.clone();
                            move |_| {
                                app_store
                                    .todos()
                                    .with(|todos| todos.iter().position(|t| t.id == id))
                                    .unwrap_or(0)
                            }
                        });
                        let is_dragged = Memo::new({
                            let id = todo.id.clone();
                            move |_| store::store_dragged_id(&app_store).as_deref() == Some(id.as_str())
                        });

                        view! {
                            <ItemSlot index=slot_index highlighted=is_dragged>
                                <TodoItem record=todo dragging=is_dragged />
                            </ItemSlot>
                        }
                    }
                />
            </div>

            <p class="item-count">
                {move || format!("{} items", app_store.todos().with(|todos| todos.len()))}
            </p>
        </div>
    }
}
