//! List Controller Core
//!
//! Intent interpretation and reorder logic over the ordered todo
//! collection. The in-memory collection is the single source of truth:
//! the rendered slot sequence is a pure projection of it, so `Slot[i]`
//! holds `todos[i]` by construction and nothing is ever read back from
//! the DOM.

use crate::models::TodoRecord;

/// Ephemeral drag state, alive between drag-start and drag-end of one
/// gesture. While present, `dragged_id` always names a record that
/// occupies a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub dragged_id: String,
    /// Current slot index of the dragged record, updated on every
    /// reorder step.
    pub source_index: usize,
}

/// Time-based id allocator. Ids are strictly monotonic within a session,
/// so same-millisecond adds never collide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id from a millisecond clock reading.
    pub fn next(&mut self, now_ms: u64) -> String {
        self.last = if now_ms > self.last { now_ms } else { self.last + 1 };
        self.last.to_string()
    }
}

/// User intents reported by leaf components. This is the explicit
/// child-to-parent contract; components never mutate shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Add { text: String },
    Toggle { id: String, completed: bool },
    Edit { id: String, text: String },
    Delete { id: String },
    DragStart { id: String },
    DragEnd,
    Hover { slot_index: usize },
}

/// Apply one intent to the authoritative state.
///
/// Returns `true` when the collection changed and must be persisted.
/// Intents referencing unknown ids are silent no-ops.
pub fn apply_intent(
    todos: &mut Vec<TodoRecord>,
    drag: &mut Option<DragSession>,
    ids: &mut IdAllocator,
    now_ms: u64,
    intent: Intent,
) -> bool {
    match intent {
        Intent::Add { text } => {
            let text = text.trim();
            if text.is_empty() {
                return false;
            }
            todos.push(TodoRecord {
                id: ids.next(now_ms),
                text: text.to_string(),
                completed: false,
            });
            true
        }

        Intent::Toggle { id, completed } => match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        },

        Intent::Edit { id, text } => {
            let text = text.trim();
            if text.is_empty() {
                return false;
            }
            match todos.iter_mut().find(|t| t.id == id) {
                Some(todo) => {
                    todo.text = text.to_string();
                    true
                }
                None => false,
            }
        }

        Intent::Delete { id } => {
            let Some(index) = todos.iter().position(|t| t.id == id) else {
                return false;
            };
            todos.remove(index);
            // A live session must always point at an occupied slot.
            if drag.as_ref().is_some_and(|s| s.dragged_id == id) {
                *drag = None;
            }
            true
        }

        Intent::DragStart { id } => {
            if let Some(index) = todos.iter().position(|t| t.id == id) {
                *drag = Some(DragSession {
                    dragged_id: id,
                    source_index: index,
                });
            }
            false
        }

        Intent::DragEnd => {
            *drag = None;
            false
        }

        Intent::Hover { slot_index } => {
            let Some(session) = drag.as_mut() else {
                return false;
            };
            let Some(dragged_index) = todos.iter().position(|t| t.id == session.dragged_id)
            else {
                return false;
            };
            if slot_index >= todos.len() || slot_index == dragged_index {
                return false;
            }

            // Stable single-element move, not a swap: records between the
            // two indices shift by one and keep their relative order.
            let record = todos.remove(dragged_index);
            todos.insert(slot_index, record);
            session.source_index = slot_index;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        todos: Vec<TodoRecord>,
        drag: Option<DragSession>,
        ids: IdAllocator,
        clock: u64,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                todos: Vec::new(),
                drag: None,
                ids: IdAllocator::new(),
                clock: 1_000,
            }
        }

        fn apply(&mut self, intent: Intent) -> bool {
            self.clock += 1;
            apply_intent(&mut self.todos, &mut self.drag, &mut self.ids, self.clock, intent)
        }

        fn with_todos(texts: &[&str]) -> Self {
            let mut f = Self::new();
            for text in texts {
                f.apply(Intent::Add { text: text.to_string() });
            }
            f
        }

        fn texts(&self) -> Vec<&str> {
            self.todos.iter().map(|t| t.text.as_str()).collect()
        }

        fn id_of(&self, text: &str) -> String {
            self.todos.iter().find(|t| t.text == text).unwrap().id.clone()
        }
    }

    #[test]
    fn add_trims_and_appends() {
        let mut f = Fixture::new();
        assert!(f.apply(Intent::Add { text: "  Buy milk  ".to_string() }));
        assert_eq!(f.texts(), ["Buy milk"]);
        assert!(!f.todos[0].completed);
    }

    #[test]
    fn add_empty_or_whitespace_is_a_noop() {
        let mut f = Fixture::new();
        assert!(!f.apply(Intent::Add { text: String::new() }));
        assert!(!f.apply(Intent::Add { text: "   ".to_string() }));
        assert!(f.todos.is_empty());
    }

    #[test]
    fn ids_are_unique_within_a_session() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next(100), "100");
        // Same millisecond: bump past the previous id.
        assert_eq!(ids.next(100), "101");
        // Clock going backwards still yields a fresh id.
        assert_eq!(ids.next(50), "102");
        assert_eq!(ids.next(200), "200");
    }

    #[test]
    fn toggle_sets_reported_value() {
        let mut f = Fixture::with_todos(&["A", "B"]);
        let id = f.id_of("B");
        assert!(f.apply(Intent::Toggle { id: id.clone(), completed: true }));
        assert!(f.todos[1].completed);
        assert!(f.apply(Intent::Toggle { id, completed: false }));
        assert!(!f.todos[1].completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut f = Fixture::with_todos(&["A"]);
        assert!(!f.apply(Intent::Toggle { id: "missing".to_string(), completed: true }));
        assert!(!f.todos[0].completed);
    }

    #[test]
    fn edit_replaces_text() {
        let mut f = Fixture::with_todos(&["A"]);
        let id = f.id_of("A");
        assert!(f.apply(Intent::Edit { id, text: " A2 ".to_string() }));
        assert_eq!(f.texts(), ["A2"]);
    }

    #[test]
    fn edit_empty_or_unknown_is_a_noop() {
        let mut f = Fixture::with_todos(&["A"]);
        let id = f.id_of("A");
        assert!(!f.apply(Intent::Edit { id, text: "   ".to_string() }));
        assert!(!f.apply(Intent::Edit { id: "missing".to_string(), text: "X".to_string() }));
        assert_eq!(f.texts(), ["A"]);
    }

    #[test]
    fn delete_removes_record_and_slot() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        let id = f.id_of("B");
        assert!(f.apply(Intent::Delete { id }));
        assert_eq!(f.texts(), ["A", "C"]);
    }

    #[test]
    fn delete_unknown_id_is_a_noop() {
        let mut f = Fixture::with_todos(&["A"]);
        assert!(!f.apply(Intent::Delete { id: "missing".to_string() }));
        assert_eq!(f.texts(), ["A"]);
    }

    #[test]
    fn delete_of_dragged_record_clears_the_session() {
        let mut f = Fixture::with_todos(&["A", "B"]);
        let id = f.id_of("A");
        f.apply(Intent::DragStart { id: id.clone() });
        assert!(f.drag.is_some());
        assert!(f.apply(Intent::Delete { id }));
        assert!(f.drag.is_none());
    }

    #[test]
    fn drag_start_records_current_index() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        let id = f.id_of("B");
        assert!(!f.apply(Intent::DragStart { id: id.clone() }));
        assert_eq!(
            f.drag,
            Some(DragSession { dragged_id: id, source_index: 1 })
        );
    }

    #[test]
    fn drag_start_with_unknown_id_creates_no_session() {
        let mut f = Fixture::with_todos(&["A"]);
        f.apply(Intent::DragStart { id: "missing".to_string() });
        assert!(f.drag.is_none());
    }

    #[test]
    fn drag_end_clears_session_unconditionally() {
        let mut f = Fixture::with_todos(&["A"]);
        f.apply(Intent::DragEnd);
        assert!(f.drag.is_none());
        f.apply(Intent::DragStart { id: f.id_of("A") });
        assert!(!f.apply(Intent::DragEnd));
        assert!(f.drag.is_none());
    }

    #[test]
    fn hover_moves_dragged_record_stably() {
        let mut f = Fixture::with_todos(&["A", "B", "C", "D"]);
        f.apply(Intent::DragStart { id: f.id_of("B") });
        assert!(f.apply(Intent::Hover { slot_index: 3 }));
        // Single-element move: everyone else keeps relative order.
        assert_eq!(f.texts(), ["A", "C", "D", "B"]);
        assert_eq!(f.drag.as_ref().unwrap().source_index, 3);
    }

    #[test]
    fn hover_moves_record_backwards_too() {
        let mut f = Fixture::with_todos(&["A", "B", "C", "D"]);
        f.apply(Intent::DragStart { id: f.id_of("D") });
        assert!(f.apply(Intent::Hover { slot_index: 0 }));
        assert_eq!(f.texts(), ["D", "A", "B", "C"]);
    }

    #[test]
    fn hover_on_own_slot_is_a_noop() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        f.apply(Intent::DragStart { id: f.id_of("B") });
        assert!(!f.apply(Intent::Hover { slot_index: 1 }));
        assert_eq!(f.texts(), ["A", "B", "C"]);
        assert_eq!(f.drag.as_ref().unwrap().source_index, 1);
    }

    #[test]
    fn hover_without_session_is_a_noop() {
        let mut f = Fixture::with_todos(&["A", "B"]);
        assert!(!f.apply(Intent::Hover { slot_index: 0 }));
        assert_eq!(f.texts(), ["A", "B"]);
    }

    #[test]
    fn hover_out_of_range_is_a_noop() {
        let mut f = Fixture::with_todos(&["A", "B"]);
        f.apply(Intent::DragStart { id: f.id_of("A") });
        assert!(!f.apply(Intent::Hover { slot_index: 2 }));
        assert_eq!(f.texts(), ["A", "B"]);
    }

    #[test]
    fn repeated_hovers_track_one_gesture() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        f.apply(Intent::DragStart { id: f.id_of("A") });
        assert!(f.apply(Intent::Hover { slot_index: 1 }));
        assert_eq!(f.texts(), ["B", "A", "C"]);
        assert!(f.apply(Intent::Hover { slot_index: 2 }));
        assert_eq!(f.texts(), ["B", "C", "A"]);
        assert!(f.apply(Intent::Hover { slot_index: 0 }));
        assert_eq!(f.texts(), ["A", "B", "C"]);
    }

    #[test]
    fn drag_first_onto_last_slot_persists_new_order() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        f.apply(Intent::DragStart { id: f.id_of("A") });
        // Slot 2 currently holds "C".
        assert!(f.apply(Intent::Hover { slot_index: 2 }));
        f.apply(Intent::DragEnd);

        assert_eq!(f.texts(), ["B", "C", "A"]);
        assert!(f.drag.is_none());

        let doc = serde_json::to_value(&f.todos).unwrap();
        assert_eq!(
            doc,
            serde_json::json!([
                {"id": f.todos[0].id, "text": "B", "completed": false},
                {"id": f.todos[1].id, "text": "C", "completed": false},
                {"id": f.todos[2].id, "text": "A", "completed": false},
            ])
        );
    }

    #[test]
    fn saved_document_round_trips_element_for_element() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        f.apply(Intent::DragStart { id: f.id_of("A") });
        f.apply(Intent::Hover { slot_index: 2 });
        f.apply(Intent::DragEnd);
        f.apply(Intent::Toggle { id: f.id_of("B"), completed: true });

        // Reload reproduces the last saved array exactly.
        let saved = serde_json::to_string(&f.todos).unwrap();
        let reloaded: Vec<TodoRecord> = serde_json::from_str(&saved).unwrap();
        assert_eq!(reloaded, f.todos);
        assert_eq!(reloaded[0].text, "B");
        assert!(reloaded[0].completed);
    }

    #[test]
    fn every_operation_keeps_count_consistent() {
        let mut f = Fixture::with_todos(&["A", "B", "C"]);
        let before = f.todos.len();

        f.apply(Intent::DragStart { id: f.id_of("C") });
        f.apply(Intent::Hover { slot_index: 0 });
        assert_eq!(f.todos.len(), before);

        f.apply(Intent::Toggle { id: f.id_of("A"), completed: true });
        f.apply(Intent::Edit { id: f.id_of("B"), text: "B2".to_string() });
        assert_eq!(f.todos.len(), before);

        f.apply(Intent::Delete { id: f.id_of("B2") });
        assert_eq!(f.todos.len(), before - 1);
    }
}
