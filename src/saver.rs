//! Save Serialization
//!
//! Persist calls are single-flight: while a PATCH is in the air, newer
//! snapshots coalesce into one pending slot and superseded ones are
//! dropped, so the document always ends at the latest local state and
//! never at an interleaving of two writes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::TodoRecord;

#[derive(Debug, Default)]
pub struct SaveQueue {
    in_flight: bool,
    pending: Option<Vec<TodoRecord>>,
}

impl SaveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a snapshot for persistence. `Some` means no flight is
    /// running and the caller now owns starting one; `None` means the
    /// snapshot was parked (replacing any previously parked one).
    pub fn submit(&mut self, snapshot: Vec<TodoRecord>) -> Option<Vec<TodoRecord>> {
        if self.in_flight {
            self.pending = Some(snapshot);
            None
        } else {
            self.in_flight = true;
            Some(snapshot)
        }
    }

    /// A flight finished. `Some` hands back the latest parked snapshot,
    /// which the caller must send next; `None` means the queue is idle.
    pub fn complete(&mut self) -> Option<Vec<TodoRecord>> {
        match self.pending.take() {
            Some(next) => Some(next),
            None => {
                self.in_flight = false;
                None
            }
        }
    }
}

/// Queue a snapshot for persistence, starting the drive loop when none
/// is running. A failed write logs, alerts the user, and leaves local
/// state untouched; there is no automatic retry.
pub fn schedule_save(queue: StoredValue<SaveQueue>, snapshot: Vec<TodoRecord>) {
    let Some(first) = queue
        .try_update_value(|q| q.submit(snapshot))
        .flatten()
    else {
        return;
    };
    spawn_local(async move {
        let mut batch = first;
        loop {
            if let Err(err) = api::save_todos(&batch).await {
                web_sys::console::error_1(&format!("[SAVE] {err}").into());
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Failed to save changes");
                }
            }
            match queue.try_update_value(|q| q.complete()).flatten() {
                Some(next) => batch = next,
                None => break,
            }
        }
    });
}
