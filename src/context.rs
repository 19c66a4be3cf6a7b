//! Application Context
//!
//! The explicit child-to-parent channel: leaf components report intents
//! through a dispatch callback provided by the composition root instead
//! of bubbling DOM events upward.

use leptos::prelude::*;

use crate::list::Intent;

/// App-wide intent dispatch provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    dispatch: Callback<Intent>,
}

impl AppContext {
    pub fn new(dispatch: Callback<Intent>) -> Self {
        Self { dispatch }
    }

    /// Report a user intent to the list controller.
    pub fn dispatch(&self, intent: Intent) {
        self.dispatch.run(intent);
    }
}
