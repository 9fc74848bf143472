use std::sync::Arc;

use todo_core::app::TodoAdapter;

pub struct AppState {
    pub adapter: TodoAdapter,
}

pub type SharedState = Arc<AppState>;
