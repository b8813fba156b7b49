//! Plain-text rendering of a store `Snapshot`.

use crate::store::Snapshot;

const EMPTY_PLACEHOLDER: &str = "(no todos)";

/// Render one line per todo, in list order.
///
/// The todo under edit shows the in-progress title followed by a `*`.
pub fn render(snapshot: &Snapshot) -> String {
    if snapshot.todos.is_empty() {
        return format!("{EMPTY_PLACEHOLDER}\n");
    }
    let mut out = String::new();
    for todo in &snapshot.todos {
        let mark = if todo.completed { 'x' } else { ' ' };
        let line = match todo.id {
            Some(id) if snapshot.edit.is_editing(id) => {
                format!("[{mark}] {}*\n", snapshot.edit.edit_title)
            }
            _ => format!("[{mark}] {}\n", todo.title),
        };
        out.push_str(&line);
    }
    out
}
