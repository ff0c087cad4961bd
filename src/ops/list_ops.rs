use crate::model::list::TodoList;
use crate::model::task::Task;

/// Error type for operations that look a task up by id.
/// The UI layer absorbs these as silent no-ops.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("task not found: {0}")]
    NotFound(u64),
}

/// Rejection reasons for `add_task`. Titles are validated here and
/// nowhere else — rename deliberately skips both checks.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("empty task title")]
    EmptyTitle,
    #[error("a task named \"{0}\" already exists")]
    DuplicateTitle(String),
}

/// Append a new pending task. The title is trimmed; an empty or
/// whitespace-only title is rejected, as is a title matching an existing
/// task exactly. Returns the assigned id.
pub fn add_task(list: &mut TodoList, title: &str) -> Result<u64, AddError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AddError::EmptyTitle);
    }
    if list.iter().any(|t| t.title == title) {
        return Err(AddError::DuplicateTitle(title.to_string()));
    }

    let id = list.alloc_id();
    list.tasks.push(Task::new(id, title.to_string()));
    Ok(id)
}

/// Flip the done flag of the task with `id`. Returns the new flag value.
pub fn toggle_done(list: &mut TodoList, id: u64) -> Result<bool, ListError> {
    let task = list.find_mut(id).ok_or(ListError::NotFound(id))?;
    task.done = !task.done;
    Ok(task.done)
}

/// Remove the task with `id`, returning it. Callers present a
/// confirmation prompt before invoking this.
pub fn remove_task(list: &mut TodoList, id: u64) -> Result<Task, ListError> {
    let idx = list.position(id).ok_or(ListError::NotFound(id))?;
    Ok(list.tasks.remove(idx))
}

/// Replace the title of the task with `id`. Id and done flag are
/// untouched. No emptiness or uniqueness check is applied here: renaming
/// can produce duplicate (or empty) titles, matching the insert-time-only
/// validation rule.
pub fn edit_title(list: &mut TodoList, id: u64, new_title: &str) -> Result<(), ListError> {
    let task = list.find_mut(id).ok_or(ListError::NotFound(id))?;
    task.title = new_title.to_string();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
