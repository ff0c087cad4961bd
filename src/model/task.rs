/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique within the owning list, assigned at creation, never reused
    pub id: u64,
    /// Display text
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: u64, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }
}
