use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::model::{Config, Task, TodoList};
use crate::ops::list_ops::{self, AddError};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor movement over the list
    Navigate,
    /// The new-task bar owns keystrokes
    Input,
    /// Inline rename of the cursor row
    Edit,
    /// Blocking delete prompt
    Confirm,
}

/// Inline rename target: which task, and the title it had when editing began
#[derive(Debug, Clone)]
pub struct EditTarget {
    pub task_id: u64,
    pub original_title: String,
}

/// A delete waiting for y/n
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub task_id: u64,
    pub title: String,
}

/// Main application state. Owns the authoritative task list; input
/// handlers mutate it, renderers only read it.
pub struct App {
    pub list: TodoList,
    pub mode: Mode,
    /// Cursor index into the list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// New-task input bar
    pub input_buffer: String,
    pub input_cursor: usize,
    /// Inline rename draft, seeded from the task title on edit start
    pub edit_buffer: String,
    pub edit_cursor: usize,
    pub edit_target: Option<EditTarget>,
    /// Pending delete confirmation
    pub confirm: Option<ConfirmDelete>,
    /// Title rejected as a duplicate; modal alert while Some
    pub duplicate_alert: Option<String>,
    /// One-line feedback after a mutation
    pub status_message: Option<String>,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            list: TodoList::new(),
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            confirm: None,
            duplicate_alert: None,
            status_message: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            theme: Theme::from_config(&config.ui),
            should_quit: false,
        }
    }

    /// Task under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.list.tasks.get(self.cursor)
    }

    pub fn cursor_task_id(&self) -> Option<u64> {
        self.cursor_task().map(|t| t.id)
    }

    /// Keep the cursor inside the list after removals
    pub fn clamp_cursor(&mut self) {
        if self.list.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.list.len() - 1);
        }
    }

    // -----------------------------------------------------------------------
    // Container operations: the four list mutations, as the input layer
    // invokes them. Lookup misses are absorbed as silent no-ops.
    // -----------------------------------------------------------------------

    /// Submit the input bar. Empty titles are ignored without feedback;
    /// duplicates raise the blocking alert and leave the buffer intact so
    /// the user can correct it.
    pub fn submit_new_task(&mut self) {
        match list_ops::add_task(&mut self.list, &self.input_buffer) {
            Ok(id) => {
                self.input_buffer.clear();
                self.input_cursor = 0;
                if let Some(pos) = self.list.position(id) {
                    self.cursor = pos;
                }
                let title = self
                    .list
                    .find(id)
                    .map(|t| t.title.clone())
                    .unwrap_or_default();
                self.status_message = Some(format!("added \"{}\"", title));
            }
            Err(AddError::EmptyTitle) => {}
            Err(AddError::DuplicateTitle(title)) => {
                self.duplicate_alert = Some(title);
            }
        }
    }

    /// Flip the done flag of the task under the cursor
    pub fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.cursor_task_id() {
            let _ = list_ops::toggle_done(&mut self.list, id);
        }
    }

    /// Flip the done flag of a specific task (used while renaming, where
    /// the marker stays reachable)
    pub fn toggle_task(&mut self, id: u64) {
        let _ = list_ops::toggle_done(&mut self.list, id);
    }

    /// Ask for confirmation before deleting the cursor row
    pub fn request_delete(&mut self) {
        let task = match self.cursor_task() {
            Some(t) => t,
            None => return,
        };
        let confirm = ConfirmDelete {
            task_id: task.id,
            title: task.title.clone(),
        };
        self.confirm = Some(confirm);
        self.mode = Mode::Confirm;
    }

    /// Confirmed delete: remove the task and clamp the cursor
    pub fn confirm_delete(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            if let Ok(removed) = list_ops::remove_task(&mut self.list, confirm.task_id) {
                self.status_message = Some(format!("removed \"{}\"", removed.title));
            }
            self.clamp_cursor();
        }
        self.mode = Mode::Navigate;
    }

    /// Declined delete: no state change
    pub fn cancel_delete(&mut self) {
        self.confirm = None;
        self.mode = Mode::Navigate;
    }

    // -----------------------------------------------------------------------
    // Inline rename state machine: Navigate is "viewing", Edit is
    // "editing". Entering seeds the draft and places the text cursor;
    // leaving clears both.
    // -----------------------------------------------------------------------

    /// Start renaming the cursor row
    pub fn start_edit(&mut self) {
        let task = match self.cursor_task() {
            Some(t) => t,
            None => return,
        };
        let task_id = task.id;
        let original_title = task.title.clone();

        self.edit_buffer = original_title.clone();
        self.edit_cursor = self.edit_buffer.len();
        self.edit_target = Some(EditTarget {
            task_id,
            original_title,
        });
        self.mode = Mode::Edit;
    }

    /// Commit the rename. Applied as-is: rename performs no emptiness or
    /// uniqueness validation.
    pub fn submit_edit(&mut self) {
        if let Some(target) = self.edit_target.take() {
            let _ = list_ops::edit_title(&mut self.list, target.task_id, &self.edit_buffer);
            if self.edit_buffer != target.original_title {
                self.status_message = Some(format!("renamed to \"{}\"", self.edit_buffer));
            }
        }
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Abandon the rename. The draft is discarded; the task is untouched.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
