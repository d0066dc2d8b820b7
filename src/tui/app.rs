use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, EditField, FilterCategory, FilterState, TaskList};
use crate::model::view::DATE_FIELD_LEN;
use crate::ops::filter_ops;
use crate::util::line_input::LineInput;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving over the list, acting on the task under the cursor
    Navigate,
    /// Typing into the add form
    Form,
    /// Typing into the edit draft of the task under the cursor
    Edit,
}

/// The add-task form at the top of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub text: LineInput,
    pub date: LineInput,
    pub focus: EditField,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm {
            text: LineInput::new(),
            date: LineInput::new().max_chars(DATE_FIELD_LEN),
            focus: EditField::Text,
        }
    }
}

impl AddForm {
    pub fn focused_mut(&mut self) -> &mut LineInput {
        match self.focus {
            EditField::Text => &mut self.text,
            EditField::Date => &mut self.date,
        }
    }

    /// Empty both fields and return focus to the text field
    pub fn reset(&mut self) {
        self.text.clear();
        self.date.clear();
        self.focus = EditField::Text;
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub filter: FilterState,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Current calendar day, for overdue emphasis
    pub today: NaiveDate,
    /// Cursor index into the visible tasks
    pub cursor: usize,
    /// Scroll offset (first visible row of the list)
    pub scroll: usize,
    pub form: AddForm,
    /// Blocking notification; all input is swallowed until it is dismissed
    pub alert: Option<String>,
    /// Transient message for the status row
    pub status_message: Option<String>,
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(config: &Config, initial_filter: Option<FilterCategory>) -> Self {
        let category = initial_filter.unwrap_or(config.list.default_filter);
        let mut app = App {
            tasks: TaskList::new(),
            filter: FilterState::new(category),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            today: Local::now().date_naive(),
            cursor: 0,
            scroll: 0,
            form: AddForm::default(),
            alert: None,
            status_message: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
        };
        // Initial load applies the filter once
        filter_ops::apply_filter(&mut app.filter, category, &mut app.tasks);
        app
    }

    /// List indices of the tasks the filter leaves visible
    pub fn visible_indices(&self) -> Vec<usize> {
        self.tasks.visible_indices()
    }

    /// List index of the task under the cursor
    pub fn cursor_task_index(&self) -> Option<usize> {
        self.visible_indices().get(self.cursor).copied()
    }

    /// Keep the cursor on a visible task after the list or filter changed
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_indices().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// Put the cursor on the task at list index `index`, if it is visible
    pub fn move_cursor_to_task(&mut self, index: usize) {
        if let Some(pos) = self.visible_indices().iter().position(|&i| i == index) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    /// Show a blocking notification
    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Re-read the calendar day (the session may cross midnight)
    pub fn refresh_today(&mut self) {
        self.today = Local::now().date_naive();
    }
}

/// Run the TUI application
pub fn run(
    config: &Config,
    initial_filter: Option<FilterCategory>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, initial_filter);

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

    tracing::info!(filter = %app.filter.current(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!(tasks = app.tasks.len(), "tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.refresh_today();
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
