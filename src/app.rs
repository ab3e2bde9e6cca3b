//! Console interaction state.
//!
//! `App` owns the [`TaskStore`] and turns key presses into store calls. It
//! never touches the terminal, so every screen flow can be driven from tests.

use crate::categories::{CATEGORIES, TAGS};
use crate::store::TaskStore;
use crate::task::TaskId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

pub const ALL_TASKS: &str = "All Tasks";
pub const NONE_OPTION: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Menu,
    AddTitle,
    AddCategory,
    AddTags,
    Complete,
    Delete,
    /// Picking from the store's categories plus [`ALL_TASKS`].
    FilterSelect { options: Vec<String> },
    /// `None` shows every task.
    FilterResults { category: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Values collected across the add-task screens.
#[derive(Debug, Default, Clone)]
pub struct Draft {
    pub title: String,
    pub category: String,
    pub tag_marks: Vec<bool>,
}

#[derive(Debug)]
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub input: String,
    pub selected: usize,
    pub draft: Draft,
    pub message: Option<Message>,
    pub running: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            mode: Mode::Menu,
            input: String::new(),
            selected: 0,
            draft: Draft::default(),
            message: None,
            running: true,
        }
    }

    /// Header text for the current screen.
    pub fn title(&self) -> String {
        match &self.mode {
            Mode::Menu => "TODO MANAGER".to_string(),
            Mode::AddTitle | Mode::AddCategory | Mode::AddTags => "ADD NEW TODO".to_string(),
            Mode::Complete => "MARK AS COMPLETE".to_string(),
            Mode::Delete => "DELETE TODO".to_string(),
            Mode::FilterSelect { .. } => "FILTER BY CATEGORY".to_string(),
            Mode::FilterResults { category: None } => "TODO MANAGER".to_string(),
            Mode::FilterResults {
                category: Some(category),
            } => format!("TASKS IN {}", category.to_uppercase()),
        }
    }

    /// Options listed on selection screens, empty elsewhere.
    pub fn options(&self) -> Vec<String> {
        match &self.mode {
            Mode::AddCategory => CATEGORIES
                .iter()
                .copied()
                .chain(std::iter::once(NONE_OPTION))
                .map(String::from)
                .collect(),
            Mode::AddTags => TAGS.iter().map(|t| t.to_string()).collect(),
            Mode::FilterSelect { options } => options.clone(),
            _ => Vec::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.mode {
            Mode::Menu => {
                self.message = None;
                self.handle_menu_key(key.code);
            }
            Mode::FilterResults { .. } => self.back_to_menu(),
            _ if key.code == KeyCode::Esc => {
                self.back_to_menu();
                self.info("Cancelled.");
            }
            Mode::AddTitle | Mode::Complete | Mode::Delete => self.handle_text_key(key.code),
            Mode::AddCategory | Mode::FilterSelect { .. } => self.handle_select_key(key.code),
            Mode::AddTags => self.handle_tags_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') => {
                self.draft = Draft::default();
                self.enter(Mode::AddTitle);
            }
            KeyCode::Char('2') => self.enter(Mode::Complete),
            KeyCode::Char('3') => self.enter(Mode::Delete),
            KeyCode::Char('4') => self.start_filter(),
            KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Esc => {
                info!("event=app_exit module=app");
                self.running = false;
            }
            _ => self.error("Invalid choice! Please try again."),
        }
    }

    fn handle_text_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.message = None;
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit_text(),
            _ => {}
        }
    }

    fn submit_text(&mut self) {
        if self.mode == Mode::AddTitle {
            if self.input.trim().is_empty() {
                self.error("Input cannot be empty. Please try again.");
                self.input.clear();
                return;
            }
            self.draft.title = std::mem::take(&mut self.input);
            self.enter(Mode::AddCategory);
            return;
        }

        let number: i64 = match self.input.trim().parse() {
            Ok(number) => number,
            Err(_) => {
                self.error("Invalid input. Please enter a number.");
                self.input.clear();
                return;
            }
        };
        // Negative or oversized numbers can never name a task.
        let id = TaskId::try_from(number).ok();

        let mode = self.mode.clone();
        self.back_to_menu();
        match (mode, id) {
            (Mode::Complete, Some(id)) if self.store.complete(id) => {
                info!("event=todo_completed module=app id={}", id);
                self.info("Todo marked as done!");
            }
            (Mode::Delete, Some(id)) if self.store.delete(id) => {
                info!("event=todo_deleted module=app id={}", id);
                self.info("Todo deleted successfully!");
            }
            _ => self.error("Todo not found!"),
        }
    }

    fn handle_select_key(&mut self, code: KeyCode) {
        let count = self.options().len();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Char(c) => match c.to_digit(10).map(|d| d as usize) {
                Some(n) if (1..=count).contains(&n) => {
                    self.selected = n - 1;
                    self.submit_selection();
                }
                _ => self.error("Invalid selection. Please try again."),
            },
            KeyCode::Enter => self.submit_selection(),
            _ => {}
        }
    }

    fn submit_selection(&mut self) {
        let options = self.options();
        let Some(choice) = options.get(self.selected).cloned() else {
            return;
        };

        if self.mode == Mode::AddCategory {
            self.draft.category = if choice == NONE_OPTION {
                String::new()
            } else {
                choice
            };
            self.draft.tag_marks = vec![false; TAGS.len()];
            self.enter(Mode::AddTags);
            return;
        }

        let category = (choice != ALL_TASKS).then_some(choice);
        info!("event=filter_selected module=app category={:?}", category);
        self.enter(Mode::FilterResults { category });
    }

    fn handle_tags_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < TAGS.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char(' ') => self.toggle_tag(self.selected),
            KeyCode::Char(c) => match c.to_digit(10).map(|d| d as usize) {
                Some(n) if (1..=TAGS.len()).contains(&n) => {
                    self.selected = n - 1;
                    self.toggle_tag(n - 1);
                }
                _ => self.error("Invalid selection. Please try again."),
            },
            KeyCode::Enter => self.submit_draft(),
            _ => {}
        }
    }

    fn toggle_tag(&mut self, index: usize) {
        if let Some(mark) = self.draft.tag_marks.get_mut(index) {
            *mark = !*mark;
        }
    }

    fn submit_draft(&mut self) {
        let draft = std::mem::take(&mut self.draft);
        let tags = TAGS
            .iter()
            .zip(&draft.tag_marks)
            .filter(|(_, marked)| **marked)
            .map(|(tag, _)| tag.to_string())
            .collect();

        self.back_to_menu();
        match self.store.add(draft.title, draft.category, tags) {
            Ok(task) => {
                info!("event=todo_added module=app id={}", task.id());
                self.info("Todo added successfully!");
            }
            Err(err) => {
                warn!("event=todo_add_rejected module=app reason={}", err);
                self.error(&format!("Error: {err}"));
            }
        }
    }

    fn start_filter(&mut self) {
        let mut options = self.store.unique_categories();
        if options.is_empty() {
            self.error("No categories found!");
            return;
        }
        options.push(ALL_TASKS.to_string());
        self.enter(Mode::FilterSelect { options });
    }

    fn enter(&mut self, mode: Mode) {
        self.mode = mode;
        self.input.clear();
        self.selected = 0;
    }

    fn back_to_menu(&mut self) {
        self.enter(Mode::Menu);
        self.draft = Draft::default();
    }

    fn info(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_string(),
            level: MessageLevel::Info,
        });
    }

    fn error(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_string(),
            level: MessageLevel::Error,
        });
    }
}
