use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todos::app::{MessageLevel, Mode, ALL_TASKS};
use todos::{App, TaskStore};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn message(app: &App) -> (&str, MessageLevel) {
    let message = app.message.as_ref().expect("a status message");
    (message.text.as_str(), message.level)
}

#[test]
fn add_todo_with_category_and_tags() {
    let mut app = App::new(TaskStore::with_sample_data());

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.mode, Mode::AddTitle);
    assert_eq!(app.title(), "ADD NEW TODO");
    type_text(&mut app, "Pay bills");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::AddCategory);
    assert_eq!(app.options().last().map(String::as_str), Some("None"));
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::AddTags);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(message(&app), ("Todo added successfully!", MessageLevel::Info));
    let task = app.store.get(4).unwrap();
    assert_eq!(task.title(), "Pay bills");
    assert_eq!(task.category(), "Finance");
    assert_eq!(task.tags(), ["urgent", "important"]);
}

#[test]
fn add_todo_without_category() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('1'));
    type_text(&mut app, "Stretch");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Enter);

    let task = app.store.get(1).unwrap();
    assert_eq!(task.category(), "");
    assert!(task.tags().is_empty());
    assert!(app.store.unique_categories().is_empty());
}

#[test]
fn blank_title_stays_on_prompt() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('1'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::AddTitle);
    assert!(app.input.is_empty());
    assert_eq!(
        message(&app),
        ("Input cannot be empty. Please try again.", MessageLevel::Error)
    );
    assert!(app.store.is_empty());
}

#[test]
fn mark_as_done_found_and_missing() {
    let mut app = App::new(TaskStore::with_sample_data());

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.title(), "MARK AS COMPLETE");
    type_text(&mut app, "2");
    press(&mut app, KeyCode::Enter);
    assert_eq!(message(&app), ("Todo marked as done!", MessageLevel::Info));
    assert!(app.store.get(2).unwrap().is_completed());

    press(&mut app, KeyCode::Char('2'));
    type_text(&mut app, "99");
    press(&mut app, KeyCode::Enter);
    assert_eq!(message(&app), ("Todo not found!", MessageLevel::Error));
}

#[test]
fn out_of_range_ids_are_not_found() {
    let mut app = App::new(TaskStore::with_sample_data());

    press(&mut app, KeyCode::Char('2'));
    type_text(&mut app, "-1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(message(&app), ("Todo not found!", MessageLevel::Error));

    press(&mut app, KeyCode::Char('3'));
    type_text(&mut app, "99999999999");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(message(&app), ("Todo not found!", MessageLevel::Error));
    assert_eq!(app.store.len(), 3);
}

#[test]
fn non_numeric_id_is_rejected() {
    let mut app = App::new(TaskStore::with_sample_data());
    press(&mut app, KeyCode::Char('3'));
    type_text(&mut app, "one");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Delete);
    assert_eq!(
        message(&app),
        ("Invalid input. Please enter a number.", MessageLevel::Error)
    );

    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(message(&app), ("Todo deleted successfully!", MessageLevel::Info));
    assert!(app.store.get(1).is_none());
}

#[test]
fn backspace_edits_input() {
    let mut app = App::new(TaskStore::with_sample_data());
    press(&mut app, KeyCode::Char('3'));
    type_text(&mut app, "39");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input, "3");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.store.len(), 2);
}

#[test]
fn filter_by_category_and_all_tasks() {
    let mut app = App::new(TaskStore::with_sample_data());

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(
        app.options(),
        ["Shopping", "Personal", "Work", ALL_TASKS]
    );
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.mode,
        Mode::FilterResults {
            category: Some("Personal".to_string())
        }
    );
    assert_eq!(app.title(), "TASKS IN PERSONAL");

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.mode, Mode::Menu);

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.mode, Mode::FilterResults { category: None });
    assert_eq!(app.title(), "TODO MANAGER");
}

#[test]
fn filter_without_categories() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.mode, Mode::Menu);
    assert_eq!(message(&app), ("No categories found!", MessageLevel::Error));
}

#[test]
fn escape_cancels_add() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('1'));
    type_text(&mut app, "Draft");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.mode, Mode::Menu);
    assert!(app.store.is_empty());
    assert!(app.draft.title.is_empty());
}

#[test]
fn invalid_menu_choice_and_exit() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(
        message(&app),
        ("Invalid choice! Please try again.", MessageLevel::Error)
    );
    assert!(app.running);

    press(&mut app, KeyCode::Char('5'));
    assert!(!app.running);
}

#[test]
fn ctrl_c_exits_from_any_screen() {
    let mut app = App::new(TaskStore::new());
    press(&mut app, KeyCode::Char('2'));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}
