use crate::app::{App, MessageLevel, Mode};
use crate::task::{Segment, Task};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Write};

const MENU: [&str; 5] = [
    "1. Add todo",
    "2. Mark as done",
    "3. Delete todo",
    "4. Filter by category",
    "5. Exit",
];

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while app.running {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

/// Leaves raw mode and the alternate screen and shows the cursor again.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Restores the terminal before any previously installed panic hook runs,
/// so the panic report lands on the normal screen.
pub fn install_restore_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut io::stdout());
        previous_hook(panic_info);
    }));
}

pub fn draw(f: &mut Frame, app: &App) {
    let footer = footer_lines(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(footer.len() as u16),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(app.title())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(header, chunks[0]);

    draw_body(f, app, chunks[1]);
    f.render_widget(Paragraph::new(footer), chunks[2]);

    if let Some(message) = &app.message {
        let color = match message.level {
            MessageLevel::Info => Color::Green,
            MessageLevel::Error => Color::Red,
        };
        let status = Paragraph::new(message.text.as_str()).style(Style::default().fg(color));
        f.render_widget(status, chunks[3]);
    }
}

fn draw_body(f: &mut Frame, app: &App, area: Rect) {
    match &app.mode {
        Mode::AddCategory | Mode::AddTags | Mode::FilterSelect { .. } => {
            let marks = &app.draft.tag_marks;
            let items: Vec<ListItem> = app
                .options()
                .into_iter()
                .enumerate()
                .map(|(i, option)| {
                    let text = if app.mode == Mode::AddTags {
                        let mark = if marks.get(i).copied().unwrap_or(false) {
                            "[x]"
                        } else {
                            "[ ]"
                        };
                        format!("{}. {} {}", i + 1, mark, option)
                    } else {
                        format!("{}. {}", i + 1, option)
                    };
                    ListItem::new(text)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(app.selected));
            f.render_stateful_widget(list, area, &mut state);
        }
        Mode::FilterResults {
            category: Some(category),
        } => render_tasks(f, app.store.tasks_by_category(category), area),
        _ => render_tasks(f, app.store.list_all().iter().collect(), area),
    }
}

fn render_tasks(f: &mut Frame, tasks: Vec<&Task>, area: Rect) {
    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Span::styled(
            "No todos.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        tasks.into_iter().map(|t| ListItem::new(task_line(t))).collect()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, area);
}

fn task_line(task: &Task) -> Line<'static> {
    let title_style = if task.is_completed() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let spans: Vec<Span> = task
        .segments()
        .into_iter()
        .map(|(segment, text)| match segment {
            Segment::Prefix | Segment::Date => Span::raw(text),
            Segment::Title => Span::styled(text, title_style),
            Segment::Category => Span::styled(text, Style::default().fg(Color::Cyan)),
            Segment::Tags => Span::styled(text, Style::default().fg(Color::Yellow)),
        })
        .collect();
    Line::from(spans)
}

fn footer_lines(app: &App) -> Vec<Line<'static>> {
    let prompt = |label: &str| Line::from(format!("{}{}_", label, app.input));
    match &app.mode {
        Mode::Menu => {
            let mut lines: Vec<Line> = MENU.iter().map(|item| Line::from(*item)).collect();
            lines.push(Line::from("Choice: "));
            lines
        }
        Mode::AddTitle => vec![prompt("Enter todo title: ")],
        Mode::Complete => vec![prompt("Enter todo ID: ")],
        Mode::Delete => vec![prompt("Enter todo ID to delete: ")],
        Mode::AddCategory => vec![
            Line::from("Select a category:"),
            Line::from("Up/Down or number, Enter to confirm, Esc to cancel"),
        ],
        Mode::AddTags => vec![
            Line::from("Select tags (multiple allowed):"),
            Line::from("Space or number toggles, Enter to confirm, Esc to cancel"),
        ],
        Mode::FilterSelect { .. } => vec![
            Line::from("Select a category to filter by:"),
            Line::from("Up/Down or number, Enter to confirm, Esc to cancel"),
        ],
        Mode::FilterResults { .. } => {
            vec![Line::from("Press any key to return to main menu...")]
        }
    }
}
