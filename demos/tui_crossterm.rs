//! Terminal UI example using crossterm and ratatui.
//!
//! This example demonstrates how to put submit_jp behind a chat-style input line.
//! Terminals compose IME text themselves and deliver only committed characters,
//! so here the controller mostly decides which modifier combo submits.
//! Run with: cargo run --example tui_crossterm

use crossterm::{
    event::{
        self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::cell::RefCell;
use std::convert::Infallible;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use submit_jp::{
    Controller, KeyCode, KeyCombo, KeyDisposition, KeyEvent, Modifiers, SubmitEvent,
    SubmitSource, traits::SubmitTarget,
};

const COMBO_CYCLE: [KeyCombo; 4] = [
    KeyCombo::Enter,
    KeyCombo::CmdEnter,
    KeyCombo::CtrlEnter,
    KeyCombo::ShiftEnter,
];

/// The message form: a draft line plus the posted history
#[derive(Default)]
struct ChatForm {
    draft: Rc<RefCell<String>>,
    messages: Rc<RefCell<Vec<String>>>,
    pending: Vec<SubmitEvent>,
}

impl SubmitTarget for ChatForm {
    type Error = Infallible;

    fn request_submit(&mut self, source: SubmitSource) -> Result<(), Self::Error> {
        self.pending.push(SubmitEvent::new(source));
        Ok(())
    }
}

struct App {
    controller: Controller,
    form: ChatForm,
    combo_index: usize,
    status: String,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        let form = ChatForm::default();
        let draft = form.draft.clone();
        let messages = form.messages.clone();

        let controller = Controller::builder()
            .submit_keys([COMBO_CYCLE[0]])
            .on_submit(move |event| {
                event.prevent_default();
                let text = std::mem::take(&mut *draft.borrow_mut());
                if !text.trim().is_empty() {
                    messages.borrow_mut().push(text);
                }
            })
            .build();

        Self {
            controller,
            form,
            combo_index: 0,
            status: "Type a message".to_string(),
            should_quit: false,
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        match event.code {
            CKeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            CKeyCode::F(2) => {
                self.combo_index = (self.combo_index + 1) % COMBO_CYCLE.len();
                self.controller
                    .set_submit_keys([COMBO_CYCLE[self.combo_index]]);
                return;
            }
            _ => {}
        }

        let mut key_event = convert_crossterm_event(event);
        let disposition = match self.controller.on_key_down(&mut self.form, &mut key_event) {
            Ok(disposition) => disposition,
            Err(never) => match never {},
        };

        // Deliver queued submissions like a browser dispatches `submit`
        for mut submit in self.form.pending.drain(..) {
            self.controller.on_submit(&mut submit);
        }

        if disposition.prevents_default() {
            self.status = "Sent".to_string();
            return;
        }

        match (disposition, event.code) {
            (KeyDisposition::NoMatch, CKeyCode::Enter) => {
                self.form.draft.borrow_mut().push('\n');
                self.status = "Newline".to_string();
            }
            (_, CKeyCode::Char(c)) => self.form.draft.borrow_mut().push(c),
            (_, CKeyCode::Backspace) => {
                self.form.draft.borrow_mut().pop();
            }
            _ => {}
        }
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> KeyEvent {
    let code = match event.code {
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Char(c) => KeyCode::Char(c),
        _ => KeyCode::Other,
    };

    let mods = Modifiers::from_flags(
        event.modifiers.contains(KeyModifiers::CONTROL),
        event.modifiers.contains(KeyModifiers::SUPER),
        event.modifiers.contains(KeyModifiers::SHIFT),
        event.modifiers.contains(KeyModifiers::ALT),
    );

    // Composition happens inside the terminal; nothing reaches us mid-IME
    KeyEvent::new(code, mods)
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(5), Constraint::Length(3)].as_ref())
        .split(f.size());

    let history: Vec<Line> = app
        .form
        .messages
        .borrow()
        .iter()
        .map(|m| Line::from(format!("> {}", m.replace('\n', " / "))))
        .collect();
    let history = Paragraph::new(history).block(
        Block::default()
            .borders(Borders::ALL)
            .title("submit_jp demo"),
    );
    f.render_widget(history, chunks[0]);

    let draft = app.form.draft.borrow().clone();
    let lines: Vec<Line> = draft.split('\n').map(|l| Line::from(l.to_string())).collect();
    let input = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Message (submit: {})", COMBO_CYCLE[app.combo_index])),
    );
    f.render_widget(input, chunks[1]);

    let status = Paragraph::new(format!("{} | F2: change submit key | Esc: quit", app.status))
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    let last_line = draft.split('\n').next_back().unwrap_or("");
    let row = draft.matches('\n').count() as u16;
    f.set_cursor(
        chunks[1].x + 1 + last_line.chars().count() as u16,
        chunks[1].y + 1 + row,
    );
}

fn main() -> Result<(), io::Error> {
    // The screen belongs to ratatui, so decisions are logged to a file
    let log = std::fs::File::create("tui_crossterm.log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Ask for modifier reporting on Enter where the terminal supports it
    let _ = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    );
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_crossterm_event(key);

            if app.should_quit {
                break;
            }
        }
    }

    // Restore terminal
    let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
