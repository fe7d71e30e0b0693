//! Input handling for the Folio page.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::App;

use crate::clipboard::Clipboards;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to one frame's worth of input. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump, clipboards: &mut Clipboards) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev, clipboards) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Page actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    RestartHero,
    ToggleMotion,
    CopyEmail,
    NextSection,
}

#[must_use]
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::PageDown),
            KeyCode::Char('u') => Some(Action::PageUp),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::Top,
        KeyCode::Char('G') | KeyCode::End => Action::Bottom,
        KeyCode::Char('r') => Action::RestartHero,
        KeyCode::Char('m') => Action::ToggleMotion,
        KeyCode::Char('c') => Action::CopyEmail,
        KeyCode::Tab => Action::NextSection,
        _ => return None,
    };
    Some(action)
}

/// Apply one action. Returns `true` when the app should quit.
pub fn apply_action(app: &mut App, action: Action, clipboards: &mut Clipboards) -> bool {
    match action {
        Action::Quit => app.request_quit(),
        Action::ScrollDown => app.scroll_by(1),
        Action::ScrollUp => app.scroll_by(-1),
        Action::PageDown => app.page_down(),
        Action::PageUp => app.page_up(),
        Action::Top => app.scroll_to_top(),
        Action::Bottom => app.scroll_to_bottom(),
        Action::RestartHero => app.restart_hero(),
        Action::ToggleMotion => app.toggle_reduced_motion(),
        Action::CopyEmail => {
            let copied = app.copy_email(
                clipboards.primary.as_mut(),
                clipboards.fallback.as_mut(),
            );
            debug!(copied, "Copy email");
        }
        Action::NextSection => jump_to_next_section(app),
    }
    app.should_quit()
}

fn jump_to_next_section(app: &mut App) {
    let ids: Vec<String> = app.nav_sections().map(str::to_string).collect();
    let current = app
        .active_section()
        .and_then(|active| ids.iter().position(|id| id == active));
    let next = match current {
        Some(index) => (index + 1) % ids.len().max(1),
        None => 0,
    };
    if let Some(id) = ids.get(next) {
        app.jump_to_section(id);
    }
}

fn apply_event(app: &mut App, ev: &Event, clipboards: &mut Clipboards) -> bool {
    match ev {
        Event::Key(key) => match action_for_key(key) {
            Some(action) => apply_action(app, action, clipboards),
            None => false,
        },
        Event::Resize(width, height) => {
            app.resize(*width, height.saturating_sub(crate::CHROME_ROWS));
            false
        }
        _ => false,
    }
}
