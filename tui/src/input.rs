//! Input handling for the emotion analyzer TUI.

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
use unicode_segmentation::UnicodeSegmentation;

use emotion_engine::{Analyze, App};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
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

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a backpressured send in the input thread unblocks.
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
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure instead of dropping: a long paste must arrive intact.
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

/// Drain pending terminal events into `app`. Returns `true` once the app wants to quit.
pub fn handle_events<C>(app: &mut App<C>, input: &mut InputPump) -> Result<bool>
where
    C: Analyze + Send + Sync + 'static,
{
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

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event<C>(app: &mut App<C>, ev: Event) -> bool
where
    C: Analyze + Send + Sync + 'static,
{
    match ev {
        Event::Key(key) => apply_key(app, key),
        Event::Paste(text) => {
            append_text(app, &normalize_line_endings(&text));
            false
        }
        _ => false,
    }
}

fn apply_key<C>(app: &mut App<C>, key: KeyEvent) -> bool
where
    C: Analyze + Send + Sync + 'static,
{
    if key.kind == KeyEventKind::Release {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char('c') if ctrl => app.request_quit(),
        KeyCode::Char('t') if ctrl => app.toggle_theme(),
        KeyCode::Char('u') if ctrl => app.update_input(String::new()),
        KeyCode::Char('j') if ctrl => append_text(app, "\n"),
        KeyCode::Enter if alt || ctrl => append_text(app, "\n"),
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => {
            let text = app.input();
            if let Some((idx, _)) = text.grapheme_indices(true).next_back() {
                let trimmed = text[..idx].to_string();
                app.update_input(trimmed);
            }
        }
        KeyCode::Tab => append_text(app, "\t"),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut buf = [0u8; 4];
            append_text(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }

    app.should_quit()
}

fn append_text<C>(app: &mut App<C>, addition: &str)
where
    C: Analyze + Send + Sync + 'static,
{
    if addition.is_empty() {
        return;
    }
    let mut text = String::with_capacity(app.input().len() + addition.len());
    text.push_str(app.input());
    text.push_str(addition);
    app.update_input(text);
}
