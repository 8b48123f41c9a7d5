//! Input handling for the Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use folio_engine::SectionId;

use crate::{Page, PageView, PageViewport};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256;
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const WHEEL_ROWS: i32 = 3;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Polls crossterm on a blocking thread and hands events to the frame loop.
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
        // Close the receiver first so a send blocked on capacity returns.
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
        // Best-effort stop; never block in Drop.
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

/// Drain pending input into page actions. Returns `true` when the user quit.
pub fn handle_events(
    page: &mut Page,
    view: &mut PageView,
    input: &mut InputPump,
) -> Result<bool> {
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

        if apply_event(page, view, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

pub(crate) fn apply_event(page: &mut Page, view: &mut PageView, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return false;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }
            if view.has_menu() && page.navigation().menu_open && handle_menu_key(page, view, key)
            {
                return false;
            }
            handle_page_key(page, view, key)
        }
        Event::Mouse(MouseEvent { kind, .. }) => {
            match kind {
                MouseEventKind::ScrollUp => manual_scroll(page, |v| v.scroll_by(-WHEEL_ROWS)),
                MouseEventKind::ScrollDown => manual_scroll(page, |v| v.scroll_by(WHEEL_ROWS)),
                _ => {}
            }
            false
        }
        Event::Resize(width, _) => {
            view.set_width(width);
            if !view.has_menu() && page.navigation().menu_open {
                debug!(width, "Viewport above breakpoint, closing menu");
                page.on_close_menu();
            }
            false
        }
        _ => false,
    }
}

/// Keys with a meaning inside the open menu. Returns `true` when consumed.
fn handle_menu_key(page: &mut Page, view: &mut PageView, key: KeyEvent) -> bool {
    let entries = page.content().nav.len() + 1;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => view.move_menu_cursor(-1, entries),
        KeyCode::Down | KeyCode::Char('j') => view.move_menu_cursor(1, entries),
        KeyCode::Enter => {
            let cursor = view.menu_cursor();
            match page.content().nav.get(cursor).map(|item| item.id) {
                Some(id) => page.on_nav_click(id.as_str()),
                // Past the nav items sits the theme toggle.
                None => {
                    page.on_toggle_theme();
                }
            }
        }
        KeyCode::Esc => page.on_close_menu(),
        _ => return false,
    }
    true
}

fn handle_page_key(page: &mut Page, view: &mut PageView, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if let Some(id) = page.content().nav.get(index).map(|item| item.id) {
                page.on_nav_click(id.as_str());
            }
        }
        KeyCode::Char(c @ ('h' | 'a' | 's' | 'p' | 'c')) => {
            let id = match c {
                'h' => SectionId::Home,
                'a' => SectionId::About,
                's' => SectionId::Skills,
                'p' => SectionId::Projects,
                _ => SectionId::Contact,
            };
            page.on_nav_click(id.as_str());
        }
        KeyCode::Tab => {
            let next = page.navigation().active.next();
            page.on_nav_click(next.as_str());
        }
        KeyCode::BackTab => {
            let prev = page.navigation().active.prev();
            page.on_nav_click(prev.as_str());
        }
        KeyCode::Char('t') => {
            page.on_toggle_theme();
        }
        KeyCode::Char('m') if view.has_menu() => {
            if !page.navigation().menu_open {
                let active = page.navigation().active;
                let cursor = page
                    .content()
                    .nav
                    .iter()
                    .position(|item| item.id == active)
                    .unwrap_or(0);
                view.reset_menu_cursor();
                view.move_menu_cursor(cursor as isize, page.content().nav.len() + 1);
            }
            page.on_toggle_menu();
        }
        KeyCode::Char('g') => page.on_get_in_touch(),
        KeyCode::Up | KeyCode::Char('k') => manual_scroll(page, |v| v.scroll_by(-1)),
        KeyCode::Down | KeyCode::Char('j') => manual_scroll(page, |v| v.scroll_by(1)),
        KeyCode::PageUp => {
            let rows = page_rows(page);
            manual_scroll(page, |v| v.scroll_by(-rows));
        }
        KeyCode::PageDown => {
            let rows = page_rows(page);
            manual_scroll(page, |v| v.scroll_by(rows));
        }
        KeyCode::Home => manual_scroll(page, PageViewport::scroll_to_top),
        KeyCode::End => manual_scroll(page, PageViewport::scroll_to_bottom),
        _ => {}
    }
    false
}

fn page_rows(page: &Page) -> i32 {
    i32::from(page.viewport().height().saturating_sub(2).max(1))
}

/// Scroll by hand, then let the nav indicator follow what is on screen.
fn manual_scroll(page: &mut Page, scroll: impl FnOnce(&mut PageViewport)) {
    scroll(page.viewport_mut());
    if let Some(section) = page.viewport().section_in_view() {
        page.on_scrolled_to(section);
    }
}
