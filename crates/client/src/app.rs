//! Pumps runtime events, user input, and rendering for the TUI client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{self, Duration};

use game_core::FighterSlot;
use runtime::{SessionEvent, SessionHandle, SessionView};

use crate::presentation::{terminal::Tui, ui};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    handle: SessionHandle,
    event_rx: broadcast::Receiver<SessionEvent>,
}

impl App {
    pub fn new(handle: SessionHandle) -> Self {
        let event_rx = handle.subscribe();
        Self { handle, event_rx }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        // The first snapshot queues behind the worker's initial fetch,
        // so draw the loading screen from a blank view until it lands.
        ui::render(terminal, &SessionView::default())?;
        self.refresh_view(terminal).await?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    if self.handle_runtime_channel(result, terminal).await? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_runtime_channel(
        &mut self,
        result: Result<SessionEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(_) => {
                // Drain whatever else queued up and draw once.
                while self.event_rx.try_recv().is_ok() {}
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key).await,
            Event::Resize(_, _) => {
                self.refresh_view(terminal).await?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('1') => self.handle.select_fighter(FighterSlot::First).await,
            KeyCode::Char('2') => self.handle.select_fighter(FighterSlot::Second).await,
            KeyCode::Enter => self.handle.start_battle().await,
            KeyCode::Char('n') => self.handle.new_battle().await,
            KeyCode::Char('r') => self.handle.replay().await,
            KeyCode::Char('x') => self.handle.reset_ledger().await,
            _ => return Ok(false),
        };

        if result.is_err() {
            tracing::error!("Command channel closed");
            return Ok(true);
        }
        Ok(false)
    }

    async fn refresh_view(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = self.handle.snapshot().await?;
        ui::render(terminal, &view)
    }
}
