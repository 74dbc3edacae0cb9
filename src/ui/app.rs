//! Main application state and UI loop
//!
//! Contains the App struct, which re-renders whenever the store pushes a new
//! state, and the terminal event handling around it.

use crate::loader::LoadOutcome;
use crate::session::Mount;
use crate::store::ViewState;
use crate::ui::dashboard::render_dashboard;
use crate::ui::error::render_error;
use crate::ui::splash::render_loading;
use crate::ui::view::{View, build};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use log::info;
use ratatui::{Frame, Terminal, backend::Backend};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The mounted dashboard: store subscription plus the load attempt.
    mount: Mount,

    ui_config: UIConfig,

    /// Last state received from the store.
    state: ViewState,

    /// Visual tree built from `state`.
    view: View,

    /// No further state changes will arrive.
    settled: bool,
}

impl App {
    pub fn new(mount: Mount, ui_config: UIConfig) -> Self {
        let state = mount.subscription().current();
        let view = build(&state);
        Self {
            settled: state.is_terminal(),
            mount,
            ui_config,
            state,
            view,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, next: ViewState) {
        info!("view state changed: {} -> {}", self.state, next);
        self.settled = next.is_terminal();
        self.view = build(&next);
        self.state = next;
    }

    /// Tears the dashboard down, cancelling the load if it is still pending.
    pub async fn unmount(self) -> LoadOutcome {
        self.mount.unmount().await
    }
}

/// Runs the application UI until the user quits, then unmounts.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> std::io::Result<LoadOutcome> {
    let mut events = EventStream::new();
    terminal.draw(|f| render(f, &app.view, &app.ui_config))?;

    loop {
        tokio::select! {
            next = app.mount.subscription_mut().changed(), if !app.settled => {
                match next {
                    Some(next) => {
                        app.apply(next);
                        terminal.draw(|f| render(f, &app.view, &app.ui_config))?;
                    }
                    // Store is gone; what we have is final
                    None => app.settled = true,
                }
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => {
                        // Skip events that are not KeyEventKind::Press
                        if key.kind == KeyEventKind::Release {
                            continue;
                        }
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            break;
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        terminal.draw(|f| render(f, &app.view, &app.ui_config))?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => break,
                }
            }
        }
    }

    Ok(app.unmount().await)
}

/// Renders the visual tree.
pub fn render(f: &mut Frame, view: &View, ui_config: &UIConfig) {
    match view {
        View::Loading { caption } => render_loading(f, caption),
        View::Error { title, message } => render_error(f, title, message),
        View::Ready(dashboard) => {
            render_dashboard(f, dashboard, ui_config.with_background_color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{SimulatedProvider, sample_app_data};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use std::sync::Arc;
    use std::time::Duration;

    fn draw(view: &View) -> Buffer {
        let backend = TestBackend::new(160, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, view, &UIConfig::new(false)))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(needle))
    }

    #[test]
    fn test_loading_screen_shows_indicator_only() {
        let rows = rows(&draw(&build(&ViewState::Loading)));

        assert!(row_of(&rows, "Loading AI-Powered Finance Management System...").is_some());
        assert!(row_of(&rows, "Total Items").is_none());
        assert!(row_of(&rows, "Monthly Performance Metrics").is_none());
    }

    #[test]
    fn test_ready_screen_shows_cards_chart_and_features() {
        let state = ViewState::Ready(Arc::new(sample_app_data()));
        let rows = rows(&draw(&build(&state)));

        for value in ["1,250", "892", "23.5%", "94.2%"] {
            assert!(row_of(&rows, value).is_some(), "missing card value {value}");
        }
        assert!(row_of(&rows, "Monthly Performance Metrics").is_some());
        assert!(row_of(&rows, "Performance Trends").is_some());

        let feature_rows: Vec<usize> = crate::ui::view::FEATURES
            .iter()
            .map(|feature| row_of(&rows, feature).expect("feature rendered"))
            .collect();
        assert!(feature_rows.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_error_screen_shows_message_only() {
        let state = ViewState::Error("network down".to_string());
        let rows = rows(&draw(&build(&state)));

        assert!(row_of(&rows, "network down").is_some());
        assert!(row_of(&rows, "Error Loading Application").is_some());
        assert!(row_of(&rows, "Total Items").is_none());
        assert!(row_of(&rows, "Monthly Performance Metrics").is_none());
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let state = ViewState::Ready(Arc::new(sample_app_data()));
        let first = draw(&build(&state));
        let second = draw(&build(&state));
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_app_starts_loading_and_applies_ready() {
        let provider = SimulatedProvider::succeeding(Duration::from_millis(1500));
        let mut app = App::new(Mount::new(Arc::new(provider)), UIConfig::new(false));
        assert!(matches!(app.view(), View::Loading { .. }));
        assert!(!app.settled);

        let next = app.mount.subscription_mut().changed().await.unwrap();
        app.apply(next);

        assert!(app.settled);
        assert!(matches!(app.view(), View::Ready(_)));
        assert_eq!(app.unmount().await, LoadOutcome::Ready);
    }
}
