use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app_core::{AppCore, DataEventHandler};
use crate::background::{snippet_loader::SnippetLoader, BackgroundTaskManager};
use crate::commands::executor;
use crate::config::Settings;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::log_buffer::LogBuffer;
use crate::logging::init_logging;
use crate::state::tag_filter::PanelVisibility;
use crate::state::{AppState, SnippetsState};
use crate::ui::screens::Screen;

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Production command handler: spawns loads on the tokio runtime
struct BackgroundHandler {
    task_manager: BackgroundTaskManager,
    loader: SnippetLoader,
}

impl DataEventHandler for BackgroundHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command(command, state, &mut self.task_manager, &self.loader);
    }
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_buffer = LogBuffer::new(5000);
        let (log_path, _log_guard) = init_logging(log_buffer.clone(), &self.settings.log_level)?;

        tracing::info!("snipt starting, logging to {}", log_path.display());

        let (data_tx, data_rx) = mpsc::unbounded_channel();
        let handler = BackgroundHandler {
            task_manager: BackgroundTaskManager::new(),
            loader: SnippetLoader::new(self.settings.snippets_dir.clone(), data_tx),
        };

        let visibility = if self.settings.start_with_tags_expanded {
            PanelVisibility::Expanded
        } else {
            PanelVisibility::Collapsed
        };
        let mut core = AppCore::with_state(
            AppState::with_snippets(SnippetsState::new(visibility)),
            handler,
        );

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal, &mut core, data_rx, &log_buffer).await;

        tracing::info!("Cleaning up application");
        // Dropping the core aborts any background loads still running
        drop(core);
        self.exit(terminal)?;

        result
    }

    async fn event_loop(
        &self,
        terminal: &mut Tui,
        core: &mut AppCore<BackgroundHandler>,
        mut data_rx: mpsc::UnboundedReceiver<DataEvent>,
        log_buffer: &LogBuffer,
    ) -> Result<()> {
        core.execute(AppCommand::LoadSnippets);

        let mut event_stream = EventStream::new();
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));

        tracing::info!("Entering main event loop");

        loop {
            // Update total_entries for logs screen if active
            if let Screen::Logs(logs_state) = core.state_mut().current_screen_mut() {
                logs_state.total_entries = log_buffer.len();
            }

            terminal.draw(|f| {
                crate::ui::render_app(f, core.state(), log_buffer);
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    if let Some(throbber_state) = core.state_mut().loading_state() {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            // Don't log when on logs screen to avoid feedback loop
                            if !matches!(core.state().current_screen(), Screen::Logs(_)) {
                                tracing::debug!("Key press: {:?}", key);
                            }
                            core.handle_key(KeyEvent::from(key));
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event");
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                return Ok(());
            }
        }
    }

    fn init(&self) -> Result<Tui, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(&self, mut terminal: Tui) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
