use crate::backend::BackendClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::geocode::GeocodeClient;
use crate::logger::{self, LogBuffer};
use crate::resolution::{AddressResolutionFlow, QuickStart};
use crate::state::{Route, State};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration,
    /// landing on the given route. Returns the result of the application
    /// execution.
    ///
    pub async fn start(config: Config, route: Route) -> Result<()> {
        let log = LogBuffer::default();
        logger::init(config.log_level_filter()?, log.clone()).map_err(AppError::from)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                log,
                &config.default_address,
                route,
            ))),
            config,
        };
        let handler = app.mount_flows().await?;
        app.start_network(rx, handler);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Build the service clients and mount the resolution flows on state.
    ///
    async fn mount_flows(&self) -> AppResult<NetworkEventHandler> {
        let geocoder = Arc::new(GeocodeClient::new(
            &self.config.geocoder_url,
            &self.config.user_agent,
            &self.config.country_codes,
        )?);
        let backend = Arc::new(BackendClient::new(&self.config.backend_url)?);
        let flow = AddressResolutionFlow::mount(
            &self.state,
            geocoder,
            backend.clone(),
            self.config.failure_policy(),
        )
        .await;
        let quick_start = QuickStart::new(&self.state, backend);
        Ok(NetworkEventHandler::new(flow, quick_start))
    }

    /// Start a separate thread for asynchronous state mutations. Each event
    /// runs as its own task so a slow lookup never blocks the queue.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, handler: NetworkEventHandler) {
        debug!("Creating new thread for asynchronous networking...");
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                while let Ok(network_event) = net_receiver.recv() {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handler.handle(network_event).await {
                            error!("Failed to handle network event: {}", e);
                        }
                    });
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        terminal.hide_cursor()?;

        let result = self.render_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn render_loop(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal
                .draw(|frame| crate::ui::render(frame, &state))
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
