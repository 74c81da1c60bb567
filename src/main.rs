mod common;
mod config;
mod network;
mod ui;

use std::error::Error;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use network::ReplyClient;
use tokio::sync::mpsc;
use ui::{ChatApp, ChatController, ChatView, ConsoleView};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "healthbot-chat",
    version,
    about = "Health assistant chat window with offline demo answers"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the reply endpoint from the config file
    #[arg(long, env = "HEALTHBOT_ENDPOINT", value_name = "URL")]
    endpoint: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Send one message without opening a window and print the exchange
    Ask {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Write the default config to the --config path
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(endpoint) = cli.endpoint {
        app_config.endpoint = endpoint;
    }

    match cli.mode {
        Some(Mode::Ask { message }) => run_headless(&app_config, &message.join(" ")).await,
        Some(Mode::InitConfig) => {
            config::save_config(&cli.config, &app_config)?;
            log::info!("Wrote default config to {}", cli.config);
            Ok(())
        }
        None => run_window(app_config).map_err(Into::into),
    }
}

fn spawn_reply_worker(
    endpoint: &str,
) -> (
    mpsc::Sender<common::NetworkCommand>,
    mpsc::Receiver<common::NetworkEvent>,
) {
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let client = ReplyClient::new(event_tx, cmd_rx, endpoint);
    tokio::spawn(async move {
        if let Err(err) = client.run().await {
            log::error!("Reply worker terminated: {err}");
        }
    });

    (cmd_tx, event_rx)
}

async fn run_headless(app_config: &AppConfig, message: &str) -> Result<(), Box<dyn Error>> {
    let (cmd_tx, mut event_rx) = spawn_reply_worker(&app_config.endpoint);
    let mut controller = ChatController::new(ConsoleView::stdout(), cmd_tx);

    controller.view_mut().set_input_text(message);
    controller.send_message();

    while controller.is_awaiting_reply() {
        let Some(event) = event_rx.recv().await else {
            return Err("reply worker stopped before answering".into());
        };
        controller.handle_event(event);
    }

    Ok(())
}

fn run_window(app_config: AppConfig) -> Result<(), eframe::Error> {
    let (cmd_tx, event_rx) = spawn_reply_worker(&app_config.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app_config.window_title.clone())
            .with_inner_size([420.0, 640.0]),
        ..Default::default()
    };
    let mut event_rx = Some(event_rx);
    let window_title = app_config.window_title.clone();

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Chat window started (endpoint: {})", app_config.endpoint);

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                &app_config,
            )))
        }),
    )
}
