use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use ulsim_config::SimConfig;
use ulsim_hss::UlrHandler;
use ulsim_mme::UlrClient;
use ulsim_session::SessionCorrelator;
use ulsim_sim::LoopbackStack;

#[tokio::main]
async fn main() {
    // Optional config file; defaults mirror the classic example exchange
    let config: SimConfig = match std::env::var("ULSIM_CONFIG") {
        Ok(path) => match ulsim_config::load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load configuration from {path}: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => SimConfig::default(),
    };

    ulsim_logging::init_pretty(&config.log_level.0);
    ulsim_metrics::register_metrics();

    info!(
        service = "ulsim",
        version = env!("CARGO_PKG_VERSION"),
        "Starting Update-Location simulator"
    );

    // Each role owns its own correlator; only the client side keeps a
    // pending request across the exchange
    let client_sessions = Arc::new(SessionCorrelator::new());
    let server_sessions = Arc::new(SessionCorrelator::new());

    let handler = Arc::new(UlrHandler::new(config.server.clone(), server_sessions));
    let stack = Arc::new(LoopbackStack::new(
        handler,
        Arc::clone(&client_sessions),
        Duration::from_millis(config.client.request_timeout_ms),
    ));
    let client = UlrClient::new(stack, client_sessions, config.client.clone());

    if config.client.startup_delay_ms > 0 {
        info!(
            delay_ms = config.client.startup_delay_ms,
            "waiting before first send"
        );
        tokio::time::sleep(Duration::from_millis(config.client.startup_delay_ms)).await;
    }

    let (outcome_tx, outcome_rx) = tokio::sync::oneshot::channel();
    let send_result = client
        .send_ulr(move |outcome| {
            let _ = outcome_tx.send(outcome);
        })
        .await;

    if let Err(err) = send_result {
        error!(error = %err, "failed to send ULR");
        std::process::exit(1);
    }

    match outcome_rx.await {
        Ok(outcome) => info!(?outcome, "exchange complete"),
        Err(_) => error!("exchange callback dropped without an outcome"),
    }
}
