//! CLI subcommand implementations.

pub mod nations;
pub mod overview;
pub mod states;

use population_lib::CancellationToken;

/// Token that fires on Ctrl-C, dropping any in-flight request.
pub fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling requests");
            child.cancel();
        }
    });
    token
}
