use std::net::{Ipv4Addr, SocketAddr};
use clap::Parser;
use lambda_http::{run, Error};
use tracing::info;
use bookshelf::catalog::router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::gateway::GatewayPublisherVia;
use bookshelf::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(short, long, env = "BOOKS_PORT", default_value_t = 3000)]
    port: u16,
    /// Serve through the Lambda runtime API instead of a local listener
    #[arg(long)]
    lambda: bool,
    #[arg(long, env = "BOOKS_BRANCH", default_value = "main")]
    branch: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    setup_tracing(cli.lambda);

    let config = Configuration::from_env(cli.branch.as_str());
    info!(id_assignment = %config.id_assignment, immutable_ids = config.immutable_ids, "starting catalog");
    let state = AppState::new(config, RepositoryStore::Seeded, GatewayPublisherVia::Logs);

    if cli.lambda {
        run(router(state)).await
    } else {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cli.port));
        info!("listening on {}", addr);
        let app = router(state);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }
}
