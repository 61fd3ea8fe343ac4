use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Binds the configured address and serves connections until the process
/// is shut down.
pub async fn run(cfg: Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg).await
}

/// Accept loop: one task per connection, bounded by a semaphore so a burst
/// of clients cannot spawn workers without limit.
pub async fn serve(listener: TcpListener, cfg: Config) -> anyhow::Result<()> {
    let router = Arc::new(Router::new(cfg.files.directory.clone()));
    let limit = Arc::new(Semaphore::new(cfg.server.max_connections));

    loop {
        let permit = limit.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = router.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}
