use crate::client::{ClientConfig, RailwayClient};
use crate::errors::ServerError;
use crate::server_handler::RailwayMcpServerHandler;
use bon::bon;
use rmcp::ServiceExt as _;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::{StreamableHttpService, stdio};
use schemars::JsonSchema;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument as _, error, info};

/// A Railway MCP Server
pub struct Server {
    transport: Transport,
    client_config: ClientConfig,
    read_only: bool,
}

/// The transport the MCP server is reachable over
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transport {
    /// Use standard IO for server <> client communication
    #[default]
    Stdio,

    /// Host the MCP server on the configuration, using streamable HTTP messages
    StreamableHttp {
        /// The IP address to bind to
        #[serde(default = "defaults::address")]
        address: IpAddr,

        /// The port to bind to
        #[serde(default = "defaults::port")]
        port: u16,
    },
}

#[bon]
impl Server {
    #[builder]
    pub fn new(
        transport: Transport,
        client_config: ClientConfig,
        #[builder(default)] read_only: bool,
    ) -> Self {
        Self {
            transport,
            client_config,
            read_only,
        }
    }

    /// Open the Railway session, verify the token and serve until the transport finishes
    pub async fn start(self) -> Result<(), ServerError> {
        let Self {
            transport,
            client_config,
            read_only,
        } = self;
        let client = Arc::new(RailwayClient::new(client_config));
        let handler = RailwayMcpServerHandler::new(Arc::clone(&client), read_only);

        let result = authenticate_and_serve(&client, handler, transport).await;

        client.close().await;
        result
    }
}

async fn authenticate_and_serve(
    client: &RailwayClient,
    handler: RailwayMcpServerHandler,
    transport: Transport,
) -> Result<(), ServerError> {
    client.connect().await?;
    let user = client.verify_token().await?;
    info!(
        user = user.name.as_deref().unwrap_or_default(),
        "Authenticated with Railway"
    );

    serve(handler, transport).await
}

async fn serve(handler: RailwayMcpServerHandler, transport: Transport) -> Result<(), ServerError> {
    match transport {
        Transport::StreamableHttp { address, port } => {
            info!(port = ?port, address = ?address, "Starting MCP server in Streamable HTTP mode");
            let listen_address = SocketAddr::new(address, port);
            let service = StreamableHttpService::new(
                move || Ok(handler.clone()),
                LocalSessionManager::default().into(),
                Default::default(),
            );
            let router = axum::Router::new().nest_service("/mcp", service);
            let tcp_listener = tokio::net::TcpListener::bind(listen_address).await?;

            let cancellation_token = CancellationToken::new();
            let ct = cancellation_token.child_token();
            let axum_server = axum::serve(tcp_listener, router).with_graceful_shutdown(async move {
                ct.cancelled().await;
                info!("MCP server cancelled");
            });
            tokio::spawn(async move {
                shutdown_signal().await;
                cancellation_token.cancel();
            });

            tokio::spawn(
                async move {
                    if let Err(e) = axum_server.await {
                        error!(error = %e, "MCP server shutdown with error");
                    }
                }
                .instrument(tracing::info_span!("mcp-server", bind_address = %listen_address)),
            )
            .await?;
        }
        Transport::Stdio => {
            info!("Starting MCP server in stdio mode");
            let service = handler
                .serve(stdio())
                .await
                .inspect_err(|e| {
                    error!("serving error: {:?}", e);
                })
                .map_err(|e| ServerError::McpInitialize(e.to_string()))?;
            service.waiting().await?;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install CTRL+C signal handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub(super) fn address() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    pub(super) const fn port() -> u16 {
        8000
    }
}
