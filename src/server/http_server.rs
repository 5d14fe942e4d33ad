//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::signal;
use log::{debug, error, info, warn};

use crate::parser::{parse_request_line, parse_strict_request_line, Error as ParserError};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::StaticFileResponder;
use crate::server::response::{HttpResponse, StatusCode};

/// A static file server.
///
/// Connections are handled strictly one after another: each is read,
/// answered and closed before the next one is accepted.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    responder: StaticFileResponder,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let responder = StaticFileResponder::new(&config);
        Self { config, responder }
    }

    /// The responder every request is passed to.
    pub fn responder(&self) -> &StaticFileResponder {
        &self.responder
    }

    /// Display the server banner and what is being served.
    fn display_server_info(&self) {
        let banner = include_str!("../banner.txt");
        info!("\n{banner}");
        info!("Document root: {}", self.config.document_root.display());
        info!("Index file: {}", self.config.index_file);

        if !self.config.document_root.is_dir() {
            warn!(
                "Document root {} is not a directory, every request will get a 404",
                self.config.document_root.display()
            );
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Resolves once Ctrl+C is received.
    async fn shutdown_signal() {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                error!("Error setting up Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    }

    /// Handle an accept error, failing only when the listener is unusable.
    async fn handle_accept_error(e: std::io::Error) -> Result<(), Error> {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return Err(Error::IoError(e));
        }

        // Usually transient (e.g. out of file descriptors)
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        Ok(())
    }

    /// Log how a connection ended.
    fn log_outcome(addr: SocketAddr, result: Result<(), Error>) {
        match result {
            Ok(()) => {}
            Err(Error::NotFound(path)) => warn!("404 Not Found: {path}"),
            Err(Error::ParseError(ParserError::EmptyRequest)) => {
                debug!("Connection from {addr} closed without a request");
            }
            Err(Error::ParseError(e)) => warn!("Rejected request from {addr}: {e}"),
            Err(e) => error!("Error handling connection from {addr}: {e}"),
        }
    }

    /// Start the server and listen for incoming connections until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;
        self.display_server_info();

        let listener = self.setup_listener().await?;
        self.serve(listener, Self::shutdown_signal()).await
    }

    /// Accept and answer connections on `listener` until `shutdown` resolves.
    ///
    /// The shutdown future is only observed between connections; a connection
    /// being handled always runs to completion.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), Error>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            let result = Self::handle_connection(&mut socket, &self.responder, &self.config).await;
                            Self::log_outcome(addr, result);
                            // socket dropped here, closing the connection
                        }
                        Err(e) => Self::handle_accept_error(e).await?,
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Read the first line of a request, terminator included.
    ///
    /// At most `limit` bytes are consumed. Nothing past the first line is
    /// read.
    pub async fn read_request_line(
        socket: &mut (impl AsyncRead + Unpin),
        limit: usize,
    ) -> Result<String, Error> {
        let mut reader = BufReader::new(socket).take(limit as u64);
        let mut buf = Vec::new();
        reader.read_until(b'\n', &mut buf).await?;

        if buf.is_empty() {
            return Err(ParserError::EmptyRequest.into());
        }
        if !buf.ends_with(b"\n") && buf.len() >= limit {
            return Err(ParserError::RequestLineTooLong(limit).into());
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write a response, flush it and close the write half.
    async fn write_response(
        socket: &mut (impl AsyncWrite + Unpin),
        response: &HttpResponse,
    ) -> Result<(), Error> {
        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;
        socket.shutdown().await?;
        Ok(())
    }

    /// Handle a single connection.
    ///
    /// Requests that produce no response (empty or oversized request line)
    /// and 404s are reported through the returned error after any response
    /// has been written.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        responder: &StaticFileResponder,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let line = Self::read_request_line(&mut *socket, config.read_buffer_size).await?;

        let parsed = if config.strict_request_line {
            parse_strict_request_line(&line)
        } else {
            parse_request_line(&line)
        };

        let request = match parsed {
            Ok(request) => request,
            Err(ParserError::MalformedRequestLine(line)) => {
                let response = HttpResponse::error_page(StatusCode::BadRequest, "Invalid HTTP request.");
                Self::write_response(socket, &response).await?;
                return Err(ParserError::MalformedRequestLine(line).into());
            }
            Err(e) => return Err(e.into()),
        };

        info!("{request}");

        let response = match responder.respond(&request).await {
            Ok(response) => response,
            Err(Error::NotFound(path)) => {
                Self::write_response(socket, &HttpResponse::not_found(&path)).await?;
                return Err(Error::NotFound(path));
            }
            Err(e) => return Err(e),
        };

        Self::write_response(socket, &response).await
    }
}
