use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::handlers;
use crate::protocol::{JsonRpcRequest, JsonRpcResponse};
use crate::runner::TaskRunner;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
///
/// Strictly sequential: one line in, at most one line out, in arrival order.
/// The crew call inside `tools/call` runs to completion before the next line
/// is read.
pub struct McpServer<R: TaskRunner> {
    runner: R,
}

impl<R: TaskRunner> McpServer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run on real stdin/stdout until the input stream closes.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        info!("starting planner MCP server on stdio");
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        self.serve(BufReader::new(stdin), stdout).await
    }

    /// Drive the protocol loop over arbitrary streams.
    ///
    /// Malformed lines (oversized, non-UTF-8, or invalid JSON) are logged and
    /// dropped without producing output; only end-of-stream terminates the
    /// loop. A response line is written only when the request carried an `id`.
    pub async fn serve<I, O>(&self, mut reader: I, mut writer: O) -> Result<(), Box<dyn std::error::Error>>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                info!("input stream closed, shutting down");
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                warn!("message too large: {n} bytes (limit {MAX_MESSAGE_BYTES}), dropping");
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(e) => {
                    warn!("input line is not valid UTF-8: {e}, dropping");
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!("failed to decode JSON from input: {e}, dropping");
                    continue;
                }
            };

            if let Some(resp) = handlers::dispatch(&req, &self.runner).await {
                // Notifications never get a response line, whatever dispatch
                // produced for the method.
                if req.id.is_some() {
                    write_response(&mut writer, &resp).await?;
                }
            }
        }

        Ok(())
    }
}

async fn write_response<O>(
    writer: &mut O,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>>
where
    O: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
