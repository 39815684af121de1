//! Append-only request log.
//!
//! Each request produces one line `<timestamp> <method> <uri> <status>` in the
//! request log file, plus a structured tracing event.

use std::fs::OpenOptions;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use http::{Method, Request, Response, Uri};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tower::{Layer, Service};
use tracing::{info, warn};

/// Handle to the request log file.
#[derive(Clone)]
pub struct RequestLog {
    path: PathBuf,
    file: Arc<Mutex<File>>,
}

impl RequestLog {
    /// Open `path` for appending, creating it and its parent directory if needed.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Arc::new(Mutex::new(File::from_std(file))),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single line. Write failures are logged, never returned.
    pub async fn append(&self, line: &str) {
        let mut record = String::with_capacity(line.len().saturating_add(1));
        record.push_str(line);
        record.push('\n');

        let mut file = self.file.lock().await;
        let written = match file.write_all(record.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            warn!(path = %self.path.display(), error = %e, "Failed to write request log line");
        }
    }
}

/// Format one request log line.
#[must_use]
pub fn format_line(at: DateTime<Utc>, method: &Method, uri: &Uri, status: &str) -> String {
    format!(
        "{} {method} {uri} {status}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// A Tower layer that records every HTTP request in the request log.
#[derive(Clone)]
pub struct RequestLogLayer {
    log: RequestLog,
}

impl RequestLogLayer {
    pub fn new(log: RequestLog) -> Self {
        Self { log }
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService {
            inner,
            log: self.log.clone(),
        }
    }
}

/// A Tower service that records every HTTP request in the request log.
#[derive(Clone)]
pub struct RequestLogService<S> {
    inner: S,
    log: RequestLog,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestLogService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        // Call the instance that was driven to readiness and leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let log = self.log.clone();

        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            let status = match &result {
                Ok(response) => response.status().as_u16().to_string(),
                Err(_) => "-".to_string(),
            };
            info!(
                http.method = %method,
                http.uri = %uri,
                http.status = %status,
                duration_ms = %duration_ms,
                "HTTP request completed"
            );
            log.append(&format_line(Utc::now(), &method, &uri, &status))
                .await;

            result
        })
    }
}
