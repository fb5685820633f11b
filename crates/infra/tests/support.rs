use std::io::Write;
use std::sync::{Arc, Mutex};

use harvest_domain::ClientConfig;
use harvest_infra::Harvest;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

pub const EMAIL: &str = "me@example.com";
pub const PASSWORD: &str = "correct-horse";
pub const CLIENT_ID: &str = "client-123";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "https://app.example.com/harvest/callback";

/// Client using basic credentials against the mock server.
pub fn basic_client(server: &MockServer) -> Harvest {
    Harvest::new(ClientConfig::basic("acme", EMAIL, PASSWORD).with_base_url(server.uri()))
        .expect("basic client should build")
}

/// Client configured for OAuth only; no credential until a token exists.
pub fn oauth_client(server: &MockServer) -> Harvest {
    Harvest::new(
        ClientConfig::oauth("acme", CLIENT_ID, CLIENT_SECRET, REDIRECT_URI)
            .with_base_url(server.uri())
            .with_debug(true),
    )
    .expect("oauth client should build")
}

/// Value of a header on a received request.
pub fn header(request: &wiremock::Request, name: &str) -> Option<String> {
    request.headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// Collects formatted tracing output for the current thread.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install a debug-level subscriber writing into this capture until the
    /// guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().expect("log buffer poisoned")).into_owned()
    }
}

pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter { buffer: Arc::clone(&self.buffer) }
    }
}
