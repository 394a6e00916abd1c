//! Centralized application services with mutable state support.
//!
//! `AppServices` owns the tokio runtime that runs every JMA request, the
//! shared client, the result channel back to the UI thread and the
//! cancellation token of the forecast request currently in flight.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use tenki_core::JmaConfig;
use tenki_jma::{ClientSettings, JmaClient};

/// Message types for the service channel
pub use crate::services::ServiceMessage;

/// Callback used to wake the UI after a message was queued
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct AppServices {
    /// Tokio runtime for async operations
    runtime: tokio::runtime::Runtime,

    /// Shutdown signal broadcaster
    shutdown_tx: broadcast::Sender<()>,

    /// JMA client, `None` until `init_jma_client` succeeds
    jma_client: RwLock<Option<Arc<JmaClient>>>,

    service_tx: Sender<ServiceMessage>,
    service_rx: Mutex<Receiver<ServiceMessage>>,

    /// Cancellation token of the in-flight forecast request
    forecast_cancel_token: RwLock<Option<CancellationToken>>,

    repaint_hook: RwLock<Option<RepaintHook>>,
}

impl AppServices {
    /// Build the runtime and channels. No client is created yet.
    pub fn new() -> std::io::Result<Arc<Self>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("tenki-tokio")
            .build()?;

        let (shutdown_tx, _) = broadcast::channel(4);
        let (service_tx, service_rx) = mpsc::channel();

        Ok(Arc::new(Self {
            runtime,
            shutdown_tx,
            jma_client: RwLock::new(None),
            service_tx,
            service_rx: Mutex::new(service_rx),
            forecast_cancel_token: RwLock::new(None),
            repaint_hook: RwLock::new(None),
        }))
    }

    /// Get the tokio runtime handle.
    pub fn runtime(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Subscribe to shutdown notifications.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal application shutdown and drop the client.
    pub fn shutdown(&self) {
        tracing::info!("AppServices shutdown initiated");

        let _ = self.shutdown_tx.send(());
        self.cancel_forecast();
        *self.jma_client.write() = None;
        *self.repaint_hook.write() = None;

        tracing::info!("AppServices shutdown complete");
    }

    // =========== JMA Client ===========

    pub fn jma_client(&self) -> Option<Arc<JmaClient>> {
        self.jma_client.read().clone()
    }

    pub fn set_jma_client(&self, client: Option<Arc<JmaClient>>) {
        *self.jma_client.write() = client;
    }

    /// Initialize the JMA client from configuration.
    pub fn init_jma_client(&self, config: &JmaConfig) -> bool {
        match JmaClient::new(client_settings(config)) {
            Ok(client) => {
                self.set_jma_client(Some(Arc::new(client)));
                tracing::info!("JMA client initialized");
                true
            }
            Err(e) => {
                tracing::error!("Failed to initialize JMA client: {}", e);
                false
            }
        }
    }

    // =========== Service Channel ===========

    /// Handle for spawned tasks to report back to the UI thread.
    ///
    /// Tasks hold this instead of `AppServices` so the runtime is never
    /// dropped from one of its own worker threads.
    pub fn notifier(&self) -> ServiceNotifier {
        ServiceNotifier {
            tx: self.service_tx.clone(),
            repaint: self.repaint_hook.read().clone(),
        }
    }

    /// Queue a message for the UI thread and wake it.
    pub fn deliver(&self, message: ServiceMessage) {
        self.notifier().deliver(message);
    }

    /// Drain every message queued since the last frame.
    pub fn drain(&self) -> Vec<ServiceMessage> {
        let rx = self.service_rx.lock();
        rx.try_iter().collect()
    }

    /// Block until the next message arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ServiceMessage> {
        match self.service_rx.lock().recv_timeout(timeout) {
            Ok(message) => Some(message),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    // =========== Repaint ===========

    pub fn set_repaint_hook(&self, hook: Option<RepaintHook>) {
        *self.repaint_hook.write() = hook;
    }

    // =========== Forecast Cancellation ===========

    /// Create the token for a new forecast request.
    ///
    /// This replaces the existing token and cancels its request.
    pub fn new_forecast_cancel_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.forecast_cancel_token.write().replace(token.clone()) {
            previous.cancel();
            tracing::debug!("Previous forecast request cancelled");
        }
        token
    }

    /// Cancel the in-flight forecast request, if any.
    pub fn cancel_forecast(&self) {
        if let Some(token) = self.forecast_cancel_token.write().take() {
            token.cancel();
        }
    }
}

/// Sending half of the service channel plus the repaint hook
#[derive(Clone)]
pub struct ServiceNotifier {
    tx: Sender<ServiceMessage>,
    repaint: Option<RepaintHook>,
}

impl ServiceNotifier {
    pub fn deliver(&self, message: ServiceMessage) {
        if self.tx.send(message).is_err() {
            tracing::debug!("Service channel closed; dropping message");
            return;
        }
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

/// Translate the `[jma]` config section into client settings.
pub fn client_settings(config: &JmaConfig) -> ClientSettings {
    ClientSettings {
        area_url: config.area_url.clone(),
        forecast_base_url: config.forecast_base_url.clone(),
        allow_invalid_certs: config.allow_invalid_certs,
        timeout: config.request_timeout_secs.map(Duration::from_secs),
    }
}
