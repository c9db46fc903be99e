use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{error, info};

/// Timing for one service operation; completing it logs the outcome and
/// records the duration on the owning service's metrics.
pub struct TracingContext {
    pub operation: &'static str,
    pub method: Method,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str, method: Method) -> Self {
        info!("Starting operation: {operation}");

        Self {
            operation,
            method,
            start_time: Instant::now(),
        }
    }

    pub fn complete_success(&self, metrics: &Metrics, message: &str) {
        self.complete(metrics, true, message);
    }

    pub fn complete_error(&self, metrics: &Metrics, message: &str) {
        self.complete(metrics, false, message);
    }

    fn complete(&self, metrics: &Metrics, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let operation = self.operation;

        let status = if is_success {
            info!(operation, duration_secs = elapsed, "Operation completed successfully: {message}");
            Status::Success
        } else {
            error!(operation, duration_secs = elapsed, "Operation failed: {message}");
            Status::Error
        };

        metrics.record(self.method.clone(), status, elapsed);
    }
}
