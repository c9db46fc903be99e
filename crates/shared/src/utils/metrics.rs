use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessesToUpdate, System};

const SAMPLE_INTERVAL: Duration = Duration::from_secs(15);

/// Process gauges sampled from a long-lived `System` so cpu usage has a
/// previous sample to diff against.
pub struct SystemMetrics {
    resident_bytes: Gauge,
    virtual_bytes: Gauge,
    available_kib: Gauge,
    threads: Gauge,
    cpu_percent: Gauge,
    started_at: Gauge,
    pid: Option<Pid>,
    sys: Mutex<System>,
}

impl fmt::Debug for SystemMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemMetrics")
            .field("pid", &self.pid)
            .field("resident_bytes", &self.resident_bytes.get())
            .field("threads", &self.threads.get())
            .finish_non_exhaustive()
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemMetrics {
    pub fn new() -> Self {
        let started_at = Gauge::default();
        started_at.set(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or_default(),
        );

        Self {
            resident_bytes: Gauge::default(),
            virtual_bytes: Gauge::default(),
            available_kib: Gauge::default(),
            threads: Gauge::default(),
            cpu_percent: Gauge::default(),
            started_at,
            pid: sysinfo::get_current_pid().ok(),
            sys: Mutex::new(System::new()),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        let gauges = [
            (
                "process_resident_memory_bytes",
                "Resident memory of the process",
                &self.resident_bytes,
            ),
            (
                "process_virtual_memory_bytes",
                "Virtual memory of the process",
                &self.virtual_bytes,
            ),
            (
                "system_available_memory_kib",
                "Memory available to new processes",
                &self.available_kib,
            ),
            (
                "process_threads",
                "Threads owned by the process",
                &self.threads,
            ),
            (
                "system_cpu_usage_percent",
                "Global cpu usage",
                &self.cpu_percent,
            ),
            (
                "process_start_time_seconds",
                "Process start time since the unix epoch",
                &self.started_at,
            ),
        ];

        for (name, help, gauge) in gauges {
            registry.register(name, help, gauge.clone());
        }
    }

    pub fn sample(&self) {
        let mut sys = self.sys.lock().unwrap_or_else(PoisonError::into_inner);
        sys.refresh_memory();
        sys.refresh_cpu_usage();

        self.available_kib.set((sys.available_memory() / 1_024) as i64);
        self.cpu_percent.set(sys.global_cpu_usage() as i64);

        let Some(pid) = self.pid else {
            return;
        };

        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        if let Some(process) = sys.process(pid) {
            self.resident_bytes.set(process.memory() as i64);
            self.virtual_bytes.set(process.virtual_memory() as i64);
            if let Some(tasks) = process.tasks() {
                self.threads.set(tasks.len() as i64);
            }
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers both families under `<service>_request_counter` and
    /// `<service>_request_duration`.
    pub fn register(&self, registry: &mut Registry, service: &str) {
        registry.register(
            format!("{service}_request_counter"),
            format!("Total number of requests to the {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{service}_request_duration"),
            format!("Histogram of request durations for the {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut ticker = tokio::time::interval(SAMPLE_INTERVAL);
    loop {
        ticker.tick().await;
        system_metrics.sample();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn recorded_requests_show_up_in_the_registry() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry, "job_posting_service");

        metrics.record(Method::Post, Status::Success, 0.02);
        metrics.record(Method::Post, Status::Error, 0.01);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("job_posting_service_request_counter_total"));
        assert!(buffer.contains("status=\"Success\""));
        assert!(buffer.contains("status=\"Error\""));
    }

    #[test]
    fn process_gauges_are_exported() {
        let mut registry = Registry::default();
        let system = SystemMetrics::new();
        system.register(&mut registry);
        system.sample();

        let mut buffer = String::new();
        encode(&mut buffer, &registry).unwrap();

        assert!(buffer.contains("process_start_time_seconds"));
        assert!(buffer.contains("system_available_memory_kib"));
    }
}
