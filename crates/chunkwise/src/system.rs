//! Host and process introspection used when tuning chunk allocation.

use crate::error::ChunkwiseError;
use crate::units::human_readable_size;
use std::time::Instant;
use sysinfo::{CpuRefreshKind, ProcessesToUpdate, RefreshKind, System};
use tracing::info;

/// Memory footprint of the current process at a point in time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryStats {
    pub pid: u32,
    pub vm_size_kb: u64,
    pub vm_rss_kb: u64,
    pub taken_at: String,
}

/// Snapshot the virtual size and resident set of the current process.
pub fn memory_stats() -> Result<MemoryStats, ChunkwiseError> {
    let pid = sysinfo::get_current_pid().map_err(|e| ChunkwiseError::Unavailable {
        context: format!("current pid lookup: {e}"),
    })?;

    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), false);
    let process = system
        .process(pid)
        .ok_or_else(|| ChunkwiseError::Unavailable {
            context: format!("process {pid} memory"),
        })?;

    Ok(MemoryStats {
        pid: pid.as_u32(),
        vm_size_kb: process.virtual_memory() / 1024,
        vm_rss_kb: process.memory() / 1024,
        taken_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Log memory usage under `label` together with wall-clock time since `since`.
///
/// Returns the current instant so consecutive calls measure consecutive spans.
pub fn log_memory_stats(label: &str, since: Instant) -> Result<Instant, ChunkwiseError> {
    let stats = memory_stats()?;
    let now = Instant::now();
    info!(
        "Memory usage [{label}]: VmSize {} VmRSS {} wall clock {:.3}s",
        human_readable_size(stats.vm_size_kb * 1024),
        human_readable_size(stats.vm_rss_kb * 1024),
        now.duration_since(since).as_secs_f64()
    );
    Ok(now)
}

/// Number of CPU cores usable by this process. Never zero.
pub fn detect_number_of_cores() -> usize {
    if let Ok(n) = std::thread::available_parallelism() {
        return n.get();
    }

    let system =
        System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));
    system.cpus().len().max(1)
}
