use serde::{Deserialize, Serialize};
use sysinfo::System;

#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct BenchmarkHardware {
    pub identifier: Option<String>,
    pub cpu_name: String,
    pub cpu_cores: usize,
    pub total_memory_mb: u64,
    pub os_name: String,
    pub os_version: String,
}

impl BenchmarkHardware {
    pub fn detect(identifier: Option<String>) -> Self {
        let mut sys = System::new();
        sys.refresh_all();

        let cpu_name = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().to_string())
            .unwrap_or_else(|| String::from("unknown"));

        Self {
            identifier,
            cpu_name,
            cpu_cores: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            os_name: sysinfo::System::name().unwrap_or_else(|| String::from("unknown")),
            os_version: sysinfo::System::kernel_version()
                .unwrap_or_else(|| String::from("unknown")),
        }
    }

    /// One-line hardware summary for chart subtexts.
    pub fn format_info(&self) -> String {
        format!(
            "{}  •  {} Cores  •  {} MB RAM  •  {} {}",
            self.cpu_name, self.cpu_cores, self.total_memory_mb, self.os_name, self.os_version,
        )
    }
}
