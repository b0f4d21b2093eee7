//! Resident-set-size probe for sweep diagnostics.

use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Samples the current process's resident memory.
pub struct MemoryProbe {
    sys: System,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    /// Current RSS in KiB, or 0 when the platform cannot report it.
    pub fn rss_kib(&mut self) -> u64 {
        let Ok(pid) = get_current_pid() else {
            return 0;
        };
        self.sys
            .refresh_process_specifics(pid, ProcessRefreshKind::new());
        self.sys
            .process(pid)
            .map(|process| process.memory() / 1024)
            .unwrap_or(0)
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryProbe;

    #[test]
    fn supported_platforms_keep_reporting() {
        let mut probe = MemoryProbe::default();
        let first = probe.rss_kib();
        let second = probe.rss_kib();
        if first > 0 {
            assert!(second > 0);
        }
    }
}
