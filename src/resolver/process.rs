//! Probe of running product processes

use std::path::{Path, PathBuf};

use sysinfo::System;

use crate::layout::is_root;

/// A running process as far as it could be inspected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// Executable path, when the OS lets us see it
    pub exe: Option<PathBuf>,
}

/// Lists running processes
pub trait ProcessInspector {
    /// Running processes ordered by pid
    fn processes(&self) -> Vec<ProcessInfo>;
}

/// Processes of the local machine
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcesses;

impl ProcessInspector for SystemProcesses {
    fn processes(&self) -> Vec<ProcessInfo> {
        let mut system = System::new();
        system.refresh_processes();

        let mut processes: Vec<ProcessInfo> = system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                name: process.name().to_string(),
                exe: process.exe().map(Path::to_path_buf),
            })
            .collect();
        processes.sort_by_key(|p| p.pid);
        processes
    }
}

/// First process whose name contains a product name, ignoring case
pub fn find_running(products: &[String], inspector: &dyn ProcessInspector) -> Option<ProcessInfo> {
    let needles: Vec<String> = products.iter().map(|p| p.to_lowercase()).collect();
    inspector.processes().into_iter().find(|process| {
        let name = process.name.to_lowercase();
        needles.iter().any(|needle| name.contains(needle.as_str()))
    })
}

/// Root next to the executable of the first matching process
///
/// Tests the executable's folder, then its parent. Only the first matching process is
/// considered; a process without a visible executable path is not a match.
pub fn probe(products: &[String], inspector: &dyn ProcessInspector) -> Option<PathBuf> {
    let process = find_running(products, inspector)?;
    let exe_dir = process.exe?.parent()?.to_path_buf();

    if is_root(&exe_dir) {
        return Some(exe_dir);
    }

    exe_dir
        .parent()
        .filter(|parent| is_root(parent))
        .map(Path::to_path_buf)
}

/// Fixed process list
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct StaticProcesses(Vec<ProcessInfo>);

#[cfg(test)]
impl StaticProcesses {
    pub fn new(processes: Vec<ProcessInfo>) -> Self {
        Self(processes)
    }
}

#[cfg(test)]
impl ProcessInspector for StaticProcesses {
    fn processes(&self) -> Vec<ProcessInfo> {
        self.0.clone()
    }
}
