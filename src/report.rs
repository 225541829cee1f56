//! Text output for a simulation run: page table dumps, one line per
//! reference, and the closing counters.

use std::fmt;
use std::io::Write;

use log::info;

use crate::error::SimError;
use crate::io::Config;
use crate::page_table::PageTable;
use crate::translation::{physical_address, MemoryReference};
use crate::vm_manager::{Outcome, Stats, VmManager};

/// A trace entry together with what the engine did for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub request: MemoryReference,
    pub outcome: Outcome,
}

impl Reference {
    pub fn physical_address(&self) -> u32 {
        physical_address(self.outcome.frame, self.request.address.offset)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let va = &self.request.address;
        write!(
            f,
            "Line: {:04x} {} {:x} {:03x} ",
            va.va, self.request.operation, va.page, va.offset
        )?;
        f.write_str(if self.outcome.faulted { "F " } else { "  " })?;
        f.write_str(if self.outcome.write_back { "B " } else { " " })?;
        write!(f, "{:06x}", self.physical_address())
    }
}

pub fn write_page_table<W: Write>(out: &mut W, table: &PageTable) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "i V R M Frames")?;
    writeln!(out, "- - - - ------")?;
    for (page, entry) in table.iter() {
        writeln!(
            out,
            "{:x} {} {} {}  {:04x} ",
            page,
            u8::from(entry.valid),
            u8::from(entry.referenced),
            u8::from(entry.modified),
            entry.frame
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(
    out: &mut W,
    parameters: usize,
    stats: &Stats,
) -> std::io::Result<()> {
    writeln!(out, "Count of simulations Parameters: {}", parameters)?;
    writeln!(out, "Count of Memory References: {}", stats.references)?;
    writeln!(out, "Count of Read Operations: {}", stats.reads)?;
    writeln!(out, "Count of Write Operations: {}", stats.writes)?;
    writeln!(out, "Count of Page Faults: {}", stats.page_faults)?;
    writeln!(out, "Count of Write Backs: {}", stats.write_backs)?;
    writeln!(out)
}

/// Run every reference through a fresh engine and write the report.
///
/// With `debug` set the page table is dumped before the first reference
/// and after each one.
pub fn simulate<W: Write>(
    config: &Config,
    refs: &[MemoryReference],
    debug: bool,
    out: &mut W,
) -> Result<Stats, SimError> {
    let mut vm = VmManager::from_config(config);
    info!(
        "{} replacement, up to {} resident pages, {} frames, {} references",
        vm.policy(),
        config.num_pages,
        config.frames.len(),
        refs.len()
    );

    if debug {
        writeln!(out)?;
        writeln!(out, "Initial Page Table:")?;
        write_page_table(out, vm.page_table())?;
    }

    for (index, &request) in refs.iter().enumerate() {
        let outcome = vm
            .resolve(request.address.page_index(), request.operation)
            .map_err(|source| SimError::Paging { index, source })?;

        writeln!(out)?;
        writeln!(out, "{}", Reference { request, outcome })?;
        if debug {
            write_page_table(out, vm.page_table())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Final Page Table:")?;
    write_page_table(out, vm.page_table())?;
    writeln!(out)?;
    write_summary(out, config.parameter_count(), vm.stats())?;

    let stats = *vm.stats();
    info!(
        "{} faults, {} write-backs over {} references; {} pages resident, {} frames free",
        stats.page_faults,
        stats.write_backs,
        stats.references,
        vm.page_table().resident_count(),
        vm.free_frames().free_count()
    );
    Ok(stats)
}
