//! Page replacement policies.
//!
//! Both policies read the same [`ResidencyQueue`]: FIFO evicts strictly in
//! load order, CLOCK walks the queue giving referenced pages a second
//! chance.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::PagingError;
use crate::memory::ResidencyQueue;
use crate::page_table::PageTable;

/// Replacement policy selected by the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    Fifo,
    Clock,
}

impl ReplacementPolicy {
    /// Pick and dequeue a victim page
    pub fn select_victim(
        self,
        queue: &mut ResidencyQueue,
        table: &mut PageTable,
    ) -> Result<usize, PagingError> {
        match self {
            ReplacementPolicy::Fifo => queue.evict_fifo(),
            ReplacementPolicy::Clock => queue.evict_clock(table),
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(ReplacementPolicy::Fifo),
            "CLOCK" => Ok(ReplacementPolicy::Clock),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
            ReplacementPolicy::Clock => write!(f, "CLOCK"),
        }
    }
}

impl ResidencyQueue {
    /// Evict the longest resident page
    pub fn evict_fifo(&mut self) -> Result<usize, PagingError> {
        self.pop_front().ok_or(PagingError::EmptyResidencyQueue)
    }

    /// Evict the first page at or after `head` whose referenced bit is clear.
    ///
    /// Referenced pages passed over have their bit cleared and move to the
    /// back of the queue. At most one full rotation is needed.
    pub fn evict_clock(&mut self, table: &mut PageTable) -> Result<usize, PagingError> {
        while let Some(page) = self.front() {
            let entry = &mut table[page];
            if !entry.referenced {
                break;
            }
            trace!("clock: second chance for page {:#x}", page);
            entry.referenced = false;
            self.rotate();
        }
        self.pop_front().ok_or(PagingError::EmptyResidencyQueue)
    }
}
