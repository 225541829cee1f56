use log::debug;

use crate::constants::PT_SIZE;
use crate::error::PagingError;
use crate::io::Config;
use crate::memory::{FreeFrameList, ResidencyQueue};
use crate::page_table::{PageTable, PageTableEntry};
use crate::replacement::ReplacementPolicy;
use crate::translation::Operation;

/// Result of resolving one page reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub faulted: bool,
    /// The evicted page was dirty and had to be written back
    pub write_back: bool,
    pub frame: u32,
    /// Page evicted to make room, if the fault could not use a free frame
    pub victim: Option<usize>,
}

/// Running counters for a simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub references: u64,
    pub reads: u64,
    pub writes: u64,
    pub page_faults: u64,
    pub write_backs: u64,
}

/// Paging engine: page table, free frames and residency order for one run
#[derive(Debug, Clone)]
pub struct VmManager {
    policy: ReplacementPolicy,
    page_table: PageTable,
    free_frames: FreeFrameList,
    queue: ResidencyQueue,
    stats: Stats,
}

impl VmManager {
    /// Create an engine with a full-size page table that keeps at most
    /// `num_pages` pages resident
    pub fn new<I>(policy: ReplacementPolicy, num_pages: usize, frames: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        VmManager {
            policy,
            page_table: PageTable::new(PT_SIZE),
            free_frames: FreeFrameList::new(frames),
            queue: ResidencyQueue::new(num_pages),
            stats: Stats::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.policy, config.num_pages, config.frames.iter().copied())
    }

    /// Resolve a reference to `page`, faulting it in if it is not resident.
    ///
    /// Nothing is modified when an error is returned.
    pub fn resolve(&mut self, page: usize, op: Operation) -> Result<Outcome, PagingError> {
        let table_size = self.page_table.len();
        let entry = *self
            .page_table
            .get(page)
            .ok_or(PagingError::PageOutOfRange { page, table_size })?;

        let mut outcome = Outcome {
            faulted: false,
            write_back: false,
            frame: entry.frame,
            victim: None,
        };

        if !entry.valid {
            // Step 1: find a frame, evicting if the pool is exhausted or the
            // resident limit is reached
            let free = if self.queue.is_full() {
                None
            } else {
                self.free_frames.take()
            };
            let frame = match free {
                Some(frame) => frame,
                None => {
                    let victim = self
                        .policy
                        .select_victim(&mut self.queue, &mut self.page_table)?;
                    let evicted = &mut self.page_table[victim];
                    evicted.valid = false;
                    outcome.victim = Some(victim);
                    outcome.write_back = evicted.modified;
                    debug!(
                        "{}: evict page {:#x} from frame {:#06x}{}",
                        self.policy,
                        victim,
                        evicted.frame,
                        if evicted.modified { " (write-back)" } else { "" }
                    );
                    evicted.frame
                }
            };

            // Step 2: load the page
            self.page_table[page] = PageTableEntry {
                valid: true,
                referenced: false,
                modified: false,
                frame,
            };
            self.queue.push(page);
            debug_assert_eq!(self.queue.len(), self.page_table.resident_count());

            outcome.faulted = true;
            outcome.frame = frame;
            self.stats.page_faults += 1;
            if outcome.write_back {
                self.stats.write_backs += 1;
            }
            debug!("page fault: page {:#x} -> frame {:#06x}", page, frame);
        }

        // Step 3: reference bits, same for hits and freshly loaded pages
        let entry = &mut self.page_table[page];
        entry.referenced = true;
        self.stats.references += 1;
        match op {
            Operation::Read => self.stats.reads += 1,
            Operation::Write => {
                entry.modified = true;
                self.stats.writes += 1;
            }
        }

        Ok(outcome)
    }

    #[inline]
    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    #[inline]
    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    #[inline]
    pub fn free_frames(&self) -> &FreeFrameList {
        &self.free_frames
    }

    #[inline]
    pub fn residency_queue(&self) -> &ResidencyQueue {
        &self.queue
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}
