pub mod constants;
pub mod error;
pub mod io;
pub mod memory;
pub mod page_table;
pub mod replacement;
pub mod report;
pub mod translation;
pub mod vm_manager;

// Re-export commonly used items for convenience
pub use error::{ConfigError, PagingError, SimError, TraceError};
pub use io::Config;
pub use replacement::ReplacementPolicy;
pub use translation::{MemoryReference, Operation, VirtualAddress};
pub use vm_manager::{Outcome, Stats, VmManager};
