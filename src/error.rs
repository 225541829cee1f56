//! Error types for the paging simulator

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Precondition failures raised by the paging engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// The trace produced a page number the page table has no entry for
    #[error("page {page:#x} is outside the page table (0..{table_size:#x})")]
    PageOutOfRange { page: usize, table_size: usize },

    /// A victim was requested while no page is resident
    #[error("cannot evict: residency queue is empty")]
    EmptyResidencyQueue,
}

/// Errors loading the simulation config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot open config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config is missing the {0} line")]
    MissingLine(&'static str),

    #[error("unknown replacement policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid page count: {0}")]
    InvalidPageCount(String),

    #[error("invalid frame number: {0}")]
    InvalidFrame(String),

    #[error("config lists no physical frames")]
    NoFrames,

    #[error("frame {0:#x} is listed more than once")]
    DuplicateFrame(u32),

    #[error("{frames} frames listed but at most {num_pages} pages can be resident")]
    TooManyFrames { frames: usize, num_pages: usize },

    #[error("frame {frame:#x} exceeds physical memory ({max:#x} frames)")]
    FrameOutOfRange { frame: u32, max: usize },
}

/// Errors reading the memory reference trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("cannot open file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected '<address> <R|W>', got {text:?}")]
    Malformed { line: usize, text: String },

    #[error("line {line}: invalid hex address {text:?}")]
    InvalidAddress { line: usize, text: String },

    #[error("line {line}: unknown operation {text:?}")]
    UnknownOperation { line: usize, text: String },
}

/// Top-level error for a simulation run
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("reference {index}: {source}")]
    Paging {
        index: usize,
        #[source]
        source: PagingError,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}
