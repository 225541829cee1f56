use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::error::{ConfigError, TraceError};
use crate::replacement::ReplacementPolicy;
use crate::translation::{MemoryReference, Operation, VirtualAddress};

/// Simulation parameters read from the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub policy: ReplacementPolicy,
    /// Resident page limit: the residency queue holds this many pages
    pub num_pages: usize,
    pub frames: Vec<u32>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse the three config lines: policy, page count (decimal) and the
    /// physical frames (hex, whitespace separated)
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut lines = content.lines();

        let policy = lines
            .next()
            .ok_or(ConfigError::MissingLine("replacement policy"))?
            .parse::<ReplacementPolicy>()
            .map_err(ConfigError::UnknownPolicy)?;

        let num_pages = Self::parse_num_pages(
            lines.next().ok_or(ConfigError::MissingLine("page count"))?,
        )?;

        let frames = Self::parse_frames(
            lines.next().ok_or(ConfigError::MissingLine("frame list"))?,
        )?;
        if frames.len() > num_pages {
            return Err(ConfigError::TooManyFrames { frames: frames.len(), num_pages });
        }

        Ok(Config { policy, num_pages, frames })
    }

    fn parse_num_pages(line: &str) -> Result<usize, ConfigError> {
        let token = line.trim();
        match token.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidPageCount(token.to_string())),
        }
    }

    fn parse_frames(line: &str) -> Result<Vec<u32>, ConfigError> {
        let mut seen = HashSet::new();
        let mut frames = Vec::new();

        for token in line.split_whitespace() {
            let frame = parse_hex(token)
                .ok_or_else(|| ConfigError::InvalidFrame(token.to_string()))?;
            if frame as usize >= NUM_FRAMES {
                return Err(ConfigError::FrameOutOfRange { frame, max: NUM_FRAMES });
            }
            if !seen.insert(frame) {
                return Err(ConfigError::DuplicateFrame(frame));
            }
            frames.push(frame);
        }

        if frames.is_empty() {
            return Err(ConfigError::NoFrames);
        }
        Ok(frames)
    }

    /// Policy, page count and each frame count as one parameter
    pub fn parameter_count(&self) -> usize {
        2 + self.frames.len()
    }
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

pub fn read_trace<P: AsRef<Path>>(path: P) -> Result<Vec<MemoryReference>, TraceError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&content)
}

/// Decode trace lines of the form `<hex address> <R|W>`, skipping blank lines
pub fn parse_trace(content: &str) -> Result<Vec<MemoryReference>, TraceError> {
    let mut refs = Vec::new();

    for (i, text) in content.lines().enumerate() {
        let line = i + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let (addr, op) = match tokens.as_slice() {
            [] => continue,
            [addr, op] => (*addr, *op),
            _ => {
                return Err(TraceError::Malformed { line, text: text.to_string() });
            }
        };

        let va = parse_hex(addr).ok_or_else(|| TraceError::InvalidAddress {
            line,
            text: addr.to_string(),
        })?;
        let operation = op.parse::<Operation>().map_err(|_| TraceError::UnknownOperation {
            line,
            text: op.to_string(),
        })?;

        refs.push(MemoryReference {
            address: VirtualAddress::from_raw(va),
            operation,
        });
    }

    Ok(refs)
}
