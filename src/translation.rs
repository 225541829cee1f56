use std::fmt;
use std::str::FromStr;

use crate::constants::*;

/// Represents the decomposed components of a Virtual Address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualAddress {
    pub va: u32,
    pub page: u32,
    pub offset: u32,
}

impl VirtualAddress {
    /// Decompose a raw VA into page number and offset
    pub fn from_raw(va: u32) -> Self {
        let page = (va >> OFFSET_BITS) & PAGE_MASK;
        let offset = va & OFFSET_MASK;

        VirtualAddress { va, page, offset }
    }

    /// Page number as a page table index
    #[inline]
    pub fn page_index(&self) -> usize {
        self.page as usize
    }
}

impl fmt::Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VA({:#06x}) = (page={:#x}, offset={:#05x})",
            self.va, self.page, self.offset
        )
    }
}

/// Kind of memory reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn as_char(self) -> char {
        match self {
            Operation::Read => 'R',
            Operation::Write => 'W',
        }
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "r" => Ok(Operation::Read),
            "W" | "w" => Ok(Operation::Write),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One decoded line of the memory reference trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReference {
    pub address: VirtualAddress,
    pub operation: Operation,
}

/// Physical address of `offset` inside `frame`
#[inline]
pub fn physical_address(frame: u32, offset: u32) -> u32 {
    (frame << OFFSET_BITS) + offset
}
