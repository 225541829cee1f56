// physical memory is 16 MiB split into 2 KiB frames
pub const OFFSET_BITS: u32 = 11;
pub const FRAME_BITS: u32 = 13;

// the page field above the offset is 3 bits wide
pub const PAGE_BITS: u32 = 3;

pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const NUM_FRAMES: usize = 1 << FRAME_BITS;
pub const PT_SIZE: usize = 1 << PAGE_BITS;

pub const OFFSET_MASK: u32 = (1 << OFFSET_BITS) - 1;
pub const PAGE_MASK: u32 = (1 << PAGE_BITS) - 1;

pub const DEFAULT_CONFIG_PATH: &str = "config";
