/// One row of the page table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    pub valid: bool,
    pub referenced: bool,
    pub modified: bool,
    /// Only meaningful while `valid` is set
    pub frame: u32,
}

/// Single-level page table indexed directly by page number
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Create a page table with every entry invalid and mapped to frame 0
    pub fn new(num_pages: usize) -> Self {
        PageTable {
            entries: vec![PageTableEntry::default(); num_pages],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn get(&self, page: usize) -> Option<&PageTableEntry> {
        self.entries.get(page)
    }

    /// Iterate over `(page, entry)` pairs in page order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PageTableEntry)> {
        self.entries.iter().enumerate()
    }

    /// Frames currently backing a valid page
    pub fn resident_frames(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().filter(|e| e.valid).map(|e| e.frame)
    }

    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }
}

impl std::ops::Index<usize> for PageTable {
    type Output = PageTableEntry;

    fn index(&self, page: usize) -> &Self::Output {
        &self.entries[page]
    }
}

impl std::ops::IndexMut<usize> for PageTable {
    fn index_mut(&mut self, page: usize) -> &mut Self::Output {
        &mut self.entries[page]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table_initialization() {
        let table = PageTable::new(8);
        assert_eq!(table.len(), 8);
        for (_, entry) in table.iter() {
            assert!(!entry.valid);
            assert!(!entry.referenced);
            assert!(!entry.modified);
            assert_eq!(entry.frame, 0);
        }
        assert_eq!(table.resident_count(), 0);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let table = PageTable::new(4);
        assert!(table.get(3).is_some());
        assert!(table.get(4).is_none());
    }

    #[test]
    fn test_resident_frames() {
        let mut table = PageTable::new(4);
        table[1] = PageTableEntry { valid: true, referenced: true, modified: false, frame: 0x1A };
        table[3] = PageTableEntry { valid: true, referenced: false, modified: true, frame: 0x07 };
        // stale frame on an invalid entry is not resident
        table[2].frame = 0x55;

        let frames: Vec<u32> = table.resident_frames().collect();
        assert_eq!(frames, vec![0x1A, 0x07]);
        assert_eq!(table.resident_count(), 2);
    }
}
