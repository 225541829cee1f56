use std::collections::VecDeque;

/// Tracks which physical frames are available for allocation.
///
/// Frames are handed out in the order they were configured.
#[derive(Debug, Clone, Default)]
pub struct FreeFrameList {
    frames: VecDeque<u32>,
}

impl FreeFrameList {
    pub fn new<I: IntoIterator<Item = u32>>(frames: I) -> Self {
        FreeFrameList {
            frames: frames.into_iter().collect(),
        }
    }

    /// Take the first free frame, if any
    #[inline]
    pub fn take(&mut self) -> Option<u32> {
        self.frames.pop_front()
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.iter().copied()
    }
}

/// Circular record of the order pages became resident.
///
/// `head` is the oldest slot (next eviction candidate) and `tail` the next
/// insertion slot. The length is tracked separately so a full queue
/// (`head == tail`) is not mistaken for an empty one.
#[derive(Debug, Clone)]
pub struct ResidencyQueue {
    slots: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl ResidencyQueue {
    pub fn new(capacity: usize) -> Self {
        ResidencyQueue {
            slots: vec![0; capacity],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Record `page` as the newest resident page
    pub fn push(&mut self, page: usize) {
        debug_assert!(!self.is_full(), "residency queue overflow");
        self.slots[self.tail] = page;
        self.tail = self.advance(self.tail);
        self.len += 1;
    }

    /// Page at `head`, without removing it
    #[inline]
    pub fn front(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Remove and return the page at `head`
    pub fn pop_front(&mut self) -> Option<usize> {
        let page = self.front()?;
        self.head = self.advance(self.head);
        self.len -= 1;
        Some(page)
    }

    /// Move the page at `head` to the back of the queue.
    ///
    /// When the queue is full `head == tail`, so the page keeps its slot
    /// and only the two indices move.
    pub fn rotate(&mut self) {
        if self.is_empty() {
            return;
        }
        self.slots[self.tail] = self.slots[self.head];
        self.head = self.advance(self.head);
        self.tail = self.advance(self.tail);
    }

    /// Resident pages from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % self.capacity()])
    }
}
