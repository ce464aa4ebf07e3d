use crate::sets::visited::VisitedSet;

/// A fixed-capacity set of flags packed into a contiguous buffer of bytes.
///
/// Used for settled nodes during a shortest-path search and for visited stops
/// while the tour is built. Each bit can be individually set or queried.
///
/// # Examples
///
/// ```
/// use roadtour::sets::visited::{UncompressedSet, VisitedSet};
///
/// let mut bs = UncompressedSet::new(10);
/// assert!(!bs.get(3));
///
/// bs.set(3);
/// assert!(bs.get(3));
/// assert_eq!(bs.count(), 1);
/// ```
pub struct UncompressedSet {
    /*private*/ buffer: Box<[u8]>,
    /*private*/ capacity: usize,
    /*private*/ members: usize,
}

impl UncompressedSet {
    /// Constructs a new [`UncompressedSet`] with space for `capacity` bits,
    /// all initialized to zero.
    pub fn new(capacity: usize) -> Self {
        let bytes_needed: usize = capacity.div_ceil(8);
        UncompressedSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            capacity,
            members: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl VisitedSet for UncompressedSet {
    /// Sets the bit at the given `index` to `1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    fn set(&mut self, index: usize) {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let mask = 1u8 << (index % 8);

        if self.buffer[byte_index] & mask == 0 {
            self.members += 1;
        }
        self.buffer[byte_index] |= mask
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use roadtour::sets::visited::{UncompressedSet, VisitedSet};
    ///
    /// let mut bs = UncompressedSet::new(4);
    /// bs.set(1);
    /// assert!(bs.get(1));
    /// assert!(!bs.get(0));
    /// ```
    fn get(&self, index: usize) -> bool {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let bit_index = index % 8;

        self.buffer[byte_index] & (1u8 << bit_index) != 0
    }

    /// Number of distinct bits currently set.
    fn count(&self) -> usize {
        self.members
    }
}
