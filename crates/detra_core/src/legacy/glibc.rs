//! GNU C library compatible `srand`/`rand` stream.
//!
//! TYPE_3 additive feedback generator: 31 words of state, separation 3,
//! Park–Miller initialisation and 310 discarded outputs after seeding.

/// Largest value returned by [`GlibcRandom::draw`].
pub const RAND_MAX: u32 = 2_147_483_647;

const DEGREE: usize = 31;
const SEPARATION: usize = 3;
const DISCARD: usize = DEGREE * 10;

/// One `rand()` stream as produced by the GNU C library after `srand(seed)`.
///
/// This is a plain value: each instance owns its state. The process-wide
/// stream used by [`LegacyLibraryGenerator`](crate::LegacyLibraryGenerator)
/// is a single shared instance of this type.
///
/// # Examples
///
/// ```rust
/// use detra_core::GlibcRandom;
///
/// let mut stream = GlibcRandom::new(0);
/// assert_eq!(stream.draw(), 1_804_289_383);
/// assert_eq!(stream.draw(), 846_930_886);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlibcRandom {
    table: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl GlibcRandom {
    /// Seeds a stream the way `srand(seed)` does. Seed `0` is treated as `1`.
    pub const fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        let mut table = [0u32; DEGREE];
        table[0] = seed;
        // 16807 * word % (2^31 - 1) without overflowing 31 bits (Schrage).
        let mut word = seed as i32 as i64;
        let mut i = 1;
        while i < DEGREE {
            let hi = word / 127_773;
            let lo = word % 127_773;
            word = 16_807 * lo - 2_836 * hi;
            if word < 0 {
                word += 2_147_483_647;
            }
            table[i] = word as u32;
            i += 1;
        }

        let mut front = SEPARATION;
        let mut rear = 0;
        let mut k = 0;
        while k < DISCARD {
            table[front] = table[front].wrapping_add(table[rear]);
            front = (front + 1) % DEGREE;
            rear = (rear + 1) % DEGREE;
            k += 1;
        }

        Self { table, front, rear }
    }

    /// Returns the next value in `[0, RAND_MAX]`.
    #[inline]
    pub fn draw(&mut self) -> u32 {
        let value = self.table[self.front].wrapping_add(self.table[self.rear]);
        self.table[self.front] = value;
        self.front = (self.front + 1) % DEGREE;
        self.rear = (self.rear + 1) % DEGREE;
        value >> 1
    }
}

impl Default for GlibcRandom {
    /// The stream a C program sees when it never calls `srand`.
    fn default() -> Self {
        Self::new(1)
    }
}
