//! Per-state display colors.
//!
//! A palette maps each cell state to an [`Rgba`]. State 0 is always the
//! background and the last state is always the ink; states in between get
//! random HSV colors. Colors are cosmetic: nothing in the simulation reads
//! them, so the RNG that produces them cannot affect determinism.

use rand::Rng;
use turmite_core::Rgba;

/// Colors indexed by cell state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Color of state 0.
    pub const BACKGROUND: Rgba = Rgba::WHITE;
    /// Color of the last state.
    pub const INK: Rgba = Rgba::BLACK;

    /// Build a palette with one color per state.
    ///
    /// With more than two states, every entry is first given a random
    /// color; then index 0 is set to [`BACKGROUND`](Self::BACKGROUND) and
    /// index `state_count - 1` to [`INK`](Self::INK). With a single state
    /// the ink assignment lands on index 0 and wins.
    ///
    /// A `state_count` of 0 is treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use turmite_engine::Palette;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let p = Palette::generate(2, &mut rng);
    /// assert_eq!(p.colors(), &[Palette::BACKGROUND, Palette::INK]);
    /// ```
    pub fn generate<R: Rng + ?Sized>(state_count: u32, rng: &mut R) -> Self {
        let n = state_count.max(1) as usize;
        let mut colors = vec![Self::BACKGROUND; n];
        if n > 2 {
            for color in colors.iter_mut() {
                *color = Rgba::from_hsv(rng.gen(), rng.gen(), rng.gen());
            }
        }
        colors[0] = Self::BACKGROUND;
        colors[n - 1] = Self::INK;
        Self { colors }
    }

    /// Color for `index`, or `None` if out of range.
    pub fn get(&self, index: u32) -> Option<Rgba> {
        self.colors.get(index as usize).copied()
    }

    /// First index holding exactly `color`.
    pub fn index_of(&self, color: Rgba) -> Option<u32> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| i as u32)
    }

    /// Number of entries (equals the rule set's state count).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always returns `false`: a palette has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All colors in state order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}
