//! Ant headings and the turns that rotate them.

/// Direction an ant is facing.
///
/// Discriminants form a 2-bit cycle: each successive value is a 90°
/// clockwise rotation of the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Facing +Y.
    #[default]
    Up = 0,
    /// Facing +X.
    Right = 1,
    /// Facing -Y.
    Down = 2,
    /// Facing -X.
    Left = 3,
}

impl Heading {
    /// All headings in clockwise order starting from [`Heading::Up`].
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Heading for a 2-bit value; only the low two bits are used.
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b11) as usize]
    }

    /// The 2-bit value of this heading.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Rotate 90° clockwise.
    pub fn clockwise(self) -> Self {
        Self::from_bits(self.bits() + 1)
    }

    /// Rotate 90° counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self::from_bits(self.bits() + 3)
    }

    /// Returns the `(dx, dy)` unit step for moving forward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Right => (1, 0),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
        }
    }
}

/// Turn instruction attached to a cell state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Rotate counter-clockwise before moving.
    Left,
    /// Rotate clockwise before moving.
    Right,
    /// Keep the current heading.
    Straight,
}

impl Turn {
    /// Decodes one rule-string symbol.
    ///
    /// `'L'` and `'R'` are the only turning symbols; every other
    /// character means "go straight". Matching is case-sensitive.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'L' => Turn::Left,
            'R' => Turn::Right,
            _ => Turn::Straight,
        }
    }

    /// Applies this turn to a heading.
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Turn::Left => heading.counter_clockwise(),
            Turn::Right => heading.clockwise(),
            Turn::Straight => heading,
        }
    }
}
