//! A single ant: position, heading, and the per-visit update.

use turmite_core::{CellChange, Heading, RuleSet};
use turmite_grid::GridState;

/// A mobile agent on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ant {
    x: i32,
    y: i32,
    heading: Heading,
}

impl Ant {
    /// An ant at `(x, y)` facing [`Heading::Up`].
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_heading(x, y, Heading::Up)
    }

    /// An ant at `(x, y)` facing `heading`.
    pub fn with_heading(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Current `(x, y)` cell.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Visit the current cell and move on.
    ///
    /// Reads the cell state `s`, advances the cell to the next state,
    /// turns according to the rule for `s`, then steps forward one cell
    /// with toroidal wrap. Returns the repaint for the visited cell, whose
    /// color index is `s`.
    ///
    /// The ant must be inside `grid` and every cell state must be below
    /// `rules.state_count()`.
    #[inline]
    pub fn visit(&mut self, grid: &mut GridState, rules: &RuleSet) -> CellChange {
        let (x, y) = (self.x, self.y);
        let state = grid.get(x, y);
        grid.set(x, y, rules.advance(state));

        self.heading = rules.turn(state).apply(self.heading);
        let (dx, dy) = self.heading.delta();
        (self.x, self.y) = grid.offset(x, y, dx, dy);

        CellChange {
            x,
            y,
            color_index: state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(w: u32, h: u32, rules: &str) -> (GridState, RuleSet) {
        (GridState::new(w, h).unwrap(), RuleSet::parse(rules).unwrap())
    }

    #[test]
    fn new_ant_faces_up() {
        assert_eq!(Ant::new(2, 3).heading(), Heading::Up);
        assert_eq!(Ant::new(2, 3).position(), (2, 3));
    }

    #[test]
    fn right_rule_turns_clockwise_then_moves() {
        let (mut grid, rules) = setup(8, 8, "RL");
        let mut ant = Ant::new(4, 4);
        let change = ant.visit(&mut grid, &rules);
        assert_eq!(
            change,
            CellChange {
                x: 4,
                y: 4,
                color_index: 0
            }
        );
        assert_eq!(grid.get(4, 4), 1);
        assert_eq!(ant.heading(), Heading::Right);
        assert_eq!(ant.position(), (5, 4));
    }

    #[test]
    fn rule_comes_from_pre_visit_state() {
        let (mut grid, rules) = setup(8, 8, "RL");
        grid.set(4, 4, 1);
        let mut ant = Ant::new(4, 4);
        let change = ant.visit(&mut grid, &rules);
        assert_eq!(change.color_index, 1);
        assert_eq!(grid.get(4, 4), 0);
        assert_eq!(ant.heading(), Heading::Left);
        assert_eq!(ant.position(), (3, 4));
    }

    #[test]
    fn straight_rule_keeps_heading() {
        let (mut grid, rules) = setup(8, 8, "N");
        let mut ant = Ant::new(4, 4);
        ant.visit(&mut grid, &rules);
        assert_eq!(ant.heading(), Heading::Up);
        assert_eq!(ant.position(), (4, 5));
        assert_eq!(grid.get(4, 4), 0);
    }

    #[test]
    fn wraps_left_edge() {
        let (mut grid, rules) = setup(6, 4, "N");
        let mut ant = Ant::with_heading(0, 2, Heading::Left);
        ant.visit(&mut grid, &rules);
        assert_eq!(ant.position(), (5, 2));
    }

    #[test]
    fn wraps_right_edge() {
        let (mut grid, rules) = setup(6, 4, "N");
        let mut ant = Ant::with_heading(5, 2, Heading::Right);
        ant.visit(&mut grid, &rules);
        assert_eq!(ant.position(), (0, 2));
    }

    #[test]
    fn wraps_top_and_bottom_against_height() {
        let (mut grid, rules) = setup(6, 4, "N");
        let mut up = Ant::with_heading(1, 3, Heading::Up);
        up.visit(&mut grid, &rules);
        assert_eq!(up.position(), (1, 0));

        let mut down = Ant::with_heading(1, 0, Heading::Down);
        down.visit(&mut grid, &rules);
        assert_eq!(down.position(), (1, 3));
    }
}
