use std::time::Duration;

use turmite_core::{CellChange, Heading, PaintEvent, RuleSet, TickId};
use turmite_engine::{Ant, AntSimulation, Cadence, ConfigError, Palette};
use turmite_grid::GridState;
use turmite_test_utils::{config, langton_8x8, run, Canvas};

fn cells(events: impl IntoIterator<Item = PaintEvent>) -> Vec<CellChange> {
    events
        .into_iter()
        .filter_map(|e| match e {
            PaintEvent::Cell(c) => Some(c),
            PaintEvent::Clear { .. } => None,
        })
        .collect()
}

// ── Worked example ──────────────────────────────────────────────

#[test]
fn rl_on_8x8_reads_advances_turns_then_moves() {
    let mut sim = langton_8x8();
    assert_eq!(sim.ants()[0].position(), (4, 4));

    sim.step();
    assert_eq!(sim.grid().get(4, 4), 1);
    assert_eq!(sim.ants()[0].heading(), Heading::Right);
    assert_eq!(sim.ants()[0].position(), (5, 4));

    sim.step();
    assert_eq!(sim.grid().get(5, 4), 1);
    assert_eq!(sim.ants()[0].heading(), Heading::Down);
    assert_eq!(sim.ants()[0].position(), (5, 3));

    assert_eq!(
        cells(sim.drain_paint()),
        vec![
            CellChange {
                x: 4,
                y: 4,
                color_index: 0
            },
            CellChange {
                x: 5,
                y: 4,
                color_index: 0
            },
        ]
    );
}

#[test]
fn rl_returns_to_a_visited_cell_and_turns_left() {
    let mut sim = langton_8x8();
    // R at (4,4), R at (5,4), R at (5,3), R at (4,3): back at (4,4) facing up.
    run(&mut sim, 4);
    assert_eq!(sim.ants()[0].position(), (4, 4));
    assert_eq!(sim.ants()[0].heading(), Heading::Up);

    // (4,4) is now state 1 -> rule L: face left, move to (3,4), cell back to 0.
    sim.step();
    assert_eq!(sim.grid().get(4, 4), 0);
    assert_eq!(sim.ants()[0].heading(), Heading::Left);
    assert_eq!(sim.ants()[0].position(), (3, 4));
    let last = *cells(sim.drain_paint()).last().unwrap();
    assert_eq!(last.color_index, 1);
}

// ── Toroidal wrap ───────────────────────────────────────────────

#[test]
fn wrap_on_every_edge_uses_that_axis_dimension() {
    let mut grid = GridState::new(5, 3).unwrap();
    let rules = RuleSet::parse("N").unwrap();

    let mut left = Ant::with_heading(0, 1, Heading::Left);
    left.visit(&mut grid, &rules);
    assert_eq!(left.position(), (4, 1));

    let mut right = Ant::with_heading(4, 1, Heading::Right);
    right.visit(&mut grid, &rules);
    assert_eq!(right.position(), (0, 1));

    let mut up = Ant::with_heading(2, 2, Heading::Up);
    up.visit(&mut grid, &rules);
    assert_eq!(up.position(), (2, 0));

    let mut down = Ant::with_heading(2, 0, Heading::Down);
    down.visit(&mut grid, &rules);
    assert_eq!(down.position(), (2, 2));
}

#[test]
fn straight_ant_circles_a_tall_torus() {
    // Width 3 is smaller than height 7: y must wrap at 7.
    let mut sim = AntSimulation::new(config(3, 7, "N", 1)).unwrap();
    let mut ys = Vec::new();
    for _ in 0..7 {
        sim.step();
        ys.push(sim.ants()[0].position().1);
    }
    assert_eq!(ys, vec![4, 5, 6, 0, 1, 2, 3]);
    assert_eq!(sim.ants()[0].position(), (1, 3));
}

// ── Degenerate configurations ───────────────────────────────────

#[test]
fn no_ants_no_paint() {
    let mut sim = AntSimulation::new(config(8, 8, "RL", 0)).unwrap();
    sim.drain_paint().for_each(drop);
    run(&mut sim, 25);
    assert!(sim.pending_paint().is_empty());
    assert!(sim.grid().is_blank());
    assert_eq!(sim.current_tick(), TickId(25));
}

#[test]
fn single_state_rule_paints_ink_and_never_changes_cells() {
    let mut sim = AntSimulation::new(config(8, 8, "L", 1)).unwrap();
    assert_eq!(sim.palette().get(0), Some(Palette::INK));
    run(&mut sim, 8);
    assert!(sim.grid().is_blank());
    assert!(cells(sim.drain_paint())
        .iter()
        .all(|c| c.color_index == 0));
    // Four lefts close a loop.
    assert_eq!(sim.ants()[0].position(), (4, 4));
}

#[test]
fn one_by_one_grid_keeps_the_ant_in_place() {
    let mut sim = AntSimulation::new(config(1, 1, "RLL", 3)).unwrap();
    run(&mut sim, 10);
    assert!(sim.ants().iter().all(|a| a.position() == (0, 0)));
    // 30 visits to the only cell, 3 states.
    assert_eq!(sim.grid().get(0, 0), 0);
}

// ── Reconfiguration ─────────────────────────────────────────────

#[test]
fn reconfigure_after_running_repaints_from_scratch() {
    let mut sim = langton_8x8();
    run(&mut sim, 30);
    sim.configure_text("LLRR", "2").unwrap();

    let events: Vec<PaintEvent> = sim.drain_paint().collect();
    assert_eq!(events, vec![PaintEvent::Clear { color_index: 0 }]);

    let mut canvas = Canvas::new(8, 8);
    canvas.apply(events);
    assert_eq!(canvas.get(0, 0), Some(0));
    assert_eq!(canvas.get(7, 7), Some(0));
    assert_eq!(sim.palette().len(), 4);
}

#[test]
fn rejected_reconfigure_keeps_running() {
    let mut sim = langton_8x8();
    run(&mut sim, 3);
    assert_eq!(
        sim.configure("RL", -5),
        Err(ConfigError::InvalidAntCount { value: -5 })
    );
    sim.step();
    assert_eq!(sim.current_tick(), TickId(4));
}

// ── Host cadence ────────────────────────────────────────────────

#[test]
fn cadence_drives_speed_setting() {
    let mut sim = langton_8x8();
    let mut cadence = Cadence::new(Duration::from_millis(16));

    sim.set_steps_per_tick(10);
    cadence.drive(&mut sim, Duration::from_millis(16));
    assert_eq!(sim.current_tick(), TickId(10));

    sim.set_steps_per_tick(0);
    cadence.drive(&mut sim, Duration::from_millis(16));
    assert_eq!(sim.current_tick(), TickId(10));

    sim.set_steps_per_tick(2);
    cadence.drive(&mut sim, Duration::from_millis(8));
    assert_eq!(sim.current_tick(), TickId(10));
    cadence.drive(&mut sim, Duration::from_millis(8));
    assert_eq!(sim.current_tick(), TickId(12));
}
