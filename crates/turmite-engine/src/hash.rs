//! State digests for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing of simulation state. These
//! hashes are not cryptographically secure; they exist so two runs can be
//! compared with a single `u64`.

use crate::simulation::AntSimulation;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed one byte into a running FNV-1a hash.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a `u32` as little-endian bytes.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a `u64` as little-endian bytes.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the grid and the ants of `sim`.
///
/// Folds in the grid dimensions, every cell state in row-major order, the
/// ant count, and each ant's position and heading. Palette colors and the
/// tick counter are left out, so two simulations with equal cells and
/// ants hash equal regardless of palette seed.
pub fn state_hash(sim: &AntSimulation) -> u64 {
    let grid = sim.grid();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, grid.width());
    hash = fnv1a_u32(hash, grid.height());
    for &state in grid.cells() {
        hash = fnv1a_u32(hash, state);
    }

    hash = fnv1a_u64(hash, sim.ants().len() as u64);
    for ant in sim.ants() {
        let (x, y) = ant.position();
        hash = fnv1a_u32(hash, x as u32);
        hash = fnv1a_u32(hash, y as u32);
        hash = fnv1a_byte(hash, ant.heading().bits());
    }
    hash
}
