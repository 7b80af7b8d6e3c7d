use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::Cell;

/// The entire simulation state: every cell currently alive.
pub type LiveSet = HashSet<Cell>;

/// SimulationGrid owns the live cells of an unbounded Life universe.
/// Only live cells are stored, so memory tracks population, not extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationGrid {
    cells: LiveSet,
}

impl SimulationGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from any collection of cells
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Current live set (for rendering)
    pub fn live_cells(&self) -> &LiveSet {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell alive. Adding a live cell is a no-op.
    pub fn add_cell(&mut self, cell: Cell) {
        if self.cells.insert(cell) {
            tracing::trace!(?cell, "cell added");
        }
    }

    /// Mark a cell dead. Removing a dead cell is a no-op.
    pub fn remove_cell(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            tracing::trace!(?cell, "cell removed");
        }
    }

    /// Flip a cell and return its new state
    pub fn toggle_cell(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        tracing::debug!(population = self.cells.len(), "grid cleared");
        self.cells.clear();
    }

    /// Randomly populate a `size` x `size` square around `center`.
    ///
    /// Offsets run over `[-size/2, size - size/2)` on both axes, so a size-10
    /// region spans -5..=4. One uniform draw in `[0, 1)` is made per position
    /// and the cell is added when the draw is below `density`. Existing cells
    /// are kept.
    pub fn seed_region<R: Rng + ?Sized>(
        &mut self,
        center: Cell,
        size: u32,
        density: f64,
        rng: &mut R,
    ) {
        let lo = -(i64::from(size) / 2);
        let hi = i64::from(size) + lo;
        let before = self.cells.len();

        for dx in lo..hi {
            for dy in lo..hi {
                let roll: f64 = rng.random();
                if roll < density {
                    if let Some(cell) = center.offset(dx, dy) {
                        self.cells.insert(cell);
                    }
                }
            }
        }

        tracing::debug!(
            ?center,
            size,
            density,
            added = self.cells.len() - before,
            "seeded region"
        );
    }

    /// Paint the 3-cell horizontal brush centred on `center`
    pub fn create_brush(&mut self, center: Cell) {
        for dx in -1..=1 {
            if let Some(cell) = center.offset(dx, 0) {
                self.add_cell(cell);
            }
        }
    }

    /// Live-neighbor counts for every cell on the active frontier.
    /// Live cells always get an entry, even with zero neighbors.
    fn neighbor_counts(&self) -> HashMap<Cell, u8> {
        let mut counts: HashMap<Cell, u8> = HashMap::with_capacity(self.cells.len() * 9);

        for &cell in &self.cells {
            counts.entry(cell).or_insert(0);
            for neighbor in cell.neighbors() {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Apply the rule to every frontier cell
    fn survivors(&self, counts: HashMap<Cell, u8>) -> LiveSet {
        counts
            .into_iter()
            .filter(|&(cell, count)| Cell::survives(self.cells.contains(&cell), count))
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Pure evolution - computes the next generation without touching self
    pub fn next_generation(&self) -> LiveSet {
        self.survivors(self.neighbor_counts())
    }

    /// Advance one generation, replacing the live set wholesale
    pub fn step(&mut self) -> &LiveSet {
        let counts = self.neighbor_counts();
        let frontier = counts.len();
        let next = self.survivors(counts);
        tracing::debug!(
            before = self.cells.len(),
            after = next.len(),
            frontier,
            "generation advanced"
        );
        self.cells = next;
        &self.cells
    }

    /// Advance `generations` steps
    pub fn step_n(&mut self, generations: usize) -> &LiveSet {
        for _ in 0..generations {
            self.step();
        }
        &self.cells
    }

    /// Smallest (min, max) corners containing every live cell
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter();
        let first = *iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for SimulationGrid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl Extend<Cell> for SimulationGrid {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    /// Rng stub returning the same word forever
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            let bytes = self.0.to_le_bytes();
            for (i, b) in dst.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    fn cells(coords: &[(i64, i64)]) -> LiveSet {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_add_remove_idempotent() {
        let mut grid = SimulationGrid::new();
        grid.add_cell(Cell::new(1, 2));
        grid.add_cell(Cell::new(1, 2));
        assert_eq!(grid.population(), 1);

        grid.remove_cell(Cell::new(1, 2));
        grid.remove_cell(Cell::new(1, 2));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut grid = SimulationGrid::new();
        assert!(grid.toggle_cell(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(!grid.toggle_cell(Cell::new(0, 0)));
        assert!(!grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_clear() {
        let mut grid = SimulationGrid::from_cells(cells(&[(0, 0), (5, 5)]));
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_empty_step_stays_empty() {
        let mut grid = SimulationGrid::new();
        assert!(grid.step().is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut grid = SimulationGrid::from_cells(block.clone());
        assert_eq!(grid.step(), &block);
        assert_eq!(grid.step(), &block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = cells(&[(0, 0), (1, 0), (2, 0)]);
        let vertical = cells(&[(1, -1), (1, 0), (1, 1)]);
        let mut grid = SimulationGrid::from_cells(horizontal.clone());

        assert_eq!(grid.step(), &vertical);
        assert_eq!(grid.step(), &horizontal);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = SimulationGrid::from_cells(cells(&[(7, -3)]));
        assert!(!grid.step().contains(&Cell::new(7, -3)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_l_shape_births_block() {
        let mut grid = SimulationGrid::from_cells(cells(&[(0, 0), (1, 0), (0, 1)]));
        let next = grid.step();
        assert!(next.contains(&Cell::new(1, 1)));
        assert_eq!(next, &cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_next_generation_does_not_mutate() {
        let grid = SimulationGrid::from_cells(cells(&[(0, 0), (1, 0), (2, 0)]));
        let next = grid.next_generation();
        assert_eq!(next.len(), 3);
        assert!(grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut grid = SimulationGrid::from_cells(cells(&glider));
        grid.step_n(4);

        let moved: Vec<(i64, i64)> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(grid.live_cells(), &cells(&moved));
    }

    #[test]
    fn test_works_far_from_origin() {
        let base = 1_000_000_000_000i64;
        let mut grid = SimulationGrid::from_cells(cells(&[
            (base, -base),
            (base + 1, -base),
            (base + 2, -base),
        ]));
        grid.step();
        assert!(grid.contains(Cell::new(base + 1, -base - 1)));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_frontier_is_live_cells_and_their_neighbors() {
        let lone = SimulationGrid::from_cells(cells(&[(0, 0)]));
        let counts = lone.neighbor_counts();
        assert_eq!(counts.len(), 9);
        assert_eq!(counts[&Cell::new(0, 0)], 0);

        let blinker = SimulationGrid::from_cells(cells(&[(0, 0), (1, 0), (2, 0)]));
        let counts = blinker.neighbor_counts();
        assert_eq!(counts.len(), 15);
        assert_eq!(counts[&Cell::new(1, -1)], 3);
        assert_eq!(counts[&Cell::new(1, 0)], 2);
    }

    #[test]
    fn test_seed_zero_density_adds_nothing() {
        let mut grid = SimulationGrid::new();
        let mut rng = StdRng::seed_from_u64(7);
        grid.seed_region(Cell::new(0, 0), 10, 0.0, &mut rng);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_seed_full_density_fills_square() {
        let mut grid = SimulationGrid::new();
        let mut rng = ConstRng(u64::MAX);
        grid.seed_region(Cell::new(0, 0), 10, 1.0, &mut rng);
        assert_eq!(grid.population(), 100);

        // asymmetric half-open range: -5..=4
        let (lo, hi) = grid.bounding_box().unwrap();
        assert_eq!(lo, Cell::new(-5, -5));
        assert_eq!(hi, Cell::new(4, 4));
    }

    #[test]
    fn test_seed_is_additive_and_idempotent() {
        let mut grid = SimulationGrid::from_cells(cells(&[(0, 0), (100, 100)]));
        let mut rng = ConstRng(0);
        grid.seed_region(Cell::new(0, 0), 3, 0.5, &mut rng);
        // 9 seeded, (0, 0) already present, (100, 100) untouched
        assert_eq!(grid.population(), 10);
        assert!(grid.contains(Cell::new(100, 100)));
    }

    #[test]
    fn test_seed_size_zero_is_noop() {
        let mut grid = SimulationGrid::new();
        let mut rng = ConstRng(0);
        grid.seed_region(Cell::new(3, 3), 0, 1.0, &mut rng);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_seed_odd_size_range() {
        let mut grid = SimulationGrid::new();
        let mut rng = ConstRng(0);
        grid.seed_region(Cell::new(10, 10), 3, 2.0, &mut rng);
        let (lo, hi) = grid.bounding_box().unwrap();
        assert_eq!(lo, Cell::new(9, 9));
        assert_eq!(hi, Cell::new(11, 11));
    }

    #[test]
    fn test_brush_is_horizontal_triple() {
        let mut grid = SimulationGrid::new();
        grid.create_brush(Cell::new(4, -2));
        assert_eq!(grid.live_cells(), &cells(&[(3, -2), (4, -2), (5, -2)]));
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(SimulationGrid::new().bounding_box(), None);
    }
}
