use rand::Rng;

use crate::snake::Cell;

/// Draws a food cell with each axis uniform in `[1, grid_size]`.
///
/// The draw pays no attention to snake occupancy: food may land under a body
/// segment and sits there until the head re-enters that cell. Callers must
/// not assume the returned cell is free.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid_size: u16) -> Cell {
    let upper = i32::from(grid_size);

    Cell {
        x: rng.gen_range(1..=upper),
        y: rng.gen_range(1..=upper),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::spawn;
    use crate::snake::Cell;

    #[test]
    fn spawn_stays_inside_one_indexed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let cell = spawn(&mut rng, 20);
            assert!(cell.in_bounds(20), "{cell:?} escaped the grid");
        }
    }

    #[test]
    fn spawn_reaches_every_axis_value() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_x = [false; 4];
        let mut seen_y = [false; 4];

        for _ in 0..200 {
            let cell = spawn(&mut rng, 4);
            seen_x[(cell.x - 1) as usize] = true;
            seen_y[(cell.y - 1) as usize] = true;
        }

        assert!(seen_x.iter().all(|seen| *seen));
        assert!(seen_y.iter().all(|seen| *seen));
    }

    #[test]
    fn spawn_ignores_snake_occupancy() {
        // On a 1×1 grid the only cell is the snake's own starting cell; the
        // spawner still returns it instead of hunting for a free one.
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(spawn(&mut rng, 1), Cell { x: 1, y: 1 });
    }
}
