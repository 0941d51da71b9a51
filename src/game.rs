use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::GameClock;
use crate::config::{INITIAL_SPEED_DELAY_MS, SPEED_DELAY_FLOOR_MS};
use crate::food;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Immutable view of the game handed to the renderer after each mutation.
///
/// The renderer never reads live state; it draws whatever snapshot it is
/// given, at any frequency, and repeated draws of the same snapshot produce
/// the same frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub grid_size: u16,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    pub started: bool,
    pub paused: bool,
}

/// Game controller: owns all mutable state plus the tick clock.
///
/// Input handlers and the clock run on the same host thread, so every
/// mutation below executes to completion before the next one starts.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Cell,
    grid_size: u16,
    speed_delay_ms: u64,
    high_score: u32,
    started: bool,
    paused: bool,
    clock: GameClock,
    rng: StdRng,
}

impl Game {
    /// Creates a fresh game with entropy-seeded food placement.
    #[must_use]
    pub fn new(grid_size: u16) -> Self {
        Self::from_rng(grid_size, StdRng::from_entropy())
    }

    /// Deterministic construction for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(grid_size: u16, seed: u64) -> Self {
        Self::from_rng(grid_size, StdRng::seed_from_u64(seed))
    }

    fn from_rng(grid_size: u16, mut rng: StdRng) -> Self {
        let snake = Snake::new(start_cell(grid_size), Direction::Right);
        let food = food::spawn(&mut rng, grid_size);

        Self {
            snake,
            food,
            grid_size,
            speed_delay_ms: INITIAL_SPEED_DELAY_MS,
            high_score: 0,
            started: false,
            paused: false,
            clock: GameClock::new(Duration::from_millis(INITIAL_SPEED_DELAY_MS)),
            rng,
        }
    }

    /// Begins a run and arms the clock at the current speed delay.
    ///
    /// No-op while a run is already in progress, which also guarantees a
    /// second start can never arm a duplicate timer.
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }

        self.started = true;
        self.clock.swap_period(self.speed_delay(), now);
    }

    /// Runs a tick if the clock deadline has elapsed. Returns whether a tick
    /// ran, so the host can tell a simulation step from an idle frame.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.clock.fire(now) {
            self.tick(now);
            return true;
        }

        false
    }

    /// One simulation step: move, eat, collide.
    ///
    /// No-op unless a run is active and not paused.
    pub fn tick(&mut self, now: Instant) {
        if !self.started || self.paused {
            return;
        }

        let head = self.snake.next_head();
        self.snake.push_head(head);

        if head == self.food {
            self.food = food::spawn(&mut self.rng, self.grid_size);
            self.increase_speed(now);
        } else {
            self.snake.drop_tail();
        }

        self.check_collision();
    }

    /// Points the snake for its next tick. Ignored while paused; a request
    /// directly opposite the current heading is discarded.
    ///
    /// Steering before the first start is accepted so the opening heading can
    /// be chosen on the start screen.
    pub fn steer(&mut self, requested: Direction) {
        if self.paused {
            return;
        }

        self.snake.steer(requested);
    }

    /// Pauses or resumes the active run. No-op before the first start.
    ///
    /// Pausing cancels the clock outright; resuming re-arms it at the
    /// current speed delay.
    pub fn toggle_pause(&mut self, now: Instant) {
        if !self.started {
            return;
        }

        if self.paused {
            self.paused = false;
            self.clock.swap_period(self.speed_delay(), now);
        } else {
            self.paused = true;
            self.clock.cancel();
        }
    }

    /// Ends the run: folds the derived score into the high score, stops the
    /// clock, and restores the initial board. The high score is the only
    /// value that survives.
    pub fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score());
        self.clock.cancel();
        self.started = false;
        self.paused = false;
        self.snake = Snake::new(start_cell(self.grid_size), Direction::Right);
        self.food = food::spawn(&mut self.rng, self.grid_size);
        self.speed_delay_ms = INITIAL_SPEED_DELAY_MS;
    }

    /// Food eaten so far. Always derived from body length, never stored.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.snake.len().saturating_sub(1) as u32
    }

    /// Returns the best score seen since process start.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns the current tick period.
    #[must_use]
    pub fn speed_delay(&self) -> Duration {
        Duration::from_millis(self.speed_delay_ms)
    }

    /// Returns true while a run is in progress.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns true while the active run is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the clock driving this game.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Captures the current render view.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.grid_size,
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score(),
            high_score: self.high_score,
            started: self.started,
            paused: self.paused,
        }
    }

    fn increase_speed(&mut self, now: Instant) {
        self.speed_delay_ms = next_speed_delay_ms(self.speed_delay_ms);
        self.clock.swap_period(self.speed_delay(), now);
    }

    fn check_collision(&mut self) {
        let head = self.snake.head();

        if !head.in_bounds(self.grid_size) {
            self.reset();
            return;
        }

        if self.snake.head_hits_body() {
            self.reset();
        }
    }
}

fn start_cell(grid_size: u16) -> Cell {
    let mid = i32::from(grid_size / 2);

    Cell { x: mid, y: mid }
}

/// Tiered acceleration: large cuts while the delay is long, single
/// milliseconds near the floor, and no change at or below the floor.
fn next_speed_delay_ms(current: u64) -> u64 {
    if current > 150 {
        current - 5
    } else if current > 100 {
        current - 3
    } else if current > 50 {
        current - 2
    } else if current > SPEED_DELAY_FLOOR_MS {
        current - 1
    } else {
        current
    }
}
