use std::time::{Duration, Instant};

use grid_snake::game::Game;
use grid_snake::input::Direction;
use grid_snake::snake::{Cell, Snake};

#[test]
fn stepwise_eat_pause_steer_and_wall_reset() {
    let now = Instant::now();
    let mut game = Game::new_with_seed(20, 42);
    game.snake = Snake::new(Cell { x: 10, y: 10 }, Direction::Right);
    game.food = Cell { x: 11, y: 10 };
    game.start(now);

    // Eat the food directly ahead: net growth of one, score derived, the
    // delay tiers down from 200 to 195.
    game.tick(now);
    assert_eq!(game.snake.head(), Cell { x: 11, y: 10 });
    assert_eq!(game.snake.len(), 2);
    assert_eq!(game.score(), 1);
    assert_eq!(game.speed_delay(), Duration::from_millis(195));

    // Park the respawned food out of the way for the rest of the walk.
    game.food = Cell { x: 1, y: 1 };

    // Pause: ticks must leave snake, food, and heading untouched.
    game.toggle_pause(now);
    game.tick(now);
    assert_eq!(game.snake.head(), Cell { x: 11, y: 10 });
    assert_eq!(game.snake.len(), 2);
    game.toggle_pause(now);

    // Walk up to the top row, one cell per tick.
    game.steer(Direction::Up);
    for _ in 0..9 {
        game.tick(now);
    }
    assert_eq!(game.snake.head(), Cell { x: 11, y: 1 });
    assert!(game.is_started());

    // One more step crosses the wall: the run resets, only the high score
    // survives.
    game.tick(now);
    assert!(!game.is_started());
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.snake.head(), Cell { x: 10, y: 10 });
    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.speed_delay(), Duration::from_millis(200));

    // Starting again begins a fresh run against the surviving high score.
    game.start(now);
    assert!(game.is_started());
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn clock_cadence_tightens_immediately_after_eating() {
    let t0 = Instant::now();
    let mut game = Game::new_with_seed(20, 7);
    game.snake = Snake::new(Cell { x: 10, y: 10 }, Direction::Right);
    game.food = Cell { x: 11, y: 10 };
    game.start(t0);

    // Nothing fires before the initial 200ms period elapses.
    assert!(!game.poll(t0 + Duration::from_millis(199)));

    let t1 = t0 + Duration::from_millis(200);
    assert!(game.poll(t1));
    assert_eq!(game.score(), 1);

    // The swapped-in 195ms period is measured from the eat, replacing the
    // deadline the old cadence had scheduled.
    game.food = Cell { x: 1, y: 1 };
    assert!(!game.poll(t1 + Duration::from_millis(194)));
    assert!(game.poll(t1 + Duration::from_millis(195)));
    assert_eq!(game.snake.head(), Cell { x: 12, y: 10 });
}

#[test]
fn paused_clock_never_fires_until_resumed() {
    let t0 = Instant::now();
    let mut game = Game::new_with_seed(20, 3);
    game.snake = Snake::new(Cell { x: 10, y: 10 }, Direction::Right);
    game.food = Cell { x: 1, y: 1 };
    game.start(t0);

    game.toggle_pause(t0);

    // Deadlines scheduled before the pause must not fire against the paused
    // state, no matter how late the host polls.
    assert!(!game.poll(t0 + Duration::from_secs(10)));
    assert_eq!(game.snake.head(), Cell { x: 10, y: 10 });

    // Resume re-arms at the current delay, measured from the resume.
    let t1 = t0 + Duration::from_secs(10);
    game.toggle_pause(t1);
    assert!(!game.poll(t1 + Duration::from_millis(199)));
    assert!(game.poll(t1 + Duration::from_millis(200)));
    assert_eq!(game.snake.head(), Cell { x: 11, y: 10 });
}
