use super::{
    action::Direction,
    config::GameConfig,
    state::{Position, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Outcome of a single game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The snake moved to an empty cell
    Continue,
    /// The snake ate the food and grew
    AteFood,
    /// The snake ran into its own body; the session is over
    Collided,
}

/// One play session: snake, food and score for a single life
///
/// Created fresh when play starts and discarded at game over. All movement
/// wraps toroidally around the board.
pub struct GameSession {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    config: GameConfig,
    direction: Direction,
    pending_direction: Direction,
    rng: StdRng,
}

impl GameSession {
    /// Create a new session with the snake in its starting spot heading right
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a session with a seeded RNG, for deterministic tests
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(60, 100),
        ]);
        let food = Self::random_cell(&config, &mut rng);

        Self {
            snake,
            food,
            score: 0,
            config,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            rng,
        }
    }

    /// Direction the snake moved on the last tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Request a direction change, effective on the next tick
    ///
    /// Reversing straight into the body is not allowed: a request opposite to
    /// the current direction is ignored. The last accepted request before a
    /// tick wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending_direction = requested;
        }
    }

    /// Advance the game by one tick
    ///
    /// The new head is pushed first, then the tail is popped unless food was
    /// eaten, and only then is self-collision checked. A head landing on the
    /// tail cell vacated in the same tick is therefore not a collision, and
    /// food eaten on the collision tick still counts toward the final score.
    pub fn advance_tick(&mut self) -> TickResult {
        self.direction = self.pending_direction;

        let new_head = self.snake.head().stepped(
            self.direction,
            self.config.cell_size,
            self.config.width,
            self.config.height,
        );
        self.snake.push_head(new_head);

        let ate_food = new_head == self.food;
        if ate_food {
            self.score += self.config.food_points;
            self.food = Self::random_cell(&self.config, &mut self.rng);
        } else {
            self.snake.pop_tail();
        }

        if self.snake.collides_with_body(new_head) {
            return TickResult::Collided;
        }

        if ate_food {
            TickResult::AteFood
        } else {
            TickResult::Continue
        }
    }

    /// Pick a uniformly random grid cell
    ///
    /// The cell may fall under the snake's body; the board is large relative
    /// to the snake, so the food is almost always reachable immediately.
    fn random_cell(config: &GameConfig, rng: &mut StdRng) -> Position {
        let x = rng.gen_range(0..config.cols()) * config.cell_size;
        let y = rng.gen_range(0..config.rows()) * config.cell_size;
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::with_seed(GameConfig::default(), 7)
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.score, 0);
        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.snake.head(), Position::new(100, 100));
        assert_eq!(session.direction(), Direction::Right);

        let config = session.config();
        assert_eq!(session.food.x % config.cell_size, 0);
        assert_eq!(session.food.y % config.cell_size, 0);
        assert!(session.food.x >= 0 && session.food.x < config.width);
        assert!(session.food.y >= 0 && session.food.y < config.height);
    }

    #[test]
    fn test_plain_move_pops_tail() {
        let mut session = session();
        session.food = Position::new(400, 300); // far away

        let result = session.advance_tick();

        assert_eq!(result, TickResult::Continue);
        assert_eq!(session.score, 0);
        assert_eq!(
            session.snake.body,
            vec![
                Position::new(120, 100),
                Position::new(100, 100),
                Position::new(80, 100),
            ]
        );
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut session = session();
        session.food = Position::new(120, 100); // directly ahead

        let result = session.advance_tick();

        assert_eq!(result, TickResult::AteFood);
        assert_eq!(session.score, 10);
        assert_eq!(
            session.snake.body,
            vec![
                Position::new(120, 100),
                Position::new(100, 100),
                Position::new(80, 100),
                Position::new(60, 100),
            ]
        );

        // Respawned food is grid-aligned and on the board
        let config = session.config();
        assert_eq!(session.food.x % config.cell_size, 0);
        assert_eq!(session.food.y % config.cell_size, 0);
        assert!(session.food.x >= 0 && session.food.x < config.width);
        assert!(session.food.y >= 0 && session.food.y < config.height);
    }

    #[test]
    fn test_head_position_follows_wraparound_law() {
        // Head after N ticks = start + sum of direction vectors, mod board size
        let mut session = session();
        session.food = Position::new(400, 300);

        let moves = [
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Up,
        ];
        let config = session.config().clone();
        let mut expected = session.snake.head();
        for dir in moves {
            session.set_direction(dir);
            session.advance_tick();
            expected = expected.stepped(dir, config.cell_size, config.width, config.height);
            assert_eq!(session.snake.head(), expected);
        }
    }

    #[test]
    fn test_wraps_across_the_board() {
        let mut session = session();
        session.food = Position::new(400, 300);

        // 600 / 20 = 30 cells per row; 25 more right moves from x=100 wrap to x=0
        for _ in 0..25 {
            session.advance_tick();
        }
        assert_eq!(session.snake.head(), Position::new(0, 100));
    }

    #[test]
    fn test_reverse_direction_is_ignored() {
        let mut session = session();
        session.food = Position::new(400, 300);

        // Moving right; requesting left must change nothing
        session.set_direction(Direction::Left);
        let result = session.advance_tick();

        assert_eq!(result, TickResult::Continue);
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.snake.head(), Position::new(120, 100));
    }

    #[test]
    fn test_last_direction_request_wins() {
        let mut session = session();
        session.food = Position::new(400, 300);

        session.set_direction(Direction::Up);
        session.set_direction(Direction::Down);
        session.advance_tick();

        assert_eq!(session.direction(), Direction::Down);
        assert_eq!(session.snake.head(), Position::new(100, 120));
    }

    #[test]
    fn test_self_collision() {
        // Grow to length 5, then turn back into the body:
        // a head landing on a non-tail segment must collide.
        let mut session = session();
        session.food = Position::new(120, 100);
        assert_eq!(session.advance_tick(), TickResult::AteFood); // length 4
        session.food = Position::new(140, 100);
        assert_eq!(session.advance_tick(), TickResult::AteFood); // length 5
        session.food = Position::new(400, 300);

        session.set_direction(Direction::Down);
        session.advance_tick(); // head (140, 120)
        session.set_direction(Direction::Left);
        session.advance_tick(); // head (120, 120)
        session.set_direction(Direction::Up);
        let result = session.advance_tick(); // head (120, 100): body segment

        assert_eq!(result, TickResult::Collided);
        assert_eq!(session.score, 20);
    }

    #[test]
    fn test_vacated_tail_is_not_a_collision() {
        // Length-4 snake circling a 2x2 block: the head lands exactly where
        // the tail was in the same tick, which is a legal move.
        let mut session = session();
        session.food = Position::new(120, 100);
        assert_eq!(session.advance_tick(), TickResult::AteFood); // length 4
        session.food = Position::new(400, 300);

        // Body: (120,100) (100,100) (80,100) (60,100)
        session.set_direction(Direction::Down);
        session.advance_tick(); // (120,120) (120,100) (100,100) (80,100)
        session.set_direction(Direction::Left);
        session.advance_tick(); // (100,120) (120,120) (120,100) (100,100)
        session.set_direction(Direction::Up);
        let result = session.advance_tick(); // head (100,100): tail vacated this tick

        assert_eq!(result, TickResult::Continue);
        assert_eq!(session.snake.head(), Position::new(100, 100));
        assert_eq!(session.snake.len(), 4);
    }
}
