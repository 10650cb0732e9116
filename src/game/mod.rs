mod board;
mod direction;
mod snake;
mod view;
pub(crate) use self::board::Board;
pub(crate) use self::direction::Direction;
pub(crate) use self::snake::Snake;
pub(crate) use self::view::GameView;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Size};

/// The state of a single game of snake: the snake, its food, the score, and
/// whether play is paused or over
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    /// `None` only when the snake covers every playable cell
    food: Option<Position>,
    score: u32,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(screen: Size) -> Self {
        Game::new_with_rng(screen, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(screen: Size, rng: R) -> Game<R> {
        let board = Board::for_screen(screen);
        let mut game = Game {
            rng,
            board,
            snake: board.new_snake(),
            food: None,
            score: 0,
            state: GameState::Running,
        };
        game.reset(screen);
        game
    }

    /// Start over with a fresh snake, no points, and newly-placed food on a
    /// board fitted to `screen`.  The caller is responsible for ensuring the
    /// screen is at least [`MIN_SCREEN_SIZE`][consts::MIN_SCREEN_SIZE].
    pub(crate) fn reset(&mut self, screen: Size) {
        self.board = Board::for_screen(screen);
        self.snake = self.board.new_snake();
        self.score = 0;
        self.state = GameState::Running;
        self.place_food();
    }

    /// Move the snake one step.  Does nothing while paused or after the game
    /// has ended.
    pub(crate) fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let Some(new_head) = self.snake.next_head().filter(|&p| !self.collides(p)) else {
            self.state = GameState::Over;
            return;
        };
        self.snake.push_head(new_head);
        if self.food == Some(new_head) {
            self.score += consts::FOOD_REWARD;
            self.place_food();
        } else {
            self.snake.trim_tail();
        }
    }

    /// Put the food on a random playable cell not occupied by the snake.
    ///
    /// Random cells are tried a bounded number of times while the board is
    /// mostly empty; after that, a free cell is chosen directly from all free
    /// cells so that a crowded board cannot stall placement.
    pub(crate) fn place_food(&mut self) {
        if self.snake.len().saturating_mul(2) < self.board.cells() {
            for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
                let pos = Position::new(
                    self.rng.random_range(1..=self.board.width),
                    self.rng.random_range(1..=self.board.height),
                );
                if !self.snake.contains(pos) {
                    self.food = Some(pos);
                    return;
                }
            }
        }
        let snake = &self.snake;
        self.food = self
            .board
            .positions()
            .filter(|&p| !snake.contains(p))
            .choose(&mut self.rng);
    }
}

impl<R> Game<R> {
    /// Point the snake in `direction`.  Ignored while paused or after the game
    /// has ended, and when `direction` would turn the snake back on itself.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if self.running() {
            let _ = self.snake.turn(direction);
        }
    }

    /// Pause a running game or resume a paused one.  Has no effect once the
    /// game is over.
    pub(crate) fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => self.state = GameState::Paused,
            GameState::Paused => self.state = GameState::Running,
            GameState::Over => (),
        }
    }

    /// Would moving the head into `pos` end the game?  Every current segment
    /// counts, including the tail cell that is about to be vacated.
    fn collides(&self, pos: Position) -> bool {
        !self.board.contains(pos) || self.snake.contains(pos)
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    pub(crate) fn paused(&self) -> bool {
        self.state == GameState::Paused
    }

    pub(crate) fn over(&self) -> bool {
        self.state == GameState::Over
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Position> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused,
    Over,
}
