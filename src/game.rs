use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, LOSS_MESSAGE, MIN_DELAY_MS, ORIGIN, PLAY_FIELD};
use crate::food::{BodyChange, DelayChange, Food, FoodId, FoodVariant};
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, SnakeBody};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Waiting for the first direction; the snake is stopped.
    Idle,
    Running,
    /// A collision was just detected; the loss message is up until the next tick.
    Dying,
}

/// Why the snake died.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathCause {
    Edge,
    SelfCollision,
}

/// What one tick did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// No direction yet; nothing moved.
    Idle,
    Moved,
    Ate(FoodVariant),
    /// Collision; the session has been reset and the loss pause begins.
    Died { cause: DeathCause, final_score: u32 },
    /// The loss pause ended; back to idle.
    Resumed,
}

/// One segment as the renderer sees it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SegmentView {
    pub position: Position,
    pub is_head: bool,
}

/// Read-only snapshot handed to the presentation layer each frame.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    /// Live body, or the dead body while the loss pause runs.
    pub body: &'a [Position],
    pub food: Food,
    pub score: u32,
    pub status_message: Option<&'static str>,
    pub phase: Phase,
}

impl SessionView<'_> {
    /// Segments head first, the head flagged.
    pub fn segments(&self) -> impl Iterator<Item = SegmentView> + '_ {
        self.body
            .iter()
            .enumerate()
            .map(|(index, position)| SegmentView {
                position: *position,
                is_head: index == 0,
            })
    }
}

/// Complete mutable state for one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    snake: SnakeBody,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Food,
    next_food_id: u64,
    score: u32,
    delay: Duration,
    phase: Phase,
    status_message: Option<&'static str>,
    wreck: Option<SnakeBody>,
    config: GameConfig,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session from config, seeded from `config.seed` when present.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a deterministic session with default timing.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = SnakeBody::new(ORIGIN);
        let food = Food::spawn(&mut rng, FoodId(0), PLAY_FIELD, &snake);

        Self {
            snake,
            direction: Direction::Stopped,
            pending_direction: None,
            food,
            next_food_id: 1,
            score: 0,
            delay: config.base_delay(),
            phase: Phase::Idle,
            status_message: None,
            wreck: None,
            config,
            rng,
        }
    }

    /// Queues a direction for the next tick, replacing any earlier request.
    ///
    /// Validation against the current direction happens when the tick
    /// applies it, so a reversal queued mid-tick is dropped then.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.phase == Phase::Dying || direction == Direction::Stopped {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances the simulation by one tick. Never sleeps.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::Dying {
            self.status_message = None;
            self.wreck = None;
            self.phase = Phase::Idle;
            info!("loss pause over, waiting for input");
            return TickOutcome::Resumed;
        }

        self.apply_pending_direction();
        if self.direction == Direction::Stopped {
            return TickOutcome::Idle;
        }

        self.snake.move_towards(self.direction);

        let mut outcome = TickOutcome::Moved;
        if self.snake.head() == self.food.position {
            let variant = self.food.variant;
            self.apply_effect(variant);
            self.respawn_food();
            outcome = TickOutcome::Ate(variant);
        }

        if let Some(cause) = self.collision() {
            let final_score = self.score;
            self.die(cause);
            return TickOutcome::Died { cause, final_score };
        }

        outcome
    }

    /// Applies a variant's effect to score, body and delay.
    pub fn apply_effect(&mut self, variant: FoodVariant) {
        let effect = variant.effect();

        self.score = self.score.saturating_add_signed(effect.score_delta);

        match effect.body {
            BodyChange::Grow => self.snake.grow(),
            BodyChange::Shrink => self.snake.shrink(),
        }

        let floor = Duration::from_millis(MIN_DELAY_MS);
        self.delay = match effect.delay {
            DelayChange::Unchanged => self.delay,
            DelayChange::Slower(step) => self.delay + step,
            DelayChange::Faster(step) => self.delay.saturating_sub(step).max(floor),
        };

        debug!(
            "ate {} food: score {}, length {}, delay {} ms",
            variant.name(),
            self.score,
            self.snake.len(),
            self.delay.as_millis()
        );
    }

    /// Restores the freshly constructed state, with a new food.
    pub fn reset(&mut self) {
        self.snake = SnakeBody::new(ORIGIN);
        self.direction = Direction::Stopped;
        self.pending_direction = None;
        self.score = 0;
        self.delay = self.config.base_delay();
        self.phase = Phase::Idle;
        self.status_message = None;
        self.wreck = None;
        self.respawn_food();
    }

    /// How long the driver should wait before the next tick.
    #[must_use]
    pub fn next_wait(&self) -> Duration {
        match self.phase {
            Phase::Dying => self.config.death_pause(),
            Phase::Idle | Phase::Running => self.delay,
        }
    }

    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        let body = self.wreck.as_ref().unwrap_or(&self.snake);

        SessionView {
            body: body.segments(),
            food: self.food,
            score: self.score,
            status_message: self.status_message,
            phase: self.phase,
        }
    }

    #[must_use]
    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        self.status_message
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Replaces the body, for scripted scenarios.
    pub fn set_snake(&mut self, snake: SnakeBody) {
        self.snake = snake;
    }

    /// Sets the current direction without validation, for scripted scenarios.
    /// A non-stopped direction also starts the run.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.phase = if direction == Direction::Stopped {
            Phase::Idle
        } else {
            Phase::Running
        };
    }

    /// Places a specific food, for scripted scenarios.
    pub fn place_food(&mut self, variant: FoodVariant, position: Position) {
        self.food = Food {
            id: self.allocate_food_id(),
            variant,
            position,
        };
    }

    fn apply_pending_direction(&mut self) {
        let Some(requested) = self.pending_direction.take() else {
            return;
        };

        if !direction_change_is_valid(self.direction, requested) {
            debug!("ignored reversal {:?} -> {:?}", self.direction, requested);
            return;
        }

        if self.phase == Phase::Idle {
            info!("run started heading {requested:?}");
            self.phase = Phase::Running;
        }
        self.direction = requested;
    }

    fn collision(&self) -> Option<DeathCause> {
        if self.snake.collides_with_edge(PLAY_FIELD) {
            Some(DeathCause::Edge)
        } else if self.snake.collides_with_self() {
            Some(DeathCause::SelfCollision)
        } else {
            None
        }
    }

    fn die(&mut self, cause: DeathCause) {
        info!(
            "snake died ({cause:?}) with score {} and length {}",
            self.score,
            self.snake.len()
        );

        let wreck = self.snake.clone();
        self.reset();
        self.wreck = Some(wreck);
        self.status_message = Some(LOSS_MESSAGE);
        self.phase = Phase::Dying;
    }

    fn respawn_food(&mut self) {
        let id = self.allocate_food_id();
        self.food = Food::spawn(&mut self.rng, id, PLAY_FIELD, &self.snake);
    }

    fn allocate_food_id(&mut self) -> FoodId {
        let id = FoodId(self.next_food_id);
        self.next_food_id += 1;
        id
    }
}
