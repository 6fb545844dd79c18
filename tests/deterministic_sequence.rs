use std::time::Duration;

use variety_snake::food::FoodVariant;
use variety_snake::game::{DeathCause, GameSession, Phase, TickOutcome};
use variety_snake::input::Direction;
use variety_snake::snake::{Position, SnakeBody};

#[test]
fn stepwise_feeding_and_wall_collision() {
    let mut session = GameSession::new_with_seed(42);
    session.set_snake(SnakeBody::new(Position { x: 11, y: 13 }));
    session.place_food(FoodVariant::Fatty, Position { x: 12, y: 13 });

    session.request_direction(Direction::Right);
    assert_eq!(session.tick(), TickOutcome::Ate(FoodVariant::Fatty));
    assert_eq!(session.score(), 3);
    assert_eq!(session.snake().len(), 2);
    assert_eq!(session.next_wait(), Duration::from_millis(150));

    session.place_food(FoodVariant::Royal, Position { x: 12, y: 14 });
    session.request_direction(Direction::Up);
    assert_eq!(session.tick(), TickOutcome::Ate(FoodVariant::Royal));
    assert_eq!(session.score(), 8);
    assert_eq!(session.snake().len(), 3);
    assert_eq!(session.delay(), Duration::from_millis(120));
    assert_eq!(
        session.snake().segments(),
        &[
            Position { x: 12, y: 14 },
            Position { x: 12, y: 13 },
            Position { x: 11, y: 13 },
        ]
    );

    session.place_food(FoodVariant::Poisonous, Position { x: -14, y: -14 });
    assert_eq!(
        session.tick(),
        TickOutcome::Died {
            cause: DeathCause::Edge,
            final_score: 8
        }
    );
    assert_eq!(session.phase(), Phase::Dying);

    assert_eq!(session.tick(), TickOutcome::Resumed);
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.next_wait(), Duration::from_millis(100));
}
