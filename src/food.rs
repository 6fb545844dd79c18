use std::time::Duration;

use rand::Rng;

use crate::config::PlayField;
use crate::snake::{Position, SnakeBody};

/// Display colour of a food variant, independent of any drawing backend.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// What eating a variant does to the body.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyChange {
    Grow,
    Shrink,
}

/// What eating a variant does to the tick delay.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DelayChange {
    Unchanged,
    /// Longer ticks; the snake slows down.
    Slower(Duration),
    /// Shorter ticks, clamped at the delay floor.
    Faster(Duration),
}

/// One row of the effect table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodEffect {
    pub score_delta: i32,
    pub body: BodyChange,
    pub delay: DelayChange,
}

/// The four food kinds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodVariant {
    Fit,
    Poisonous,
    Fatty,
    Royal,
}

impl FoodVariant {
    /// Every variant, in catalog order.
    pub const ALL: [Self; 4] = [Self::Fit, Self::Poisonous, Self::Fatty, Self::Royal];

    #[must_use]
    pub fn effect(self) -> FoodEffect {
        match self {
            Self::Fit => FoodEffect {
                score_delta: 1,
                body: BodyChange::Grow,
                delay: DelayChange::Unchanged,
            },
            Self::Poisonous => FoodEffect {
                score_delta: -1,
                body: BodyChange::Shrink,
                delay: DelayChange::Unchanged,
            },
            Self::Fatty => FoodEffect {
                score_delta: 3,
                body: BodyChange::Grow,
                delay: DelayChange::Slower(Duration::from_millis(50)),
            },
            Self::Royal => FoodEffect {
                score_delta: 5,
                body: BodyChange::Grow,
                delay: DelayChange::Faster(Duration::from_millis(30)),
            },
        }
    }

    #[must_use]
    pub fn color(self) -> FoodColor {
        let (r, g, b) = match self {
            Self::Fit => (0, 128, 0),
            Self::Poisonous => (128, 0, 128),
            Self::Fatty => (255, 215, 0),
            Self::Royal => (255, 140, 0),
        };
        FoodColor { r, g, b }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Poisonous => "poisonous",
            Self::Fatty => "fatty",
            Self::Royal => "royal",
        }
    }
}

/// Picks a variant uniformly. Keeps no state of its own between calls.
#[must_use]
pub fn select_random_variant<R: Rng + ?Sized>(rng: &mut R) -> FoodVariant {
    FoodVariant::ALL[rng.gen_range(0..FoodVariant::ALL.len())]
}

/// Session-assigned identity of a food instance, so the presentation layer
/// can tell a replacement from the food it already drew.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct FoodId(pub u64);

/// The food currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub variant: FoodVariant,
    pub position: Position,
}

impl Food {
    /// Spawns a random variant on a random free cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        id: FoodId,
        field: PlayField,
        snake: &SnakeBody,
    ) -> Self {
        let variant = select_random_variant(rng);
        let position = spawn_position(rng, field, snake);

        Self {
            id,
            variant,
            position,
        }
    }
}

/// Picks a cell uniformly among those the snake does not occupy.
///
/// Falls back to any cell of the field when the snake covers all of it.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    field: PlayField,
    snake: &SnakeBody,
) -> Position {
    let candidates: Vec<Position> = field
        .cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    if candidates.is_empty() {
        let extent = field.half_extent;
        return Position {
            x: rng.gen_range(-extent..=extent),
            y: rng.gen_range(-extent..=extent),
        };
    }

    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{PlayField, ORIGIN, PLAY_FIELD};
    use crate::snake::{Position, SnakeBody};

    use super::{select_random_variant, spawn_position, BodyChange, DelayChange, FoodVariant};

    #[test]
    fn effect_table_matches_variants() {
        let fit = FoodVariant::Fit.effect();
        assert_eq!(fit.score_delta, 1);
        assert_eq!(fit.body, BodyChange::Grow);
        assert_eq!(fit.delay, DelayChange::Unchanged);

        let poison = FoodVariant::Poisonous.effect();
        assert_eq!(poison.score_delta, -1);
        assert_eq!(poison.body, BodyChange::Shrink);

        assert_eq!(
            FoodVariant::Fatty.effect().delay,
            DelayChange::Slower(Duration::from_millis(50))
        );
        assert_eq!(FoodVariant::Royal.effect().score_delta, 5);
        assert_eq!(
            FoodVariant::Royal.effect().delay,
            DelayChange::Faster(Duration::from_millis(30))
        );
    }

    #[test]
    fn every_variant_has_a_distinct_color() {
        let mut colors: Vec<_> = FoodVariant::ALL.iter().map(|v| v.color()).collect();
        colors.dedup();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn random_selection_reaches_every_variant() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = HashMap::new();

        for _ in 0..4_000 {
            *counts.entry(select_random_variant(&mut rng)).or_insert(0_u32) += 1;
        }

        assert_eq!(counts.len(), 4);
        for count in counts.values() {
            assert!((800..1_200).contains(count), "skewed count {count}");
        }
    }

    #[test]
    fn spawns_stay_inside_the_field() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = SnakeBody::new(ORIGIN);

        for _ in 0..1_000 {
            let position = spawn_position(&mut rng, PLAY_FIELD, &snake);
            assert!(PLAY_FIELD.contains(position));
            assert_ne!(position, ORIGIN);
        }
    }

    #[test]
    fn full_field_still_yields_a_cell() {
        let field = PlayField { half_extent: 0 };
        let mut rng = StdRng::seed_from_u64(3);
        let snake = SnakeBody::new(Position { x: 0, y: 0 });

        assert_eq!(spawn_position(&mut rng, field, &snake), Position { x: 0, y: 0 });
    }
}
