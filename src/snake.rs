use crate::config::PlayField;
use crate::input::Direction;

/// Grid position in logical cell coordinates; y grows upwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered segment chain, head first. Never empty.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeBody {
    segments: Vec<Position>,
    vacated: Option<Position>,
}

impl SnakeBody {
    /// Creates a one-segment snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            segments: vec![start],
            vacated: None,
        }
    }

    /// Creates a snake from explicit body segments (first is head).
    ///
    /// An empty list yields a single segment at the origin.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        if segments.is_empty() {
            return Self::new(crate::config::ORIGIN);
        }

        Self {
            segments,
            vacated: None,
        }
    }

    /// Advances one cell. Every non-head segment takes its predecessor's
    /// pre-move position; the head steps towards `direction`.
    pub fn move_towards(&mut self, direction: Direction) {
        if direction == Direction::Stopped {
            return;
        }

        let next_head = self.head().stepped(direction);
        self.vacated = self.segments.last().copied();
        self.segments.rotate_right(1);
        self.segments[0] = next_head;
    }

    /// Appends one segment on the cell the tail vacated last move.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.segments.push(self.vacated.unwrap_or(tail));
    }

    /// Removes the tail. The head is never removed.
    pub fn shrink(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    /// Returns true once the head has left the play field.
    #[must_use]
    pub fn collides_with_edge(&self, field: PlayField) -> bool {
        !field.contains(self.head())
    }

    /// Returns true if any non-head segment is closer than one cell to the head.
    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|segment| *segment == head)
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PLAY_FIELD;
    use crate::input::Direction;

    use super::{Position, SnakeBody};

    fn line(cells: &[(i32, i32)]) -> SnakeBody {
        SnakeBody::from_segments(cells.iter().map(|&(x, y)| Position { x, y }).collect())
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = SnakeBody::new(Position { x: 0, y: 0 });

        snake.move_towards(Direction::Up);
        snake.move_towards(Direction::Right);

        assert_eq!(snake.head(), Position { x: 1, y: 1 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn segments_follow_their_predecessor() {
        let mut snake = line(&[(2, 0), (1, 0), (0, 0)]);

        snake.move_towards(Direction::Up);

        assert_eq!(
            snake.segments(),
            &[
                Position { x: 2, y: 1 },
                Position { x: 2, y: 0 },
                Position { x: 1, y: 0 },
            ]
        );
    }

    #[test]
    fn stopped_move_is_a_no_op() {
        let mut snake = line(&[(2, 0), (1, 0)]);
        let before = snake.clone();

        snake.move_towards(Direction::Stopped);

        assert_eq!(snake, before);
    }

    #[test]
    fn growth_fills_the_vacated_cell() {
        let mut snake = line(&[(1, 0), (0, 0)]);

        snake.move_towards(Direction::Right);
        snake.grow();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position { x: 0, y: 0 });
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn grown_single_segment_does_not_hit_itself() {
        let mut snake = SnakeBody::new(Position { x: 0, y: 0 });

        snake.move_towards(Direction::Left);
        snake.grow();
        snake.move_towards(Direction::Left);

        assert_eq!(
            snake.segments(),
            &[Position { x: -2, y: 0 }, Position { x: -1, y: 0 }]
        );
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn shrink_never_removes_the_head() {
        let mut snake = line(&[(0, 0), (0, 1)]);

        snake.shrink();
        snake.shrink();

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position { x: 0, y: 0 });
    }

    #[test]
    fn edge_collision_triggers_past_the_last_cell() {
        let mut snake = SnakeBody::new(Position { x: 14, y: 3 });
        assert!(!snake.collides_with_edge(PLAY_FIELD));

        snake.move_towards(Direction::Right);

        assert!(snake.collides_with_edge(PLAY_FIELD));
    }

    #[test]
    fn self_collision_when_head_enters_body() {
        let mut snake = line(&[(1, 1), (0, 1), (0, 0), (1, 0), (2, 0), (2, 1)]);

        snake.move_towards(Direction::Down);

        assert!(snake.collides_with_self());
    }

    #[test]
    fn adjacent_segments_are_not_a_collision() {
        let snake = line(&[(0, 0), (0, 1), (1, 1), (1, 0)]);

        assert!(!snake.collides_with_self());
    }
}
