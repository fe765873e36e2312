prelude!(repr::Color);

/// A ball, popped once its size reaches zero.
///
/// Throwing a popped ball does nothing. Popping cannot be undone.
#[derive(Debug, Clone)]
pub struct Ball {
    size: u32,
    color: Color,
    throw_count: u32,
}

impl Ball {
    pub fn new(size: u32, color: Color) -> Self {
        Self {
            size,
            color,
            throw_count: 0,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }
    pub fn color(&self) -> &Color {
        &self.color
    }
    #[inline]
    pub fn is_popped(&self) -> bool {
        self.size == 0
    }

    pub fn pop(&mut self) {
        self.size = 0
    }

    /// Counts a throw, unless the ball is popped.
    pub fn throw(&mut self) {
        if self.is_popped() {
            log::trace!("ignoring throw of popped {} ball", self.color);
        } else {
            self.throw_count += 1
        }
    }

    pub fn throw_count(&self) -> u32 {
        self.throw_count
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        repr::{Ball, Color},
    }

    #[test]
    fn throws_stop_counting_once_popped() {
        let mut ball = Ball::new(5, Color::new(255, 0, 0));
        ball.throw();
        ball.throw();
        ball.pop();
        ball.throw();
        assert_eq!(ball.throw_count(), 2);
        assert!(ball.is_popped());
        assert_eq!(ball.size(), 0);
    }

    #[test]
    fn pop_is_idempotent() {
        let mut ball = Ball::new(1, Color::new(0, 0, 255));
        ball.throw();
        ball.pop();
        ball.pop();
        ball.throw();
        assert_eq!(ball.throw_count(), 1);
        assert_eq!(ball.color().blue, 255);
    }

    #[test]
    fn zero_sized_ball_starts_popped() {
        let mut ball = Ball::new(0, Color::new(0, 0, 0));
        assert!(ball.is_popped());
        ball.throw();
        assert_eq!(ball.throw_count(), 0);
    }
}
