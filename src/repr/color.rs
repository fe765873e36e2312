prelude!();

/// An RGBA color.
///
/// Channels are not range-checked, out-of-range values are kept as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub alpha: i32,
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl Color {
    /// Default alpha channel, fully opaque.
    pub const OPAQUE: i32 = 255;

    /// Opaque color.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self::with_alpha(red, green, blue, Self::OPAQUE)
    }
    pub fn with_alpha(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Unweighted average of the red, green and blue channels, truncated.
    ///
    /// Summed as `i64`, the average of three `i32`s always fits back in an `i32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! { repr::Color }
    /// assert_eq!(Color::new(255, 0, 0).grayscale(), 85);
    /// assert_eq!(Color::new(1, 1, 1).grayscale(), 1);
    /// assert_eq!(Color::new(10, 10, 11).grayscale(), 10);
    /// ```
    pub fn grayscale(&self) -> i32 {
        let sum = i64::from(self.red) + i64::from(self.green) + i64::from(self.blue);
        (sum / 3) as i32
    }
}
