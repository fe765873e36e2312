prelude!();

/// A letter grade.
///
/// Anything that is not one of `A`, `B`, `C`, `D` or `F` is kept as [`Grade::Other`] and is
/// worth no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    Other(char),
}

impl From<char> for Grade {
    fn from(c: char) -> Self {
        match c {
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            'F' => Self::F,
            c => Self::Other(c),
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letter().fmt(f)
    }
}

impl Grade {
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
            Self::Other(c) => c,
        }
    }

    /// Grade points on a four-point scale.
    pub fn points(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
            Self::F | Self::Other(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Grade;

    #[test]
    fn points_scale() {
        let pts: Vec<f64> = "ABCDF".chars().map(|c| Grade::from(c).points()).collect();
        assert_eq!(pts, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_letters_are_worth_nothing() {
        let g = Grade::from('a');
        assert_eq!(g, Grade::Other('a'));
        assert_eq!(g.points(), 0.0);
        assert_eq!(Grade::from('E').to_string(), "E");
    }
}
