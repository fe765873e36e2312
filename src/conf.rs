//! Configuration: where "the current year" comes from.

prelude! {}

/// Decides what the current year is for age, salary and seniority computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local calendar year of the host.
    #[default]
    System,
    /// Pinned year, mostly useful for reproducible runs.
    Fixed(i32),
}

impl Clock {
    /// Environment variable [`Self::from_env`] reads a fixed year from.
    pub const YEAR_ENV_VAR: &'static str = "CAMPUS_CURRENT_YEAR";

    /// Builds a clock from [`Self::YEAR_ENV_VAR`].
    ///
    /// Falls back to [`Clock::System`] when the variable is unset or does not hold a year.
    pub fn from_env() -> Self {
        match std::env::var(Self::YEAR_ENV_VAR) {
            Ok(val) => Self::parse(&val).unwrap_or_else(|err| {
                log::warn!("ignoring `{}`: {}", Self::YEAR_ENV_VAR, err);
                Self::System
            }),
            Err(_) => Self::System,
        }
    }

    /// Parses a fixed year.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! {}
    /// assert_eq!(Clock::parse(" 2024 ").unwrap(), Clock::Fixed(2024));
    /// assert!(Clock::parse("next year").is_err());
    /// ```
    pub fn parse(s: impl AsRef<str>) -> Res<Self> {
        let s = s.as_ref().trim();
        let year = s
            .parse::<i32>()
            .context(|| format!("expected a year, found `{}`", s))?;
        Ok(Self::Fixed(year))
    }

    pub fn current_year(self) -> i32 {
        match self {
            Self::System => chrono::Local::now().year(),
            Self::Fixed(year) => year,
        }
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    #[test]
    fn fixed_clock_is_stable() {
        assert_eq!(Clock::Fixed(1999).current_year(), 1999);
    }

    #[test]
    fn system_clock_follows_chrono() {
        let now = chrono::Local::now().year();
        let year = Clock::System.current_year();
        // the test could straddle new year's eve
        assert!(year == now || year == now + 1);
    }

    // only test touching the environment variable
    #[test]
    fn from_env_falls_back_to_system() {
        std::env::set_var(Clock::YEAR_ENV_VAR, "2024");
        assert_eq!(Clock::from_env(), Clock::Fixed(2024));
        std::env::set_var(Clock::YEAR_ENV_VAR, "soon");
        assert_eq!(Clock::from_env(), Clock::System);
        std::env::remove_var(Clock::YEAR_ENV_VAR);
        assert_eq!(Clock::from_env(), Clock::System);
    }

    #[test]
    fn bad_year_reports_input() {
        let err = Clock::parse("twenty").unwrap_err();
        assert!(err.to_string().contains("`twenty`"));
        assert!(!err.is_invalid_salary());
    }
}
