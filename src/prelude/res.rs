//! Result-handling types/traits/macros.

prelude! {}

#[macro_export]
macro_rules! error {
    ( $fmt_head:literal $(, $fmt_args:expr)* $(,)? ) => {
        $crate::prelude::res::Error::from(format!(
            $fmt_head $(, $fmt_args)*
        ))
    };
    ( @invalid_salary $salary:expr ) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::new_invalid_salary($salary)
        )
    };
    ($e:expr) => {
        $crate::prelude::res::Error::from(
            $crate::prelude::res::ErrorSrc::from($e)
        )
    };
    ($($unexpected:tt)*) => {
        compile_error!(
            "expected println!-like string interpolation \
            or an expression convertible `Into` an error"
        )
    };
}

#[macro_export]
macro_rules! bail {
    ($($input:tt)+) => {
        return $crate::prelude::Res::Err($crate::error!($($input)+))
    };
}

#[derive(Debug)]
pub enum ErrorSrc {
    Msg(String),
    /// A salary computation ran into a negative base salary.
    InvalidSalary {
        salary: Money,
    },
    Std(Box<dyn std::error::Error>),
}
impl ErrorSrc {
    pub fn new_std(e: impl std::error::Error + 'static) -> Self {
        Self::Std(Box::new(e))
    }
    pub fn new_invalid_salary(salary: Money) -> Self {
        Self::InvalidSalary { salary }
    }
}
impl From<String> for ErrorSrc {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}
impl From<&'_ str> for ErrorSrc {
    fn from(s: &str) -> Self {
        Self::Msg(s.into())
    }
}
impl From<std::num::ParseIntError> for ErrorSrc {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::new_std(e)
    }
}

impl Display for ErrorSrc {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorSrc::*;
        match self {
            Msg(blah) => {
                for (idx, line) in blah.lines().enumerate() {
                    if idx > 0 {
                        writeln!(fmt)?;
                    }
                    line.fmt(fmt)?;
                }
                Ok(())
            }
            InvalidSalary { salary } => {
                write!(fmt, "salary cannot be negative, got `{}`", salary)
            }
            Std(err) => err.fmt(fmt),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ErrorCtx {
    Msg(String),
}
impl From<String> for ErrorCtx {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}
impl From<&'_ str> for ErrorCtx {
    fn from(s: &str) -> Self {
        Self::Msg(s.into())
    }
}
impl Display for ErrorCtx {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorCtx::*;
        match self {
            Msg(blah) => {
                for (idx, line) in blah.lines().enumerate() {
                    if idx > 0 {
                        writeln!(fmt)?;
                    }
                    line.fmt(fmt)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Error {
    pub src: ErrorSrc,
    pub ctx: Vec<ErrorCtx>,
}
impl<T> From<T> for Error
where
    T: Into<ErrorSrc>,
{
    fn from(t: T) -> Self {
        Self {
            src: t.into(),
            ctx: vec![],
        }
    }
}
impl Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.src.fmt(fmt)?;
        for ctx in self.ctx.iter() {
            writeln!(fmt)?;
            ctx.fmt(fmt)?;
        }
        Ok(())
    }
}
impl Error {
    /// True if the error originates from a negative base salary.
    pub fn is_invalid_salary(&self) -> bool {
        matches!(self.src, ErrorSrc::InvalidSalary { .. })
    }
}

pub type Res<T> = Result<T, Error>;

pub trait WithCtx: Sized {
    type Output;
    fn context<E>(self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>;
}

impl WithCtx for Error {
    type Output = Error;
    fn context<E>(mut self, ctx: impl FnOnce() -> E) -> Self::Output
    where
        E: Into<ErrorCtx>,
    {
        self.ctx.push(ctx().into());
        self
    }
}
impl<T, E> WithCtx for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Res<T>;
    fn context<Er>(self, ctx: impl FnOnce() -> Er) -> Self::Output
    where
        Er: Into<ErrorCtx>,
    {
        self.map_err(|err| err.into().context(ctx))
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    fn negative() -> Res<Money> {
        bail!(@invalid_salary -1.0)
    }

    #[test]
    fn invalid_salary_keeps_its_kind_under_context() {
        let err = negative().context(|| "computing salary of `Jane`").unwrap_err();
        assert!(err.is_invalid_salary());
        assert_eq!(
            err.to_string(),
            "salary cannot be negative, got `-1`\ncomputing salary of `Jane`"
        );
    }

    #[test]
    fn message_errors_are_not_salary_errors() {
        let err = error!("something {} happened", "bad");
        assert!(!err.is_invalid_salary());
        assert_eq!(err.to_string(), "something bad happened");
    }
}
