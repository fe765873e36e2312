prelude! {
    repr::{Instructor, Person, Student},
}

/// Age, salary and address capabilities of anything built around a [`Person`].
///
/// Implementors only provide access to their [`Person`]. Salary can be overridden, overrides
/// should compose with the base computation so that a negative base salary still fails.
pub trait PersonSpec {
    fn person(&self) -> &Person;
    fn person_mut(&mut self) -> &mut Person;

    fn name(&self) -> &str {
        self.person().name()
    }

    fn calculate_age_at(&self, year: i32) -> i32 {
        self.person().calculate_age_at(year)
    }
    fn calculate_age(&self) -> i32 {
        self.calculate_age_at(Clock::System.current_year())
    }

    fn calculate_salary_at(&self, _year: i32) -> Res<Money> {
        self.person().calculate_salary()
    }
    fn calculate_salary(&self) -> Res<Money> {
        self.calculate_salary_at(Clock::System.current_year())
    }

    fn add_address(&mut self, address: impl Into<String>)
    where
        Self: Sized,
    {
        self.person_mut().add_address(address)
    }
    fn addresses(&self) -> &[String] {
        self.person().addresses()
    }
}

pub trait StudentSpec: PersonSpec {
    fn courses(&self) -> &[idx::Course];
    /// Mean grade points over graded courses, `0.0` if none.
    fn calculate_gpa(&self) -> f64;
}

pub trait InstructorSpec: PersonSpec {
    fn department(&self) -> Option<idx::Dept>;
}

/// A borrowed student or instructor.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Student(&'a Student),
    Instructor(&'a Instructor),
}

impl<'a> Member<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Student(_) => "student",
            Self::Instructor(_) => "instructor",
        }
    }

    /// Dynamic view on the [`PersonSpec`] capabilities of the member.
    pub fn spec(&self) -> &'a dyn PersonSpec {
        match *self {
            Self::Student(s) => s,
            Self::Instructor(i) => i,
        }
    }

    pub fn name(&self) -> &'a str {
        self.spec().name()
    }
}

#[cfg(test)]
mod tests {
    prelude! {}

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 6, 15).expect("invalid test date")
    }

    #[test]
    fn member_dispatches_salary_override() {
        let mut ctx = Ctx::with_clock(Clock::Fixed(2020));
        let s = ctx.add_student("Jane Roe", date(2001), 10.0);
        let i = ctx.add_instructor("Dr. Who", date(1970), 100.0, date(2015), 10.0);

        let student = ctx.student(s);
        assert_eq!(student.kind(), "student");
        assert_eq!(student.spec().calculate_salary_at(2020).unwrap(), 10.0);

        let instructor = ctx.instructor(i);
        assert_eq!(instructor.kind(), "instructor");
        assert_eq!(instructor.name(), "Dr. Who");
        assert_eq!(instructor.spec().calculate_salary_at(2020).unwrap(), 150.0);
        assert_eq!(instructor.spec().calculate_age_at(2020), 50);
    }

    #[test]
    fn system_clock_defaults() {
        let mut ctx = Ctx::new();
        let s = ctx.add_student("Jane Roe", date(2001), 10.0);
        let now = chrono::Local::now().year();
        let age = ctx[s].calculate_age();
        assert!(age == now - 2001 || age == now + 1 - 2001);
        assert_eq!(ctx[s].calculate_salary().unwrap(), 10.0);
        ctx[s].add_address("12 Elm St");
        assert_eq!(ctx[s].addresses(), &["12 Elm St"]);
    }
}
