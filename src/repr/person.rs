//! People: the shared [`Person`] core, [`Student`]s and [`Instructor`]s.

prelude! {
    repr::Grade,
}

pub type Addresses = SmallVec<[String; 2]>;

/// Biographical data shared by students and instructors.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    date_of_birth: NaiveDate,
    addresses: Addresses,
    base_salary: Money,
}

impl Person {
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate, base_salary: Money) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            addresses: smallvec![],
            base_salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into()
    }
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
    pub fn base_salary(&self) -> Money {
        self.base_salary
    }
    pub fn set_base_salary(&mut self, base_salary: Money) {
        self.base_salary = base_salary
    }

    /// Age as the difference between `year` and the year of birth.
    ///
    /// Month and day are ignored: someone born on december 31st, 2000 is `24` all through 2024.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! { repr::Person }
    /// let dob = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
    /// let john = Person::new("John Doe", dob, 0.0);
    /// assert_eq!(john.calculate_age_at(2024), 24);
    /// ```
    pub fn calculate_age_at(&self, year: i32) -> i32 {
        year - self.date_of_birth.year()
    }

    /// Base salary, error if negative.
    pub fn calculate_salary(&self) -> Res<Money> {
        if self.base_salary < 0.0 {
            bail!(@invalid_salary self.base_salary)
        }
        Ok(self.base_salary)
    }

    pub fn add_address(&mut self, address: impl Into<String>) {
        self.addresses.push(address.into())
    }
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }
}

/// A student, with their courses and grades.
#[derive(Debug, Clone)]
pub struct Student {
    pub idx: idx::Student,
    person: Person,
    /// Enrollment order, duplicates included.
    courses: Vec<idx::Course>,
    /// At most one grade per course.
    grades: BTreeMap<idx::Course, Grade>,
}

impl PersonSpec for Student {
    fn person(&self) -> &Person {
        &self.person
    }
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
impl StudentSpec for Student {
    fn courses(&self) -> &[idx::Course] {
        &self.courses
    }
    fn calculate_gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().map(|grade| grade.points()).sum();
        total / self.grades.len() as f64
    }
}

impl Student {
    pub fn new(idx: idx::Student, person: Person) -> Self {
        Self {
            idx,
            person,
            courses: Vec::with_capacity(5),
            grades: BTreeMap::new(),
        }
    }

    /// Registers a course.
    ///
    /// Only one side of the enrollment relation, see [`Ctx::enroll`].
    pub fn add_course(&mut self, course: idx::Course) {
        self.courses.push(course)
    }
    pub fn is_enrolled_in(&self, course: idx::Course) -> bool {
        self.courses.contains(&course)
    }

    /// Sets the grade for a course, returns the grade it replaces if any.
    ///
    /// The course does not need to be one the student is enrolled in.
    pub fn add_grade(&mut self, course: idx::Course, grade: impl Into<Grade>) -> Option<Grade> {
        self.grades.insert(course, grade.into())
    }
    pub fn grade(&self, course: idx::Course) -> Option<Grade> {
        self.grades.get(&course).cloned()
    }
    pub fn grades(&self) -> &BTreeMap<idx::Course, Grade> {
        &self.grades
    }
}

/// An instructor, earning a seniority bonus on top of their base salary.
#[derive(Debug, Clone)]
pub struct Instructor {
    pub idx: idx::Instructor,
    person: Person,
    department: Option<idx::Dept>,
    join_date: NaiveDate,
    /// Bonus per year since [`Self::join_date`], not validated.
    bonus: Money,
}

impl PersonSpec for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
    fn calculate_salary_at(&self, year: i32) -> Res<Money> {
        let base = self.person.calculate_salary()?;
        Ok(base + self.experience_bonus_at(year))
    }
}
impl InstructorSpec for Instructor {
    fn department(&self) -> Option<idx::Dept> {
        self.department
    }
}

impl Instructor {
    pub fn new(idx: idx::Instructor, person: Person, join_date: NaiveDate, bonus: Money) -> Self {
        Self {
            idx,
            person,
            department: None,
            join_date,
            bonus,
        }
    }

    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }
    pub fn bonus(&self) -> Money {
        self.bonus
    }
    pub fn set_bonus(&mut self, bonus: Money) {
        self.bonus = bonus
    }

    /// Sets the department, returns the previous one.
    ///
    /// Does not touch the department itself, see [`Ctx::assign_department`].
    pub fn set_department(&mut self, dept: idx::Dept) -> Option<idx::Dept> {
        std::mem::replace(&mut self.department, Some(dept))
    }

    /// Years since joining, by calendar year only.
    pub fn years_of_experience_at(&self, year: i32) -> i32 {
        year - self.join_date.year()
    }
    /// Seniority bonus: years of experience times the per-year bonus.
    pub fn experience_bonus_at(&self, year: i32) -> Money {
        Money::from(self.years_of_experience_at(year)) * self.bonus
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        repr::{Grade, Instructor, Person, Student},
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("invalid test date")
    }

    fn student(base_salary: Money) -> Student {
        Student::new(
            idx::Student::new(0),
            Person::new("John Doe", date(2000, 1, 1), base_salary),
        )
    }

    fn smith(base_salary: Money) -> Instructor {
        Instructor::new(
            idx::Instructor::new(0),
            Person::new("Dr. Smith", date(1980, 1, 1), base_salary),
            date(2010, 1, 1),
            1000.0,
        )
    }

    #[test]
    fn age_ignores_month_and_day() {
        let p = Person::new("Late", date(1990, 12, 31), 0.0);
        assert_eq!(p.calculate_age_at(2024), 34);
        let p = Person::new("Early", date(1990, 1, 1), 0.0);
        assert_eq!(p.calculate_age_at(2024), 34);
    }

    #[test]
    fn addresses_keep_insertion_order() {
        let mut s = student(0.0);
        s.add_address("1 Main St");
        s.add_address("2 Side Rd");
        s.add_address("1 Main St");
        assert_eq!(s.addresses(), &["1 Main St", "2 Side Rd", "1 Main St"]);
    }

    #[test]
    fn negative_base_salary_fails() {
        let s = student(-1.0);
        assert!(s.calculate_salary_at(2024).unwrap_err().is_invalid_salary());
        let i = smith(-50_000.0);
        assert!(i.calculate_salary_at(2024).unwrap_err().is_invalid_salary());
        // nothing changed
        assert_eq!(i.person().base_salary(), -50_000.0);
        assert_eq!(i.bonus(), 1000.0);
    }

    #[test]
    fn zero_salary_is_fine() {
        assert_eq!(student(0.0).calculate_salary_at(2024).unwrap(), 0.0);
    }

    #[test]
    fn instructor_salary_adds_seniority() {
        let i = smith(50_000.0);
        for year in [2010, 2011, 2024, 2026] {
            let expected = 50_000.0 + f64::from(year - 2010) * 1000.0;
            assert_eq!(i.calculate_salary_at(year).unwrap(), expected);
        }
        // joining later than `year` yields a negative bonus, not an error
        assert_eq!(i.calculate_salary_at(2008).unwrap(), 48_000.0);
    }

    #[test]
    fn negative_bonus_is_not_validated() {
        let mut i = smith(50_000.0);
        i.set_bonus(-500.0);
        assert_eq!(i.calculate_salary_at(2020).unwrap(), 45_000.0);
        i.set_bonus(0.0);
        assert_eq!(i.calculate_salary_at(2020).unwrap(), 50_000.0);
    }

    #[test]
    fn gpa_without_grades_is_zero() {
        assert_eq!(student(0.0).calculate_gpa(), 0.0);
    }

    #[test]
    fn gpa_counts_each_course_once() {
        let mut s = student(0.0);
        let (c0, c1) = (idx::Course::new(0), idx::Course::new(1));
        assert_eq!(s.add_grade(c0, 'A'), None);
        assert_eq!(s.calculate_gpa(), 4.0);
        assert_eq!(s.add_grade(c0, 'B'), Some(Grade::A));
        assert_eq!(s.calculate_gpa(), 3.0);
        assert_eq!(s.grades().len(), 1);
        s.add_grade(c1, Grade::from('?'));
        assert_eq!(s.calculate_gpa(), 1.5);
        assert_eq!(s.grade(c1), Some(Grade::Other('?')));
    }
}
