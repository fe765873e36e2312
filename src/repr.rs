//! Entity representations.
//!
//! [`Student`]s, [`Instructor`]s, [`Course`]s and [`Department`]s are stored by a [`Ctx`] and
//! refer to each other through [`idx`] indices. [`Color`] and [`Ball`] are plain values.

prelude! {}

pub mod ball;
pub mod color;
pub mod grade;
pub mod idx;
pub mod person;

pub use ball::Ball;
pub use color::Color;
pub use grade::Grade;
pub use person::{Instructor, Person, Student};

/// Salaries, bonuses and budgets.
pub type Money = f64;

/// A course, along with the students enrolled in it.
#[derive(Debug, Clone)]
pub struct Course {
    pub idx: idx::Course,
    name: String,
    /// Enrollment order, duplicates included.
    students: Vec<idx::Student>,
}

impl Course {
    pub fn with_capacity(idx: idx::Course, name: impl Into<String>, capa: usize) -> Self {
        Self {
            idx,
            name: name.into(),
            students: Vec::with_capacity(capa),
        }
    }
    pub fn new(idx: idx::Course, name: impl Into<String>) -> Self {
        Self::with_capacity(idx, name, 7)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a student, no questions asked.
    ///
    /// Only one side of the enrollment relation, see [`Ctx::enroll`].
    pub fn add_student(&mut self, student: idx::Student) {
        self.students.push(student)
    }
    pub fn students(&self) -> &[idx::Student] {
        &self.students
    }
    pub fn has_student(&self, student: idx::Student) -> bool {
        self.students.contains(&student)
    }
}

/// A department.
///
/// The head is not maintained automatically: [`Ctx::assign_department`] only updates the
/// instructor, use [`Ctx::set_department_head`] to update this side.
#[derive(Debug, Clone)]
pub struct Department {
    pub idx: idx::Dept,
    name: String,
    head: Option<idx::Instructor>,
    budget: Money,
    courses: Vec<idx::Course>,
}

impl Department {
    pub fn new(idx: idx::Dept, name: impl Into<String>, budget: Money) -> Self {
        Self {
            idx,
            name: name.into(),
            head: None,
            budget,
            courses: Vec::with_capacity(7),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn budget(&self) -> Money {
        self.budget
    }
    pub fn set_budget(&mut self, budget: Money) {
        self.budget = budget
    }

    pub fn head(&self) -> Option<idx::Instructor> {
        self.head
    }
    /// Sets the head, returns the previous one.
    pub fn set_head(&mut self, head: idx::Instructor) -> Option<idx::Instructor> {
        std::mem::replace(&mut self.head, Some(head))
    }

    pub fn courses(&self) -> &[idx::Course] {
        &self.courses
    }
    pub fn add_course(&mut self, course: idx::Course) {
        self.courses.push(course)
    }
}

#[cfg(test)]
mod tests {
    prelude! {
        repr::{Course, Department},
    }

    #[test]
    fn course_keeps_duplicate_enrollments() {
        let mut course = Course::new(idx::Course::new(0), "Programming 101");
        let s = idx::Student::new(3);
        course.add_student(s);
        course.add_student(s);
        assert_eq!(course.students(), &[s, s]);
        assert!(course.has_student(s));
        assert!(!course.has_student(idx::Student::new(0)));
    }

    #[test]
    fn department_head_replacement() {
        let mut dept = Department::new(idx::Dept::new(0), "Computer Science", 1_000_000.0);
        assert_eq!(dept.head(), None);
        let (i0, i1) = (idx::Instructor::new(0), idx::Instructor::new(1));
        assert_eq!(dept.set_head(i0), None);
        assert_eq!(dept.set_head(i1), Some(i0));
        assert_eq!(dept.head(), Some(i1));
        assert_eq!(dept.budget(), 1_000_000.0);
    }
}
