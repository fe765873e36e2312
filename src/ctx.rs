//! Registry context.
//!
//! [`Ctx`] owns every [`Student`], [`Instructor`], [`Course`] and [`Department`]. Entities refer
//! to each other through indices, and relations spanning two entities are only updated by the
//! context, which can borrow both sides:
//!
//! - [`Ctx::enroll`] updates the student's courses *and* the course's students;
//! - [`Ctx::assign_department`] updates the instructor's department only, the department's head
//!   is set separately by [`Ctx::set_department_head`].

prelude! {
    repr::{Course, Department, Grade, Instructor, Person, Student},
}

/// Owns all entities, see the [module-level documentation](self).
pub struct Ctx {
    clock: Clock,
    students: idx::StudentMap<Student>,
    instructors: idx::InstructorMap<Instructor>,
    courses: idx::CourseMap<Course>,
    depts: idx::DeptMap<Department>,
}

impl std::ops::Index<idx::Student> for Ctx {
    type Output = Student;
    fn index(&self, idx: idx::Student) -> &Self::Output {
        &self.students[idx]
    }
}
impl std::ops::IndexMut<idx::Student> for Ctx {
    fn index_mut(&mut self, idx: idx::Student) -> &mut Self::Output {
        &mut self.students[idx]
    }
}

impl std::ops::Index<idx::Instructor> for Ctx {
    type Output = Instructor;
    fn index(&self, idx: idx::Instructor) -> &Self::Output {
        &self.instructors[idx]
    }
}
impl std::ops::IndexMut<idx::Instructor> for Ctx {
    fn index_mut(&mut self, idx: idx::Instructor) -> &mut Self::Output {
        &mut self.instructors[idx]
    }
}

impl std::ops::Index<idx::Course> for Ctx {
    type Output = Course;
    fn index(&self, idx: idx::Course) -> &Self::Output {
        &self.courses[idx]
    }
}
impl std::ops::IndexMut<idx::Course> for Ctx {
    fn index_mut(&mut self, idx: idx::Course) -> &mut Self::Output {
        &mut self.courses[idx]
    }
}

impl std::ops::Index<idx::Dept> for Ctx {
    type Output = Department;
    fn index(&self, idx: idx::Dept) -> &Self::Output {
        &self.depts[idx]
    }
}
impl std::ops::IndexMut<idx::Dept> for Ctx {
    fn index_mut(&mut self, idx: idx::Dept) -> &mut Self::Output {
        &mut self.depts[idx]
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new()
    }
}

impl Ctx {
    /// Empty context with room for the given number of entities, using the system clock.
    pub fn with_capacity(
        student_capa: usize,
        instructor_capa: usize,
        course_capa: usize,
        dept_capa: usize,
    ) -> Self {
        Self {
            clock: Clock::default(),
            students: idx::StudentMap::with_capacity(student_capa),
            instructors: idx::InstructorMap::with_capacity(instructor_capa),
            courses: idx::CourseMap::with_capacity(course_capa),
            depts: idx::DeptMap::with_capacity(dept_capa),
        }
    }
    /// Empty context with small default capacities and the system clock.
    pub fn new() -> Self {
        Self::with_capacity(7, 3, 5, 2)
    }
    /// Empty context using `clock` for the current year.
    pub fn with_clock(clock: Clock) -> Self {
        let mut slf = Self::new();
        slf.set_clock(clock);
        slf
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock
    }
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        base_salary: Money,
    ) -> idx::Student {
        let person = Person::new(name, date_of_birth, base_salary);
        self.students.push_idx(|idx| Student::new(idx, person))
    }

    pub fn add_instructor(
        &mut self,
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        base_salary: Money,
        join_date: NaiveDate,
        bonus: Money,
    ) -> idx::Instructor {
        let person = Person::new(name, date_of_birth, base_salary);
        self.instructors
            .push_idx(|idx| Instructor::new(idx, person, join_date, bonus))
    }

    pub fn add_course(&mut self, name: impl Into<String>) -> idx::Course {
        self.courses.push_idx(|idx| Course::new(idx, name))
    }

    pub fn add_department(&mut self, name: impl Into<String>, budget: Money) -> idx::Dept {
        self.depts.push_idx(|idx| Department::new(idx, name, budget))
    }

    /// Enrolls a student in a course, updating both sides.
    ///
    /// Enrolling twice registers the student twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # campus_rs::prelude! {}
    /// let mut ctx = Ctx::new();
    /// let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// let john = ctx.add_student("John Doe", dob, 0.0);
    /// let prog = ctx.add_course("Programming 101");
    ///
    /// ctx.enroll(john, prog);
    /// assert_eq!(ctx[prog].students(), &[john]);
    /// assert_eq!(ctx[john].courses(), &[prog]);
    /// ```
    pub fn enroll(&mut self, student: idx::Student, course: idx::Course) {
        log::debug!(
            "enrolling `{}` in `{}`",
            self[student].name(),
            self[course].name()
        );
        self.students[student].add_course(course);
        self.courses[course].add_student(student);
    }

    /// Sets a student's grade for a course, returns the grade it replaces if any.
    pub fn add_grade(
        &mut self,
        student: idx::Student,
        course: idx::Course,
        grade: impl Into<Grade>,
    ) -> Option<Grade> {
        self.students[student].add_grade(course, grade)
    }

    /// Assigns an instructor to a department, returns the previous department if any.
    ///
    /// The department's head is left untouched, see [`Self::set_department_head`].
    pub fn assign_department(
        &mut self,
        instructor: idx::Instructor,
        dept: idx::Dept,
    ) -> Option<idx::Dept> {
        log::debug!(
            "assigning `{}` to department `{}`",
            self[instructor].name(),
            self[dept].name()
        );
        self.instructors[instructor].set_department(dept)
    }

    /// Sets the head of a department, returns the previous head if any.
    pub fn set_department_head(
        &mut self,
        dept: idx::Dept,
        instructor: idx::Instructor,
    ) -> Option<idx::Instructor> {
        log::debug!(
            "`{}` now heads department `{}`",
            self[instructor].name(),
            self[dept].name()
        );
        self.depts[dept].set_head(instructor)
    }

    pub fn add_department_course(&mut self, dept: idx::Dept, course: idx::Course) {
        self.depts[dept].add_course(course)
    }

    /// Age of a member for the context's current year.
    pub fn age_of(&self, member: Member) -> i32 {
        member.spec().calculate_age_at(self.current_year())
    }

    /// Salary of a member for the context's current year.
    pub fn salary_of(&self, member: Member) -> Res<Money> {
        member
            .spec()
            .calculate_salary_at(self.current_year())
            .context(|| format!("computing salary of {} `{}`", member.kind(), member.name()))
    }

    pub fn gpa_of(&self, student: idx::Student) -> f64 {
        self[student].calculate_gpa()
    }

    /// Students appear in the order they were added in.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }
    /// Instructors appear in the order they were added in.
    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> {
        self.instructors.iter()
    }
    /// Courses appear in the order they were added in.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }
    /// Departments appear in the order they were added in.
    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.depts.iter()
    }

    /// Instructors first, then students.
    pub fn members(&self) -> impl Iterator<Item = Member<'_>> {
        self.instructors
            .iter()
            .map(Member::Instructor)
            .chain(self.students.iter().map(Member::Student))
    }

    pub fn student(&self, student: idx::Student) -> Member<'_> {
        Member::Student(&self[student])
    }
    pub fn instructor(&self, instructor: idx::Instructor) -> Member<'_> {
        Member::Instructor(&self[instructor])
    }

    pub fn to_pretty_string(&self) -> String {
        let mut res = String::with_capacity(113);
        let year = self.current_year();

        macro_rules! post {
            ($pref:expr, line $($interp_str:tt)*) => {{
                if !res.is_empty() {
                    res.push('\n');
                }
                res.push_str($pref);
                res.push_str(&format!($($interp_str)*));
            }};
        }

        for dept in self.departments() {
            post!("", line "- department {} #{} (budget {})", dept.name(), dept.idx, dept.budget());
            if let Some(head) = dept.head() {
                post!("  ", line "head: {}", self[head].name());
            }
            if !dept.courses().is_empty() {
                let courses = dept
                    .courses()
                    .iter()
                    .cloned()
                    .show_iter_cs(|idx| self[idx].name());
                post!("  ", line "courses: {}", courses);
            }
        }

        for course in self.courses() {
            post!("", line "- course {} #{}", course.name(), course.idx);
            if !course.students().is_empty() {
                let students = course
                    .students()
                    .iter()
                    .cloned()
                    .show_iter_cs(|idx| self[idx].name());
                post!("  ", line "students: {}", students);
            }
        }

        for member in self.members() {
            let spec = member.spec();
            post!("", line "- {} {}, age {}", member.kind(), member.name(), spec.calculate_age_at(year));
            match spec.calculate_salary_at(year) {
                Ok(salary) => post!("  ", line "salary: {}", salary),
                Err(e) => post!("  ", line "salary: <{}>", e),
            }
            match member {
                Member::Student(s) => post!("  ", line "gpa: {}", s.calculate_gpa()),
                Member::Instructor(i) => {
                    if let Some(dept) = i.department() {
                        post!("  ", line "department: {}", self[dept].name())
                    }
                }
            }
        }

        res.shrink_to_fit();
        res
    }
}
