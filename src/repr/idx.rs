safe_index::new! {
    /// Student index.
    Student,
    /// Maps a [`Student`] to something.
    map: StudentMap,
}

safe_index::new! {
    /// Instructor index.
    Instructor,
    /// Maps an [`Instructor`] to something.
    map: InstructorMap,
}

safe_index::new! {
    /// Course index.
    Course,
    /// Maps a [`Course`] to something.
    map: CourseMap,
}

safe_index::new! {
    /// Department index.
    Dept,
    /// Maps a [`Dept`] to something.
    map: DeptMap,
}
