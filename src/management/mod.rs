pub mod course_management;
