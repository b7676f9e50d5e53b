pub mod course;
pub mod result;
pub mod session;
pub mod student;
