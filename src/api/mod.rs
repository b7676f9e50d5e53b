pub mod courses;
pub mod record;
pub mod sessions;
pub mod student;
