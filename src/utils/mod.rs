pub mod course_cache;
pub mod date_time;
pub mod session_status;
pub mod week_grid;
