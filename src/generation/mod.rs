pub mod volume;
pub mod path_cursor;
pub mod geometry;
pub mod hazard_table;
pub mod placement;
pub mod dressing;
pub mod generated_course;
pub mod pipeline;
