pub mod audit;
pub mod blacklist;
pub mod common;
pub mod constraint;
pub mod course;
pub mod curriculum;
pub mod elective;
pub mod pool;
