pub mod cases;
pub mod cohort;
pub mod health;
pub mod jobs;
pub mod predict;
