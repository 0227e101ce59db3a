pub mod case;
pub mod clinical;
pub mod inference;
pub mod job;
