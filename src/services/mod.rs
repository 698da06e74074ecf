// Service module exports

pub mod candidate_set;
pub mod summary;
pub mod token;
