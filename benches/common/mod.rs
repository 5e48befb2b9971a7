pub mod curve;
pub mod samples;
