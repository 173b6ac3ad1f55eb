//! Business logic: feature encoding, classifier inference, advisor client

pub mod advisor;
pub mod features;
pub mod model;
