//! Shared contracts for the pizza prices app: the static catalog, the
//! composite price key and the editable pricing projection.

pub mod domain;
pub mod projections;
