use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of catalog aggregates
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>().map_err(|e| format!("Invalid u32: {}", e))
    }
}
