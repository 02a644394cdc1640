//----------------------------------------
// resolve mod types
//----------------------------------------
use std::fmt;

use crate::design::types::Parameter;

/// The resolved unknown and its value
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Solution {
    pub parameter: Parameter,
    pub value: f64,
}

impl Solution {
    /// Smallest whole number of clusters or subjects that meets the target;
    /// `None` for the other parameters
    pub fn whole_units(&self) -> Option<u64> {
        match self.parameter {
            Parameter::NClusters | Parameter::NSubjects => Some(self.value.ceil() as u64),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.parameter, self.value)
    }
}
