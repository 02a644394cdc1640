//----------------------------------------
// root finding types
//----------------------------------------

/// Search interval, `lower < upper`
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bracket {
    pub lower: f64,
    pub upper: f64,
}

impl Bracket {
    pub fn new(lower: f64, upper: f64) -> Bracket {
        Bracket { lower, upper }
    }
}

/// Which end of the bracket may move when the residual has the same sign
/// at both ends
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Expansion {
    Upward,
    Downward,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Root {
    pub x: f64,
    pub f_x: f64,
    pub iterations: usize,
    pub expansions: usize,
}
