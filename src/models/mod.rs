pub mod bs;
pub mod payoff;
pub mod types;
