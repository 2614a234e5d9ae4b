pub mod object;
pub mod tabular;
