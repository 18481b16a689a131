pub mod ant;
pub mod parser;
pub mod solution;

pub use ant::{Ant, Turn};
pub use parser::parse_solution;
pub use solution::Solution;
