mod var;
mod poly;
mod parse;

pub use var::Var;
pub use poly::{PolyBase, Poly};
pub use parse::{ParseError, TokenReader};
