// Element-wise math operations
pub mod exp;
pub mod square;

pub use exp::{exp, Exp};
pub use square::{square, Square};
