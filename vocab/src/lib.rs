mod boolean;
mod complex;
mod real;
mod scope;

pub use boolean::Boolean;
pub use complex::ComplexArithmetic;
pub use real::{Func, Real};
pub use scope::{DefineError, Scope};

pub use num::complex::Complex64;
