pub mod dispatch;
pub mod error;
pub mod eval;
pub mod value;

pub use error::EvalError;
pub use eval::eval;
pub use value::{Value, ValueKind};
