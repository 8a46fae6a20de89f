pub mod analysis;
pub mod expression;
pub mod normalize;

pub use expression::Expr;
pub use normalize::normalize_negatives;
