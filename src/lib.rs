pub mod criteria;
pub mod decision;
mod error;
pub mod evaluation;
pub mod matrix;
mod normalize;
pub mod num;
mod rank;
mod score;

pub use crate::criteria::{Criteria, Criterion, Label};
pub use crate::decision::Decision;
pub use crate::error::{Error, Result};
pub use crate::evaluation::{evaluate, Evaluation, RankedAlternative};
pub use crate::matrix::Matrix;
pub use crate::normalize::normalize;
pub use crate::num::{Normalized, Score, Weight};
pub use crate::rank::rank;
pub use crate::score::score;
