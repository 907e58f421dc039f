pub mod recommend;

pub use recommend::{recommend, RecommendError};
