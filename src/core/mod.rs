pub mod etl;
pub mod transform;

pub use crate::domain::model::{CarRecord, GdpRecord, RawGdpRecord, Tabular};
pub use crate::domain::ports::{Checkpoints, Pipeline, Storage};
pub use crate::utils::error::Result;
