//! Narrative dice: symbols, faces, die kinds and pools

pub mod catalog;
pub mod die;
pub mod face;
pub mod modifier;
pub mod pool;
pub mod symbol;

pub use catalog::{face_table, FaceRow};
pub use die::{DieFamily, DieKind};
pub use face::Face;
pub use modifier::Modifier;
pub use pool::{parse_short_codes, DicePool};
pub use symbol::Symbol;
