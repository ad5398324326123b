pub mod remind;
pub mod sync;
