pub mod markup;
pub mod task;
