mod primitive;
pub use primitive::Primitive;

pub use dorm_core::stmt::{Type, Value, ValueRecord};
