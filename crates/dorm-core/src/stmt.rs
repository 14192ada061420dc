mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

mod value_stream;
pub use value_stream::ValueStream;
