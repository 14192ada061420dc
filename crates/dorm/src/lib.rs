extern crate self as dorm;

pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

mod model;
pub use model::{column_names, table_name, Model};

pub mod stmt;

pub use dorm_core::{Error, Result};
pub use dorm_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{stmt::Primitive, Model, Result};
    pub use dorm_core::{
        err,
        schema::{Column, Table},
        stmt::{Value, ValueRecord},
    };
    pub use std::default::Default;
}
