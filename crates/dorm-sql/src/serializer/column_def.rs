use super::{Ident, Params, ToSql};

use crate::stmt::{self, ColumnType};

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = self.ty.to_string();

        fmt!(f, name " " ty.as_str());

        if self.primary_key {
            // The key must be declared `INTEGER` to alias the row identifier.
            debug_assert_eq!(self.ty, ColumnType::Integer);

            if f.serializer.is_mysql() {
                fmt!(f, " PRIMARY KEY AUTO_INCREMENT");
            } else {
                fmt!(f, " PRIMARY KEY");
            }
        }
    }
}
