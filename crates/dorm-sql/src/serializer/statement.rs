use super::{Comma, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " Ident(&self.name) " (" columns ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        fmt!(f, "SELECT * FROM " Ident(&self.table));

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let mysql = f.serializer.is_mysql();

        let verb = match (self.replace, mysql) {
            (true, true) => "REPLACE INTO ",
            (true, false) => "INSERT OR REPLACE INTO ",
            (false, _) => "INSERT INTO ",
        };

        fmt!(f, verb Ident(&self.table));

        if self.columns.is_empty() {
            if mysql {
                fmt!(f, " () VALUES ()");
            } else {
                fmt!(f, " DEFAULT VALUES");
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<T: Params>(self, f: &mut super::Formatter<'_, T>) {
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " filter);
    }
}
