use super::{Comma, Delimited, Formatter, Ident, ToSql};

use crate::stmt::{ColumnDef, CreateTable, CreateView, Insert, Statement};

use sluice_core::graph::node::Watermark;

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::CreateView(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "CREATE TABLE ", Ident(&self.name), "(", Comma(&self.columns));

        if !self.primary_key.is_empty() {
            let columns = self.primary_key.iter().map(Ident);
            fmt!(f, ", PRIMARY KEY (", Delimited(columns, ","), ") NOT ENFORCED");
        }

        if let Some(watermark) = &self.watermark {
            fmt!(f, ", ", watermark);
        }

        fmt!(f, ")");

        if !self.partitioned_by.is_empty() {
            let columns = self.partitioned_by.iter().map(Ident);
            fmt!(f, " PARTITIONED BY (", Delimited(columns, ","), ")");
        }

        if !self.options.is_empty() {
            let options = self.options.iter().map(|(key, value)| WithOption(key, value));
            fmt!(f, " WITH (", Comma(options), ")");
        }
    }
}

/// One `'key' = 'value'` pair of a `WITH` clause
struct WithOption<'a>(&'a str, &'a str);

impl ToSql for WithOption<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let key = self.0.replace('\'', "''");
        let value = self.1.replace('\'', "''");
        fmt!(f, "'", &key, "' = '", &value, "'");
    }
}

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name), &self.ty);
    }
}

impl ToSql for &Watermark {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.field.name;
        fmt!(f, "WATERMARK FOR ", Ident(name), " AS ", Ident(name));

        if let Some(interval) = self.interval {
            fmt!(f, " - INTERVAL '", interval, "' ", self.unit.keyword());
        }
    }
}

impl ToSql for &CreateView {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = self.columns.iter().map(Ident);
        fmt!(
            f,
            "CREATE VIEW ",
            Ident(&self.name),
            " (",
            Comma(columns),
            ") AS ",
            &self.query
        );
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "INSERT INTO ", Ident(&self.target), " ", &self.query);
    }
}
