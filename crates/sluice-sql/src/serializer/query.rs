use super::{expr::Filters, Comma, Delimited, Formatter, Ident, ToSql};

use crate::stmt::{Join, Query, Select, SelectItem, Source, TableRef, WindowRank};

use std::mem;

impl ToSql for &Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Query::Select(select) => select.to_sql(f),
            Query::Deduplicate { columns, inner } => {
                let columns = columns.iter().map(Ident);
                fmt!(
                    f,
                    "SELECT ",
                    Comma(columns),
                    " FROM (",
                    inner,
                    ") WHERE ",
                    Query::ROW_NUMBER,
                    " = 1"
                );
            }
        }
    }
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        // Nested selects carry their own aliases
        let outer = mem::replace(&mut f.aliases, self.aliases.clone());

        fmt!(f, "SELECT ", Comma(&self.items), " FROM ", &self.source);

        if !self.filter.is_empty() {
            fmt!(f, " WHERE ", Filters(&self.filter));
        }

        f.aliases = outer;
    }
}

impl ToSql for &SelectItem {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            SelectItem::Expr { expr, alias } => {
                fmt!(f, expr, " AS ", Ident(alias));
            }
            SelectItem::Null { ty, alias } => {
                fmt!(f, "CAST(NULL AS ", ty, ") AS ", Ident(alias));
            }
            SelectItem::RowNumber(rank) => rank.to_sql(f),
        }
    }
}

impl ToSql for &WindowRank {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "ROW_NUMBER() OVER (PARTITION BY ",
            Delimited(&self.partition_by, ","),
            " ORDER BY ",
            &self.order_by,
            " ",
            self.direction.keyword(),
            ") AS ",
            Query::ROW_NUMBER
        );
    }
}

impl ToSql for &Source {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.table);

        for join in &self.joins {
            fmt!(f, " ", join);
        }
    }
}

impl ToSql for &Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.keyword, " ", &self.table, " ON ", Filters(&self.on));
    }
}

impl ToSql for &TableRef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.name));

        if let Some(alias) = &self.alias {
            fmt!(f, " ", alias);
        }
    }
}
