use super::{Comma, Formatter, Ident, ToSql};

use sluice_core::graph::{Condition, Expr, Field, Filter, LogicOp};

/// A filter list. The first filter's logic operator is never rendered and a
/// missing operator joins with `AND`.
pub(super) struct Filters<'a>(pub(super) &'a [Filter]);

impl ToSql for &Field {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(alias) = f.aliases.resolve(self) {
            let alias = alias.to_string();
            fmt!(f, &alias, ".");
        }

        fmt!(f, Ident(&self.name));
    }
}

impl ToSql for &Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Expr::Field(field) => field.to_sql(f),
            Expr::String { value } => {
                let escaped = value.replace('\'', "''");
                fmt!(f, "'", &escaped, "'");
            }
            Expr::Number { value } => value.to_sql(f),
            Expr::Bool { value: true } => "TRUE".to_sql(f),
            Expr::Bool { value: false } => "FALSE".to_sql(f),
            Expr::Null => "NULL".to_sql(f),
            Expr::Call(call) => {
                fmt!(f, &call.name, "(", Comma(&call.args), ")");
            }
            Expr::Cast(cast) => {
                fmt!(f, "CAST(", &*cast.expr, " AS ", &cast.ty, ")");
            }
        }
    }
}

impl ToSql for &Condition {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Condition::Compare { lhs, op, rhs } => {
                fmt!(f, lhs, " ", op.symbol(), " ", rhs);
            }
            Condition::IsNull { expr, negate } => {
                let keyword = if *negate { " IS NOT NULL" } else { " IS NULL" };
                fmt!(f, expr, keyword);
            }
            Condition::InList { expr, list, negate } => {
                let keyword = if *negate { " NOT IN (" } else { " IN (" };
                fmt!(f, expr, keyword, Comma(list), ")");
            }
            Condition::Group { filters } => {
                fmt!(f, "(", Filters(filters), ")");
            }
        }
    }
}

impl ToSql for Filters<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        for (i, filter) in self.0.iter().enumerate() {
            if i > 0 {
                let logic = filter.logic.unwrap_or(LogicOp::And);
                fmt!(f, " ", logic.keyword(), " ");
            }

            fmt!(f, &filter.condition);
        }
    }
}
