use super::{Expr, Field};

use serde::{Deserialize, Serialize};

/// One predicate of a filter list, with the operator joining it to the
/// predicate before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Ignored for the first filter of a list. `None` joins with `AND`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic: Option<LogicOp>,

    pub condition: Condition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicOp {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Condition {
    Compare {
        lhs: Expr,
        op: CompareOp,
        rhs: Expr,
    },
    IsNull {
        expr: Expr,
        #[serde(default)]
        negate: bool,
    },
    InList {
        expr: Expr,
        list: Vec<Expr>,
        #[serde(default)]
        negate: bool,
    },
    /// A parenthesized list of filters
    Group { filters: Vec<Filter> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
}

impl Filter {
    pub fn new(condition: Condition) -> Filter {
        Filter {
            logic: None,
            condition,
        }
    }

    /// `lhs op rhs`
    pub fn compare(lhs: impl Into<Expr>, op: CompareOp, rhs: impl Into<Expr>) -> Filter {
        Filter::new(Condition::Compare {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        })
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Filter {
        Filter::compare(lhs, CompareOp::Eq, rhs)
    }

    pub fn is_null(expr: impl Into<Expr>) -> Filter {
        Filter::new(Condition::IsNull {
            expr: expr.into(),
            negate: false,
        })
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Filter {
        Filter::new(Condition::IsNull {
            expr: expr.into(),
            negate: true,
        })
    }

    pub fn group(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::new(Condition::Group {
            filters: filters.into_iter().collect(),
        })
    }

    /// Joins this filter to the previous one with `AND`.
    pub fn and(mut self) -> Filter {
        self.logic = Some(LogicOp::And);
        self
    }

    /// Joins this filter to the previous one with `OR`.
    pub fn or(mut self) -> Filter {
        self.logic = Some(LogicOp::Or);
        self
    }

    /// Visits every field referenced by the filter, depth first.
    pub fn for_each_field<'a>(&'a self, f: &mut impl FnMut(&'a Field)) {
        match &self.condition {
            Condition::Compare { lhs, rhs, .. } => {
                lhs.for_each_field(f);
                rhs.for_each_field(f);
            }
            Condition::IsNull { expr, .. } => expr.for_each_field(f),
            Condition::InList { expr, list, .. } => {
                expr.for_each_field(f);
                for item in list {
                    item.for_each_field(f);
                }
            }
            Condition::Group { filters } => {
                for filter in filters {
                    filter.for_each_field(f);
                }
            }
        }
    }
}

impl LogicOp {
    pub fn keyword(self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Like => "LIKE",
            CompareOp::NotLike => "NOT LIKE",
        }
    }
}
