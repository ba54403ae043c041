use super::{Field, FieldType};

use serde::{Deserialize, Serialize};

/// An expression over fields: a column reference, a constant, or a function of
/// other expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Expr {
    Field(Field),
    String { value: String },
    /// A numeric literal, kept as written
    Number { value: String },
    Bool { value: bool },
    Null,
    Call(Call),
    Cast(Cast),
}

/// A function call, `NAME(arg, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

/// `CAST(expr AS ty)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub expr: Box<Expr>,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl Expr {
    pub fn field(field: Field) -> Expr {
        Expr::Field(field)
    }

    pub fn string(value: impl Into<String>) -> Expr {
        Expr::String {
            value: value.into(),
        }
    }

    pub fn number(value: impl ToString) -> Expr {
        Expr::Number {
            value: value.to_string(),
        }
    }

    pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Call(Call {
            name: name.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn cast(expr: Expr, ty: FieldType) -> Expr {
        Expr::Cast(Cast {
            expr: Box::new(expr),
            ty,
        })
    }

    /// Visits every field referenced by the expression, depth first.
    pub fn for_each_field<'a>(&'a self, f: &mut impl FnMut(&'a Field)) {
        match self {
            Expr::Field(field) => f(field),
            Expr::Call(call) => {
                for arg in &call.args {
                    arg.for_each_field(f);
                }
            }
            Expr::Cast(cast) => cast.expr.for_each_field(f),
            Expr::String { .. } | Expr::Number { .. } | Expr::Bool { .. } | Expr::Null => {}
        }
    }
}

impl From<Field> for Expr {
    fn from(value: Field) -> Self {
        Expr::Field(value)
    }
}
