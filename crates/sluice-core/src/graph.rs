//! The declarative graph a stream is described with: typed fields, expressions
//! over them, nodes, and the relations wiring nodes together.

mod expr;
pub use expr::{Call, Cast, Expr};

mod field;
pub use field::{quote_ident, Field, MetaField};

mod filter;
pub use filter::{CompareOp, Condition, Filter, LogicOp};

pub mod node;
pub use node::{FieldRelation, Node, NodeKind, NodeRole};

mod relation;
pub use relation::{JoinRelation, JoinType, NodeRelation, RelationKind};

mod stream;
pub use stream::{Group, Stream};

mod ty;
pub use ty::FieldType;
