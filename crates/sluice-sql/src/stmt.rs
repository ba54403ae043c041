mod column_def;
pub use column_def::{ColumnDef, ColumnType};

mod create_table;
pub use create_table::CreateTable;

mod create_view;
pub use create_view::CreateView;

mod insert;
pub use insert::Insert;

mod query;
pub use query::{Join, Query, Select, SelectItem, Source, TableAliases, TableRef, WindowRank};

pub use sluice_core::graph::{Expr, Field, FieldType, Filter};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    CreateView(CreateView),
    Insert(Insert),
}
