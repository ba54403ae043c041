use super::{Formatter, ToSql};

use sluice_core::graph::quote_ident;

/// A backquoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&quote_ident(self.0.as_ref()));
    }
}
