use crate::editor::record::Kind;

/// Every mutation of the editor funnels through one of these, so the
/// mutation-then-reserialize contract lives in a single place instead of
/// being scattered over UI callbacks.
#[derive(Debug, Clone)]
pub enum Command {
    /// Append an empty row at the end of the list.
    Add,
    Row(RowEdit),
}

#[derive(Debug, Clone)]
pub struct RowEdit(pub usize, pub Edit);

#[derive(Debug, Clone)]
pub enum Edit {
    Remove,
    Text(String),
    Target(String),
    Kind(Kind),
}

impl Command {
    pub fn row(index: usize, edit: Edit) -> Self {
        Self::Row(RowEdit(index, edit))
    }
}
