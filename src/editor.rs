pub(crate) mod command;
pub(crate) mod fields;
pub(crate) mod record;

use crate::{
    editor::{
        command::{Command, Edit, RowEdit},
        fields::FieldSet,
        record::ButtonRecord,
    },
    Error, Result,
};

/// Controller owning the ordered button list. The three external fields are
/// written through [`Editor::commit`] only and never read back after
/// [`Editor::load`]; visible row order, record order, and serialization
/// order are always the same.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    records: Vec<ButtonRecord>,
}

impl Editor {
    pub fn load(fields: &FieldSet) -> Self {
        Self {
            records: fields.records(),
        }
    }

    /// The single update function: apply one command, then hand back the
    /// freshly serialized fields for the caller to write out.
    pub fn apply(&mut self, command: Command) -> Result<FieldSet> {
        match command {
            Command::Add => self.records.push(ButtonRecord::default()),
            Command::Row(RowEdit(index, edit)) => {
                let len = self.records.len();
                if index >= len {
                    return Err(Error::Row { index, len });
                }

                match edit {
                    Edit::Remove => {
                        self.records.remove(index);
                    }
                    Edit::Text(text) => self.records[index].set_text(text),
                    Edit::Target(target) => self.records[index].set_target(target),
                    Edit::Kind(kind) => self.records[index].set_kind(kind),
                }
            }
        }

        Ok(self.commit())
    }

    pub fn commit(&self) -> FieldSet {
        FieldSet::from_records(&self.records)
    }

    pub fn get(&self, index: usize) -> Option<&ButtonRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> <&Self as IntoIterator>::IntoIter {
        self.into_iter()
    }
}

impl IntoIterator for Editor {
    type Item = ButtonRecord;

    type IntoIter = <Vec<ButtonRecord> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Editor {
    type Item = &'a ButtonRecord;

    type IntoIter = <&'a Vec<ButtonRecord> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
