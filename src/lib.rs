mod editor;
mod error;

pub use self::{
    editor::{
        command::{Command, Edit, RowEdit},
        fields::{FieldSet, DELIMITER},
        record::{ButtonRecord, Kind},
        Editor,
    },
    error::Error,
};

pub type Result<T = ()> = std::result::Result<T, Error>;
