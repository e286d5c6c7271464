#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("row index {index} out of bounds, editor holds {len} rows")]
    Row { index: usize, len: usize },

    #[error("unknown button kind \"{0}\", expected \"url\" or \"callback\"")]
    UnknownKind(String),
}
