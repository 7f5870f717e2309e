use {derive_more::Display, std::num::ParseIntError};

#[derive(Debug, Display, derive_more::Error)]
pub enum Error {
    #[display("no number was entered")]
    MissingInput,
    #[display("expected an integer, found {token:?}")]
    InvalidInteger {
        token: String,
        source: ParseIntError,
    },
    #[display("failed to read input")]
    Read(#[error(source)] std::io::Error),
    #[display("failed to write output")]
    Write(#[error(source)] std::io::Error),
}
