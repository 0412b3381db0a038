use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot determine home directory; set LAV_ROOT or HOME")]
    NoHome,
}
