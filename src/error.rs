use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    InputNotFound(PathBuf),
    InvalidDocx(String),
    Engine(String),
    Xml(roxmltree::Error),
    Zip(zip::result::ZipError),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => {
                write!(f, "Input file '{}' not found.", path.display())
            }
            Error::InvalidDocx(reason) => write!(f, "output is not a valid DOCX file: {reason}"),
            Error::Engine(reason) => write!(f, "conversion failed: {reason}"),
            Error::Xml(e) => write!(f, "XML error: {e}"),
            Error::Zip(e) => write!(f, "ZIP error: {e}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Error::Zip(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
