use std::{ffi::OsString, io::BufReader, path::Path};

use refutation_chain::{builder::ParserInfo, context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::ParseError(err) => write!(f, "Parse error: '{err:?}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open knowledge base."),
        }
    }
}

/// Reads the knowledge base at `path` to `context`.
///
/// Files with an `xz` extension are decompressed, if the `xz` feature is enabled, and any other file is read as text.
pub(super) fn read_knowledge_base(path: &Path, context: &mut Context) -> Result<ParserInfo, ReadError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_knowledge_base(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            return Err(ReadError::UnknownExtension(extension.to_owned()))
        }

        _ => context.read_knowledge_base(BufReader::new(&file)),
    };

    parse_report.map_err(ReadError::ParseError)
}
