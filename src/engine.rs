use std::ffi::OsString;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

/// Page interval handed to the engine. Pages are zero-based; `end: None`
/// means through the last page of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl PageRange {
    /// First page through the last page.
    pub fn full() -> Self {
        PageRange { start: 0, end: None }
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self::full()
    }
}

/// A conversion backend that can open a source PDF.
pub trait Engine {
    fn open(&self, input: &Path) -> Result<Box<dyn ConverterHandle + '_>, Error>;
}

/// An open source PDF, held for the duration of one conversion. `close`
/// releases whatever the engine acquired in `open` and must be safe to
/// call exactly once per handle on every exit path.
pub trait ConverterHandle {
    fn convert(&mut self, output: &Path, pages: PageRange) -> Result<(), Error>;
    fn close(&mut self) -> Result<(), Error>;
}

/// Engine backed by the `pdf2docx` command-line tool.
///
/// The program name defaults to `pdf2docx` on the PATH and can be overridden
/// with the `PDF2DOCX_BIN` environment variable or [`Pdf2DocxEngine::with_program`].
pub struct Pdf2DocxEngine {
    program: OsString,
}

impl Pdf2DocxEngine {
    pub fn new() -> Self {
        let program = std::env::var_os("PDF2DOCX_BIN").unwrap_or_else(|| "pdf2docx".into());
        Pdf2DocxEngine { program }
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Pdf2DocxEngine {
            program: program.into(),
        }
    }
}

impl Default for Pdf2DocxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Pdf2DocxEngine {
    fn open(&self, input: &Path) -> Result<Box<dyn ConverterHandle + '_>, Error> {
        let source = File::open(input).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputNotFound(input.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(Box::new(Pdf2DocxHandle {
            program: self.program.clone(),
            input: input.to_path_buf(),
            source: Some(source),
        }))
    }
}

/// Holds the source PDF open until `close`, mirroring the file handle the
/// spawned engine takes on the same path.
struct Pdf2DocxHandle {
    program: OsString,
    input: PathBuf,
    source: Option<File>,
}

impl ConverterHandle for Pdf2DocxHandle {
    fn convert(&mut self, output: &Path, pages: PageRange) -> Result<(), Error> {
        if self.source.is_none() {
            return Err(Error::Engine("converter handle is closed".into()));
        }

        let mut cmd = Command::new(&self.program);
        cmd.arg("convert")
            .arg(&self.input)
            .arg(output)
            .arg("--start")
            .arg(pages.start.to_string());
        if let Some(end) = pages.end {
            cmd.arg("--end").arg(end.to_string());
        }

        log::debug!("running {cmd:?}");
        let out = cmd.output().map_err(|e| {
            Error::Engine(format!(
                "failed to start {}: {e}. Is the pdf2docx CLI installed and on your PATH?",
                self.program.to_string_lossy()
            ))
        })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let mut detail = stderr.trim().to_string();
            if detail.is_empty() {
                detail = String::from_utf8_lossy(&out.stdout).trim().to_string();
            }
            log::debug!("{} failed with {}", self.program.to_string_lossy(), out.status);
            return Err(Error::Engine(if detail.is_empty() {
                format!("{} exited with {}", self.program.to_string_lossy(), out.status)
            } else {
                format!(
                    "{} exited with {}: {detail}",
                    self.program.to_string_lossy(),
                    out.status
                )
            }));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        self.source.take();
        Ok(())
    }
}
