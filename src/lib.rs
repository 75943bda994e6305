mod docx;
mod engine;
mod error;

pub use engine::{ConverterHandle, Engine, PageRange, Pdf2DocxEngine};
pub use error::Error;

use std::path::{Path, PathBuf};

/// Converts `input` to a DOCX file at `output`, full document, using the
/// default `pdf2docx` engine.
pub fn convert_pdf_to_docx(input: &Path, output: &Path) -> Result<(), Error> {
    convert_with_engine(&Pdf2DocxEngine::new(), input, output, PageRange::full())
}

/// Runs one conversion through `engine`.
///
/// The output's parent directory is created first (idempotent). The converter
/// handle is closed on every path, and a failed run never leaves an output
/// file behind: whatever the engine wrote is removed on error, and a result
/// that is not a valid DOCX package counts as an error.
pub fn convert_with_engine(
    engine: &dyn Engine,
    input: &Path,
    output: &Path,
    pages: PageRange,
) -> Result<(), Error> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut handle = engine.open(input)?;
    let result = handle
        .convert(output, pages)
        .and_then(|()| docx::verify(output))
        .and(handle.close());

    if result.is_err() {
        discard_partial_output(output);
    }
    result
}

fn discard_partial_output(output: &Path) {
    if !output.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(output) {
        log::warn!("could not remove partial output {}: {e}", output.display());
    }
}

/// One input/output pair in a batch run.
#[derive(Clone, Debug)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Outcome of one batch job.
#[derive(Debug)]
pub struct BatchResult {
    pub input: PathBuf,
    pub result: Result<(), Error>,
}

/// Converts every job in order, full document each, continuing past
/// failures. Returns one result per job.
pub fn batch_convert(engine: &dyn Engine, jobs: &[BatchJob]) -> Vec<BatchResult> {
    jobs.iter()
        .map(|job| BatchResult {
            input: job.input.clone(),
            result: convert_with_engine(engine, &job.input, &job.output, PageRange::full()),
        })
        .collect()
}
