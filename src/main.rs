use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfside-docx", version, about = "Convert PDF files to DOCX")]
struct Args {
    /// Input PDF file
    input: PathBuf,
    /// Output DOCX file
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage goes to stdout with a stable exit code for scripts.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            print!("{err}");
            std::process::exit(code);
        }
    };

    match pdfside_docx::convert_pdf_to_docx(&args.input, &args.output) {
        Ok(()) => println!("Conversion successful"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
