use crate::error::Result;
use crate::ui;
use colored::Colorize;
use processing_errors::ProcessingErrorType;

pub fn execute() -> Result<()> {
    ui::section_header("Check-in processing error types");

    for kind in ProcessingErrorType::ALL {
        println!("{:>4}  {}", kind.code().to_string().cyan(), kind.title());
    }

    Ok(())
}
