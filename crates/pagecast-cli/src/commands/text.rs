use pagecast_core::config::ConvertConfig;
use pagecast_core::error::ConvertError;
use std::path::PathBuf;

use crate::commands::open_source;
use crate::output;

pub async fn run(
    input_file: PathBuf,
    output_format: &str,
    config: &ConvertConfig,
) -> Result<(), ConvertError> {
    let mut source = open_source(&input_file).await?;
    let document = pagecast_core::reconstruct_document(source.as_mut(), &config.layout).await?;

    match output_format {
        "json" => output::json::print(&document)?,
        _ => print!("{}", document.to_marked_text()),
    }

    Ok(())
}
