use pagecast_core::config::ConvertConfig;
use pagecast_core::error::ConvertError;
use pagecast_core::tabular::structured::structured_sheet;
use std::path::PathBuf;

use crate::commands::open_source;
use crate::output;

pub async fn run(
    input_file: PathBuf,
    output_format: &str,
    config: &ConvertConfig,
) -> Result<(), ConvertError> {
    let mut source = open_source(&input_file).await?;
    let rows = pagecast_core::extract_rows(source.as_mut(), &config.layout).await?;

    match output_format {
        "json" => output::json::print(&rows)?,
        "sheet" => output::json::print(&structured_sheet(&rows).layout()?)?,
        _ => print!("{}", output::table::format_rows(&rows)),
    }

    Ok(())
}
