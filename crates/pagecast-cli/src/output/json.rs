use pagecast_core::error::ConvertError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
