use serde::{de::DeserializeOwned, Serialize};
use std::io::{Read, Write};
use std::path::Path;

pub fn load_data_from_csv<T: DeserializeOwned, const DELIMITER: u8>(
    file_path: &Path,
) -> Result<Vec<T>, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_path(file_path)?;
    reader.into_deserialize().collect()
}

pub fn load_data_from_reader<T: DeserializeOwned, R: Read, const DELIMITER: u8>(
    reader: R,
) -> Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
        .collect()
}

pub fn dump_data_to_csv<T: Serialize>(data: &[T], file_path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(file_path)?;
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn dump_data_to_writer<T: Serialize, W: Write>(data: &[T], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
