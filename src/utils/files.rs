use crate::utils::error::StatsError;
use crate::utils::models::FlightData;

use csv::Writer;
use log::info;
use std::{ fs::File, io::BufReader, path::Path };

pub fn read_flight_file<P>(filename: P) -> Result<FlightData, StatsError> where P: AsRef<Path> {
    let file = File::open(&filename)?;
    let data: FlightData = serde_json::from_reader(BufReader::new(file))?;
    info!("{} | 读取到 {} 条航班数据", filename.as_ref().display(), data.flight.len());
    Ok(data)
}

pub fn write_to_csv<P>(csv_file: P, records: Vec<Vec<String>>) -> Result<(), StatsError>
    where P: AsRef<Path>
{
    let file = File::create(csv_file)?;
    let mut wtr = Writer::from_writer(file);
    for row in records {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_flight_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(StatsError::Io(_))));
    }

    #[test]
    fn read_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"flight\": [").unwrap();
        assert!(matches!(read_flight_file(&path), Err(StatsError::Json(_))));
    }

    #[test]
    fn write_rows_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        let rows = vec![
            vec!["statistic".to_string(), "key".to_string(), "value".to_string()],
            vec!["currency".to_string(), "GBP".to_string(), "2".to_string()]
        ];
        write_to_csv(&path, rows).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "statistic,key,value\ncurrency,GBP,2\n");
    }
}
