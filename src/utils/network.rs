use crate::utils::error::StatsError;
use crate::utils::files::read_flight_file;
use crate::utils::models::{ Dataset, FlightData };

use log::{ debug, info };
use std::{ path::PathBuf, time::Duration };
use url::Url;

pub const DEFAULT_SOURCE: &str = "https://stantarnev.github.io/data/flight_data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(Url),
    Local(PathBuf),
}

impl DataSource {
    // 以http://、https://开头的按URL处理，其它的都当成本地文件路径
    pub fn parse(source: &str) -> Result<Self, StatsError> {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            return Ok(DataSource::Remote(Url::parse(source)?));
        }
        Ok(DataSource::Local(PathBuf::from(source)))
    }
}

pub async fn fetch_flight_data(url: &Url, timeout: Duration) -> Result<FlightData, StatsError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    debug!("GET {}", url);
    let response = client.get(url.as_str()).send().await?;

    if !response.status().is_success() {
        return Err(StatsError::HttpStatus(response.status().as_u16()));
    }

    let data: FlightData = response.json().await?;
    info!("{} | 获取到 {} 条航班数据", url, data.flight.len());
    Ok(data)
}

pub async fn load_dataset(source: &DataSource, timeout: Duration) -> Result<Dataset, StatsError> {
    let data = match source {
        DataSource::Remote(url) => fetch_flight_data(url, timeout).await?,
        DataSource::Local(path) => read_flight_file(path)?,
    };
    Ok(Dataset::from(data))
}
