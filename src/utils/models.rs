use serde::{ Deserialize, Serialize };
use std::fmt;

// 瑞典机场的IATA代码
pub const SWEDISH_AIRPORT_CODES: [&str; 52] = [
    "AGH", "AJR", "ARN", "BLE", "BMA", "EKT", "EVG", "GEV", "GOT", "GSE",
    "GVX", "HAD", "HFS", "HLF", "HMV", "HUV", "IDB", "JKG", "KID", "KLR",
    "KRF", "KRN", "KSD", "KSK", "KVB", "LDK", "LLA", "LPI", "LYC", "MMX",
    "MXX", "NRK", "NYO", "OER", "ORB", "OSD", "OSK", "PJA", "RNB", "SCR",
    "SDL", "SFT", "SOO", "SQO", "THN", "TYF", "UME", "VBY", "VHM", "VST",
    "VVK", "VXO",
];

// 频率表中缺失的键
pub const UNKNOWN_KEY: &str = "unknown";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FlightRecord {
    #[serde(rename = "depair")]
    pub departure_airport: Option<String>,
    #[serde(rename = "destair")]
    pub destination_airport: Option<String>,
    #[serde(rename = "outdepartdate")]
    pub departure_date: Option<String>,
    #[serde(rename = "outdeparttime")]
    pub departure_time: Option<String>,
    #[serde(rename = "inarrivaldate")]
    pub arrival_date: Option<String>,
    #[serde(rename = "inarrivaltime")]
    pub arrival_time: Option<String>,
    #[serde(rename = "originalcurrency")]
    pub currency_code: Option<String>,
}

// 数据源返回的JSON：{ "flight": [...] }
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FlightData {
    #[serde(default)]
    pub flight: Vec<FlightRecord>,
}

/// Flight records held for the session.
///
/// `NotLoaded` is the state before the data source answers; `Loaded(vec![])`
/// is a dataset that arrived empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dataset {
    #[default]
    NotLoaded,
    Loaded(Vec<FlightRecord>),
}

impl Dataset {
    pub fn records(&self) -> Option<&[FlightRecord]> {
        match self {
            Dataset::NotLoaded => None,
            Dataset::Loaded(records) => Some(records.as_slice()),
        }
    }
}

impl From<FlightData> for Dataset {
    fn from(data: FlightData) -> Self {
        Dataset::Loaded(data.flight)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AirportFrequency {
    pub airport_code: Option<String>,
    pub count: usize,
}

impl fmt::Display for AirportFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.airport_code.as_deref().unwrap_or(UNKNOWN_KEY);
        write!(f, "{} - {} flights", code, self.count)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CurrencyFrequency {
    pub currency: Option<String>,
    pub count: usize,
}

impl fmt::Display for CurrencyFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let currency = self.currency.as_deref().unwrap_or(UNKNOWN_KEY);
        write!(f, "{} - {} flights", currency, self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(pub f64);

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:.2} 遇到恰好一半（如3.125）会取偶数；这类值一定是1/8的奇数倍，改成远离零进位
        let eighths = self.0 * 8.0;
        let value = if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
            (self.0 * 100.0).round() / 100.0
        } else {
            self.0
        };
        write!(f, "{:.2}%", value)
    }
}

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct JourneyDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl JourneyDuration {
    const MS_PER_MINUTE: i64 = 60_000;
    const MS_PER_HOUR: i64 = 3_600_000;
    const MS_PER_DAY: i64 = 86_400_000;

    // 毫秒拆分成天、小时、分钟（向零取整，不足一分钟的部分丢弃）
    pub fn from_millis(ms: i64) -> Self {
        JourneyDuration {
            days: ms / Self::MS_PER_DAY,
            hours: (ms / Self::MS_PER_HOUR) % 24,
            minutes: (ms / Self::MS_PER_MINUTE) % 60,
        }
    }
}

impl fmt::Display for JourneyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days, {} hours and {} minutes", self.days, self.hours, self.minutes)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct JourneySummary {
    pub duration: JourneyDuration,
    pub journeys: usize, // 参与平均的航班数
    pub skipped: usize, // 时间格式错误而跳过的航班数
}
