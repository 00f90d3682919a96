use crate::utils::error::StatsError;
use crate::utils::models::{
    AirportFrequency,
    CurrencyFrequency,
    FlightRecord,
    JourneyDuration,
    JourneySummary,
    Percentage,
};

use chrono::NaiveDateTime;
use log::{ debug, warn };
use std::collections::HashMap;

const MORNING_CUTOFF: &str = "12";

// 支持的日期+时间格式，先试带秒的
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Counts flights whose departure time sorts before `"12"`.
///
/// The comparison is on the string itself, so it only means "before noon"
/// for zero-padded `HH:MM` times. Records without a departure time are not
/// counted.
pub fn count_morning_departures(records: &[FlightRecord]) -> usize {
    records
        .iter()
        .filter(|flight| {
            flight.departure_time.as_deref().is_some_and(|time| time < MORNING_CUTOFF)
        })
        .count()
}

/// Share of flights whose destination is in `target_codes`, as a percentage.
///
/// Returns `StatsError::EmptyInput` for an empty collection instead of a
/// `NaN` ratio.
pub fn destination_ratio(
    records: &[FlightRecord],
    target_codes: &[&str]
) -> Result<Percentage, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyInput { statistic: "destination ratio" });
    }
    let matching = records
        .iter()
        .filter(|flight| {
            flight.destination_airport
                .as_deref()
                .is_some_and(|code| target_codes.contains(&code))
        })
        .count();

    Ok(Percentage(((matching as f64) / (records.len() as f64)) * 100.0))
}

/// The `limit` most frequent destination airports, most frequent first.
///
/// Airports with the same count keep the order in which they first appear.
pub fn top_destinations(records: &[FlightRecord], limit: usize) -> Vec<AirportFrequency> {
    frequency_table(records.iter().map(|flight| flight.destination_airport.as_deref()))
        .into_iter()
        .take(limit)
        .map(|(code, count)| AirportFrequency {
            airport_code: code.map(str::to_string),
            count,
        })
        .collect()
}

/// Every currency used to buy tickets, most frequent first.
pub fn currency_frequencies(records: &[FlightRecord]) -> Vec<CurrencyFrequency> {
    frequency_table(records.iter().map(|flight| flight.currency_code.as_deref()))
        .into_iter()
        .map(|(currency, count)| CurrencyFrequency {
            currency: currency.map(str::to_string),
            count,
        })
        .collect()
}

/// Average time between departure and arrival over all flights on the
/// `from` -> `to` route.
///
/// Durations are signed; a record that arrives before it departs pulls the
/// average down. Records with missing or unparseable dates are skipped and
/// counted in `JourneySummary::skipped`. If no record on the route can be
/// used the result is `StatsError::EmptyInput`.
pub fn average_journey_duration(
    records: &[FlightRecord],
    from: &str,
    to: &str
) -> Result<JourneySummary, StatsError> {
    // i128 累加，大量跨度很长的航班相加也不会溢出
    let mut total_ms: i128 = 0;
    let mut journeys: usize = 0;
    let mut skipped: usize = 0;

    let route = records
        .iter()
        .filter(|flight| {
            flight.departure_airport.as_deref() == Some(from) &&
                flight.destination_airport.as_deref() == Some(to)
        });

    for flight in route {
        match journey_millis(flight) {
            Ok(ms) => {
                total_ms += i128::from(ms);
                journeys += 1;
            }
            Err(e) => {
                warn!("{} -> {} | 跳过该航班：{}", from, to, e);
                skipped += 1;
            }
        }
    }

    if journeys == 0 {
        return Err(StatsError::EmptyInput { statistic: "average journey duration" });
    }

    // 平均值不会超出单个时长的范围，转回 i64 不会截断
    let average_ms = (total_ms / (journeys as i128)) as i64;
    debug!("{} -> {} | {} 个航班, 平均 {} ms, 跳过 {}", from, to, journeys, average_ms, skipped);

    Ok(JourneySummary {
        duration: JourneyDuration::from_millis(average_ms),
        journeys,
        skipped,
    })
}

// 统计每个键出现的次数：HashMap记录位置，Vec保留首次出现的顺序
fn frequency_table<'a, I>(keys: I) -> Vec<(Option<&'a str>, usize)>
    where I: IntoIterator<Item = Option<&'a str>>
{
    let mut positions: HashMap<Option<&'a str>, usize> = HashMap::new();
    let mut table: Vec<(Option<&'a str>, usize)> = Vec::new();

    for key in keys {
        match positions.get(&key) {
            Some(&pos) => {
                table[pos].1 += 1;
            }
            None => {
                positions.insert(key, table.len());
                table.push((key, 1));
            }
        }
    }
    // sort_by 是稳定排序，次数相同时保持首次出现的顺序
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

fn journey_millis(flight: &FlightRecord) -> Result<i64, StatsError> {
    let departure = parse_timestamp(
        flight.departure_date.as_deref(),
        flight.departure_time.as_deref(),
        ("outdepartdate", "outdeparttime")
    )?;
    let arrival = parse_timestamp(
        flight.arrival_date.as_deref(),
        flight.arrival_time.as_deref(),
        ("inarrivaldate", "inarrivaltime")
    )?;
    Ok(arrival.signed_duration_since(departure).num_milliseconds())
}

fn parse_timestamp(
    date: Option<&str>,
    time: Option<&str>,
    fields: (&'static str, &'static str)
) -> Result<NaiveDateTime, StatsError> {
    let date = date.ok_or(StatsError::MissingField { field: fields.0 })?;
    let time = time.ok_or(StatsError::MissingField { field: fields.1 })?;
    let timestamp = format!("{}T{}", date.trim(), time.trim());

    TIMESTAMP_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&timestamp, format).ok())
        .ok_or_else(|| StatsError::MalformedTimestamp {
            date: date.to_string(),
            time: time.to_string(),
        })
}
