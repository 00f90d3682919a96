use crate::utils::aggregator;
use crate::utils::error::StatsError;
use crate::utils::models::{
    AirportFrequency,
    CurrencyFrequency,
    Dataset,
    JourneySummary,
    Percentage,
    SWEDISH_AIRPORT_CODES,
    UNKNOWN_KEY,
};

use log::info;
use serde::Serialize;
use std::fmt;

const LOADING: &str = "loading...";
const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub from: String,
    pub to: String,
    pub limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            from: "LHR".to_string(),
            to: "DXB".to_string(),
            limit: 10,
        }
    }
}

/// All statistics computed from one snapshot of the dataset.
///
/// Statistics that have no qualifying records are `None` and render as
/// `n/a`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub flights: usize,
    pub morning_departures: usize,
    pub sweden_ratio: Option<Percentage>,
    pub route: String,
    pub average_journey: Option<JourneySummary>,
    pub top_destinations: Vec<AirportFrequency>,
    pub currencies: Vec<CurrencyFrequency>,
}

impl Report {
    pub fn build(dataset: &Dataset, options: &ReportOptions) -> Option<Report> {
        let records = dataset.records()?;

        Some(Report {
            flights: records.len(),
            morning_departures: aggregator::count_morning_departures(records),
            sweden_ratio: resolved(
                aggregator::destination_ratio(records, &SWEDISH_AIRPORT_CODES)
            ),
            route: route_label(options),
            average_journey: resolved(
                aggregator::average_journey_duration(records, &options.from, &options.to)
            ),
            top_destinations: aggregator::top_destinations(records, options.limit),
            currencies: aggregator::currency_frequencies(records),
        })
    }

    pub fn to_json(&self) -> Result<String, StatsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // 导出CSV：statistic,key,value
    pub fn csv_rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![row("statistic", "key", "value")];
        rows.push(row("flights", "", &self.flights.to_string()));
        rows.push(row("morning_departures", "", &self.morning_departures.to_string()));
        rows.push(row("sweden_ratio", "", &or_not_available(self.sweden_ratio.as_ref())));
        rows.push(
            row(
                "average_journey",
                &self.route,
                &or_not_available(self.average_journey.as_ref().map(|s| s.duration))
            )
        );
        for entry in &self.top_destinations {
            let code = entry.airport_code.as_deref().unwrap_or(UNKNOWN_KEY);
            rows.push(row("top_destination", code, &entry.count.to_string()));
        }
        for entry in &self.currencies {
            let currency = entry.currency.as_deref().unwrap_or(UNKNOWN_KEY);
            rows.push(row("currency", currency, &entry.count.to_string()));
        }
        rows
    }
}

// report 为 None 表示数据还没加载
pub fn render_text(report: Option<&Report>, options: &ReportOptions) -> String {
    let mut lines = vec!["Flight Data Stats".to_string()];

    let mut section = |title: String, body: Vec<String>| {
        lines.push(String::new());
        lines.push(title);
        lines.extend(body.into_iter().map(|line| format!("  {}", line)));
    };

    let Some(report) = report else {
        // 数据还没加载：只显示标题
        for title in titles(options) {
            section(title, vec![LOADING.to_string()]);
        }
        return lines.join("\n");
    };

    let [morning, sweden, journey, top, currencies] = titles(options);
    section(morning, vec![report.morning_departures.to_string()]);
    section(sweden, vec![or_not_available(report.sweden_ratio.as_ref())]);
    section(journey, vec![match &report.average_journey {
        Some(summary) if summary.skipped > 0 =>
            format!("{} ({} skipped)", summary.duration, summary.skipped),
        Some(summary) => summary.duration.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }]);
    section(top, listed(&report.top_destinations));
    section(currencies, listed(&report.currencies));

    lines.join("\n")
}

fn titles(options: &ReportOptions) -> [String; 5] {
    [
        "Number of Flights Departing in the Morning".to_string(),
        "Proportion of Flights to Sweden".to_string(),
        format!("Duration of Average Passenger Journey between {} and {}", options.from, options.to),
        format!("IATA Codes for the {} Most Popular Destination Airports", options.limit),
        "Currencies Used to Buy Tickets".to_string(),
    ]
}

fn route_label(options: &ReportOptions) -> String {
    format!("{}-{}", options.from, options.to)
}

fn resolved<T>(result: Result<T, StatsError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            info!("{}", e);
            None
        }
    }
}

fn or_not_available<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn listed<T: fmt::Display>(entries: &[T]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NOT_AVAILABLE.to_string()];
    }
    entries
        .iter()
        .map(|entry| format!("- {}", entry))
        .collect()
}

fn row(statistic: &str, key: &str, value: &str) -> Vec<String> {
    vec![statistic.to_string(), key.to_string(), value.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::models::FlightRecord;

    fn record(from: &str, to: &str, time: &str, currency: Option<&str>) -> FlightRecord {
        FlightRecord {
            departure_airport: Some(from.to_string()),
            destination_airport: Some(to.to_string()),
            departure_date: Some("2017-05-01".to_string()),
            departure_time: Some(time.to_string()),
            arrival_date: Some("2017-05-03".to_string()),
            arrival_time: Some(time.to_string()),
            currency_code: currency.map(str::to_string),
        }
    }

    fn sample() -> Dataset {
        Dataset::Loaded(
            vec![
                record("LHR", "DXB", "09:00", Some("GBP")),
                record("LHR", "ARN", "15:30", None),
                record("MAN", "DXB", "07:45", Some("GBP"))
            ]
        )
    }

    #[test]
    fn build_report_from_loaded_dataset() {
        let report = Report::build(&sample(), &ReportOptions::default()).unwrap();
        assert_eq!(report.flights, 3);
        assert_eq!(report.morning_departures, 2);
        assert_eq!(report.sweden_ratio.map(|r| r.to_string()).as_deref(), Some("33.33%"));
        assert_eq!(report.route, "LHR-DXB");
        assert_eq!(
            report.average_journey.map(|s| s.duration.to_string()).as_deref(),
            Some("2 days, 0 hours and 0 minutes")
        );
        assert_eq!(report.top_destinations[0].airport_code.as_deref(), Some("DXB"));
        assert_eq!(report.currencies.len(), 2);
    }

    #[test]
    fn not_loaded_dataset_has_no_report() {
        assert!(Report::build(&Dataset::NotLoaded, &ReportOptions::default()).is_none());
        let report = Report::build(&Dataset::NotLoaded, &ReportOptions::default());
        let text = render_text(report.as_ref(), &ReportOptions::default());
        assert_eq!(text.matches(LOADING).count(), 5);
    }

    #[test]
    fn empty_dataset_renders_placeholders() {
        let dataset = Dataset::Loaded(vec![]);
        let report = Report::build(&dataset, &ReportOptions::default()).unwrap();
        assert_eq!(report.sweden_ratio, None);
        assert_eq!(report.average_journey, None);

        let text = render_text(Some(&report), &ReportOptions::default());
        assert!(!text.contains("NaN"));
        assert!(text.contains(NOT_AVAILABLE));
        assert!(!text.contains(LOADING));
    }

    #[test]
    fn render_text_lists_statistics() {
        let report = Report::build(&sample(), &ReportOptions::default());
        let text = render_text(report.as_ref(), &ReportOptions::default());
        assert!(text.contains("Duration of Average Passenger Journey between LHR and DXB"));
        assert!(text.contains("  - DXB - 2 flights"));
        assert!(text.contains("  - unknown - 1 flights"));
        assert!(text.contains("  33.33%"));
    }

    #[test]
    fn render_text_uses_the_given_report() {
        // 同一份统计结果供文本、JSON、CSV共用，渲染时不再重新计算
        let report = Report {
            flights: 0,
            morning_departures: 42,
            sweden_ratio: Some(Percentage(3.125)),
            route: "LHR-DXB".to_string(),
            average_journey: None,
            top_destinations: vec![],
            currencies: vec![],
        };
        let text = render_text(Some(&report), &ReportOptions::default());
        assert!(text.contains("  42"));
        assert!(text.contains("  3.13%"));
        assert_eq!(report.csv_rows()[2], row("morning_departures", "", "42"));
    }

    #[test]
    fn csv_rows_cover_every_statistic() {
        let report = Report::build(&sample(), &ReportOptions::default()).unwrap();
        let rows = report.csv_rows();
        assert_eq!(rows[0], row("statistic", "key", "value"));
        assert!(rows.contains(&row("sweden_ratio", "", "33.33%")));
        assert!(rows.contains(&row("currency", "unknown", "1")));
        let destinations = rows
            .iter()
            .filter(|r| r[0] == "top_destination")
            .count();
        assert_eq!(destinations, report.top_destinations.len());
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let report = Report::build(&sample(), &ReportOptions::default()).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"morningDepartures\": 2"));
        assert!(json.contains("\"swedenRatio\": \"33.33%\""));
        assert!(json.contains("\"airportCode\": \"DXB\""));
    }
}
