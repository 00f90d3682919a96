mod utils;

use clap::Parser;
use log::{ error, info };
use std::{ path::PathBuf, time::{ Duration, Instant } };

use utils::{
    common::humanize_elapsed,
    files::write_to_csv,
    logger::init_logger,
    network::{ self, DataSource, DEFAULT_SOURCE },
    report::{ self, Report, ReportOptions },
};

#[derive(Parser, Debug)]
#[command(version, about = "Compute statistics over a flight-records dataset")]
struct Args {
    /// Dataset URL (http/https) or path to a local JSON file
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Departure airport of the averaged journey
    #[arg(long, default_value = "LHR")]
    from: String,

    /// Destination airport of the averaged journey
    #[arg(long, default_value = "DXB")]
    to: String,

    /// Number of destination airports to list
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,

    /// HTTP timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Also write the statistics to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            from: self.from.to_uppercase(),
            to: self.to.to_uppercase(),
            limit: self.limit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logger(args.verbose)?;

    let options = args.report_options();
    let source = DataSource::parse(&args.source)?;

    let dataset = match network::load_dataset(&source, Duration::from_secs(args.timeout)).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("加载航班数据失败：{}", e);
            println!("{}", report::render_text(None, &options));
            return Err(e.into());
        }
    };

    // 只统计一次，文本、JSON、CSV共用
    let built = Report::build(&dataset, &options);

    if args.json {
        if let Some(report) = &built {
            println!("{}", report.to_json()?);
        }
    } else {
        println!("{}", report::render_text(built.as_ref(), &options));
    }

    if let (Some(csv_file), Some(report)) = (&args.csv, &built) {
        write_to_csv(csv_file, report.csv_rows())?;
        info!("统计结果已写入 {}", csv_file.display());
    }

    info!("运行结束，耗时：{}", humanize_elapsed(start_time.elapsed()));

    Ok(())
}
