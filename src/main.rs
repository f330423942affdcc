use std::path::Path;
use std::process;

use log::{error, info};

use speedgraph::{plot_speeds, ChartSpec, SpeedSeries};

struct Report {
    results: &'static str,
    chart: &'static str,
    caption: &'static str,
}

// Fixed inputs and outputs, resolved against the working directory the
// benchmarks were run from.
const REPORTS: &[Report] = &[
    Report {
        results: "olaf_results.csv",
        chart: "olaf_benchmark_results.svg",
        caption: "Olaf query/store speed",
    },
    Report {
        results: "panako_results.csv",
        chart: "panako_benchmark_results.svg",
        caption: "Panako query/store speed",
    },
];

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        process::exit(1);
    }
}

fn run() -> speedgraph::Result<()> {
    for report in REPORTS {
        let series = SpeedSeries::load(Path::new(report.results))?;
        info!("{}: {} data rows", report.results, series.len());

        plot_speeds(&series, &ChartSpec::new(report.caption), Path::new(report.chart))?;
        info!("wrote {}", report.chart);
    }

    Ok(())
}
