use std::fs;
use std::path::Path;

use speedgraph::{plot_speeds, ChartSpec, Error, SpeedSeries};

// Mirrors the driver's per-file sequence: load, then render.
fn run_report(results: &Path, chart: &Path, caption: &str) -> speedgraph::Result<()> {
    let series = SpeedSeries::load(results)?;
    plot_speeds(&series, &ChartSpec::new(caption), chart)
}

#[test]
fn olaf_report_produces_a_two_point_scatter() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("olaf_results.csv");
    let chart = dir.path().join("olaf_benchmark_results.svg");
    fs::write(
        &results,
        "id,seconds,skip,query,store\na,1.0,x,10.0,20.0\nb,100.0,x,15.0,25.0\n",
    )
    .unwrap();

    run_report(&results, &chart, "Olaf query/store speed").unwrap();

    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("Olaf query/store speed"));
    assert!(svg.contains("Query speed"));
    assert!(svg.contains("Store speed"));
    // Two points per series, plus one legend glyph per series.
    assert_eq!(svg.matches("<circle").count(), 6);
}

#[test]
fn loader_sees_the_plotted_columns_in_row_order() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("olaf_results.csv");
    fs::write(
        &results,
        "id,seconds,skip,query,store\na,1.0,x,10.0,20.0\nb,100.0,x,15.0,25.0\n",
    )
    .unwrap();

    let series = SpeedSeries::load(&results).unwrap();

    assert_eq!(series.index_sizes, vec![1.0, 100.0]);
    assert_eq!(series.query_speeds, vec![10.0, 15.0]);
    assert_eq!(series.store_speeds, vec![20.0, 25.0]);
}

#[test]
fn malformed_row_aborts_without_writing_a_chart() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("olaf_results.csv");
    let chart = dir.path().join("olaf_benchmark_results.svg");
    fs::write(
        &results,
        "id,seconds,skip,query,store\nrow1,notanumber,x,2.0,3.0\n",
    )
    .unwrap();

    let err = run_report(&results, &chart, "Olaf query/store speed").unwrap_err();

    assert!(matches!(err, Error::MalformedRow { .. }));
    assert!(!chart.exists());
}

#[test]
fn reports_are_rendered_independently() {
    let dir = tempfile::tempdir().unwrap();
    let rows = "id,seconds,skip,query,store\na,1.0,x,10.0,20.0\nb,100.0,x,15.0,25.0\n";
    let olaf_results = dir.path().join("olaf_results.csv");
    let panako_results = dir.path().join("panako_results.csv");
    let olaf_chart = dir.path().join("olaf_benchmark_results.svg");
    let panako_chart = dir.path().join("panako_benchmark_results.svg");
    fs::write(&olaf_results, rows).unwrap();
    fs::write(&panako_results, rows).unwrap();

    run_report(&olaf_results, &olaf_chart, "Olaf query/store speed").unwrap();
    run_report(&panako_results, &panako_chart, "Panako query/store speed").unwrap();

    let panako_svg = fs::read_to_string(&panako_chart).unwrap();
    assert!(panako_svg.contains("Panako query/store speed"));
    assert!(!panako_svg.contains("Olaf"));
}

#[test]
fn rerun_overwrites_an_existing_chart() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("olaf_results.csv");
    let chart = dir.path().join("olaf_benchmark_results.svg");
    fs::write(&chart, "stale artefact from an earlier run").unwrap();
    fs::write(
        &results,
        "id,seconds,skip,query,store\na,1.0,x,10.0,20.0\n",
    )
    .unwrap();

    run_report(&results, &chart, "Olaf query/store speed").unwrap();

    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("<svg"));
    assert!(!svg.contains("stale artefact"));
}
