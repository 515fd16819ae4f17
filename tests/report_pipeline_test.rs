use buy_black::{
    DebtCalculator, DebtError, DebtPipeline, LocalStorage, OutputFormat, ReportEngine, TomlConfig,
};
use tempfile::TempDir;

fn engine_for(
    dir: &TempDir,
    config: TomlConfig,
) -> ReportEngine<DebtPipeline<LocalStorage, TomlConfig>> {
    let storage = LocalStorage::new(dir.path().to_string_lossy().into_owned());
    ReportEngine::new(DebtPipeline::new(storage, config))
}

fn config_writing(format: OutputFormat, output_path: &str) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.report.format = format;
    config.report.output_path = Some(output_path.to_string());
    config
}

#[tokio::test]
async fn test_text_report_for_reference_datasets() {
    let dir = TempDir::new().unwrap();
    let engine = engine_for(&dir, config_writing(OutputFormat::Text, "report.txt"));

    let destination = engine.run("30").await.unwrap();
    assert_eq!(destination, "report.txt");

    let text = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert_eq!(
        text,
        "Average percentage of AA population: 12%\n\
         Average percentage of AA CEOs: 5.75%\n\
         Underrepresentation (average population - average CEO): 6.25%\n\
         My Debt: 684.84 days (1 years, 10 months, 15.22 days)\n"
    );
}

#[tokio::test]
async fn test_json_report_from_dataset_files() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data/census.csv"),
        "year,total_population,subgroup_population\n2000,200,40\n2010,200,60\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("data/ceos.csv"), "year,percent\n2000,5\n2010,15\n").unwrap();

    let mut config = config_writing(OutputFormat::Json, "out/report.json");
    config.datasets.demographics = Some("data/census.csv".to_string());
    config.datasets.leadership = Some("data/ceos.csv".to_string());
    config.report.show_yearly = true;

    let engine = engine_for(&dir, config);
    engine.run("10").await.unwrap();

    let json = std::fs::read_to_string(dir.path().join("out/report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();

    // mean(20, 30) - mean(5, 15) = 15
    assert_eq!(report["mean_population_percent"], 25.0);
    assert_eq!(report["mean_leadership_percent"], 10.0);
    assert_eq!(report["gap_percent"], 15.0);
    assert_eq!(report["debt_days"], 547.875);
    assert_eq!(report["debt_duration"]["years"], 1);
    assert_eq!(report["debt_duration"]["months"], 6);
    assert_eq!(report["yearly_percentages"][1]["year"], 2010);
    assert_eq!(report["yearly_percentages"][1]["percent"], 30.0);
}

#[tokio::test]
async fn test_csv_report() {
    let dir = TempDir::new().unwrap();
    let engine = engine_for(&dir, config_writing(OutputFormat::Csv, "report.csv"));

    engine.run("100").await.unwrap();

    let csv = std::fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert!(csv.starts_with("metric,value\n"));
    assert!(csv.contains("age,100\n"));
    assert!(csv.contains("debt_days,2282.8125\n"));
    assert!(csv.contains("debt_years,6\n"));
}

#[tokio::test]
async fn test_invalid_age_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let engine = engine_for(&dir, config_writing(OutputFormat::Text, "report.txt"));

    for raw in ["", "abc", "-3", "1e22", "1e306"] {
        let err = engine.run(raw).await.unwrap_err();
        assert!(err.is_invalid_input(), "expected InvalidInput for {:?}", raw);
    }
    assert!(!dir.path().join("report.txt").exists());
}

#[tokio::test]
async fn test_zero_population_dataset_is_a_precondition_violation() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("census.csv"), "year,total,aa\n1970,0,0\n").unwrap();

    let mut config = config_writing(OutputFormat::Text, "report.txt");
    config.datasets.demographics = Some("census.csv".to_string());

    let engine = engine_for(&dir, config);
    assert!(matches!(
        engine.run("30").await,
        Err(DebtError::PreconditionViolation(_))
    ));
}

#[tokio::test]
async fn test_repeated_runs_write_identical_values() {
    let dir = TempDir::new().unwrap();
    let engine = engine_for(&dir, config_writing(OutputFormat::Text, "report.txt"));

    engine.run("57.3").await.unwrap();
    let first = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    engine.run("57.3").await.unwrap();
    let second = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_calculator_round_trips_debt_through_duration() {
    let calculator = DebtCalculator::builtin().unwrap();
    for age in [1.0, 18.0, 30.0, 45.5, 80.0] {
        let values = calculator.compute_display_values(age).unwrap();
        let rebuilt = buy_black::core::duration::to_days(&values.debt_duration);
        assert!((rebuilt - values.debt_days).abs() < 1e-9);
    }
}
