use anyhow::Result;
use credit_tally::config::toml_config::ExportFormat;
use credit_tally::{Category, LocalStorage, Session, TallyApp, TallyConfig, TallyError};
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(
    config: TallyConfig,
    storage: LocalStorage,
    script: &str,
) -> (credit_tally::Result<Session>, String) {
    let app = TallyApp::new(config, storage);
    let mut output = Vec::new();
    let result = app.run(Cursor::new(script.as_bytes().to_vec()), &mut output);
    (result, String::from_utf8(output).unwrap())
}

/// 三回合 (其中一回合總和錯誤)，再檢視直方圖與摘要
#[test]
fn test_full_interactive_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let script = "\
120\n0\n0\ny\n\
60\n60\n60\n\
40\nabc\n40\n40\nmaybe\nyes\n\
20\n40\n60\nq\n\
\n";
    let (result, output) = run_script(TallyConfig::default(), storage, script);
    let session = result?;

    let categories: Vec<Category> = session.rounds().iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Progress,
            Category::NoProgressRetriever,
            Category::NoProgressRetriever
        ]
    );
    assert_eq!(session.counts().iter().sum::<usize>(), session.len());

    assert!(output.contains("Status: Progress\n\n"));
    assert!(output.contains("The total is incorrect. Expected 120, but got 180!"));
    assert!(output.contains("An integer is required!"));
    assert!(output.contains("Input is invalid."));
    assert!(output.contains("3 outcomes in total"));
    assert!(output.contains("Press Enter to close the histogram"));

    // 摘要在直方圖關閉之後輸出
    let chart_at = output.find("Histogram Results").unwrap();
    let summary_at = output.find("Progress - 120, 0, 0\n").unwrap();
    assert!(chart_at < summary_at);
    assert!(output.ends_with(
        "Progress - 120, 0, 0\n\
         Do not progress - module retriever - 40, 40, 40\n\
         Do not progress - module retriever - 20, 40, 60\n"
    ));
    Ok(())
}

#[test]
fn test_undecodable_bytes_are_rejected_like_bad_text() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let mut script = vec![0xff, 0xfe, b'\n'];
    script.extend_from_slice(b"120\n0\n0\nq\n\n");
    let app = TallyApp::new(TallyConfig::default(), storage);
    let mut output = Vec::new();
    let session = app.run(Cursor::new(script), &mut output)?;

    assert_eq!(session.len(), 1);
    assert_eq!(session.rounds()[0].category, Category::Progress);
    let output = String::from_utf8(output)?;
    assert!(output.contains("An integer is required!"));
    Ok(())
}

#[test]
fn test_end_of_input_interrupts_without_summary() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let (result, output) = run_script(TallyConfig::default(), storage, "120\n0\n0\ny\n100\n");

    assert!(matches!(result, Err(TallyError::Interrupted)));
    assert!(!output.contains("Histogram Results"));
    assert!(!output.contains("Progress - 120, 0, 0"));
    Ok(())
}

#[test]
fn test_svg_and_export_outputs() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

    let mut config = TallyConfig::default();
    config.output.terminal_chart = false;
    config.output.svg_path = Some("charts/histogram.svg".to_string());
    config.output.export_path = Some("rounds.csv".to_string());
    config.output.export_format = ExportFormat::Csv;

    let (result, output) = run_script(config, storage, "100\n20\n0\ny\n0\n40\n80\nquit\n");
    let session = result?;
    assert_eq!(session.len(), 2);
    assert!(!output.contains("Press Enter"));

    let svg = std::fs::read_to_string(temp_dir.path().join("charts/histogram.svg"))?;
    assert!(svg.contains("2 outcomes in total"));
    assert!(svg.contains("fill=\"yellow\""));

    let csv = std::fs::read_to_string(temp_dir.path().join("rounds.csv"))?;
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("1,100,20,0,Trailer,"));
    assert!(rows[2].starts_with("2,0,40,80,Exclude,Exclude,"));
    Ok(())
}
