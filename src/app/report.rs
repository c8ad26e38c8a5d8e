use crate::config::toml_config::ExportFormat;
use crate::core::{Result, Session, Storage};
use serde::Serialize;
use std::io::Write;

/// One exported round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub index: usize,
    pub pass: u32,
    pub defer: u32,
    pub fail: u32,
    pub category: String,
    pub message: String,
    pub recorded_at: String,
}

pub fn records(session: &Session) -> Vec<RoundRecord> {
    session
        .rounds()
        .iter()
        .enumerate()
        .map(|(i, round)| RoundRecord {
            index: i + 1,
            pass: round.credits.pass(),
            defer: round.credits.defer(),
            fail: round.credits.fail(),
            category: round.category.label().to_string(),
            message: round.category.message().to_string(),
            recorded_at: round.recorded_at.to_rfc3339(),
        })
        .collect()
}

/// 依記錄順序輸出每一回合的摘要
pub fn write_summary<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    for round in session.rounds() {
        writeln!(output, "{}", round.summary_line())?;
    }
    output.flush()?;
    Ok(())
}

pub fn render_export(session: &Session, format: ExportFormat) -> Result<Vec<u8>> {
    let records = records(session);
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in &records {
                writer.serialize(record)?;
            }
            writer.into_inner().map_err(|e| e.into_error().into())
        }
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(&records)?),
    }
}

pub fn export<S: Storage>(
    storage: &S,
    path: &str,
    session: &Session,
    format: ExportFormat,
) -> Result<()> {
    let data = render_export(session, format)?;
    storage.write_file(path, &data)?;
    tracing::info!("Exported {} rounds as {:?} to {}", session.len(), format, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::core::classifier::classify_credits;
    use crate::core::{Credits, RoundResult};
    use tempfile::TempDir;

    fn sample_session() -> Session {
        let mut session = Session::new();
        for (p, d, f) in [(120, 0, 0), (40, 0, 80), (20, 40, 60)] {
            let credits = Credits::new(p, d, f).unwrap();
            let category = classify_credits(&credits).unwrap();
            session.record(RoundResult::new(credits, category));
        }
        session
    }

    #[test]
    fn test_summary_in_recording_order() {
        let mut output = Vec::new();
        write_summary(&mut output, &sample_session()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Progress - 120, 0, 0\n\
             Exclude - 40, 0, 80\n\
             Do not progress - module retriever - 20, 40, 60\n"
        );
    }

    #[test]
    fn test_csv_export() {
        let data = render_export(&sample_session(), ExportFormat::Csv).unwrap();
        let text = String::from_utf8(data).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "index,pass,defer,fail,category,message,recorded_at"
        );
        assert!(lines.next().unwrap().starts_with("1,120,0,0,Progress,Progress,"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_json_export_to_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        export(&storage, "out/rounds.json", &sample_session(), ExportFormat::Json).unwrap();

        let written = std::fs::read(temp_dir.path().join("out/rounds.json")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
        let rounds = value.as_array().unwrap();
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[1]["category"], "Exclude");
        assert_eq!(rounds[2]["defer"], 40);
    }
}
