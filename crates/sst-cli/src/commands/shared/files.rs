use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use sst_client::Attachment;

/// Read a JSON document describing the record to create or update.
pub fn read_payload<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read payload file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid JSON payload in {}", path.display()))
}

pub async fn attachment(path: &Path) -> anyhow::Result<Attachment> {
    Ok(Attachment::from_path(path).await?)
}

pub async fn optional_attachment(path: Option<&Path>) -> anyhow::Result<Option<Attachment>> {
    match path {
        Some(path) => Ok(Some(attachment(path).await?)),
        None => Ok(None),
    }
}

pub async fn attachments(paths: &[PathBuf]) -> anyhow::Result<Vec<Attachment>> {
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        out.push(attachment(path).await?);
    }
    Ok(out)
}

/// Write a downloaded report, defaulting to `default_name` in the current
/// directory. Returns the path written.
pub fn write_report(bytes: &[u8], output: Option<&Path>, default_name: &str) -> anyhow::Result<PathBuf> {
    let path = output.map_or_else(|| PathBuf::from(default_name), Path::to_path_buf);
    std::fs::write(&path, bytes)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sst_core::entities::Setor;

    use super::{read_payload, write_report};

    #[test]
    fn payload_decodes_entity() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("setor.json");
        std::fs::write(&path, r#"{"nome": "Almoxarifado", "unidadeId": 3}"#).expect("write");

        let setor: Setor = read_payload(&path).expect("payload should decode");
        assert_eq!(setor.nome, "Almoxarifado");
    }

    #[test]
    fn invalid_payload_names_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{nome").expect("write");

        let error = read_payload::<Setor>(&path).expect_err("should fail");
        assert!(format!("{error:#}").contains("broken.json"));
    }

    #[test]
    fn report_goes_to_explicit_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("pgr-7.pdf");

        let written = write_report(b"%PDF-1.7", Some(&target), "ignored.pdf").expect("write");
        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).expect("read"), b"%PDF-1.7");
    }
}
