use std::io::ErrorKind as IoErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{ExtractionStrategy, RawExtraction, StrategyError, StrategyKind};
use crate::domain::{Modality, OcrLanguageProfile, UploadedDocument};

pub const DEFAULT_TESSERACT_CMD: &str = "tesseract";

const WORD_LEVEL: &str = "5";
const TSV_COLUMNS: usize = 12;

/// OCR through the `tesseract` CLI. The image is piped on stdin and the
/// word-level TSV report is read back from stdout.
pub struct TesseractOcrStrategy {
    command: String,
    profile: OcrLanguageProfile,
}

impl TesseractOcrStrategy {
    pub fn new(command: impl Into<String>, profile: OcrLanguageProfile) -> Self {
        Self {
            command: command.into(),
            profile,
        }
    }

    pub fn profile(&self) -> &OcrLanguageProfile {
        &self.profile
    }

    async fn run(&self, image: &[u8]) -> Result<String, StrategyError> {
        let mut child = Command::new(&self.command)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(self.profile.as_arg())
            .arg("tsv")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                IoErrorKind::NotFound | IoErrorKind::PermissionDenied => {
                    StrategyError::Unavailable(format!("cannot run {}: {e}", self.command))
                }
                _ => StrategyError::Failed(format!("failed to spawn {}: {e}", self.command)),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| StrategyError::Failed("tesseract stdin unavailable".to_string()))?;

        let image = image.to_vec();
        let writer = tokio::spawn(async move {
            let written = stdin.write_all(&image).await;
            drop(stdin);
            written
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| StrategyError::Failed(format!("tesseract did not finish: {e}")))?;

        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "tesseract closed stdin early");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StrategyError::Failed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ExtractionStrategy for TesseractOcrStrategy {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Ocr
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            languages = %self.profile.as_arg(),
        )
    )]
    async fn attempt(&self, document: &UploadedDocument) -> Result<RawExtraction, StrategyError> {
        if document.modality() != Modality::Image {
            return Err(StrategyError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let tsv = self.run(&document.bytes).await?;
        let report = parse_tsv(&tsv)?;

        tracing::debug!(
            words = report.word_count,
            confidence = ?report.confidence,
            "OCR finished"
        );

        Ok(RawExtraction {
            text: report.text,
            page_count: Some(1),
            confidence: report.confidence,
            word_count: Some(report.word_count),
        })
    }
}

/// Text and statistics recovered from a tesseract TSV report.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrReport {
    pub text: String,
    pub word_count: usize,
    /// Mean word confidence on tesseract's 0-100 scale.
    pub confidence: Option<f32>,
}

/// Rebuilds text from word rows, one output line per recognized line.
pub fn parse_tsv(tsv: &str) -> Result<OcrReport, StrategyError> {
    let mut rows = tsv.lines();

    let header = rows
        .next()
        .ok_or_else(|| StrategyError::Malformed("empty tesseract output".to_string()))?;
    if !header.starts_with("level\t") {
        return Err(StrategyError::Malformed(
            "tesseract output is not a TSV report".to_string(),
        ));
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_line: Option<(&str, &str, &str, &str)> = None;
    let mut word_count = 0usize;
    let mut confidence_sum = 0f64;
    let mut scored_words = 0usize;

    for row in rows {
        let cols: Vec<&str> = row.splitn(TSV_COLUMNS, '\t').collect();
        if cols.len() < TSV_COLUMNS || cols[0] != WORD_LEVEL {
            continue;
        }

        let word = cols[11].trim();
        if word.is_empty() {
            continue;
        }

        let line_key = (cols[1], cols[2], cols[3], cols[4]);
        if current_line != Some(line_key) {
            lines.push(String::new());
            current_line = Some(line_key);
        }
        if let Some(line) = lines.last_mut() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }

        word_count += 1;
        if let Ok(conf) = cols[10].trim().parse::<f64>() {
            if conf >= 0.0 {
                confidence_sum += conf;
                scored_words += 1;
            }
        }
    }

    let confidence = (scored_words > 0).then(|| (confidence_sum / scored_words as f64) as f32);

    Ok(OcrReport {
        text: lines.join("\n"),
        word_count,
        confidence,
    })
}
