use std::path::Path;

use course_core::model::{SubmissionFile, SubmissionReceipt};

use crate::vm::time_fmt::format_datetime;

/// Confirmation card shown after a project was handed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptVm {
    pub reference: String,
    pub submitted_by: String,
    pub submitted_at: String,
    pub files_label: String,
}

impl From<&SubmissionReceipt> for ReceiptVm {
    fn from(receipt: &SubmissionReceipt) -> Self {
        let files_label = if receipt.file_count == 1 {
            "1 file".to_owned()
        } else {
            format!("{} files", receipt.file_count)
        };
        Self {
            reference: receipt.id.to_string(),
            submitted_by: format!("{} <{}>", receipt.full_name, receipt.email),
            submitted_at: format_datetime(receipt.submitted_at),
            files_label,
        }
    }
}

/// Guess a media type from the file extension, the way a browser file
/// picker would label it.
#[must_use]
pub fn media_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("ai" | "eps") => "application/postscript",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Describe a local file for the upload form. Files that cannot be
/// inspected are skipped with a warning.
#[must_use]
pub fn describe_local_file(path: &str) -> Option<SubmissionFile> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {
            let name = Path::new(path)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(path)
                .to_owned();
            let media_type = media_type_for(&name);
            Some(SubmissionFile::new(name, meta.len(), media_type))
        }
        Ok(_) => {
            tracing::warn!(path, "not a regular file, skipping attachment");
            None
        }
        Err(err) => {
            tracing::warn!(path, error = %err, "cannot read attachment");
            None
        }
    }
}

/// Size label for the attachment list.
#[must_use]
pub fn size_label(size_bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if size_bytes >= MIB {
        format!("{:.1} MB", size_bytes as f64 / MIB as f64)
    } else {
        format!("{} KB", size_bytes.div_ceil(1024))
    }
}
