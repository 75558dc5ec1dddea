//! Request bodies for attachment-bearing creates and updates.
//!
//! A payload travels as plain JSON unless at least one file is supplied. With
//! files, the payload becomes a single `application/json` part under a fixed
//! name and every file follows as its own part.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::ApiError;

/// A file to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment, guessing the content type from the file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the file cannot be read.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Request(format!("failed to read {}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("arquivo")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// A file bound to the form field it is uploaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub name: &'static str,
    pub attachment: Attachment,
}

/// Files accompanying a create/update call, flattened to named parts.
pub trait FileSet {
    fn into_parts(self) -> Vec<FilePart>;
}

impl FileSet for Vec<FilePart> {
    fn into_parts(self) -> Vec<FilePart> {
        self
    }
}

/// Encoded body of a create/update call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart {
        /// Field name of the serialized payload part.
        payload_part: &'static str,
        /// Serialized JSON payload.
        payload: String,
        files: Vec<FilePart>,
    },
}

impl RequestBody {
    /// Encode `payload`, switching to multipart only when `files` has parts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Request`] if the payload cannot be serialized.
    pub fn encode<P: Serialize>(
        payload_part: &'static str,
        payload: &P,
        files: impl FileSet,
    ) -> Result<Self, ApiError> {
        let files = files.into_parts();
        if files.is_empty() {
            let value = serde_json::to_value(payload)
                .map_err(|e| ApiError::Request(format!("failed to serialize payload: {e}")))?;
            return Ok(Self::Json(value));
        }
        let payload = serde_json::to_string(payload)
            .map_err(|e| ApiError::Request(format!("failed to serialize payload: {e}")))?;
        Ok(Self::Multipart {
            payload_part,
            payload,
            files,
        })
    }

    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }

    /// Part names in the order they will be sent. Empty for JSON bodies.
    #[must_use]
    pub fn part_names(&self) -> Vec<&'static str> {
        match self {
            Self::Json(_) => Vec::new(),
            Self::Multipart {
                payload_part,
                files,
                ..
            } => std::iter::once(*payload_part)
                .chain(files.iter().map(|f| f.name))
                .collect(),
        }
    }

    /// Build the reqwest form for a multipart body.
    pub(crate) fn into_form(
        payload_part: &'static str,
        payload: String,
        files: Vec<FilePart>,
    ) -> Result<Form, ApiError> {
        let json = Part::text(payload)
            .mime_str("application/json")
            .map_err(|e| ApiError::Request(format!("invalid payload part: {e}")))?;
        let mut form = Form::new().part(payload_part, json);
        for file in files {
            let part = Part::bytes(file.attachment.bytes)
                .file_name(file.attachment.file_name)
                .mime_str(&file.attachment.content_type)
                .map_err(|e| ApiError::Request(format!("invalid file part '{}': {e}", file.name)))?;
            form = form.part(file.name, part);
        }
        Ok(form)
    }
}

// ── Per-resource file sets ─────────────────────────────────────────

/// Files attached to a CAT.
#[derive(Debug, Clone, Default)]
pub struct CatFiles {
    /// Medical certificate (`atestadoMedico` part).
    pub atestado_medico: Option<Attachment>,
    /// Supporting documents (`anexos` parts).
    pub anexos: Vec<Attachment>,
}

impl FileSet for CatFiles {
    fn into_parts(self) -> Vec<FilePart> {
        let mut parts = Vec::with_capacity(self.anexos.len() + 1);
        if let Some(atestado) = self.atestado_medico {
            parts.push(FilePart {
                name: "atestadoMedico",
                attachment: atestado,
            });
        }
        parts.extend(self.anexos.into_iter().map(|attachment| FilePart {
            name: "anexos",
            attachment,
        }));
        parts
    }
}

/// Files attached to a PGR.
#[derive(Debug, Clone, Default)]
pub struct PgrFiles {
    /// Cover document (`capa` part).
    pub capa: Option<Attachment>,
    /// Cover image (`imagemCapa` part).
    pub imagem_capa: Option<Attachment>,
}

impl FileSet for PgrFiles {
    fn into_parts(self) -> Vec<FilePart> {
        let mut parts = Vec::with_capacity(2);
        if let Some(capa) = self.capa {
            parts.push(FilePart {
                name: "capa",
                attachment: capa,
            });
        }
        if let Some(imagem) = self.imagem_capa {
            parts.push(FilePart {
                name: "imagemCapa",
                attachment: imagem,
            });
        }
        parts
    }
}

/// Files attached to an LTIP.
#[derive(Debug, Clone, Default)]
pub struct LtipFiles {
    pub anexos: Vec<Attachment>,
}

impl FileSet for LtipFiles {
    fn into_parts(self) -> Vec<FilePart> {
        self.anexos
            .into_iter()
            .map(|attachment| FilePart {
                name: "anexos",
                attachment,
            })
            .collect()
    }
}
