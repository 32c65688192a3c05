//! Multipart body types.
//!
//! A [`MultipartPayload`] is an ordered list of named parts, each either a
//! text value or a file. It is plain data until [`MultipartPayload::to_form`]
//! turns it into a `reqwest` form at send time, which keeps payload
//! construction free of I/O and easy to compare in tests.

use std::path::Path;

use reqwest::multipart::{Form, Part as ReqwestPart};

use crate::clients::errors::InvalidHttpRequestError;

/// Content type used when a file's type cannot be inferred.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A file held in memory, ready to be sent as a multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    /// The file name reported to the server.
    pub file_name: String,
    /// The MIME type of the content.
    pub content_type: String,
    /// The file content.
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    /// Creates an attachment, inferring the content type from the file extension.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Overrides the inferred content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Reads a file from disk into an attachment.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    /// Returns the size of the content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the file has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// File bytes would flood logs; show the shape only.
impl std::fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Guesses a MIME type from a file name's extension.
#[must_use]
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// The value carried by one multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    /// A text field.
    Text(String),
    /// A file upload.
    File(FileAttachment),
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// The form field name, e.g. `variants[0][size]`.
    pub name: String,
    /// The part content.
    pub value: PartValue,
}

impl Part {
    /// Creates a text part.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    /// Creates a file part.
    #[must_use]
    pub fn file(name: impl Into<String>, file: FileAttachment) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File(file),
        }
    }

    /// Returns the text value, if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PartValue::Text(text) => Some(text),
            PartValue::File(_) => None,
        }
    }

    /// Returns the file, if this is a file part.
    #[must_use]
    pub const fn as_file(&self) -> Option<&FileAttachment> {
        match &self.value {
            PartValue::File(file) => Some(file),
            PartValue::Text(_) => None,
        }
    }
}

/// An ordered multipart body.
///
/// Part order is kept exactly as pushed. Repeated names are allowed
/// (`tags`, `gallery`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<Part>,
}

impl MultipartPayload {
    /// Creates an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text part.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part::text(name, value));
    }

    /// Appends a file part.
    pub fn push_file(&mut self, name: impl Into<String>, file: FileAttachment) {
        self.parts.push(Part::file(name, file));
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the part names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }

    /// Returns the first text value stored under `name`.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .filter(|part| part.name == name)
            .find_map(Part::as_text)
    }

    /// Returns every part stored under `name`, in order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Part> + 'a {
        self.parts.iter().filter(move |part| part.name == name)
    }

    /// Returns the number of file parts.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.parts.iter().filter(|part| part.as_file().is_some()).count()
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if there are no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Builds a `reqwest` multipart form from this payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPart`] if a file part has a
    /// content type that is not a valid MIME string.
    pub fn to_form(&self) -> Result<Form, InvalidHttpRequestError> {
        let mut form = Form::new();
        for part in &self.parts {
            form = match &part.value {
                PartValue::Text(text) => form.text(part.name.clone(), text.clone()),
                PartValue::File(file) => {
                    let file_part = ReqwestPart::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.content_type)
                        .map_err(|e| InvalidHttpRequestError::InvalidPart {
                            name: part.name.clone(),
                            reason: e.to_string(),
                        })?;
                    form.part(part.name.clone(), file_part)
                }
            };
        }
        Ok(form)
    }
}
