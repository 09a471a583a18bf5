use bytes::Bytes;

/// An in-memory uploaded resume, not yet attached to any application.
///
/// Mirrors what the host's multipart layer hands over: a declared file name
/// (for extension sniffing), a declared size, and the content as a chunked
/// byte stream.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: String,
    pub size: u64,
    chunks: Vec<Bytes>,
}

impl UploadedResume {
    pub fn from_bytes(file_name: &str, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            file_name: file_name.to_string(),
            size: bytes.len() as u64,
            chunks: vec![bytes],
        }
    }

    pub fn from_chunks(file_name: &str, chunks: Vec<Bytes>) -> Self {
        let size = chunks.iter().map(|c| c.len() as u64).sum();
        Self {
            file_name: file_name.to_string(),
            size,
            chunks,
        }
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Bytes> {
        self.chunks.iter()
    }

    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }
}
