use std::path::{Path, PathBuf};

/// A named binary blob, the file-like payload of classification requests
/// and the result of fetching a sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedFile {
    name: String,
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl NamedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reads a local file, naming it after its final path component and
    /// guessing the content type from its extension.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file can't be read or the path has no
    /// file name.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                )
            })?;
        let bytes = tokio::fs::read(path).await?;
        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        let content_type = guess_content_type(&name).map(str::to_owned);
        Ok(Self {
            name,
            bytes,
            content_type,
        })
    }

    /// Writes the blob to `dir/<name>` and returns the written path.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file name is empty or on write failure.
    pub async fn write_into(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        if self.name.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "cannot write a file without a name",
            ));
        }
        let target = dir.as_ref().join(&self.name);
        tokio::fs::write(&target, &self.bytes).await?;
        Ok(target)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Vec<u8>, Option<String>) {
        (self.name, self.bytes, self.content_type)
    }
}

/// Content type for the image and audio formats the models accept.
pub fn guess_content_type(name: &str) -> Option<&'static str> {
    let (_, extension) = name.rsplit_once('.')?;
    let content_type = match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        _ => return None,
    };
    Some(content_type)
}
