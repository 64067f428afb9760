use std::fmt::Display;

/// Kind of payload a classification request carries.
///
/// Selects the model on the server (CLIP for images, CLAP for audio), the
/// endpoint and the multipart field the payload is sent under.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modality {
    Image,
    Audio,
}

impl Modality {
    /// Multipart field name the server expects the payload under.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
        }
    }

    /// Path segment of the model serving this modality.
    pub const fn model(&self) -> &'static str {
        match self {
            Self::Image => "clip",
            Self::Audio => "clap",
        }
    }

    /// Sample directory on the server holding files of this modality.
    pub const fn sample_dir(&self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Audio => "audio",
        }
    }

    /// Infers the modality from a sample path such as `images/cat.jpg`.
    pub fn from_sample_path(path: &str) -> Option<Self> {
        let dir = path.trim_start_matches('/').split('/').next()?;
        [Self::Image, Self::Audio]
            .into_iter()
            .find(|modality| modality.sample_dir() == dir)
    }
}

impl Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_server_form() {
        assert_eq!(Modality::Image.field_name(), "image");
        assert_eq!(Modality::Audio.field_name(), "audio");
    }

    #[test]
    fn test_models() {
        assert_eq!(Modality::Image.model(), "clip");
        assert_eq!(Modality::Audio.model(), "clap");
    }

    #[test]
    fn test_from_sample_path() {
        assert_eq!(
            Modality::from_sample_path("images/cat.jpg"),
            Some(Modality::Image)
        );
        assert_eq!(
            Modality::from_sample_path("/audio/dog_bark.wav"),
            Some(Modality::Audio)
        );
        assert_eq!(Modality::from_sample_path("video/clip.mp4"), None);
        assert_eq!(Modality::from_sample_path(""), None);
    }
}
