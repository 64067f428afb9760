use crate::api::Modality;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub path: &'static str,
    pub modality: Modality,
    pub description: &'static str,
}

impl Sample {
    pub fn file_name(&self) -> &'static str {
        file_name_from_path(self.path)
    }
}

/// Sample files the demo server ships under `/samples`.
pub const SAMPLES: &[Sample] = &[
    Sample {
        path: "images/cat.jpg",
        modality: Modality::Image,
        description: "A cat",
    },
    Sample {
        path: "images/street.jpg",
        modality: Modality::Image,
        description: "City street",
    },
    Sample {
        path: "images/food.jpg",
        modality: Modality::Image,
        description: "A plate of food",
    },
    Sample {
        path: "images/mountain.jpg",
        modality: Modality::Image,
        description: "Mountain landscape",
    },
    Sample {
        path: "audio/dog_bark.wav",
        modality: Modality::Audio,
        description: "A dog barking",
    },
    Sample {
        path: "audio/traffic.wav",
        modality: Modality::Audio,
        description: "City traffic",
    },
    Sample {
        path: "audio/music.wav",
        modality: Modality::Audio,
        description: "Short music clip",
    },
    Sample {
        path: "audio/speech.wav",
        modality: Modality::Audio,
        description: "Someone speaking",
    },
];

pub fn samples_for(modality: Modality) -> impl Iterator<Item = &'static Sample> {
    SAMPLES.iter().filter(move |s| s.modality == modality)
}

/// Final `/`-separated segment of a sample path.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_path() {
        assert_eq!(file_name_from_path("audio/demo.wav"), "demo.wav");
        assert_eq!(file_name_from_path("cat.jpg"), "cat.jpg");
        assert_eq!(file_name_from_path("images/nested/cat.jpg"), "cat.jpg");
        assert_eq!(file_name_from_path("images/"), "");
    }

    #[test]
    fn test_catalog_paths_agree_with_modality() {
        for sample in SAMPLES {
            assert_eq!(
                Modality::from_sample_path(sample.path),
                Some(sample.modality),
                "{}",
                sample.path
            );
        }
    }

    #[test]
    fn test_samples_for_modality() {
        let audio: Vec<&str> = samples_for(Modality::Audio).map(Sample::file_name).collect();
        assert_eq!(
            audio,
            vec!["dog_bark.wav", "traffic.wav", "music.wav", "speech.wav"]
        );
        assert_eq!(samples_for(Modality::Image).count(), 4);
    }
}
