use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: LectureId,
    pub filename: String,
    pub format: AudioFormat,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LectureId(Uuid);

impl LectureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LectureId {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepted upload container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Mp3,
    M4a,
    Ogg,
}

impl AudioFormat {
    pub fn from_extension(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.').map(|(_, e)| e)?;
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "ogg" | "oga" => Some(Self::Ogg),
            _ => None,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/mp4" | "audio/x-m4a" | "audio/m4a" => Some(Self::M4a),
            "audio/ogg" | "application/ogg" => Some(Self::Ogg),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
        }
    }
}

impl Lecture {
    pub fn new(filename: String, format: AudioFormat, size_bytes: u64) -> Self {
        Self {
            id: LectureId::new(),
            filename,
            format,
            size_bytes,
        }
    }
}
