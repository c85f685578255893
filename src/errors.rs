use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("adb {command} failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("No ADB device connected")]
    NoDevice,

    #[error("adb binary is not executable: {0}")]
    NotExecutable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AreaError {
    #[error("Drawing area starts off screen")]
    OffScreen,

    #[error("Drawing area is larger than {0} px")]
    TooLarge(i32),

    #[error("Drawing area is empty")]
    Empty,

    #[error("Drawing area exclusions lie outside its bounds")]
    ExclusionOutOfBounds,
}

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Could not find card region")]
    NoCardRegion,

    #[error("Could not load image: {0}")]
    Undecodable(String),
}

impl From<image::ImageError> for DetectionError {
    fn from(error: image::ImageError) -> Self {
        DetectionError::Undecodable(error.to_string())
    }
}
