use serde::Serialize;

/// What a drawing job reports while it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ProgressEvent")]
pub enum Progress {
    Message(String),
    Percent(u8),
    /// The job ended, completed or stopped.
    Done {
        message: String,
        progress: Option<u8>,
    },
    Error(String),
}

/// Wire shape of a [`Progress`], one JSON object per event with only the
/// relevant keys present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Progress> for ProgressEvent {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::Message(message) => ProgressEvent {
                message: Some(message),
                ..Default::default()
            },
            Progress::Percent(percent) => ProgressEvent {
                progress: Some(percent),
                ..Default::default()
            },
            Progress::Done { message, progress } => ProgressEvent {
                message: Some(message),
                done: Some(true),
                progress,
                ..Default::default()
            },
            Progress::Error(error) => ProgressEvent {
                error: Some(error),
                ..Default::default()
            },
        }
    }
}
