//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    LoadFrameworks,
    Enhance,
    CopyResult,
}

impl BackendCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::LoadFrameworks => "load_frameworks",
            Self::Enhance => "enhance",
            Self::CopyResult => "copy_result",
        }
    }
}
