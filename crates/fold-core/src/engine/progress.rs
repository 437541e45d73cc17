/// Coarse progress events emitted by long-running headless simulations.
#[derive(Debug, Clone)]
pub enum Progress {
    RunStart { total_frames: u64 },
    FramesAdvanced { count: u64 },
    RunFinish,
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Optional observer for simulation progress; reports are no-ops when no
/// callback is installed.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
