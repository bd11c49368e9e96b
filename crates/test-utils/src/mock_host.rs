use onsave::engine::CommandFailure;
use onsave::host::SaveHost;

/// Records every host interaction for assertions.
#[derive(Debug, Default)]
pub struct MockHost {
    pub dirty: bool,
    pub reload_requests: usize,
    pub status: Option<String>,
    pub status_clears: usize,
    pub diagnostics: Vec<CommandFailure>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose in-memory buffer has unsaved edits.
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }
}

impl SaveHost for MockHost {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn request_reload(&mut self) {
        self.reload_requests += 1;
    }

    fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_clears += 1;
    }

    fn diagnostic(&mut self, failure: &CommandFailure) {
        self.diagnostics.push(failure.clone());
    }
}
