use std::collections::HashMap;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use onsave::exec::{CommandExecutor, ExecutionOutcome};

/// A fake executor for controller tests:
/// - records every `(template, file path)` invocation in order
/// - returns the outcome scripted for the template (default: success with
///   empty output)
/// - runs an optional callback per invocation, which tests use to mutate a
///   `MockFileSystem` the way a real command touching the saved file would.
pub struct FakeExecutor {
    invocations: Arc<Mutex<Vec<(String, String)>>>,
    outcomes: HashMap<String, ExecutionOutcome>,
    on_execute: Option<Box<dyn FnMut(&str, &Path) + Send>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            outcomes: HashMap::new(),
            on_execute: None,
        }
    }

    /// Script the outcome returned for a given template.
    pub fn with_outcome(mut self, template: &str, outcome: ExecutionOutcome) -> Self {
        self.outcomes.insert(template.to_string(), outcome);
        self
    }

    /// Script a failure outcome for a given template.
    pub fn with_failure(self, template: &str, exit_code: i32, output: &str) -> Self {
        self.with_outcome(
            template,
            ExecutionOutcome::Failure {
                exit_code,
                output: output.as_bytes().to_vec(),
            },
        )
    }

    /// Run `callback` on every invocation, before the outcome is returned.
    pub fn with_callback(mut self, callback: impl FnMut(&str, &Path) + Send + 'static) -> Self {
        self.on_execute = Some(Box::new(callback));
        self
    }

    /// All `(template, file path)` invocations recorded so far, in order.
    pub fn recorded(&self) -> Vec<(String, String)> {
        self.invocations.lock().unwrap().clone()
    }

    /// Just the templates invoked so far, in order.
    pub fn recorded_templates(&self) -> Vec<String> {
        self.recorded()
            .into_iter()
            .map(|(template, _)| template)
            .collect()
    }
}

impl Default for FakeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute<'a>(
        &'a mut self,
        template: &'a str,
        file_path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>> {
        self.invocations
            .lock()
            .unwrap()
            .push((template.to_string(), file_path.display().to_string()));

        if let Some(callback) = self.on_execute.as_mut() {
            callback(template, file_path);
        }

        let outcome = self
            .outcomes
            .get(template)
            .cloned()
            .unwrap_or(ExecutionOutcome::Success { output: Vec::new() });

        Box::pin(async move { outcome })
    }
}
