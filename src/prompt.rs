use std::path::Path;

use crate::highlight::Decorator;
use crate::repo;

/// Builds the `> dir:(branch) ` line prefix.
#[derive(Debug, Clone, Copy)]
pub struct PromptRenderer {
    decorator: Decorator,
}

impl PromptRenderer {
    pub fn new(decorator: Decorator) -> Self {
        Self { decorator }
    }

    /// Renders the prompt for `cwd`, resolving the branch from disk each time.
    pub fn render(&self, cwd: &Path) -> String {
        let branch = repo::current_branch(cwd);
        self.compose(&base_name(cwd), branch.as_deref())
    }

    pub fn compose(&self, dir_name: &str, branch: Option<&str>) -> String {
        let mut prompt = format!(
            "{} {}",
            self.decorator.arrow(">"),
            self.decorator.directory(dir_name)
        );

        if let Some(name) = branch {
            prompt.push_str(&self.decorator.branch_delimiter(":("));
            prompt.push_str(&self.decorator.branch_name(name));
            prompt.push_str(&self.decorator.branch_delimiter(")"));
        }

        prompt.push(' ');
        prompt
    }
}

/// Final path segment, or the whole path for roots like `/`.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
