use serde::{Deserialize, Serialize};
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfindOptions {
    pub pattern: String,
    pub case_sensitive: bool,
    pub recursive: bool,
    pub include_dirs: bool,
    pub include_files: bool,
    pub max_depth: usize,
}
impl Default for FfindOptions {
    fn default() -> Self {
        Self {
            pattern: String::from("*"),
            case_sensitive: true,
            recursive: false,
            include_dirs: false,
            include_files: true,
            max_depth: 10,
        }
    }
}
#[derive(Debug, Default)]
pub struct FfindBuilder {
    options: FfindOptions,
}
impl FfindBuilder {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            options: FfindOptions {
                pattern: pattern.into(),
                ..Default::default()
            },
        }
    }
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.options.case_sensitive = yes;
        self
    }
    pub fn recursive(mut self, yes: bool) -> Self {
        self.options.recursive = yes;
        self
    }
    pub fn include_dirs(mut self, yes: bool) -> Self {
        self.options.include_dirs = yes;
        self
    }
    pub fn include_files(mut self, yes: bool) -> Self {
        self.options.include_files = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn build(self) -> FfindOptions {
        self.options
    }
}
