/// Result of a successful render, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    content: String,
    substitutions: usize,
}

impl RenderedOutput {
    pub fn new(content: String, substitutions: usize) -> Self {
        Self {
            content,
            substitutions,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Number of placeholder occurrences replaced.
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl AsRef<str> for RenderedOutput {
    fn as_ref(&self) -> &str {
        &self.content
    }
}
