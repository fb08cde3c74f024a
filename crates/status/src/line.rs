/// The visual category of the current status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// The single user-visible message channel.
///
/// Both stores write here; each write replaces the previous message
/// wholesale. Rendering (and how long a message stays on screen) is a UI
/// concern.
#[derive(Debug, Clone)]
pub struct StatusLine {
    kind: StatusKind,
    text: String,
}

impl StatusLine {
    /// Creates a status line carrying an initial informational message.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    /// Replaces the message with an informational one.
    pub fn info(&mut self, text: impl Into<String>) {
        self.kind = StatusKind::Info;
        self.text = text.into();
    }

    /// Replaces the message with an error, formatted as `Error: {cause}`.
    pub fn error(&mut self, cause: impl std::fmt::Display) {
        self.kind = StatusKind::Error;
        self.text = format!("Error: {cause}");
    }

    /// The current message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current message kind.
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Whether the current message reports an error.
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new("")
    }
}
