use std::fmt;

/// Rendered in place of a variable that was never set.
pub const MISSING_VALUE: &str = "None";

/// The line printed on every heartbeat tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub workspace_id: Option<&'a str>,
    pub shared_key: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(workspace_id: Option<&'a str>, shared_key: Option<&'a str>) -> Self {
        Self {
            workspace_id,
            shared_key,
        }
    }
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitoring using workspace ID: {} and key: {}",
            self.workspace_id.unwrap_or(MISSING_VALUE),
            self.shared_key.unwrap_or(MISSING_VALUE)
        )
    }
}
