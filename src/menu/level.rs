//! One step of the menu stack

use super::value::MenuValue;

/// Title used until a level is given one
pub const DEFAULT_TITLE: &str = "Choose an option";

/// A single menu level: its options, presentation and stored answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub(crate) title: String,
    pub(crate) options: Vec<String>,
    pub(crate) multiple_allowed: bool,
    pub(crate) key: Option<String>,
    pub(crate) result: Option<MenuValue>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            options: Vec::new(),
            multiple_allowed: false,
            key: None,
            result: None,
        }
    }
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder-style result key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Builder-style options, appended in order
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    /// Builder-style multi-select switch
    pub fn with_multiple(mut self, multiple_allowed: bool) -> Self {
        self.multiple_allowed = multiple_allowed;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn multiple_allowed(&self) -> bool {
        self.multiple_allowed
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn result(&self) -> Option<&MenuValue> {
        self.result.as_ref()
    }

    /// A level is unconfigured while it has no options
    pub fn is_unconfigured(&self) -> bool {
        self.options.is_empty()
    }

    /// Label at `index`, if in range
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}
