use std::{error::Error, fmt};

/// A labelled value attached to an entry as structured side data.
#[derive(Clone, Copy)]
pub struct Detail<'a> {
    label: &'a str,
    value: &'a dyn fmt::Display,
}

impl<'a> Detail<'a> {
    pub fn new(label: &'a str, value: &'a dyn fmt::Display) -> Self {
        Self { label, value }
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn value(&self) -> &'a dyn fmt::Display {
        self.value
    }
}

impl fmt::Debug for Detail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.label, self.value)
    }
}

/// The arguments of one facade call, without the level.
///
/// Scope, message and error are independent and may each be absent; details
/// keep the order they were added in. An `Entry` is consumed by exactly one
/// call.
#[derive(Default)]
pub struct Entry<'a> {
    scope: Option<&'a dyn fmt::Display>,
    message: Option<&'a str>,
    error: Option<&'a (dyn Error + 'a)>,
    details: Vec<Detail<'a>>,
}

impl<'a> Entry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(message: &'a str) -> Self {
        Self::new().with_message(message)
    }

    pub fn error(error: &'a (dyn Error + 'a)) -> Self {
        Self::new().with_error(error)
    }

    pub fn with_message(self, message: &'a str) -> Self {
        Self {
            message: Some(message),
            ..self
        }
    }

    pub fn with_error(self, error: &'a (dyn Error + 'a)) -> Self {
        Self {
            error: Some(error),
            ..self
        }
    }

    pub fn with_scope(self, scope: &'a dyn fmt::Display) -> Self {
        Self {
            scope: Some(scope),
            ..self
        }
    }

    pub fn with_option_scope<S: fmt::Display>(self, scope: Option<&'a S>) -> Self {
        Self {
            scope: scope.map(|s| s as &dyn fmt::Display),
            ..self
        }
    }

    pub fn with_detail(mut self, label: &'a str, value: &'a dyn fmt::Display) -> Self {
        self.details.push(Detail::new(label, value));
        self
    }

    pub fn with_details<I>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = Detail<'a>>,
    {
        self.details.extend(details);
        self
    }

    pub(crate) fn record(&self, level: super::Level) -> Record<'_> {
        Record {
            scope: self.scope,
            level,
            message: self.message,
            error: self.error,
            details: &self.details,
        }
    }
}

/// What a [`Logger`](super::Logger) receives: an entry with its level pinned.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    scope: Option<&'a dyn fmt::Display>,
    level: super::Level,
    message: Option<&'a str>,
    error: Option<&'a (dyn Error + 'a)>,
    details: &'a [Detail<'a>],
}

impl<'a> Record<'a> {
    pub fn scope(&self) -> Option<&'a dyn fmt::Display> {
        self.scope
    }

    pub fn level(&self) -> super::Level {
        self.level
    }

    pub fn message(&self) -> Option<&'a str> {
        self.message
    }

    pub fn error(&self) -> Option<&'a (dyn Error + 'a)> {
        self.error
    }

    pub fn details(&self) -> &'a [Detail<'a>] {
        self.details
    }

    /// Same record with another scope. Used by wrapping loggers.
    pub fn with_scope<'b>(&self, scope: Option<&'b dyn fmt::Display>) -> Record<'b>
    where
        'a: 'b,
    {
        Record {
            scope,
            level: self.level,
            message: self.message,
            error: self.error,
            details: self.details,
        }
    }

    /// The message unless it is absent, empty or whitespace, in which case
    /// the error's text is used. `None` when neither gives any text.
    pub fn effective_message(&self) -> Option<std::borrow::Cow<'a, str>> {
        match self.message {
            Some(message) if !message.trim().is_empty() => Some(message.into()),
            _ => self.error.map(|err| err.to_string().into()),
        }
    }

    /// True when the error text already stands in for a blank message.
    pub fn message_from_error(&self) -> bool {
        self.error.is_some() && self.message.map_or(true, |m| m.trim().is_empty())
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("scope", &self.scope.map(|s| s.to_string()))
            .field("level", &self.level)
            .field("message", &self.message)
            .field("error", &self.error.map(|e| e.to_string()))
            .field("details", &self.details)
            .finish()
    }
}
