use super::{Entry, Level, Logger, TagLogger};

/// Hands `entry` to `logger` at `level`, or does nothing when there is no
/// logger.
///
/// Every level operation ends here. The logger sees exactly one `write` per
/// call and nothing it raises is caught.
pub fn dispatch<L: Logger + ?Sized>(logger: Option<&L>, level: Level, entry: Entry<'_>) {
    let Some(logger) = logger else {
        return;
    };
    logger.write(&entry.record(level));
}

/// Level-named operations for anything that may hold a logger.
///
/// Implemented for every [`Logger`] and for `Option` of one, so call sites
/// don't need to check whether a logger was configured:
///
/// ```
/// use rslog::log::{Entry, LoggerExt, NopLogger};
///
/// let logger: Option<NopLogger> = None;
/// logger.warning(Entry::message("disk nearly full"));
/// ```
pub trait LoggerExt {
    fn log(&self, level: Level, entry: Entry<'_>);

    fn trace(&self, entry: Entry<'_>) {
        self.log(Level::Trace, entry)
    }

    fn debug(&self, entry: Entry<'_>) {
        self.log(Level::Debug, entry)
    }

    fn verbose(&self, entry: Entry<'_>) {
        self.log(Level::Verbose, entry)
    }

    fn message(&self, entry: Entry<'_>) {
        self.log(Level::Message, entry)
    }

    fn warning(&self, entry: Entry<'_>) {
        self.log(Level::Warning, entry)
    }

    fn error(&self, entry: Entry<'_>) {
        self.log(Level::Error, entry)
    }

    fn fatal(&self, entry: Entry<'_>) {
        self.log(Level::Fatal, entry)
    }

    fn critical(&self, entry: Entry<'_>) {
        self.log(Level::Critical, entry)
    }

    /// Binds this logger to a named context.
    fn tagged(self, tag: impl Into<String>) -> TagLogger<Self>
    where
        Self: Logger + Sized,
    {
        TagLogger::new(self, tag)
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {
    fn log(&self, level: Level, entry: Entry<'_>) {
        dispatch(Some(self), level, entry)
    }
}

impl<L: Logger> LoggerExt for Option<L> {
    fn log(&self, level: Level, entry: Entry<'_>) {
        dispatch(self.as_ref(), level, entry)
    }
}
