use std::sync::Arc;

/// The single primitive every level operation ends in.
///
/// Implementations own formatting, filtering and output. A logger must not
/// assume any particular combination of scope, message, error and details;
/// all of them may be absent.
pub trait Logger: Send + Sync {
    fn enabled(&self, level: super::Level) -> bool;

    fn color_enabled(&self) -> bool {
        false
    }

    fn write(&self, record: &super::Record<'_>);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn enabled(&self, level: super::Level) -> bool {
        (**self).enabled(level)
    }

    fn color_enabled(&self) -> bool {
        (**self).color_enabled()
    }

    fn write(&self, record: &super::Record<'_>) {
        (**self).write(record)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn enabled(&self, level: super::Level) -> bool {
        (**self).enabled(level)
    }

    fn color_enabled(&self) -> bool {
        (**self).color_enabled()
    }

    fn write(&self, record: &super::Record<'_>) {
        (**self).write(record)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn enabled(&self, level: super::Level) -> bool {
        (**self).enabled(level)
    }

    fn color_enabled(&self) -> bool {
        (**self).color_enabled()
    }

    fn write(&self, record: &super::Record<'_>) {
        (**self).write(record)
    }
}
