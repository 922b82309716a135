use std::{any, fmt};

use colored::Colorize;

/// A logger bound to one context (a component name or a type).
///
/// The tag is put in front of the record's scope, so the inner logger sees
/// `tag` for unscoped records and `tag/scope` otherwise.
pub struct TagLogger<L> {
    inner: L,
    tag: String,
    color: Option<colored::Color>,
}

impl<L: super::Logger> TagLogger<L> {
    pub fn new(inner: L, tag: impl Into<String>) -> Self {
        Self {
            inner,
            tag: tag.into(),
            color: None,
        }
    }

    /// Tags with the bare name of `T`, e.g. `Manager` for `crate::manager::Manager<u8>`.
    pub fn for_type<T: ?Sized>(inner: L) -> Self {
        Self::new(inner, short_type_name::<T>())
    }

    pub fn with_color(self, color: colored::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_box(self) -> Box<dyn super::Logger>
    where
        L: 'static,
    {
        Box::new(self)
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let name = any::type_name::<T>();
    let path = name.split('<').next().unwrap_or(name);
    path.rsplit("::").next().unwrap_or(path)
}

struct TaggedScope<'a> {
    tag: &'a str,
    scope: Option<&'a dyn fmt::Display>,
}

impl fmt::Display for TaggedScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope {
            Some(scope) => write!(f, "{}/{}", self.tag, scope),
            None => f.write_str(self.tag),
        }
    }
}

impl<L: super::Logger> super::Logger for TagLogger<L> {
    fn enabled(&self, level: super::Level) -> bool {
        self.inner.enabled(level)
    }

    fn color_enabled(&self) -> bool {
        self.inner.color_enabled()
    }

    fn write(&self, record: &super::Record<'_>) {
        if !self.enabled(record.level()) {
            return;
        }

        let colored_tag;
        let tag = match self.color {
            Some(color) if self.inner.color_enabled() => {
                colored_tag = self.tag.color(color).to_string();
                colored_tag.as_str()
            }
            _ => self.tag.as_str(),
        };
        let scope = TaggedScope {
            tag,
            scope: record.scope(),
        };
        self.inner.write(&record.with_scope(Some(&scope)));
    }
}
