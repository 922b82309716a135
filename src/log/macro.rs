#[doc(hidden)]
#[macro_export]
macro_rules! __log_entry {
    ($entry:expr $(,)?) => {
      $entry
    };

    ($entry:expr, scope = $scope:expr $(, $($rest:tt)*)?) => {
      $crate::__log_entry!($entry.with_scope(&$scope) $(, $($rest)*)?)
    };

    ($entry:expr, tracker = $tracker:expr $(, $($rest:tt)*)?) => {
      $crate::__log_entry!($entry.with_scope(&$tracker) $(, $($rest)*)?)
    };

    ($entry:expr, option_tracker = $option_tracker:expr $(, $($rest:tt)*)?) => {
      $crate::__log_entry!($entry.with_option_scope($option_tracker) $(, $($rest)*)?)
    };

    ($entry:expr, error = $error:expr $(, $($rest:tt)*)?) => {
      $crate::__log_entry!($entry.with_error(&$error) $(, $($rest)*)?)
    };

    ($entry:expr, details = [$($label:expr => $value:expr),* $(,)?] $(, $($rest:tt)*)?) => {
      $crate::__log_entry!($entry$(.with_detail($label, &$value))* $(, $($rest)*)?)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($method:ident, $logger:expr, { $($field:tt)* }, $($arg:tt)+) => {
      $crate::log::LoggerExt::$method(
        &$logger,
        $crate::__log_entry!($crate::log::Entry::new(), $($field)*)
          .with_message(&::std::format!($($arg)+)),
      )
    };

    ($method:ident, $logger:expr, { $($field:tt)* } $(,)?) => {
      $crate::log::LoggerExt::$method(
        &$logger,
        $crate::__log_entry!($crate::log::Entry::new(), $($field)*),
      )
    };

    ($method:ident, $logger:expr, $($arg:tt)+) => {
      $crate::log::LoggerExt::$method(
        &$logger,
        $crate::log::Entry::message(&::std::format!($($arg)+)),
      )
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
      $crate::__log_at!(trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
      $crate::__log_at!(debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => {
      $crate::__log_at!(verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! message {
    ($($arg:tt)+) => {
      $crate::__log_at!(message, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
      $crate::__log_at!(warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
      $crate::__log_at!(error, $($arg)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
      $crate::__log_at!(fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
      $crate::__log_at!(critical, $($arg)+)
    };
}
