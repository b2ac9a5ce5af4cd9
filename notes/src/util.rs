#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)+) => ({
        ::log::error!($($arg)+);
        ::std::process::exit(1)
    });
}

pub trait StrExt: AsRef<str> {
    fn is_set(&self) -> bool {
        !self.as_ref().is_empty()
    }

    fn has_path_separator(&self) -> bool {
        self.as_ref()
            .chars()
            .any(|c| std::path::is_separator(c) || c == '\0')
    }
}

impl<T: AsRef<str>> StrExt for T {}
