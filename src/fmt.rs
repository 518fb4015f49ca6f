/// Where the lines of a [`Loggable`] dump are written to.
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Emit every line through the [`log`] facade at the given level.
    Log(log::Level),
    /// Like [`LogOutput::Log`], with an explicit log target.
    LogTarget(log::Level, String),
    StdOut,
    StdErr,
    #[cfg(feature = "log-to-file")]
    File(std::sync::Arc<parking_lot::Mutex<std::fs::File>>),
}

impl From<log::Level> for LogOutput {
    fn from(value: log::Level) -> Self {
        Self::Log(value)
    }
}

impl LogOutput {
    fn print(&self, line: &str) {
        match self {
            LogOutput::Log(level) => log::log!(*level, "{}", line),
            LogOutput::LogTarget(level, target) => {
                log::log!(target: target, *level, "{}", line)
            }
            LogOutput::StdOut => println!("{}", line),
            LogOutput::StdErr => eprintln!("{}", line),
            #[cfg(feature = "log-to-file")]
            LogOutput::File(file) => {
                use std::io::Write;

                let mut file = file.lock();
                file.write_all(line.as_bytes()).ok();
                file.write_all(b"\n").ok();
            }
        }
    }
}

/// A single line of a [`Loggable`] dump.
///
/// `level` is the indentation depth: level 0 is the heading, deeper levels
/// are printed as `title: value` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct LogItem {
    level: usize,
    title: String,
    value: Option<String>,
}

impl LogItem {
    pub fn new<T: Into<String>, V: Into<String>>(level: usize, title: T, value: Option<V>) -> Self {
        Self {
            level,
            title: title.into(),
            value: value.map(Into::into),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<T: ToString, V: ToString> From<(usize, T, V)> for LogItem {
    fn from((level, title, value): (usize, T, V)) -> Self {
        Self::new(level, title.to_string(), Some(value.to_string()))
    }
}

impl<T: ToString> From<(usize, T)> for LogItem {
    fn from((level, title): (usize, T)) -> Self {
        Self::new::<_, String>(level, title.to_string(), None)
    }
}

pub struct Logger;

impl Logger {
    pub fn log<T>(output: &LogOutput, loggable: &T)
    where
        T: Loggable,
    {
        Self::render(&loggable.as_log())
            .iter()
            .for_each(|line| output.print(line));
    }

    /// Format `items` into the lines [`Logger::log`] would print.
    ///
    /// Values are right-aligned within each run of items sharing the same
    /// indentation level.
    pub fn render(items: &[LogItem]) -> Vec<String> {
        let mut lines = Vec::with_capacity(items.len());

        let Some(heading) = items.first() else {
            return lines;
        };

        lines.push(heading.title.clone());

        let body = &items[1..];

        for (idx, item) in body.iter().enumerate() {
            let LogItem {
                level,
                title,
                value,
            } = item;

            let front_padding = " ".repeat(level * 2);

            let Some(value) = value else {
                lines.push(format!("{front_padding}{title}"));
                continue;
            };

            let align = Self::run_width(body, idx);
            let value_padding = " ".repeat(align.saturating_sub(title.len()));

            if value.is_empty() {
                lines.push(format!("{front_padding}{title}:"));
            } else {
                lines.push(format!("{front_padding}{title}: {value_padding}{value}"));
            }
        }

        lines
    }

    fn run_width(body: &[LogItem], idx: usize) -> usize {
        let level = body[idx].level;
        let same_level = |i: &&LogItem| i.level == level;

        let before = body[..idx].iter().rev().take_while(same_level);
        let after = body[idx..].iter().take_while(same_level);

        before
            .chain(after)
            .filter(|i| i.value.is_some())
            .map(|i| i.title.len())
            .max()
            .unwrap_or(0)
    }
}

/// A value that can be dumped as an indented, human-readable list of lines.
pub trait Loggable {
    fn as_log(&self) -> Vec<LogItem>;
}

#[macro_export]
macro_rules ! log_vec {
    [$($msg:tt)*] => {
        $crate::to_log!(vec: $($msg)*)
    }
}

#[macro_export]
#[doc(hidden)]
macro_rules! to_log {
    ([$($array:tt)*],) => {
        vec![$($array)*]
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr)) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr)) => {
        $crate::to_log!([$($array)* ($level, $title).into(),],)
    };

    ([$($array:tt)*], ($level:literal, $title:expr, $value:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title, $value).into(),], $($msg)*)
    };

    ([$($array:tt)*], ($level:literal, $title:expr), $($msg:tt)*) => {
        $crate::to_log!([$($array)* ($level, $title).into(),], $($msg)*)
    };

    (vec: $($msg:tt)*) => {
        $crate::to_log!([], $($msg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_aligns_values_per_level() {
        let items: Vec<LogItem> = log_vec![
            (0, "Heading"),
            (1, "A", 1),
            (1, "Longer", 2),
            (2, "Nested", "x"),
            (1, "Group")
        ];

        let lines = Logger::render(&items);

        assert_eq!(
            lines,
            vec![
                "Heading".to_string(),
                "  A:      1".to_string(),
                "  Longer: 2".to_string(),
                "    Nested: x".to_string(),
                "  Group".to_string(),
            ]
        );
    }

    #[test]
    fn render_empty() {
        assert!(Logger::render(&[]).is_empty());
    }
}
