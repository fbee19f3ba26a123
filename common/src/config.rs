use std::fmt;
use std::path::PathBuf;

/// Where hostnames are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, read until end-of-stream.
    Stdin,
    /// A file, one hostname per line.
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Input sources, consumed one after another in this order.
    pub sources: Vec<InputSource>,
    /// Destination of the Markdown report.
    ///
    /// When unset no table is accumulated at all.
    pub save_path: Option<PathBuf>,
}

impl Config {
    pub fn has_input(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn save_enabled(&self) -> bool {
        self.save_path.is_some()
    }
}
