//! Stream and encoding types handed to hooks when a file is opened.

use std::{fmt, io::Write};

/// The stream a log file writer writes through.
///
/// Hooks receive one and return one; a wrapping hook returns a new stream
/// that owns the one it was given.
pub type OutputStream = Box<dyn Write + Send>;

/// Text encoding label of the file being written.
///
/// Hooks treat it as opaque metadata, e.g. to encode a header in the same
/// encoding as the log events that follow.
///
/// The label is `&'static str` so the value stays `Copy` as it is handed to
/// every stage. Names read from runtime configuration go through
/// [`Encoding::from_label`], which resolves them to one of the known
/// encodings; labels outside that set must be `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoding(&'static str);

impl Encoding {
    /// UTF-8, the default for log files.
    pub const UTF_8: Self = Self("utf-8");
    /// UTF-16, little endian.
    pub const UTF_16LE: Self = Self("utf-16le");
    /// UTF-16, big endian.
    pub const UTF_16BE: Self = Self("utf-16be");
    /// 7-bit ASCII.
    pub const ASCII: Self = Self("us-ascii");

    /// Create an encoding from a label such as `"iso-8859-1"`.
    pub const fn new(label: &'static str) -> Self {
        Self(label)
    }

    /// The encoding label.
    pub const fn label(&self) -> &'static str {
        self.0
    }

    /// Resolve a runtime name such as `"UTF8"` or `"utf-16le"`.
    ///
    /// Matching ignores ASCII case and `-`/`_` separators. Returns `None`
    /// for names outside the known set.
    pub fn from_label(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "utf8" => Some(Self::UTF_8),
            "utf16" | "utf16le" | "unicode" => Some(Self::UTF_16LE),
            "utf16be" | "bigendianunicode" => Some(Self::UTF_16BE),
            "ascii" | "usascii" => Some(Self::ASCII),
            _ => None,
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::UTF_8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
