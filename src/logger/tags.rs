/// Log tags identify the subsystem a message comes from.
///
/// Each tag maps to a `--debug-<key>` flag; debug output for a tag is only
/// printed when that flag is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Directory,
    Webserver,
}

impl LogTag {
    /// Key used in `--debug-<key>` flags
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Directory => "directory",
            LogTag::Webserver => "webserver",
        }
    }

    /// Uncolored label used in the log file
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Directory => "DIRECTORY",
            LogTag::Webserver => "WEBSERVER",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
