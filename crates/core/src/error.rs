use serde::Serialize;

/// The failure category of an expansion error, as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FileAccess,
    MalformedConfig,
    MissingSection,
    ReferenceCycle,
    InvalidUtf8,
    Resolver,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::FileAccess => "file_access",
            ErrorKind::MalformedConfig => "malformed_config",
            ErrorKind::MissingSection => "missing_section",
            ErrorKind::ReferenceCycle => "reference_cycle",
            ErrorKind::InvalidUtf8 => "invalid_utf8",
            ErrorKind::Resolver => "resolver",
        }
    }
}

/// All errors that can abort the expansion of an argument list.
#[derive(Debug, thiserror::Error)]
pub enum ArgfileError {
    /// The referenced file does not exist or cannot be read.
    #[error("cannot read argument file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A structured argument file is not a well-formed document.
    #[error("error while reading structured config from '{path}': {message}")]
    MalformedConfig { path: String, message: String },

    /// One or more explicitly requested sections never appeared in the file.
    #[error("required sections {} not found in '{path}'", quoted(.missing))]
    MissingSection { path: String, missing: Vec<String> },

    /// A reference (transitively) references itself.
    #[error("argument file cycle detected: {}", .chain.join(" \u{2192} "))]
    ReferenceCycle { chain: Vec<String> },

    /// A process argument is not valid Unicode.
    #[error("invalid UTF-8 in argument {argument:?}")]
    InvalidUtf8 { argument: String },

    /// A resolver failure, tagged with the reference token that triggered it.
    #[error("{reference}: {source}")]
    Reference {
        reference: String,
        #[source]
        source: Box<ArgfileError>,
    },

    /// Free-form failure reported by a host-supplied resolver.
    #[error("{0}")]
    Resolver(String),
}

fn quoted(names: &[String]) -> String {
    let parts: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", parts.join(", "))
}

impl ArgfileError {
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        ArgfileError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        ArgfileError::MalformedConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Tag this error with the reference token whose resolution raised it.
    pub fn in_reference(self, reference: impl Into<String>) -> Self {
        ArgfileError::Reference {
            reference: reference.into(),
            source: Box::new(self),
        }
    }

    /// The error with any `Reference` wrappers peeled off.
    pub fn root(&self) -> &ArgfileError {
        match self {
            ArgfileError::Reference { source, .. } => source.root(),
            other => other,
        }
    }

    /// Root-cause category, looking through `Reference` wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            ArgfileError::FileAccess { .. } => ErrorKind::FileAccess,
            ArgfileError::MalformedConfig { .. } => ErrorKind::MalformedConfig,
            ArgfileError::MissingSection { .. } => ErrorKind::MissingSection,
            ArgfileError::ReferenceCycle { .. } => ErrorKind::ReferenceCycle,
            ArgfileError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            ArgfileError::Resolver(_) | ArgfileError::Reference { .. } => ErrorKind::Resolver,
        }
    }

    /// The outermost reference token this error is attributed to, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            ArgfileError::Reference { reference, .. } => Some(reference),
            _ => None,
        }
    }

    /// The file the root cause concerns, if it concerns one.
    pub fn file(&self) -> Option<&str> {
        match self.root() {
            ArgfileError::FileAccess { path, .. }
            | ArgfileError::MalformedConfig { path, .. }
            | ArgfileError::MissingSection { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Sections named by a `MissingSection` root cause; empty otherwise.
    pub fn missing_sections(&self) -> &[String] {
        match self.root() {
            ArgfileError::MissingSection { missing, .. } => missing,
            _ => &[],
        }
    }

    /// Structured rendering for hosts that report errors as JSON.
    /// Always includes every field (null when absent).
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind":      self.kind(),
            "message":   self.to_string(),
            "file":      self.file(),
            "sections":  self.missing_sections(),
            "reference": self.reference(),
        })
    }
}

/// Failure of a value checker; the message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("{value} is not {relation} {bound}")]
    OutOfRange {
        value: String,
        relation: &'static str,
        bound: String,
    },

    #[error("{value} is not {relation} {lower} and {upper}")]
    OutOfBounds {
        value: String,
        relation: &'static str,
        lower: String,
        upper: String,
    },

    #[error("cannot parse '{value}': {message}")]
    Unparsable { value: String, message: String },

    #[error("the file {0} does not exist")]
    NoSuchFile(String),

    #[error("the directory {0} does not exist")]
    NoSuchDirectory(String),

    #[error("wrong file type '{found}', expected: '{expected}'")]
    WrongExtension { found: String, expected: String },

    #[error("invalid escape sequence '{sequence}' in '{value}'")]
    InvalidEscape { value: String, sequence: String },
}
