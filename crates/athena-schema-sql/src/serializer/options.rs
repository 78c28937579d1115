use std::str::FromStr;

/// DDL rendering options
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// Command line recorded in the generated code header. No header is
    /// written when unset.
    pub header: Option<String>,

    /// Location root, e.g. `s3://bucket/`
    pub location: String,

    /// Prepended to every folder name
    pub prefix: String,

    /// Appended to every folder name
    pub suffix: String,

    /// Row format serde
    pub serde: Serde,
}

/// The JSON SerDe used to read table rows
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Serde {
    /// `org.openx.data.jsonserde.JsonSerDe`
    #[default]
    OpenxJson,

    /// `org.apache.hive.hcatalog.data.JsonSerDe`
    HiveJson,

    /// Any other SerDe, by class name
    Custom(String),
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the command line recorded in the header
    pub fn header(mut self, command: impl Into<String>) -> Self {
        self.header = Some(command.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn serde(mut self, serde: Serde) -> Self {
        self.serde = serde;
        self
    }
}

impl Serde {
    pub fn class_name(&self) -> &str {
        match self {
            Serde::OpenxJson => "org.openx.data.jsonserde.JsonSerDe",
            Serde::HiveJson => "org.apache.hive.hcatalog.data.JsonSerDe",
            Serde::Custom(class_name) => class_name,
        }
    }
}

impl FromStr for Serde {
    type Err = String;

    /// Accepts `openx`, `hive` or a fully qualified class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openx" => Ok(Serde::OpenxJson),
            "hive" => Ok(Serde::HiveJson),
            class_name if class_name.contains('.') => Ok(Serde::Custom(class_name.to_string())),
            _ => Err(format!(
                "unknown serde `{s}`; expected `openx`, `hive` or a class name"
            )),
        }
    }
}
