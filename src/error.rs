use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Type {
    Json,
    Yaml,
}

/// Location of the offending input, as reported by the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A value could not be encoded to, or decoded from, one of the text formats.
#[derive(Debug, Clone)]
pub struct Error {
    type_: Type,
    position: Option<Position>,
    desc: String,
}

impl Error {
    pub fn new(type_: Type, position: Option<Position>, desc: impl AsRef<str>) -> Self {
        Self {
            type_,
            position,
            desc: desc.as_ref().to_string()
        }
    }

    pub fn from_message(type_: Type, desc: impl AsRef<str>) -> Self {
        Self::new(type_, None, desc)
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn line(&self) -> Option<usize> {
        self.position.map(|p| p.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.position.map(|p| p.column)
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn type_(&self) -> Type {
        self.type_
    }

}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.type_ {
            Type::Json => { write!(f, "JSON error")?; },
            Type::Yaml => { write!(f, "YAML error")?; },
        };

        write!(f, ": {}", self.desc)
    }
}

impl std::error::Error for Error {

}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let position = if e.line() == 0 {
            None
        } else {
            Some(Position { line: e.line(), column: e.column() })
        };
        Self::new(Type::Json, position, e.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        let position = e.location().map(|loc| Position { line: loc.line(), column: loc.column() });
        Self::new(Type::Yaml, position, e.to_string())
    }
}
