use std::fmt;

use net::FetchError;

#[derive(Debug)]
pub enum ParseError {
    /// Not well-formed JSON, or JSON of the wrong shape.
    Syntax(serde_json::Error),
    /// A node whose route key is empty; `path` locates it, e.g. `items[1].items[0]`.
    EmptyRoute { path: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed nav data: {err}"),
            Self::EmptyRoute { path } => write!(f, "empty url at {path}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::EmptyRoute { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    MissingElement { id: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { id } => write!(f, "no element with id {id:?}"),
        }
    }
}

impl std::error::Error for DomError {}

/// Why the startup chain stopped.
#[derive(Debug)]
pub enum InitError {
    Fetch(FetchError),
    Parse(ParseError),
    Dom(DomError),
    AlreadyInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "fetch failed: {err}"),
            Self::Parse(err) => write!(f, "parse failed: {err}"),
            Self::Dom(err) => write!(f, "dom step failed: {err}"),
            Self::AlreadyInitialized => f.write_str("side nav already initialized"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Dom(err) => Some(err),
            Self::AlreadyInitialized => None,
        }
    }
}

impl From<FetchError> for InitError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl From<ParseError> for InitError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<DomError> for InitError {
    fn from(err: DomError) -> Self {
        Self::Dom(err)
    }
}
