use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;

mod builder;
mod category;
mod json;
mod selector;
mod shape;

pub use builder::{CombinatorPolicy, SelectorBuilder};
pub use category::Category;
pub use json::{from_json, hydrate, to_json};
pub use selector::{
    Combinator, CompoundSelector, Selector, SelectorFragment, SelectorNode, attr, class, combine,
    element, id, pseudo_class, pseudo_element,
};
pub use shape::Rectangle;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    OrderViolation { category: Category, after: Category },
    DuplicateViolation { category: Category },
    UnknownCombinator(String),
    Json(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderViolation { category, after } => write!(
                f,
                "{category} cannot follow {after}: selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
            ),
            Self::DuplicateViolation { category } => write!(
                f,
                "duplicate {category}: element, id and pseudo-element should not occur more than one time inside the selector"
            ),
            Self::UnknownCombinator(token) => write!(f, "unknown combinator: {token:?}"),
            Self::Json(msg) => write!(f, "json error: {msg}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
