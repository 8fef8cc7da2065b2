//! Collection and nested-object payloads

use crate::value::Attr;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered collection of attributes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct List<T>(pub Vec<T>);

/// Unordered collection of attributes.
///
/// Element order carries no meaning: equality ignores it.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set<T>(pub Vec<T>);

/// String-keyed map of attributes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map<T>(pub BTreeMap<String, T>);

/// A single nested object
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Object<T>(pub Box<T>);

/// Ordered collection of nested objects
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListNested<T>(pub Vec<T>);

/// Unordered collection of nested objects; equality ignores order.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetNested<T>(pub Vec<T>);

fn same_elements<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut matched = vec![false; right.len()];
    left.iter().all(|item| {
        let found = right
            .iter()
            .enumerate()
            .find(|(i, other)| !matched[*i] && *other == item)
            .map(|(i, _)| i);
        match found {
            Some(i) => {
                matched[i] = true;
                true
            }
            None => false,
        }
    })
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.0, &other.0)
    }
}

impl<T: PartialEq> PartialEq for SetNested<T> {
    fn eq(&self, other: &Self) -> bool {
        same_elements(&self.0, &other.0)
    }
}

impl<T> Object<T> {
    pub fn new(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        *self.0
    }
}

impl<T> From<T> for Object<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<Vec<T>> for ListNested<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<Vec<T>> for SetNested<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl List<Attr<String>> {
    /// Builds a list of known strings
    pub fn from_strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(|s| Attr::Known(s.into())).collect())
    }
}

impl Set<Attr<String>> {
    /// Builds a set of known strings
    pub fn from_strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(|s| Attr::Known(s.into())).collect())
    }
}

impl Map<Attr<String>> {
    /// Builds a map of known strings
    pub fn from_strings<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), Attr::Known(v.into())))
                .collect(),
        )
    }
}
