//! AST for parsed visual format strings.

use smallvec::SmallVec;

use crate::types::{Axis, Relation};

/// A complete visual format line, e.g. `H:|-[a]-8-[b(>=50)]-|`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualFormat {
    pub axis: Axis,
    /// Connection from the container's leading edge to the first view.
    pub leading: Option<Connection>,
    pub views: Vec<ViewSpec>,
    /// `connections[i]` joins `views[i]` to `views[i + 1]`.
    pub connections: Vec<Connection>,
    /// Connection from the last view to the container's trailing edge.
    pub trailing: Option<Connection>,
}

impl VisualFormat {
    /// Every name the format refers to, in textual order.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        if let Some(connection) = &self.leading {
            collect_connection(connection, &mut names);
        }
        for (index, view) in self.views.iter().enumerate() {
            names.push(view.name.as_str());
            collect_predicates(&view.predicates, &mut names);
            if let Some(connection) = self.connections.get(index) {
                collect_connection(connection, &mut names);
            }
        }
        if let Some(connection) = &self.trailing {
            collect_connection(connection, &mut names);
        }
        names
    }
}

fn collect_connection<'a>(connection: &'a Connection, names: &mut Vec<&'a str>) {
    if let Connection::Predicates(predicates) = connection {
        collect_predicates(predicates, names);
    }
}

fn collect_predicates<'a>(predicates: &'a [PredicateSpec], names: &mut Vec<&'a str>) {
    for predicate in predicates {
        if let PredicateObject::Named(name) = &predicate.object {
            names.push(name.as_str());
        }
    }
}

/// A bracketed view, optionally with a length predicate list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewSpec {
    pub name: String,
    pub predicates: SmallVec<[PredicateSpec; 2]>,
}

/// One predicate: `>=metric_0@750`, `==other`, `30`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredicateSpec {
    pub relation: Relation,
    pub object: PredicateObject,
    pub priority: Option<u32>,
}

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredicateObject {
    /// A literal number
    Constant(f64),
    /// A metric or view name, resolved against the symbol tables
    Named(String),
}

/// How two neighbouring items are spaced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connection {
    /// `[a][b]`
    Flush,
    /// `[a]-[b]`
    Standard,
    /// `[a]-8-[b]`, `[a]->=8-[b]`, `[a]-(>=8,<=20)-[b]`
    Predicates(SmallVec<[PredicateSpec; 2]>),
}
