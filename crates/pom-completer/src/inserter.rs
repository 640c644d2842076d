//! Conditional element insertion
//!
//! Every element the completer creates goes through these helpers. A child
//! is only built when its parent has no element with the same local name;
//! the population step runs on the detached element, which is attached to
//! the parent afterwards. New elements inherit the parent's namespace.

use pom_tree::MutableXmlTree;
use tracing::{debug, trace};

use crate::error::{require, Result};

/// Build `tag` under `parent` unconditionally: create, populate, attach.
pub fn append_populated<T, F>(
    tree: &mut T,
    parent: &T::Node,
    tag: &str,
    populate: F,
) -> Result<T::Node>
where
    T: MutableXmlTree,
    F: FnOnce(&mut T, &T::Node) -> Result<()>,
{
    let namespace = tree.node_namespace_uri(parent);
    let child = tree.create_element(tag, namespace.as_deref())?;
    populate(tree, &child)?;
    tree.append_child(parent, &child)?;
    debug!(tag, "added element");
    Ok(child)
}

/// Build `tag` under `parent` unless such a child already exists.
///
/// Returns the new node, or `None` when the parent already had the tag; in
/// that case `populate` is never called.
pub fn add_child_if_absent<T, F>(
    tree: &mut T,
    parent: &T::Node,
    tag: &str,
    populate: F,
) -> Result<Option<T::Node>>
where
    T: MutableXmlTree,
    F: FnOnce(&mut T, &T::Node) -> Result<()>,
{
    if tree.child_element(parent, tag).is_some() {
        trace!(tag, "element already present");
        return Ok(None);
    }
    append_populated(tree, parent, tag, populate).map(Some)
}

/// Add a text element from a required property.
///
/// A missing value only fails when the element has to be created.
pub fn add_required_text<T, P>(
    tree: &mut T,
    parent: &T::Node,
    tag: &str,
    value: Option<&str>,
    path: P,
) -> Result<Option<T::Node>>
where
    T: MutableXmlTree,
    P: FnOnce() -> String,
{
    add_child_if_absent(tree, parent, tag, |tree, node| {
        let text = require(value, path)?;
        tree.set_text(node, text)?;
        Ok(())
    })
}

/// Add a text element from an optional property; nothing happens without a value.
pub fn add_optional_text<T>(
    tree: &mut T,
    parent: &T::Node,
    tag: &str,
    value: Option<&str>,
) -> Result<Option<T::Node>>
where
    T: MutableXmlTree,
{
    let Some(text) = value else {
        return Ok(None);
    };
    add_child_if_absent(tree, parent, tag, |tree, node| {
        tree.set_text(node, text)?;
        Ok(())
    })
}
