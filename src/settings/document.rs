//! Settings document analysis.
//!
//! Shared lookup helpers over a parsed `roxmltree` document. Elements are
//! matched on their local name so that documents declaring the Maven
//! settings namespace (`xmlns="http://maven.apache.org/SETTINGS/1.0.0"`)
//! resolve the same way as plain ones.

use roxmltree::{Document, Node};

use super::{ServerEntry, SettingsError};

/// Parse a settings document, surfacing well-formedness failures.
pub(crate) fn parse(input: &str) -> Result<Document<'_>, SettingsError> {
  Ok(Document::parse(input)?)
}

/// Return the `<settings>` root of the document.
///
/// Only the document's single top-level element is considered; a well-formed
/// document whose root carries any other name is rejected.
pub(crate) fn settings_root<'a, 'input>(doc: &'a Document<'input>) -> Result<Node<'a, 'input>, SettingsError> {
  let root = doc.root_element();
  if root.tag_name().name() == "settings" {
    Ok(root)
  } else {
    Err(SettingsError::MissingSettingsRoot)
  }
}

/// Find the first direct `<servers>` child of the settings root.
///
/// When the document contains more than one container, later ones are
/// ignored without a warning; the first match is the mutation target.
pub(crate) fn servers_container<'a, 'input>(root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
  root
    .children()
    .find(|node| node.is_element() && node.tag_name().name() == "servers")
}

/// Decode every `<server>` record in the document's first servers container.
///
/// # Errors
/// Returns [`SettingsError::Parse`] for malformed XML and
/// [`SettingsError::MissingSettingsRoot`] when the root element is not
/// `<settings>`. A document without a servers container yields an empty
/// list.
pub fn list_servers(input: &str) -> Result<Vec<ServerEntry>, SettingsError> {
  let doc = parse(input)?;
  let root = settings_root(&doc)?;

  let Some(container) = servers_container(root) else {
    return Ok(Vec::new());
  };

  let entries = container
    .children()
    .filter(|node| node.is_element() && node.tag_name().name() == "server")
    .map(|server| ServerEntry {
      id: child_text(server, "id"),
      username: child_text(server, "username"),
      password: child_text(server, "password"),
    })
    .collect();

  Ok(entries)
}

/// Text content of the first child element with the given local name.
fn child_text(node: Node, name: &str) -> Option<String> {
  node
    .children()
    .find(|child| child.is_element() && child.tag_name().name() == name)
    .and_then(|child| child.text())
    .map(|text| text.to_string())
}
