//! Credential record injection.
//!
//! Builds the new `<server>` record and splices it into the settings
//! document's source text. The insertion offset comes from `roxmltree` node
//! ranges, so every byte the document already contained survives unchanged.
//!
//! When the target container sits on its own line the record is indented to
//! match the surrounding document (the indent step is inferred from the
//! root's first child); containers embedded mid-line get an inline record.
//! Exact whitespace of the inserted record is not a compatibility contract.

use std::fs;
use std::path::Path;

use roxmltree::Node;
use tracing::debug;

use super::types::SettingsError;
use super::document;
use crate::credentials::Credential;

/// One rendered line of a new XML fragment, tagged with its nesting depth
/// relative to the insertion container.
type FragmentLine = (usize, String);

/// Append a credential record to the settings document in `input`.
///
/// The returned string is the full document: all original content followed
/// by, at the appropriate offset, the new record. A missing `<servers>`
/// container is created as a direct child of the settings root.
///
/// # Errors
/// * [`SettingsError::Parse`] when `input` is not well-formed XML.
/// * [`SettingsError::MissingSettingsRoot`] when the root element is not
///   `<settings>`.
pub fn inject_credentials(input: &str, credential: &Credential, server_id: &str) -> Result<String, SettingsError> {
  let doc = document::parse(input)?;
  let root = document::settings_root(&doc)?;
  let step = indent_step(input, root);

  let output = match document::servers_container(root) {
    Some(container) => {
      debug!("appending server record to existing <servers> container");
      append_fragment(input, container, &server_fragment(credential, server_id), &step)
    }
    None => {
      debug!("no <servers> container found; creating one");
      append_fragment(input, root, &servers_fragment(credential, server_id), &step)
    }
  };

  Ok(output)
}

/// Read the settings document at `path`, inject a credential record, and
/// overwrite the file with the result.
///
/// The write is a plain truncating overwrite; every failure before the
/// write (read, parse, structure) leaves the file untouched.
///
/// # Errors
/// [`SettingsError::Io`] for read/write failures, plus everything
/// [`inject_credentials`] can return.
pub fn inject_into_file(path: &Path, credential: &Credential, server_id: &str) -> Result<(), SettingsError> {
  let input = fs::read_to_string(path)?;
  let output = inject_credentials(&input, credential, server_id)?;
  fs::write(path, output)?;
  Ok(())
}

/// The new `<server>` record, relative to a `<servers>` container.
fn server_fragment(credential: &Credential, server_id: &str) -> Vec<FragmentLine> {
  vec![
    (0, "<server>".to_string()),
    (1, format!("<id>{}</id>", escape_text(server_id))),
    (1, format!("<username>{}</username>", escape_text(&credential.username))),
    (1, format!("<password>{}</password>", escape_text(&credential.password))),
    (0, "</server>".to_string()),
  ]
}

/// A full `<servers>` container wrapping the new record, relative to the
/// settings root.
fn servers_fragment(credential: &Credential, server_id: &str) -> Vec<FragmentLine> {
  let mut lines = vec![(0, "<servers>".to_string())];
  lines.extend(
    server_fragment(credential, server_id)
      .into_iter()
      .map(|(depth, line)| (depth + 1, line)),
  );
  lines.push((0, "</servers>".to_string()));
  lines
}

/// Splice `lines` into `container` as its last children.
fn append_fragment(input: &str, container: Node, lines: &[FragmentLine], step: &str) -> String {
  let range = container.range();
  let element_src = &input[range.clone()];
  let indent = line_indent(input, range.start);

  let pretty = |base: &str| -> String {
    let mut out = String::new();
    for (depth, line) in lines {
      out.push('\n');
      out.push_str(base);
      for _ in 0..=*depth {
        out.push_str(step);
      }
      out.push_str(line);
    }
    out
  };
  let inline = || -> String { lines.iter().map(|(_, line)| line.as_str()).collect() };

  // A childless self-closing container cannot be spliced into; reopen it
  // around the new record instead.
  if container.first_child().is_none() && element_src.ends_with("/>") {
    let open = format!("{}>", element_src[..element_src.len() - 2].trim_end());
    let close = format!("</{}>", source_tag_name(element_src));
    let body = match &indent {
      Some(base) => format!("{}\n{base}", pretty(base)),
      None => inline(),
    };
    return splice(input, range.start..range.end, &format!("{open}{body}{close}"));
  }

  match container.last_child() {
    // The usual shape: trailing whitespace indents the end tag. Insert the
    // record before it so the end tag keeps its alignment.
    Some(last) if is_blank_text(last) && indent.is_some() => {
      let base = indent.as_deref().unwrap_or_default();
      splice(input, last.range().start..last.range().start, &pretty(base))
    }
    // Children packed against the end tag: stay on one line.
    Some(last) => {
      let at = last.range().end;
      splice(input, at..at, &inline())
    }
    // `<servers></servers>`: the end tag directly follows the open tag.
    None => {
      let end_tag = range.start + element_src.rfind("</").expect("childless element has an end tag");
      let body = match &indent {
        Some(base) => format!("{}\n{base}", pretty(base)),
        None => inline(),
      };
      splice(input, end_tag..end_tag, &body)
    }
  }
}

/// Replace `range` of `input` with `replacement`.
fn splice(input: &str, range: std::ops::Range<usize>, replacement: &str) -> String {
  let mut out = String::with_capacity(input.len() + replacement.len());
  out.push_str(&input[..range.start]);
  out.push_str(replacement);
  out.push_str(&input[range.end..]);
  out
}

/// The tag name exactly as written in the element source, prefix included.
fn source_tag_name(element_src: &str) -> &str {
  element_src[1..]
    .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
    .next()
    .unwrap_or_default()
}

/// Whitespace preceding `offset` on its line, when the line holds nothing
/// else before it. `None` means the node sits mid-line.
fn line_indent(input: &str, offset: usize) -> Option<String> {
  let line_start = input[..offset].rfind('\n').map_or(0, |i| i + 1);
  let prefix = &input[line_start..offset];
  prefix
    .chars()
    .all(|c| c == ' ' || c == '\t')
    .then(|| prefix.to_string())
}

/// Infer the document's indent step from the root's first element child,
/// falling back to two spaces.
fn indent_step(input: &str, root: Node) -> String {
  if let Some(base) = line_indent(input, root.range().start)
    && let Some(child) = root.children().find(|node| node.is_element())
    && let Some(child_indent) = line_indent(input, child.range().start)
    && let Some(step) = child_indent.strip_prefix(base.as_str())
    && !step.is_empty()
  {
    return step.to_string();
  }
  "  ".to_string()
}

fn is_blank_text(node: Node) -> bool {
  node.is_text() && node.text().is_some_and(|text| text.trim().is_empty())
}

/// Escape a string for use as XML text content.
fn escape_text(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for ch in value.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(ch),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::settings::DEFAULT_SERVER_ID;

  fn credential() -> Credential {
    Credential {
      username: "alice".to_string(),
      password: "secret".to_string(),
    }
  }

  fn inject(input: &str) -> String {
    inject_credentials(input, &credential(), DEFAULT_SERVER_ID).unwrap()
  }

  #[test]
  fn test_inject_creates_container_in_self_closing_root() {
    let output = inject("<settings/>");

    insta::assert_snapshot!(output, @r###"
    <settings>
      <servers>
        <server>
          <id>sonatype-nexus-snapshots</id>
          <username>alice</username>
          <password>secret</password>
        </server>
      </servers>
    </settings>
    "###);
  }

  #[test]
  fn test_inject_appends_to_existing_container() {
    let input = r#"<settings>
  <servers>
    <server>
      <id>releases</id>
      <username>deploy</username>
      <password>hunter2</password>
    </server>
  </servers>
</settings>"#;

    let output = inject(input);

    insta::assert_snapshot!(output, @r###"
    <settings>
      <servers>
        <server>
          <id>releases</id>
          <username>deploy</username>
          <password>hunter2</password>
        </server>
        <server>
          <id>sonatype-nexus-snapshots</id>
          <username>alice</username>
          <password>secret</password>
        </server>
      </servers>
    </settings>
    "###);
  }

  #[test]
  fn test_inject_appends_after_existing_records() {
    let input = r#"<settings>
  <servers>
    <server><id>one</id></server>
    <server><id>two</id></server>
  </servers>
</settings>"#;

    let output = inject(input);
    let entries = crate::settings::list_servers(&output).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id.as_deref(), Some("one"));
    assert_eq!(entries[1].id.as_deref(), Some("two"));
    assert_eq!(entries[2].id.as_deref(), Some(DEFAULT_SERVER_ID));
    assert_eq!(entries[2].username.as_deref(), Some("alice"));
    assert_eq!(entries[2].password.as_deref(), Some("secret"));
  }

  #[test]
  fn test_inject_preserves_prior_content() {
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<settings xmlns="http://maven.apache.org/SETTINGS/1.0.0">
  <!-- local mirror -->
  <mirrors>
    <mirror>
      <id>corp</id>
      <url>https://repo.example.com/maven2</url>
    </mirror>
  </mirrors>
  <localRepository>/var/cache/m2</localRepository>
</settings>"#;

    let output = inject(input);

    // Everything before the new container is byte-for-byte intact.
    let prefix_end = output.find("<servers>").unwrap();
    assert!(input.starts_with(output[..prefix_end].trim_end()));
    assert!(output.contains("<!-- local mirror -->"));
    assert!(output.contains("<localRepository>/var/cache/m2</localRepository>"));
    assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

    let entries = crate::settings::list_servers(&output).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id.as_deref(), Some(DEFAULT_SERVER_ID));
  }

  #[test]
  fn test_inject_into_empty_container() {
    let input = "<settings>\n  <servers></servers>\n</settings>";

    let output = inject(input);

    insta::assert_snapshot!(output, @r###"
    <settings>
      <servers>
        <server>
          <id>sonatype-nexus-snapshots</id>
          <username>alice</username>
          <password>secret</password>
        </server>
      </servers>
    </settings>
    "###);
  }

  #[test]
  fn test_inject_into_self_closing_container_inline() {
    let output = inject("<settings><servers/></settings>");

    assert_eq!(
      output,
      "<settings><servers><server><id>sonatype-nexus-snapshots</id>\
       <username>alice</username><password>secret</password></server></servers></settings>"
    );
  }

  #[test]
  fn test_inject_inline_document_stays_inline() {
    let input = "<settings><servers><server><id>a</id></server></servers></settings>";

    let output = inject(input);

    assert_eq!(
      output,
      "<settings><servers><server><id>a</id></server>\
       <server><id>sonatype-nexus-snapshots</id><username>alice</username>\
       <password>secret</password></server></servers></settings>"
    );
  }

  #[test]
  fn test_inject_uses_first_container() {
    let input = r#"<settings>
  <servers><server><id>first</id></server></servers>
  <servers><server><id>second</id></server></servers>
</settings>"#;

    let output = inject(input);

    // The record lands in the first container; the second is untouched.
    assert!(output.contains("<servers><server><id>second</id></server></servers>"));
    let entries = crate::settings::list_servers(&output).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].id.as_deref(), Some(DEFAULT_SERVER_ID));
  }

  #[test]
  fn test_inject_matches_four_space_indent() {
    let input = "<settings>\n    <servers>\n    </servers>\n</settings>";

    let output = inject(input);

    assert!(output.contains("\n        <server>\n"));
    assert!(output.contains("\n            <id>sonatype-nexus-snapshots</id>\n"));
  }

  #[test]
  fn test_inject_escapes_credential_text() {
    let credential = Credential {
      username: "a&b<c>".to_string(),
      password: "p\"q'r".to_string(),
    };

    let output = inject_credentials("<settings/>", &credential, DEFAULT_SERVER_ID).unwrap();

    assert!(output.contains("<username>a&amp;b&lt;c&gt;</username>"));
    assert!(output.contains("<password>p&quot;q&apos;r</password>"));

    // The escaped document still decodes to the original values.
    let entries = crate::settings::list_servers(&output).unwrap();
    assert_eq!(entries[0].username.as_deref(), Some("a&b<c>"));
    assert_eq!(entries[0].password.as_deref(), Some("p\"q'r"));
  }

  #[test]
  fn test_inject_twice_appends_duplicate_records() {
    let once = inject("<settings/>");
    let twice = inject(&once);

    let entries = crate::settings::list_servers(&twice).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entries[1]);
  }

  #[test]
  fn test_inject_custom_server_id() {
    let output = inject_credentials("<settings/>", &credential(), "internal-releases").unwrap();

    assert!(output.contains("<id>internal-releases</id>"));
  }

  #[test]
  fn test_inject_rejects_wrong_root() {
    let result = inject_credentials("<profiles/>", &credential(), DEFAULT_SERVER_ID);
    assert!(matches!(result, Err(SettingsError::MissingSettingsRoot)));
  }

  #[test]
  fn test_inject_rejects_malformed_xml() {
    let result = inject_credentials("<settings><servers>", &credential(), DEFAULT_SERVER_ID);
    assert!(matches!(result, Err(SettingsError::Parse(_))));
  }

  #[test]
  fn test_inject_rejects_empty_input() {
    // roxmltree reports a missing root node as a well-formedness failure.
    let result = inject_credentials("", &credential(), DEFAULT_SERVER_ID);
    assert!(matches!(result, Err(SettingsError::Parse(_))));
  }

  #[test]
  fn test_escape_text_passthrough() {
    assert_eq!(escape_text("plain-value_123"), "plain-value_123");
  }

  #[test]
  fn test_source_tag_name_variants() {
    assert_eq!(source_tag_name("<servers/>"), "servers");
    assert_eq!(source_tag_name("<servers attr=\"x\"/>"), "servers");
    assert_eq!(source_tag_name("<m:servers/>"), "m:servers");
  }
}
