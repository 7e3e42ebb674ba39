//! Test fixtures for Maven settings documents
//!
//! This module provides realistic sample documents matching what a developer
//! workstation or CI image would actually carry in `~/.m2/settings.xml`.

/// A populated settings document: namespace declarations, a mirror, one
/// existing server record, and a profile.
pub fn maven_settings() -> &'static str {
  r#"<?xml version="1.0" encoding="UTF-8"?>
<settings xmlns="http://maven.apache.org/SETTINGS/1.0.0"
          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
          xsi:schemaLocation="http://maven.apache.org/SETTINGS/1.0.0 https://maven.apache.org/xsd/settings-1.0.0.xsd">
  <localRepository>${user.home}/.m2/repository</localRepository>
  <mirrors>
    <mirror>
      <id>corp-mirror</id>
      <mirrorOf>central</mirrorOf>
      <url>https://repo.example.com/maven2</url>
    </mirror>
  </mirrors>
  <servers>
    <server>
      <id>corp-mirror</id>
      <username>mirror-bot</username>
      <password>mirror-pass</password>
    </server>
  </servers>
  <profiles>
    <profile>
      <id>ci</id>
      <properties>
        <maven.test.skip>true</maven.test.skip>
      </properties>
    </profile>
  </profiles>
</settings>"#
}

/// The smallest well-formed settings document.
pub fn minimal_settings() -> &'static str {
  "<settings/>"
}

/// A document with content but no `<servers>` container.
pub fn settings_without_servers() -> &'static str {
  r#"<settings>
  <mirrors>
    <mirror>
      <id>corp-mirror</id>
      <url>https://repo.example.com/maven2</url>
    </mirror>
  </mirrors>
</settings>"#
}

/// Well-formed XML whose root is not `<settings>`.
pub fn wrong_root() -> &'static str {
  "<profiles>\n  <profile><id>ci</id></profile>\n</profiles>"
}

/// Not well-formed at all.
pub fn malformed() -> &'static str {
  "<settings>\n  <servers>\n"
}
