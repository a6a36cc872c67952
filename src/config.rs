//! Server-type configuration: which framework convention is in effect.
//!
//! The dispatch adapter has to know which framework's sending idiom the
//! caller's handle speaks. That is deployment knowledge, not code
//! knowledge, so it comes from one small configuration value consulted in
//! two places, in order:
//!
//! | Order | Source | Where the value lives |
//! |---|---|---|
//! | 1 | project manifest | `Cargo.toml` → `[package.metadata.canned]` → `server-type` |
//! | 2 | dedicated file | `canned.config.json` → top-level `"serverType"` |
//!
//! The first source that parses and carries a non-empty value wins; a
//! source that is missing or unparseable is skipped, never fatal on its
//! own. When no source yields a value the failure distinguishes "nothing
//! to read at all" ([`Error::ConfigurationNotFound`]) from "a source was
//! there but said nothing" ([`Error::ServerTypeNotDefined`]). There is no
//! silent default framework.
//!
//! ```toml
//! # Cargo.toml
//! [package.metadata.canned]
//! server-type = "express"
//! ```
//!
//! ```json
//! // canned.config.json
//! { "serverType": "express" }
//! ```
//!
//! The resolved kind is memoized process-wide on first success — the
//! deployment files are immutable for the process lifetime, so every
//! dispatch after the first is a lock-free-in-spirit read. Tests (and
//! callers that know better) bypass the files entirely with
//! [`set_server_kind`] / [`reset_server_kind`].

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Error;

const MANIFEST_FILE: &str = "Cargo.toml";
const DEDICATED_FILE: &str = "canned.config.json";

// ── ServerKind ────────────────────────────────────────────────────────────────

/// The five server-framework conventions a handle can speak.
///
/// Parsed from the configuration strings `"http"`, `"express"`,
/// `"fastify"`, `"koa"`, `"hapi"` — case-sensitive, exactly as written.
/// Anything else is [`Error::UnsupportedServerType`] with the offending
/// value preserved.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServerKind {
    /// Raw socket-level HTTP: `write_head` + `end`.
    Http,
    /// Express convention: `status` + `json`.
    Express,
    /// Fastify convention: `code` + `send`.
    Fastify,
    /// Koa convention: assign `status` and `body` fields.
    Koa,
    /// Hapi convention: `response` + `code`.
    Hapi,
}

impl ServerKind {
    /// Returns the configuration spelling (e.g. `"express"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http    => "http",
            Self::Express => "express",
            Self::Fastify => "fastify",
            Self::Koa     => "koa",
            Self::Hapi    => "hapi",
        }
    }
}

impl FromStr for ServerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http"    => Ok(Self::Http),
            "express" => Ok(Self::Express),
            "fastify" => Ok(Self::Fastify),
            "koa"     => Ok(Self::Koa),
            "hapi"    => Ok(Self::Hapi),
            other     => Err(Error::UnsupportedServerType(other.to_owned())),
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Configuration sources ─────────────────────────────────────────────────────

/// The two file sources consulted for the server type, in order.
///
/// [`ConfigSources::current_dir`] names them relative to the process
/// working directory, which is where a service launched from its project
/// root finds them. Point [`ConfigSources::from_dir`] somewhere else for
/// tests or out-of-tree deployments.
#[derive(Clone, Debug)]
pub struct ConfigSources {
    manifest: PathBuf,
    dedicated: PathBuf,
}

/// What one configuration source had to say.
enum SourceRead {
    /// Parsed and carried a non-empty server type.
    Value(String),
    /// Parsed, but the server-type field was absent or empty.
    Missing,
    /// Could not be read or parsed; skipped.
    Unusable,
}

impl ConfigSources {
    /// Sources relative to the process working directory.
    ///
    /// Paths are resolved against the working directory at each read, not
    /// captured at construction time.
    pub fn current_dir() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            dedicated: PathBuf::from(DEDICATED_FILE),
        }
    }

    /// Sources rooted at `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            manifest: dir.join(MANIFEST_FILE),
            dedicated: dir.join(DEDICATED_FILE),
        }
    }

    /// Resolves the configured server kind.
    ///
    /// The manifest is consulted first; the dedicated file is always tried
    /// before giving up. A winning value is validated immediately — an
    /// unsupported string in the manifest fails without falling through to
    /// the dedicated file, because the manifest *did* answer.
    pub fn resolve(&self) -> Result<ServerKind, Error> {
        let mut located = false;

        match self.manifest_server_type() {
            SourceRead::Value(raw) => {
                let kind = raw.parse::<ServerKind>()?;
                debug!(%kind, source = "manifest", "resolved server type");
                return Ok(kind);
            }
            SourceRead::Missing => located = true,
            SourceRead::Unusable => {}
        }

        match self.dedicated_server_type() {
            SourceRead::Value(raw) => {
                let kind = raw.parse::<ServerKind>()?;
                debug!(%kind, source = "dedicated", "resolved server type");
                return Ok(kind);
            }
            SourceRead::Missing => located = true,
            SourceRead::Unusable => {}
        }

        if located {
            Err(Error::ServerTypeNotDefined)
        } else {
            Err(Error::ConfigurationNotFound)
        }
    }

    /// `Cargo.toml` → `[package.metadata.canned]` → `server-type`.
    ///
    /// The field sits under `package.metadata` because cargo rejects
    /// unknown top-level manifest keys; the metadata table is the
    /// sanctioned spot for tool-specific values.
    fn manifest_server_type(&self) -> SourceRead {
        let Some(text) = read_source(&self.manifest) else {
            return SourceRead::Unusable;
        };
        let doc: toml::Value = match text.parse() {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %self.manifest.display(), "skipping unparseable manifest: {e}");
                return SourceRead::Unusable;
            }
        };

        let value = doc
            .get("package")
            .and_then(|v| v.get("metadata"))
            .and_then(|v| v.get("canned"))
            .and_then(|v| v.get("server-type"))
            .and_then(|v| v.as_str());

        match value {
            Some(s) if !s.is_empty() => SourceRead::Value(s.to_owned()),
            _ => SourceRead::Missing,
        }
    }

    /// `canned.config.json` → top-level `"serverType"`.
    fn dedicated_server_type(&self) -> SourceRead {
        #[derive(Deserialize)]
        struct ConfigFile {
            #[serde(rename = "serverType")]
            server_type: Option<String>,
        }

        let Some(text) = read_source(&self.dedicated) else {
            return SourceRead::Unusable;
        };
        let parsed: ConfigFile = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(path = %self.dedicated.display(), "skipping unparseable config file: {e}");
                return SourceRead::Unusable;
            }
        };

        match parsed.server_type {
            Some(s) if !s.is_empty() => SourceRead::Value(s),
            _ => SourceRead::Missing,
        }
    }
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self::current_dir()
    }
}

/// Reads one source file. A missing file is the normal quiet case; any
/// other I/O failure is worth a warning because the file exists but the
/// process cannot use it.
fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), "skipping unreadable configuration source: {e}");
            None
        }
    }
}

// ── Process-wide memoized kind ────────────────────────────────────────────────

static ACTIVE: RwLock<Option<ServerKind>> = RwLock::new(None);

/// Returns the active server kind, resolving and memoizing it on first use.
///
/// Resolution failures are not cached: a deployment that gains its
/// configuration file later succeeds on the next call without a restart.
/// Concurrent first calls may race to resolve; they read the same files
/// and the first store wins.
pub fn active_server_kind() -> Result<ServerKind, Error> {
    if let Some(kind) = *ACTIVE.read().unwrap_or_else(PoisonError::into_inner) {
        return Ok(kind);
    }

    let kind = ConfigSources::current_dir().resolve()?;

    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = *slot {
        return Ok(existing);
    }
    *slot = Some(kind);
    debug!(%kind, "memoized active server type");
    Ok(kind)
}

/// Overrides the active server kind for this process, skipping the file
/// sources entirely. Meant for tests and for callers that already know
/// their framework; stays in effect until [`reset_server_kind`].
pub fn set_server_kind(kind: ServerKind) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Some(kind);
}

/// Clears the memoized server kind so the next dispatch resolves from the
/// file sources again.
pub fn reset_server_kind() {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = None;
}

// ── Test support ──────────────────────────────────────────────────────────────

/// Serializes tests that touch the process-wide memoized kind. The unit
/// test harness runs tests concurrently in one process; anything calling
/// [`set_server_kind`] / [`reset_server_kind`] must hold this first.
#[cfg(test)]
pub(crate) fn cache_test_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
    GUARD.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    /// Restores the process working directory on drop, so a failing
    /// assertion cannot leak a changed directory into the other guarded
    /// tests.
    struct CwdGuard {
        previous: PathBuf,
    }

    impl CwdGuard {
        fn change_to(dir: &Path) -> Self {
            let previous = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir).unwrap();
            Self { previous }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.previous);
        }
    }

    #[test]
    fn parses_the_five_recognized_kinds() {
        assert_eq!("http".parse::<ServerKind>().unwrap(), ServerKind::Http);
        assert_eq!("express".parse::<ServerKind>().unwrap(), ServerKind::Express);
        assert_eq!("fastify".parse::<ServerKind>().unwrap(), ServerKind::Fastify);
        assert_eq!("koa".parse::<ServerKind>().unwrap(), ServerKind::Koa);
        assert_eq!("hapi".parse::<ServerKind>().unwrap(), ServerKind::Hapi);
    }

    #[test]
    fn rejects_unknown_kind_with_the_value_preserved() {
        let err = "carrier-pigeon".parse::<ServerKind>().unwrap_err();
        match err {
            Error::UnsupportedServerType(value) => assert_eq!(value, "carrier-pigeon"),
            other => panic!("wrong error: {other}"),
        }
    }

    #[test]
    fn kind_spelling_is_case_sensitive() {
        assert!("Express".parse::<ServerKind>().is_err());
        assert!("HTTP".parse::<ServerKind>().is_err());
    }

    #[test]
    fn empty_dir_is_configuration_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigSources::from_dir(dir.path()).resolve().unwrap_err();
        assert!(matches!(err, Error::ConfigurationNotFound));
    }

    #[test]
    fn manifest_metadata_wins() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "[package]\nname = \"demo\"\n\n[package.metadata.canned]\nserver-type = \"fastify\"\n",
        );
        // Dedicated file disagrees; the manifest answered first.
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "koa" }"#);

        let kind = ConfigSources::from_dir(dir.path()).resolve().unwrap();
        assert_eq!(kind, ServerKind::Fastify);
    }

    #[test]
    fn dedicated_file_fills_in_when_manifest_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, "[package]\nname = \"demo\"\n");
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "hapi" }"#);

        let kind = ConfigSources::from_dir(dir.path()).resolve().unwrap();
        assert_eq!(kind, ServerKind::Hapi);
    }

    #[test]
    fn unparseable_manifest_falls_through_to_dedicated_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, "[package\nthis is not toml");
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "express" }"#);

        let kind = ConfigSources::from_dir(dir.path()).resolve().unwrap();
        assert_eq!(kind, ServerKind::Express);
    }

    #[test]
    fn empty_server_type_falls_through_to_dedicated_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "[package.metadata.canned]\nserver-type = \"\"\n",
        );
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "http" }"#);

        let kind = ConfigSources::from_dir(dir.path()).resolve().unwrap();
        assert_eq!(kind, ServerKind::Http);
    }

    #[test]
    fn located_but_silent_sources_are_server_type_not_defined() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, "[package]\nname = \"demo\"\n");
        write(dir.path(), DEDICATED_FILE, r#"{ "note": "no server type here" }"#);

        let err = ConfigSources::from_dir(dir.path()).resolve().unwrap_err();
        assert!(matches!(err, Error::ServerTypeNotDefined));
    }

    #[test]
    fn only_unparseable_sources_is_configuration_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE, "not toml at all [");
        write(dir.path(), DEDICATED_FILE, "{ not json");

        let err = ConfigSources::from_dir(dir.path()).resolve().unwrap_err();
        assert!(matches!(err, Error::ConfigurationNotFound));
    }

    #[test]
    fn winning_value_is_validated_without_fallback() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE,
            "[package.metadata.canned]\nserver-type = \"carrier-pigeon\"\n",
        );
        // A perfectly good dedicated file must NOT rescue a bad manifest
        // value: the manifest answered, and its answer is wrong.
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "express" }"#);

        let err = ConfigSources::from_dir(dir.path()).resolve().unwrap_err();
        match err {
            Error::UnsupportedServerType(value) => assert_eq!(value, "carrier-pigeon"),
            other => panic!("wrong error: {other}"),
        }
    }

    #[test]
    fn override_hook_bypasses_the_files() {
        let _guard = cache_test_guard();

        set_server_kind(ServerKind::Koa);
        assert_eq!(active_server_kind().unwrap(), ServerKind::Koa);

        set_server_kind(ServerKind::Hapi);
        assert_eq!(active_server_kind().unwrap(), ServerKind::Hapi);

        reset_server_kind();
    }

    #[test]
    fn first_successful_resolution_is_memoized() {
        let _guard = cache_test_guard();
        reset_server_kind();

        let dir = tempfile::tempdir().unwrap();
        let _cwd = CwdGuard::change_to(dir.path());

        // A failure is not cached: the next call consults the files again.
        assert!(matches!(
            active_server_kind().unwrap_err(),
            Error::ConfigurationNotFound,
        ));
        write(dir.path(), DEDICATED_FILE, r#"{ "serverType": "fastify" }"#);
        assert_eq!(active_server_kind().unwrap(), ServerKind::Fastify);

        // A success is: the kind survives the file disappearing.
        fs::remove_file(dir.path().join(DEDICATED_FILE)).unwrap();
        assert_eq!(active_server_kind().unwrap(), ServerKind::Fastify);

        reset_server_kind();
    }

    #[test]
    fn reset_hook_returns_to_file_resolution() {
        let _guard = cache_test_guard();

        set_server_kind(ServerKind::Express);
        reset_server_kind();

        // The test process runs at the crate root: our own Cargo.toml is
        // located but carries no [package.metadata.canned] table, and no
        // dedicated file exists.
        let err = active_server_kind().unwrap_err();
        assert!(matches!(err, Error::ServerTypeNotDefined));

        reset_server_kind();
    }
}
