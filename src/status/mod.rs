//! Server status snapshot model.
//!
//! A `StatusSnapshot` is one immutable read of a remote Minecraft server's
//! status, in the shape returned by the mcsrvstat.us v3 API. Fetching the
//! document is the caller's job; this module only turns the JSON into a typed
//! value the dashboard can read. Every field is optional and `null` reads as
//! the field default, so that offline and partial responses still load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

/// Port shown when the snapshot does not carry one.
pub const DEFAULT_PORT: &str = "25565";

/// Error types that can occur while loading a snapshot.
#[derive(Debug, Clone)]
pub enum SnapshotError {
    /// I/O error while reading the document.
    Io(String),
    /// Document is not valid status JSON.
    Parse(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io(msg) => write!(f, "I/O error: {}", msg),
            SnapshotError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// One player entry from the server's sample list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, rename = "uuid", alias = "id", deserialize_with = "null_default")]
    pub id: String,
}

/// Player counts and the (possibly truncated) sample list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Players {
    #[serde(deserialize_with = "null_default")]
    pub online: u32,
    #[serde(deserialize_with = "null_default")]
    pub max: u32,
    #[serde(deserialize_with = "null_default")]
    pub list: Vec<Player>,
}

/// Message of the day in its different encodings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Motd {
    /// Lines with formatting codes.
    #[serde(deserialize_with = "null_default")]
    pub raw: Vec<String>,
    /// Lines with formatting codes stripped.
    #[serde(deserialize_with = "null_default")]
    pub clean: Vec<String>,
}

/// Protocol information reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Protocol {
    #[serde(deserialize_with = "null_default")]
    pub version: i32,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// Map name (mostly present for Bedrock servers).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapName {
    #[serde(deserialize_with = "null_default")]
    pub raw: String,
    #[serde(deserialize_with = "null_default")]
    pub clean: String,
}

/// Name/version pair for plugins and mods.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Extension {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub version: String,
}

/// Subset of the API's debug block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugInfo {
    #[serde(deserialize_with = "null_default")]
    pub cachehit: bool,
    /// Unix timestamp at which the API cached this status (0 = unknown).
    #[serde(deserialize_with = "null_default")]
    pub cachetime: i64,
}

/// One status read of a server.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    #[serde(deserialize_with = "null_default")]
    pub online: bool,
    /// Address the status was read from (`ip` in the API document).
    #[serde(rename = "ip", alias = "host", deserialize_with = "null_default")]
    pub host: String,
    /// Port as reported; the API sends a number, older dumps a string.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    #[serde(deserialize_with = "null_default")]
    pub software: String,
    #[serde(deserialize_with = "null_default")]
    pub protocol: Protocol,
    #[serde(deserialize_with = "null_default")]
    pub gamemode: String,
    #[serde(deserialize_with = "null_default")]
    pub map: MapName,
    #[serde(deserialize_with = "null_default")]
    pub motd: Motd,
    #[serde(deserialize_with = "null_default")]
    pub players: Players,
    #[serde(deserialize_with = "null_default")]
    pub plugins: Vec<Extension>,
    #[serde(deserialize_with = "null_default")]
    pub mods: Vec<Extension>,
    #[serde(deserialize_with = "null_default")]
    pub debug: DebugInfo,
    /// Data URI of the server icon (`data:image/png;base64,...`), may be empty.
    #[serde(deserialize_with = "null_default")]
    pub icon: String,
}

impl StatusSnapshot {
    /// Parses a snapshot from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Parses a snapshot from any reader (e.g. stdin).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        serde_json::from_reader(reader).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Loads a snapshot previously saved as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SnapshotError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns `host:port`, falling back to the default Java edition port.
    pub fn address(&self) -> String {
        let port = self
            .port
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PORT);
        format!("{}:{}", self.host, port)
    }

    /// Hostname if the server reported one, the queried address otherwise.
    pub fn display_name(&self) -> &str {
        if self.hostname.is_empty() {
            &self.host
        } else {
            &self.hostname
        }
    }

    /// Clean MOTD lines joined with line breaks.
    pub fn motd_text(&self) -> String {
        self.motd.clean.join("\n")
    }

    /// Player list rows in server order, one `" - <name>"` entry per player.
    pub fn player_rows(&self) -> Vec<String> {
        self.players
            .list
            .iter()
            .map(|p| format!(" - {}", p.name))
            .collect()
    }

    /// Returns true if the snapshot carries an icon payload.
    pub fn has_icon(&self) -> bool {
        !self.icon.trim().is_empty()
    }
}

/// Reads `null` as the field's default value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accepts `"25565"`, `25565`, `""` or `null`.
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPort {
        Number(u64),
        Text(String),
    }

    let raw = Option::<RawPort>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawPort::Number(n)) => Some(n.to_string()),
        Some(RawPort::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    const ONLINE_JSON: &str = r#"{
        "online": true,
        "ip": "203.0.113.7",
        "port": 25566,
        "hostname": "mc.example.com",
        "version": "Paper 1.20.1",
        "software": "Paper",
        "protocol": { "version": 763, "name": "1.20.1" },
        "motd": {
            "raw": ["§aWelcome", "§bHave fun"],
            "clean": ["Welcome", "Have fun"],
            "html": ["<span>Welcome</span>", "<span>Have fun</span>"]
        },
        "players": {
            "online": 2,
            "max": 20,
            "list": [
                { "name": "Alice", "uuid": "a-1" },
                { "name": "Bob", "uuid": "b-2" }
            ]
        },
        "debug": { "ping": true, "cachehit": true, "cachetime": 1700000000 },
        "icon": "data:image/png;base64,AAAA"
    }"#;

    #[test]
    fn test_parse_online_document() {
        let s = StatusSnapshot::from_json(ONLINE_JSON).unwrap();
        assert!(s.online);
        assert_eq!(s.host, "203.0.113.7");
        assert_eq!(s.port.as_deref(), Some("25566"));
        assert_eq!(s.display_name(), "mc.example.com");
        assert_eq!(s.protocol.name, "1.20.1");
        assert_eq!(s.players.online, 2);
        assert_eq!(s.players.list[1].id, "b-2");
        assert_eq!(s.debug.cachetime, 1_700_000_000);
        assert!(s.has_icon());
    }

    #[test]
    fn test_parse_offline_document() {
        let s = StatusSnapshot::from_json(
            r#"{"online": false, "ip": "10.0.0.1", "port": "", "debug": {}}"#,
        )
        .unwrap();
        assert!(!s.online);
        assert_eq!(s.port, None);
        assert!(s.players.list.is_empty());
        assert!(s.motd.clean.is_empty());
        assert!(!s.has_icon());
        assert_eq!(s.display_name(), "10.0.0.1");
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let s = StatusSnapshot::from_json(
            r#"{
                "online": null,
                "ip": "mc.example.com",
                "hostname": null,
                "version": null,
                "software": null,
                "icon": null,
                "motd": null,
                "players": { "online": null, "list": null },
                "plugins": null,
                "mods": null,
                "protocol": { "name": null },
                "debug": { "cachetime": null }
            }"#,
        )
        .unwrap();
        assert!(!s.online);
        assert_eq!(s.icon, "");
        assert!(!s.has_icon());
        assert!(s.players.list.is_empty());
        assert_eq!(s.players.online, 0);
        assert!(s.motd.clean.is_empty());
        assert!(s.plugins.is_empty() && s.mods.is_empty());
        assert_eq!(s.display_name(), "mc.example.com");
        assert_eq!(s.debug.cachetime, 0);

        let players = StatusSnapshot::from_json(
            r#"{"players": {"list": [{"name": "Alice", "uuid": null}, {"name": null}]}}"#,
        )
        .unwrap();
        assert_eq!(players.player_rows(), vec![" - Alice", " - "]);
    }

    #[test]
    fn test_host_alias_and_id_alias() {
        let s = StatusSnapshot::from_json(
            r#"{"host": "mc.example.com", "players": {"list": [{"name": "Carol", "id": "c-3"}]}}"#,
        )
        .unwrap();
        assert_eq!(s.host, "mc.example.com");
        assert_eq!(s.players.list[0].id, "c-3");
    }

    #[test]
    fn test_address_defaults_port() {
        let mut s = StatusSnapshot {
            host: "mc.example.com".to_string(),
            ..StatusSnapshot::default()
        };
        assert_eq!(s.address(), "mc.example.com:25565");

        s.port = Some("  ".to_string());
        assert_eq!(s.address(), "mc.example.com:25565");

        s.port = Some("19132".to_string());
        assert_eq!(s.address(), "mc.example.com:19132");
    }

    #[test]
    fn test_motd_and_player_rows() {
        let s = StatusSnapshot::from_json(ONLINE_JSON).unwrap();
        assert_eq!(s.motd_text(), "Welcome\nHave fun");
        assert_eq!(s.player_rows(), vec![" - Alice", " - Bob"]);
    }

    #[test]
    fn test_parse_error() {
        let err = StatusSnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONLINE_JSON.as_bytes()).unwrap();

        let s = StatusSnapshot::load(file.path()).unwrap();
        assert_eq!(s.hostname, "mc.example.com");

        let missing = StatusSnapshot::load(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, SnapshotError::Io(_)));
    }
}
