//! Dashboard panels built from a status snapshot.
//!
//! Building panels is a pure mapping: it reads the snapshot and the accent
//! color, never the terminal. The set is fixed: hostname, status, address,
//! version, MOTD, player list, and an icon panel when an icon is available.

use std::cell::OnceCell;

use ratatui::style::Color;

use crate::icon::{DecodedImage, Rgb};
use crate::layout::LayoutNode;
use crate::status::StatusSnapshot;
use crate::util::format_cache_time;

use super::style::{Theme, nearest_ansi16};

/// Slot identifiers used as layout leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    Icon,
    Hostname,
    Status,
    Address,
    Version,
    Motd,
    Players,
}

/// Inner spacing between a panel's border and its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u16,
    pub left: u16,
}

impl Padding {
    pub const fn new(top: u16, left: u16) -> Self {
        Self { top, left }
    }
}

/// Single block of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    pub title: String,
    pub text: String,
    pub fg: Color,
    pub padding: Padding,
}

/// Scrollable list of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPanel {
    pub title: String,
    pub rows: Vec<String>,
    pub fg: Color,
    pub padding: Padding,
}

/// Bitmap panel; `fg` tints the border.
#[derive(Debug, Clone)]
pub struct ImagePanel {
    pub title: String,
    pub fg: Color,
    pub padding: Padding,
    image: OnceCell<DecodedImage>,
}

impl ImagePanel {
    pub fn new(title: impl Into<String>, fg: Color) -> Self {
        Self {
            title: title.into(),
            fg,
            padding: Padding::default(),
            image: OnceCell::new(),
        }
    }

    /// Attaches the bitmap. Only the first call has an effect; returns
    /// `false` if an image was already set.
    pub fn set_image(&mut self, image: DecodedImage) -> bool {
        self.image.set(image).is_ok()
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.get()
    }
}

/// One dashboard panel.
#[derive(Debug, Clone)]
pub enum Panel {
    Image(ImagePanel),
    Text(TextPanel),
    List(ListPanel),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Image(p) => &p.title,
            Panel::Text(p) => &p.title,
            Panel::List(p) => &p.title,
        }
    }

    pub fn fg(&self) -> Color {
        match self {
            Panel::Image(p) => p.fg,
            Panel::Text(p) => p.fg,
            Panel::List(p) => p.fg,
        }
    }

    pub fn padding(&self) -> Padding {
        match self {
            Panel::Image(p) => p.padding,
            Panel::Text(p) => p.padding,
            Panel::List(p) => p.padding,
        }
    }
}

/// The fixed set of panels shown by the dashboard.
#[derive(Debug, Clone)]
pub struct PanelSet {
    panels: Vec<(PanelId, Panel)>,
}

impl PanelSet {
    /// Maps a snapshot to panels.
    ///
    /// `accent` is the icon's dominant color; the icon panel exists only when
    /// it is `Some`, and its border uses the nearest ANSI palette color.
    pub fn build(snapshot: &StatusSnapshot, accent: Option<Rgb>) -> Self {
        let mut panels = Vec::with_capacity(7);

        if let Some(accent) = accent {
            panels.push((
                PanelId::Icon,
                Panel::Image(ImagePanel::new("Icon", nearest_ansi16(accent))),
            ));
        }

        let mut hostname = snapshot.display_name().to_string();
        if let Some(cached) = format_cache_time(snapshot.debug.cachetime) {
            hostname.push_str(&format!("\ncached {}", cached));
        }
        panels.push((
            PanelId::Hostname,
            text("Server", hostname, Theme::HOSTNAME, Padding::new(0, 1)),
        ));

        let (status, status_fg) = if snapshot.online {
            ("Online", Theme::ONLINE)
        } else {
            ("Offline", Theme::OFFLINE)
        };
        panels.push((
            PanelId::Status,
            text("Status", status.to_string(), status_fg, Padding::new(0, 1)),
        ));

        panels.push((
            PanelId::Address,
            text("Address", snapshot.address(), Theme::FG, Padding::new(0, 1)),
        ));

        panels.push((
            PanelId::Version,
            text("Version", version_text(snapshot), Theme::FG, Padding::new(0, 1)),
        ));

        panels.push((
            PanelId::Motd,
            text("MOTD", snapshot.motd_text(), Theme::FG, Padding::new(1, 1)),
        ));

        panels.push((
            PanelId::Players,
            Panel::List(ListPanel {
                title: format!(
                    "Players {}/{}",
                    snapshot.players.online, snapshot.players.max
                ),
                rows: snapshot.player_rows(),
                fg: Theme::FG,
                padding: Padding::default(),
            }),
        ));

        Self { panels }
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|(i, _)| *i == id).map(|(_, p)| p)
    }

    /// Text content of a text panel.
    pub fn text(&self, id: PanelId) -> Option<&str> {
        match self.get(id)? {
            Panel::Text(p) => Some(&p.text),
            _ => None,
        }
    }

    pub fn players(&self) -> Option<&ListPanel> {
        match self.get(PanelId::Players)? {
            Panel::List(p) => Some(p),
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<&ImagePanel> {
        match self.get(PanelId::Icon)? {
            Panel::Image(p) => Some(p),
            _ => None,
        }
    }

    pub fn icon_mut(&mut self) -> Option<&mut ImagePanel> {
        self.panels
            .iter_mut()
            .find(|(id, _)| *id == PanelId::Icon)
            .and_then(|(_, p)| match p {
                Panel::Image(p) => Some(p),
                _ => None,
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.panels.iter().map(|(id, _)| *id)
    }

    /// Grid for this panel set.
    ///
    /// Top half: icon (when present) beside the four info panels.
    /// Bottom half: MOTD beside the player list.
    pub fn layout(&self) -> LayoutNode<PanelId> {
        let info = LayoutNode::rows(vec![
            (1.0, LayoutNode::leaf(PanelId::Hostname)),
            (1.0, LayoutNode::leaf(PanelId::Status)),
            (1.0, LayoutNode::leaf(PanelId::Address)),
            (1.0, LayoutNode::leaf(PanelId::Version)),
        ]);

        let top = if self.get(PanelId::Icon).is_some() {
            LayoutNode::columns(vec![
                (1.0 / 3.0, LayoutNode::leaf(PanelId::Icon)),
                (2.0 / 3.0, info),
            ])
        } else {
            info
        };

        let bottom = LayoutNode::columns(vec![
            (0.6, LayoutNode::leaf(PanelId::Motd)),
            (0.4, LayoutNode::leaf(PanelId::Players)),
        ]);

        LayoutNode::rows(vec![(1.0 / 2.0, top), (1.0 / 2.0, bottom)])
    }
}

fn text(title: &str, text: String, fg: Color, padding: Padding) -> Panel {
    Panel::Text(TextPanel {
        title: title.to_string(),
        text,
        fg,
        padding,
    })
}

fn version_text(snapshot: &StatusSnapshot) -> String {
    let mut lines = vec![snapshot.version.clone()];
    if !snapshot.software.is_empty() && !snapshot.version.contains(&snapshot.software) {
        lines.push(format!("Software: {}", snapshot.software));
    }
    if !snapshot.protocol.name.is_empty() && snapshot.protocol.name != snapshot.version {
        lines.push(format!("Protocol: {}", snapshot.protocol.name));
    }
    lines.join("\n")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::status::{Motd, Player, Players};

    pub(crate) fn example_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            online: true,
            host: "mc.example.com".to_string(),
            port: None,
            version: "1.20.1".to_string(),
            motd: Motd {
                raw: vec!["§aWelcome".to_string()],
                clean: vec!["Welcome".to_string()],
            },
            players: Players {
                online: 3,
                max: 20,
                list: ["Alice", "Bob", "Carol"]
                    .iter()
                    .map(|name| Player {
                        name: name.to_string(),
                        id: String::new(),
                    })
                    .collect(),
            },
            ..StatusSnapshot::default()
        }
    }

    #[test]
    fn test_example_snapshot_panels() {
        let set = PanelSet::build(&example_snapshot(), None);

        assert_eq!(set.text(PanelId::Address), Some("mc.example.com:25565"));
        assert_eq!(set.text(PanelId::Status), Some("Online"));
        assert_eq!(set.text(PanelId::Version), Some("1.20.1"));
        assert_eq!(set.text(PanelId::Motd), Some("Welcome"));
        assert_eq!(set.text(PanelId::Hostname), Some("mc.example.com"));

        let players = set.players().unwrap();
        assert_eq!(players.title, "Players 3/20");
        assert_eq!(players.rows, vec![" - Alice", " - Bob", " - Carol"]);

        assert!(set.icon().is_none());
        assert!(!set.layout().leaves().contains(&&PanelId::Icon));
    }

    #[test]
    fn test_status_colors() {
        let mut snapshot = example_snapshot();
        let online = PanelSet::build(&snapshot, None);
        assert_eq!(online.get(PanelId::Status).unwrap().fg(), Theme::ONLINE);

        snapshot.online = false;
        let offline = PanelSet::build(&snapshot, None);
        assert_eq!(offline.text(PanelId::Status), Some("Offline"));
        assert_eq!(offline.get(PanelId::Status).unwrap().fg(), Theme::OFFLINE);
        assert_ne!(Theme::ONLINE, Theme::OFFLINE);
    }

    #[test]
    fn test_icon_panel_tinted_with_palette_accent() {
        let set = PanelSet::build(&example_snapshot(), Some(Rgb::new(250, 12, 8)));
        let icon = set.icon().unwrap();
        assert_eq!(icon.fg, Color::LightRed);
        assert!(icon.image().is_none());
        assert_eq!(set.layout().leaves()[0], &PanelId::Icon);
    }

    #[test]
    fn test_image_is_set_once() {
        let mut set = PanelSet::build(&example_snapshot(), Some(Rgb::new(0, 0, 200)));
        let first = DecodedImage::from_pixels(1, 1, vec![Rgb::new(1, 1, 1)]);
        let second = DecodedImage::from_pixels(1, 1, vec![Rgb::new(2, 2, 2)]);

        let panel = set.icon_mut().unwrap();
        assert!(panel.set_image(first.clone()));
        assert!(!panel.set_image(second));
        assert_eq!(set.icon().unwrap().image(), Some(&first));
    }

    #[test]
    fn test_empty_lists_and_motd() {
        let snapshot = StatusSnapshot {
            host: "10.0.0.1".to_string(),
            port: Some("19132".to_string()),
            ..StatusSnapshot::default()
        };
        let set = PanelSet::build(&snapshot, None);
        assert_eq!(set.text(PanelId::Motd), Some(""));
        assert!(set.players().unwrap().rows.is_empty());
        assert_eq!(set.players().unwrap().title, "Players 0/0");
        assert_eq!(set.text(PanelId::Address), Some("10.0.0.1:19132"));
    }

    #[test]
    fn test_player_rows_preserve_order() {
        let mut snapshot = example_snapshot();
        snapshot.players.list.reverse();
        let set = PanelSet::build(&snapshot, None);
        assert_eq!(
            set.players().unwrap().rows,
            vec![" - Carol", " - Bob", " - Alice"]
        );
    }

    #[test]
    fn test_version_details() {
        let mut snapshot = example_snapshot();
        snapshot.software = "Paper".to_string();
        snapshot.protocol.name = "1.20.1".to_string();
        let set = PanelSet::build(&snapshot, None);
        assert_eq!(set.text(PanelId::Version), Some("1.20.1\nSoftware: Paper"));
    }

    #[test]
    fn test_hostname_shows_cache_time() {
        let mut snapshot = example_snapshot();
        snapshot.hostname = "Example Network".to_string();
        snapshot.debug.cachetime = 1_700_000_000;
        let set = PanelSet::build(&snapshot, None);
        assert_eq!(
            set.text(PanelId::Hostname),
            Some("Example Network\ncached 2023-11-14 22:13:20 UTC")
        );
    }

    #[test]
    fn test_layout_covers_every_panel() {
        let set = PanelSet::build(&example_snapshot(), Some(Rgb::new(0, 200, 0)));
        let mut from_layout: Vec<PanelId> = set.layout().leaves().into_iter().copied().collect();
        let mut from_set: Vec<PanelId> = set.ids().collect();
        from_layout.sort();
        from_set.sort();
        assert_eq!(from_layout, from_set);
    }
}
