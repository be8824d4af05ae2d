//! Desktop configuration
//!
//! Everything that varies between deployments lives here: breakpoints,
//! margins, timer lengths and the catalogues of windows, icons, launchers,
//! dock links and gallery images. [`DesktopConfig::default`] is the
//! portfolio the desktop ships with; hosts may load a replacement from JSON.

use serde::{Deserialize, Serialize};

use crate::effect::ToneSpec;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::types::{IconId, Millis, WindowId};

/// Layout constants shared by the window and icon controllers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports at or below this width use the mobile breakpoint
    pub mobile_max_width: f32,
    /// Viewports at or below this width (and above mobile) use the tablet breakpoint
    pub tablet_max_width: f32,
    /// Viewports at or below this width get the small icon scale
    pub small_icon_max_width: f32,
    /// Gap kept between an opened or recentered window and the viewport edge
    pub edge_margin: f32,
    /// Smallest viewport dimension assumed when centering a window on open
    pub open_viewport_floor: f32,
    /// Viewport used when the host cannot measure one
    pub fallback_viewport: Size,
    /// Floor enforced by the resize surface
    pub min_window_size: Size,
    /// Amount subtracted from the viewport for mobile window sizes
    pub mobile_inset: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
            tablet_max_width: 1024.0,
            small_icon_max_width: 480.0,
            edge_margin: 20.0,
            open_viewport_floor: 320.0,
            fallback_viewport: Size::new(800.0, 600.0),
            min_window_size: Size::new(300.0, 200.0),
            mobile_inset: Size::new(40.0, 100.0),
        }
    }
}

/// Timer lengths for the explicit timed states
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Carousel image swap
    pub transition_ms: Millis,
    /// Carousel fade-out before the overlay is torn down
    pub close_ms: Millis,
    /// Trash-can wiggle and full-icon display
    pub trash_reset_ms: Millis,
    /// Delay before an un-hovered trash message disappears
    pub bubble_dismiss_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 150.0,
            close_ms: 300.0,
            trash_reset_ms: 500.0,
            bubble_dismiss_ms: 100.0,
        }
    }
}

/// Per-breakpoint default size of a window
///
/// Mobile sizes shrink with the viewport: the window is at most
/// `mobile_max` and at most the viewport minus the mobile inset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveSize {
    pub mobile_max: Size,
    pub tablet: Size,
    pub desktop: Size,
}

/// Catalogue entry for one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub id: WindowId,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    /// Breakpoint sizes applied on every viewport change
    #[serde(default)]
    pub sizing: Option<ResponsiveSize>,
}

/// Catalogue entry for one desktop icon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    pub id: IconId,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub position: Vec2,
}

/// What opening a launcher id does instead of opening a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LaunchAction {
    /// Invoke the mail client with a fixed recipient
    ComposeMail { recipient: String },
    /// Open an external page
    OpenUrl { url: String },
}

/// An id whose activation performs a side effect rather than opening a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Launcher {
    pub id: IconId,
    pub action: LaunchAction,
}

/// A social link shown in the dock
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DockLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub alt: String,
}

/// Dock contents
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub links: Vec<DockLink>,
    pub trash_messages: Vec<String>,
    pub empty_trash_icon: String,
    pub full_trash_icon: String,
    pub tone: ToneSpec,
}

impl Default for DockConfig {
    fn default() -> Self {
        let link = |name: &str, url: &str, icon: &str| DockLink {
            name: name.to_string(),
            url: url.to_string(),
            icon: format!("assets/dock/{}", icon),
            alt: format!("{} icon", name),
        };

        Self {
            links: vec![
                link(
                    "Xiaohongshu",
                    "https://www.xiaohongshu.com/user/profile/62a6b493000000001b02aa8d",
                    "xiaohongshu-icon.png",
                ),
                link(
                    "Instagram",
                    "https://www.instagram.com/heyrenee.ai/",
                    "instagram-icon.png",
                ),
                link(
                    "TikTok",
                    "https://www.tiktok.com/@heyrenee.ai?lang=en",
                    "tiktok-icon.png",
                ),
                link(
                    "YouTube",
                    "https://www.youtube.com/@heyrenee_ai",
                    "youtube-icon.png",
                ),
            ],
            trash_messages: [
                "Stop poking me!",
                "I'm empty, I swear!",
                "beep boop",
                "You're trashing my vibe!",
                "honk honk",
                "Welcome to the garbage circus!",
                "I'm not a real trash can, you know!",
                "Hey! Where's my pizza?",
                "error 404: trash not found",
                "*hums trash can man theme*",
            ]
            .iter()
            .map(|m| m.to_string())
            .collect(),
            empty_trash_icon: "assets/dock/empty-trash-can.png".to_string(),
            full_trash_icon: "assets/dock/full-trash-can.png".to_string(),
            tone: ToneSpec::default(),
        }
    }
}

/// Images shown by the projects carousel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub images: Vec<String>,
    /// Window the gallery lives in; closing or minimizing it tears the
    /// overlay down
    pub host_window: Option<WindowId>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let images = ["8048", "8064", "8069", "8073", "8075", "8077", "8081", "8087"]
            .iter()
            .map(|n| format!("assets/project-images/IMG_{}.JPG", n))
            .collect();
        Self {
            images,
            host_window: Some("projects".to_string()),
        }
    }
}

/// Complete desktop configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub windows: Vec<WindowSpec>,
    pub icons: Vec<IconSpec>,
    pub launchers: Vec<Launcher>,
    pub dock: DockConfig,
    pub gallery: GalleryConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let window = |id: &str, title: &str, position, size, sizing| WindowSpec {
            id: id.to_string(),
            title: title.to_string(),
            position,
            size,
            sizing: Some(sizing),
        };
        let icon = |id: &str, title: &str, image: &str, y: f32| IconSpec {
            id: id.to_string(),
            title: title.to_string(),
            image: format!("assets/icons/{}.png", image),
            alt: format!("{} icon", title),
            position: Vec2::new(50.0, y),
        };

        Self {
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            windows: vec![
                window(
                    "who-is-renee",
                    "Who is Renee?",
                    Vec2::new(200.0, 100.0),
                    Size::new(500.0, 500.0),
                    ResponsiveSize {
                        mobile_max: Size::new(350.0, 450.0),
                        tablet: Size::new(450.0, 500.0),
                        desktop: Size::new(500.0, 500.0),
                    },
                ),
                window(
                    "projects",
                    "Projects",
                    Vec2::new(200.0, 100.0),
                    Size::new(800.0, 600.0),
                    ResponsiveSize {
                        mobile_max: Size::new(350.0, 500.0),
                        tablet: Size::new(600.0, 500.0),
                        desktop: Size::new(800.0, 600.0),
                    },
                ),
                window(
                    "resources",
                    "Resources",
                    Vec2::new(300.0, 200.0),
                    Size::new(350.0, 250.0),
                    ResponsiveSize {
                        mobile_max: Size::new(300.0, 200.0),
                        tablet: Size::new(320.0, 220.0),
                        desktop: Size::new(350.0, 250.0),
                    },
                ),
            ],
            icons: vec![
                icon("who-is-renee", "Who is Renee", "who-is-renee", 50.0),
                icon("projects", "Projects", "projects", 200.0),
                icon("resources", "Resources", "resources", 350.0),
                icon("drop-message", "Drop A Message", "drop-a-message", 500.0),
            ],
            launchers: vec![Launcher {
                id: "drop-message".to_string(),
                action: LaunchAction::ComposeMail {
                    recipient: "renee.mktg@gmail.com".to_string(),
                },
            }],
            dock: DockConfig::default(),
            gallery: GalleryConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a configuration from JSON
    ///
    /// Missing sections fall back to their defaults.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Look up the launcher registered under an id
    pub fn launcher(&self, id: &str) -> Option<&LaunchAction> {
        self.launchers.iter().find(|l| l.id == id).map(|l| &l.action)
    }

    fn has_window(&self, id: &str) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    /// Check ranges, catalogue uniqueness and that every icon opens something
    pub fn validate(&self) -> DesktopResult<()> {
        let layout = &self.layout;
        if !(layout.small_icon_max_width <= layout.mobile_max_width) {
            return Err(DesktopError::InvalidConfig {
                field: "layout.small_icon_max_width",
                reason: "must not exceed mobile_max_width",
            });
        }
        if !(layout.mobile_max_width < layout.tablet_max_width) {
            return Err(DesktopError::InvalidConfig {
                field: "layout.mobile_max_width",
                reason: "must be below tablet_max_width",
            });
        }
        if !(layout.edge_margin >= 0.0) {
            return Err(DesktopError::InvalidConfig {
                field: "layout.edge_margin",
                reason: "must not be negative",
            });
        }
        if !layout.min_window_size.is_valid() || !layout.mobile_inset.is_valid() {
            return Err(DesktopError::InvalidConfig {
                field: "layout.min_window_size",
                reason: "dimensions must not be negative",
            });
        }

        let timing = &self.timing;
        let timers = [
            timing.transition_ms,
            timing.close_ms,
            timing.trash_reset_ms,
            timing.bubble_dismiss_ms,
        ];
        if timers.iter().any(|t| !(*t >= 0.0)) {
            return Err(DesktopError::InvalidConfig {
                field: "timing",
                reason: "durations must not be negative",
            });
        }

        for (i, spec) in self.windows.iter().enumerate() {
            if self.windows[..i].iter().any(|w| w.id == spec.id) {
                return Err(DesktopError::DuplicateWindow(spec.id.clone()));
            }
            if !spec.size.is_valid() {
                return Err(DesktopError::InvalidConfig {
                    field: "windows.size",
                    reason: "dimensions must not be negative",
                });
            }
        }
        for (i, spec) in self.icons.iter().enumerate() {
            if self.icons[..i].iter().any(|ic| ic.id == spec.id) {
                return Err(DesktopError::DuplicateIcon(spec.id.clone()));
            }
            if !self.has_window(&spec.id) && self.launcher(&spec.id).is_none() {
                return Err(DesktopError::UnknownTarget(spec.id.clone()));
            }
        }
        if let Some(host) = &self.gallery.host_window {
            if !self.has_window(host) {
                return Err(DesktopError::UnknownTarget(host.clone()));
            }
        }

        if self.gallery.images.is_empty() {
            return Err(DesktopError::EmptyGallery);
        }
        if self.dock.trash_messages.is_empty() {
            return Err(DesktopError::InvalidConfig {
                field: "dock.trash_messages",
                reason: "must not be empty",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DesktopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.windows.len(), 3);
        assert_eq!(config.icons.len(), 4);
        assert_eq!(config.gallery.images.len(), 8);
        assert_eq!(config.dock.trash_messages.len(), 10);
    }

    #[test]
    fn test_launcher_lookup() {
        let config = DesktopConfig::default();
        assert!(matches!(
            config.launcher("drop-message"),
            Some(LaunchAction::ComposeMail { .. })
        ));
        assert!(config.launcher("projects").is_none());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = DesktopConfig::from_json(r#"{"timing": {"transition_ms": 200.0}}"#).unwrap();
        assert!((config.timing.transition_ms - 200.0).abs() < 0.001);
        assert!((config.timing.close_ms - 300.0).abs() < 0.001);
        assert_eq!(config.windows.len(), 3);
    }

    #[test]
    fn test_json_roundtrip_preserves_catalogue() {
        let config = DesktopConfig::default();
        let json = config.to_json().unwrap();
        let parsed = DesktopConfig::from_json(&json).unwrap();
        assert_eq!(parsed.windows, config.windows);
        assert_eq!(parsed.icons, config.icons);
        assert_eq!(parsed.launchers, config.launchers);
    }

    #[test]
    fn test_rejects_duplicate_window() {
        let mut config = DesktopConfig::default();
        let dup = config.windows[0].clone();
        config.windows.push(dup);
        assert_eq!(
            config.validate(),
            Err(DesktopError::DuplicateWindow("who-is-renee".to_string()))
        );
    }

    #[test]
    fn test_rejects_icon_without_target() {
        let mut config = DesktopConfig::default();
        let mut ghost = config.icons[0].clone();
        ghost.id = "ghost".to_string();
        config.icons.push(ghost);
        assert_eq!(
            config.validate(),
            Err(DesktopError::UnknownTarget("ghost".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_gallery_host() {
        let mut config = DesktopConfig::default();
        config.gallery.host_window = Some("studio".to_string());
        assert_eq!(
            config.validate(),
            Err(DesktopError::UnknownTarget("studio".to_string()))
        );

        config.gallery.host_window = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_gallery() {
        let mut config = DesktopConfig::default();
        config.gallery.images.clear();
        assert_eq!(config.validate(), Err(DesktopError::EmptyGallery));
    }

    #[test]
    fn test_rejects_inverted_breakpoints() {
        let mut config = DesktopConfig::default();
        config.layout.mobile_max_width = 2000.0;
        assert!(matches!(
            config.validate(),
            Err(DesktopError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            DesktopConfig::from_json("{"),
            Err(DesktopError::SerializationError(_))
        ));
    }
}
