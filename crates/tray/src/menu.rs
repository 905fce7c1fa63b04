//! Menu model for the tray context menu.

/// Configuration for the tray shell.
#[derive(Debug, Clone)]
pub struct TrayConfig {
    /// Application name shown in the tray tooltip.
    pub app_name: String,
    /// Initial state of the "Sounds" checkbox.
    pub sounds_enabled: bool,
    /// Initial state of the "Notifications" checkbox.
    pub notifications_enabled: bool,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            app_name: "NetStatus".into(),
            sounds_enabled: true,
            notifications_enabled: true,
        }
    }
}

/// Which probe a menu line reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTarget {
    Dns,
    Http,
}

impl CheckTarget {
    /// Menu label prefix for this check.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dns => "DNS test",
            Self::Http => "HTTP test",
        }
    }
}

/// Icons the shell resolves from the embedded asset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Connection healthy.
    Idle,
    /// Connection down or check failed.
    Error,
    /// Decorates the quit item.
    LogOut,
}

/// Actions a menu item can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleSounds,
    ToggleNotifications,
    Quit,
}

/// Latest outcome of one check, as shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckStatus {
    /// `None` until the first cycle completes.
    pub ok: Option<bool>,
    /// Tooltip text: "OK" or the probe error string.
    pub detail: String,
}

impl CheckStatus {
    pub fn passed(detail: impl Into<String>) -> Self {
        Self {
            ok: Some(true),
            detail: detail.into(),
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            ok: Some(false),
            detail: detail.into(),
        }
    }

    /// Menu line for this status, e.g. `"DNS test: failed"`.
    pub fn line(&self, target: CheckTarget) -> String {
        let verdict = match self.ok {
            None => "checking",
            Some(true) => "ok",
            Some(false) => "failed",
        };
        format!("{}: {verdict}", target.label())
    }

    /// Tooltip for this status.
    pub fn tooltip(&self) -> &str {
        if self.detail.is_empty() {
            "Checking"
        } else {
            &self.detail
        }
    }

    /// Per-line status icon.
    pub fn icon(&self) -> IconKind {
        if self.ok == Some(false) {
            IconKind::Error
        } else {
            IconKind::Idle
        }
    }
}

/// A single rendered menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text (empty = separator).
    pub label: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Whether the item is clickable.
    pub enabled: bool,
    /// `Some` renders a checkbox with the given state.
    pub checked: Option<bool>,
    /// Optional item icon.
    pub icon: Option<IconKind>,
    /// Optional action triggered on click.
    pub action: Option<MenuAction>,
}

/// Shell-side model of the tray: global icon plus menu contents.
///
/// The shell applies every [`TrayUpdate`](crate::TrayUpdate) it receives and
/// rebuilds the menu from the result.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Tray tooltip / application name.
    pub app_name: String,
    /// Global tray icon.
    pub icon: IconKind,
    pub dns: CheckStatus,
    pub http: CheckStatus,
    pub sounds_enabled: bool,
    pub notifications_enabled: bool,
}

impl MenuState {
    pub fn new(config: TrayConfig) -> Self {
        Self {
            app_name: config.app_name,
            icon: IconKind::Idle,
            dns: CheckStatus::default(),
            http: CheckStatus::default(),
            sounds_enabled: config.sounds_enabled,
            notifications_enabled: config.notifications_enabled,
        }
    }

    /// Folds one core update into the model.
    pub fn apply(&mut self, update: &crate::TrayUpdate) {
        match update {
            crate::TrayUpdate::Icon(icon) => self.icon = *icon,
            crate::TrayUpdate::Check { target, status } => match target {
                CheckTarget::Dns => self.dns = status.clone(),
                CheckTarget::Http => self.http = status.clone(),
            },
            crate::TrayUpdate::SoundsEnabled(enabled) => self.sounds_enabled = *enabled,
            crate::TrayUpdate::NotificationsEnabled(enabled) => {
                self.notifications_enabled = *enabled;
            }
            crate::TrayUpdate::Shutdown => {}
        }
    }

    fn separator() -> MenuItem {
        MenuItem {
            label: String::new(),
            tooltip: String::new(),
            enabled: false,
            checked: None,
            icon: None,
            action: None,
        }
    }

    fn check_item(&self, target: CheckTarget) -> MenuItem {
        let status = match target {
            CheckTarget::Dns => &self.dns,
            CheckTarget::Http => &self.http,
        };
        MenuItem {
            label: status.line(target),
            tooltip: status.tooltip().to_string(),
            enabled: false,
            checked: None,
            icon: Some(status.icon()),
            action: None,
        }
    }

    /// Builds the menu items from the current state.
    pub fn build_menu(&self) -> Vec<MenuItem> {
        vec![
            self.check_item(CheckTarget::Dns),
            self.check_item(CheckTarget::Http),
            Self::separator(),
            MenuItem {
                label: "Sounds".into(),
                tooltip: "Enable sounds".into(),
                enabled: true,
                checked: Some(self.sounds_enabled),
                icon: None,
                action: Some(MenuAction::ToggleSounds),
            },
            MenuItem {
                label: "Notifications".into(),
                tooltip: "Enable notifications".into(),
                enabled: true,
                checked: Some(self.notifications_enabled),
                icon: None,
                action: Some(MenuAction::ToggleNotifications),
            },
            Self::separator(),
            MenuItem {
                label: "Quit".into(),
                tooltip: "Quit application".into(),
                enabled: true,
                checked: None,
                icon: Some(IconKind::LogOut),
                action: Some(MenuAction::Quit),
            },
        ]
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(TrayConfig::default())
    }
}
