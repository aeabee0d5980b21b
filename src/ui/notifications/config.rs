// SPDX-License-Identifier: MPL-2.0
//! Construction-time configuration of a notification.

use super::hooks::Hooks;
use super::kind::Kind;
use crate::app::config::{DEFAULT_DURATION_MS, DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_TOP_OFFSET};
use std::time::Duration;

/// Values a notification falls back to when the caller leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub duration: Duration,
    pub top_offset: f32,
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            top_offset: DEFAULT_TOP_OFFSET,
            enter: Duration::from_millis(DEFAULT_ENTER_MS),
            exit: Duration::from_millis(DEFAULT_EXIT_MS),
        }
    }
}

/// Emphasis applied to a fragment of rich content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Regular,
    Strong,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Fragment {
    pub fn regular(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Regular,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Strong,
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Code,
        }
    }
}

/// Body of a notification: plain text or a sequence of styled fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Plain(String),
    Rich(Vec<Fragment>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Plain(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Plain(text)
    }
}

impl From<Vec<Fragment>> for Content {
    fn from(fragments: Vec<Fragment>) -> Self {
        Content::Rich(fragments)
    }
}

/// Immutable description of a notification.
///
/// # Example
///
/// ```
/// use iced_toast::ui::notifications::{Kind, NotificationConfig};
/// use std::time::Duration;
///
/// let config = NotificationConfig::new()
///     .kind(Kind::Error)
///     .title("Failed")
///     .message("Save failed")
///     .duration(Duration::ZERO);
///
/// assert!(!config.auto_dismisses());
/// ```
#[derive(Debug)]
pub struct NotificationConfig {
    kind: Option<Kind>,
    title: Option<String>,
    message: Option<Content>,
    duration: Duration,
    icon_class: Option<String>,
    top_offset: f32,
    enter: Duration,
    exit: Duration,
    hooks: Hooks,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self::from_defaults(Defaults::default())
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from host-provided defaults (typically loaded from `settings.toml`).
    #[must_use]
    pub fn from_defaults(defaults: Defaults) -> Self {
        Self {
            kind: None,
            title: None,
            message: None,
            duration: defaults.duration,
            icon_class: None,
            top_offset: defaults.top_offset,
            enter: defaults.enter,
            exit: defaults.exit,
            hooks: Hooks::default(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the kind from its name. Unrecognized names leave the kind unset.
    #[must_use]
    pub fn kind_name(mut self, name: &str) -> Self {
        self.kind = Kind::parse(name);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<Content>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Auto-dismiss delay. `Duration::ZERO` keeps the toast until closed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn icon_class(mut self, token: impl Into<String>) -> Self {
        self.icon_class = Some(token.into());
        self
    }

    #[must_use]
    pub fn top_offset(mut self, top: f32) -> Self {
        self.top_offset = top;
        self
    }

    /// Overrides the enter and exit fade timings.
    #[must_use]
    pub fn transition(mut self, enter: Duration, exit: Duration) -> Self {
        self.enter = enter;
        self.exit = exit;
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn get_kind(&self) -> Option<Kind> {
        self.kind
    }

    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn get_message(&self) -> Option<&Content> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn get_icon_class(&self) -> Option<&str> {
        self.icon_class.as_deref()
    }

    #[must_use]
    pub fn get_top_offset(&self) -> f32 {
        self.top_offset
    }

    #[must_use]
    pub fn enter_duration(&self) -> Duration {
        self.enter
    }

    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        self.exit
    }

    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    pub(crate) fn take_hooks(&mut self) -> Hooks {
        std::mem::take(&mut self.hooks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = NotificationConfig::new();
        assert_eq!(config.get_duration(), Duration::from_millis(4500));
        assert!((config.get_top_offset() - 16.0).abs() < f32::EPSILON);
        assert!(config.get_kind().is_none());
        assert!(config.get_title().is_none());
        assert!(config.get_message().is_none());
        assert!(config.get_icon_class().is_none());
        assert!(config.auto_dismisses());
    }

    #[test]
    fn builder_sets_fields() {
        let config = NotificationConfig::new()
            .kind(Kind::Warning)
            .title("Disk almost full")
            .message("2% left")
            .duration_ms(100)
            .icon_class("bell")
            .top_offset(64.0);

        assert_eq!(config.get_kind(), Some(Kind::Warning));
        assert_eq!(config.get_title(), Some("Disk almost full"));
        assert_eq!(config.get_message(), Some(&Content::Plain("2% left".into())));
        assert_eq!(config.get_duration(), Duration::from_millis(100));
        assert_eq!(config.get_icon_class(), Some("bell"));
        assert!((config.get_top_offset() - 64.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_kind_name_leaves_kind_unset() {
        let config = NotificationConfig::new().kind(Kind::Info).kind_name("fatal");
        assert!(config.get_kind().is_none());
    }

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        assert!(!NotificationConfig::new().duration(Duration::ZERO).auto_dismisses());
    }

    #[test]
    fn rich_content_converts_from_fragments() {
        let config = NotificationConfig::new().message(vec![
            Fragment::regular("Saved "),
            Fragment::code("report.pdf"),
        ]);
        match config.get_message() {
            Some(Content::Rich(fragments)) => {
                assert_eq!(fragments.len(), 2);
                assert_eq!(fragments[1].emphasis, Emphasis::Code);
            }
            other => panic!("expected rich content, got {other:?}"),
        }
    }

    #[test]
    fn from_defaults_uses_host_values() {
        let defaults = Defaults {
            duration: Duration::from_millis(900),
            top_offset: 32.0,
            enter: Duration::from_millis(10),
            exit: Duration::from_millis(20),
        };
        let config = NotificationConfig::from_defaults(defaults);
        assert_eq!(config.get_duration(), Duration::from_millis(900));
        assert!((config.get_top_offset() - 32.0).abs() < f32::EPSILON);
        assert_eq!(config.enter_duration(), Duration::from_millis(10));
        assert_eq!(config.exit_duration(), Duration::from_millis(20));
    }
}
