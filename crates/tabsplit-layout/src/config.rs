//! Shell configuration

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::rules::CollapseRules;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Width of the vertical tab bar
    pub tab_bar_width: f64,
    /// Width of the master pane
    pub master_width: f64,
    /// Minimal width of the detail pane; below it the detail is a candidate for modal
    pub detail_min_width: f64,
    pub tab_bar_background: Color,
    /// Detail area color while no detail is open
    pub detail_background: Color,
    /// Separator between tab bar and master, and between master and detail
    pub separator_color: Color,
    /// Keep a collapsed detail in the fixed layout as the only visible pane
    /// instead of presenting it modally
    pub detail_modal_stays_in_place: bool,
    #[serde(skip)]
    pub rules: CollapseRules,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tab_bar_width: 70.0,
            master_width: 320.0,
            detail_min_width: 320.0,
            tab_bar_background: Color::WHITE,
            detail_background: Color::WHITE,
            separator_color: Color::GRAY,
            detail_modal_stays_in_place: false,
            rules: CollapseRules::never(),
        }
    }
}

/// Fields that differ between two configurations, carrying the new values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigChanges {
    pub tab_bar_width: Option<f64>,
    pub master_width: Option<f64>,
    pub detail_min_width: Option<f64>,
    pub tab_bar_background: Option<Color>,
    pub detail_background: Option<Color>,
    pub separator_color: Option<Color>,
    pub detail_modal_stays_in_place: Option<bool>,
    pub rules: bool,
}

impl ConfigChanges {
    pub fn is_empty(&self) -> bool {
        *self == ConfigChanges::default()
    }

    pub fn widths_changed(&self) -> bool {
        self.tab_bar_width.is_some() || self.master_width.is_some() || self.detail_min_width.is_some()
    }
}

impl Configuration {
    pub fn with_rules(mut self, rules: CollapseRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let widths = [
            ("tab_bar_width", self.tab_bar_width),
            ("master_width", self.master_width),
            ("detail_min_width", self.detail_min_width),
        ];
        for (field, value) in widths {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidWidth { field, value });
            }
        }
        Ok(())
    }

    /// Diff against the configuration being replaced
    pub fn changes_from(&self, old: &Configuration) -> ConfigChanges {
        fn changed<T: PartialEq + Copy>(new: T, old: T) -> Option<T> {
            (new != old).then_some(new)
        }

        ConfigChanges {
            tab_bar_width: changed(self.tab_bar_width, old.tab_bar_width),
            master_width: changed(self.master_width, old.master_width),
            detail_min_width: changed(self.detail_min_width, old.detail_min_width),
            tab_bar_background: changed(self.tab_bar_background, old.tab_bar_background),
            detail_background: changed(self.detail_background, old.detail_background),
            separator_color: changed(self.separator_color, old.separator_color),
            detail_modal_stays_in_place: changed(
                self.detail_modal_stays_in_place,
                old.detail_modal_stays_in_place,
            ),
            rules: !self.rules.same_as(&old.rules),
        }
    }

    /// Changes to apply when the shell is first built: every width, and any
    /// color that differs from the stock one
    pub fn initial_changes(&self) -> ConfigChanges {
        let baseline = Configuration {
            tab_bar_width: 0.0,
            master_width: 0.0,
            detail_min_width: 0.0,
            rules: self.rules.clone(),
            ..Configuration::default()
        };
        let mut changes = self.changes_from(&baseline);
        changes.detail_modal_stays_in_place = None;
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.tab_bar_width, 70.0);
        assert_eq!(config.master_width, 320.0);
        assert_eq!(config.detail_min_width, 320.0);
        assert!(!config.detail_modal_stays_in_place);
        assert!(config.rules.tab_bar.is_none());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Configuration::from_json(
            r#"{ "master_width": 280.0, "detail_modal_stays_in_place": true }"#,
        )
        .unwrap();
        assert_eq!(config.master_width, 280.0);
        assert_eq!(config.tab_bar_width, 70.0);
        assert!(config.detail_modal_stays_in_place);
    }

    #[test]
    fn test_from_json_rejects_negative_width() {
        let result = Configuration::from_json(r#"{ "tab_bar_width": -1.0 }"#);
        assert!(matches!(
            result,
            Err(LayoutError::InvalidWidth { field: "tab_bar_width", .. })
        ));
    }

    #[test]
    fn test_json_round_trip_skips_rules() {
        let config = Configuration::default().with_rules(CollapseRules::standard());
        let json = config.to_json().unwrap();
        assert!(!json.contains("rules"));
        let restored = Configuration::from_json(&json).unwrap();
        assert!(restored.rules.master.is_none());
    }

    #[test]
    fn test_changes_only_report_modified_fields() {
        let old = Configuration::default();
        let mut new = old.clone();
        assert!(new.changes_from(&old).is_empty());

        new.master_width = 300.0;
        new.separator_color = Color::rgb(1.0, 0.5, 0.0);
        let changes = new.changes_from(&old);
        assert_eq!(changes.master_width, Some(300.0));
        assert_eq!(changes.separator_color, Some(Color::rgb(1.0, 0.5, 0.0)));
        assert_eq!(changes.tab_bar_width, None);
        assert!(changes.widths_changed());
        assert!(!changes.rules);
    }

    #[test]
    fn test_replacing_rules_is_a_change() {
        let old = Configuration::default();
        let new = old.clone().with_rules(CollapseRules::standard());
        assert!(new.changes_from(&old).rules);
    }

    #[test]
    fn test_initial_changes_apply_widths() {
        let config = Configuration {
            tab_bar_background: Color::rgb(0.5, 0.0, 0.5),
            ..Configuration::default()
        };
        let changes = config.initial_changes();
        assert_eq!(changes.tab_bar_width, Some(70.0));
        assert_eq!(changes.master_width, Some(320.0));
        assert_eq!(changes.tab_bar_background, Some(Color::rgb(0.5, 0.0, 0.5)));
        assert_eq!(changes.detail_background, None);
        assert!(!changes.rules);
    }
}
