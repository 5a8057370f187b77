//! Free-form display and tuning settings.

use serde::{Deserialize, Serialize};

/// One `key,value` row of the settings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Ordered key/value settings. Keys keep their first-insertion position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    entries: Vec<SettingEntry>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows; later rows with the same key win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SettingEntry>,
    {
        let mut settings = Self::new();
        for entry in entries {
            settings.insert(entry.key, entry.value);
        }
        settings
    }

    /// Insert or overwrite a value. Blank keys are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return;
        }
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(SettingEntry { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Numeric setting, or `fallback` when absent or not a finite number.
    pub fn number(&self, key: &str, fallback: f64) -> f64 {
        self.get(key)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .unwrap_or(fallback)
    }

    /// Apply every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: &Settings) {
        for entry in &other.entries {
            self.insert(entry.key.clone(), entry.value.clone());
        }
    }

    pub fn entries(&self) -> &[SettingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_position_and_overwrites_value() {
        let mut settings = Settings::new();
        settings.insert("title", "Rates");
        settings.insert("footer", "(c)");
        settings.insert("title", "Shipping rates");
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.entries()[0].key, "title");
        assert_eq!(settings.get("title"), Some("Shipping rates"));
    }

    #[test]
    fn number_falls_back_on_garbage() {
        let settings = Settings::from_entries([
            SettingEntry {
                key: "boxGuideRefCm".to_string(),
                value: "45".to_string(),
            },
            SettingEntry {
                key: "boxGuideRefPx".to_string(),
                value: "wide".to_string(),
            },
        ]);
        assert_eq!(settings.number("boxGuideRefCm", 60.0), 45.0);
        assert_eq!(settings.number("boxGuideRefPx", 90.0), 90.0);
        assert_eq!(settings.number("boxGuideMinPx", 50.0), 50.0);
    }
}
