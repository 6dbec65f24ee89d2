use std::fs;
use std::path::Path;

/// Persisted theme flag. Read once at startup, written on every toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Read the saved preference. A missing, unreadable or unrecognized file
/// reads as light.
pub fn load(path: &Path) -> ThemePreference {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim() == "dark" => ThemePreference::Dark,
        _ => ThemePreference::Light,
    }
}

/// Persist the preference as a one-line flag file.
pub fn save(path: &Path, theme: ThemePreference) -> Result<(), String> {
    fs::write(path, theme.as_str()).map_err(|e| format!("write theme file error: {}", e))
}
