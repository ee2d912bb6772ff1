use crate::foundation::core::Rgba8;

/// Colour and font tokens shared by every scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Palette,
    pub fonts: Fonts,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba8,
    pub surface: Rgba8,
    pub primary: Rgba8,
    pub secondary: Rgba8,
    pub accent: Rgba8,
    pub text: TextColors,
    pub alert: Rgba8,
    pub success: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub main: Rgba8,
    pub muted: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub main: String,
    pub mono: String,
}

/// Named palette slots, so configs can refer to theme colours by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Background,
    Surface,
    Primary,
    Secondary,
    Accent,
    TextMain,
    TextMuted,
    Alert,
    Success,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x0F, 0x17, 0x2A), // slate 900
            surface: Rgba8::rgb(0x1E, 0x29, 0x3B),    // slate 800
            primary: Rgba8::rgb(0x38, 0xBD, 0xF8),    // sky 400
            secondary: Rgba8::rgb(0xA8, 0x55, 0xF7),  // purple 500
            accent: Rgba8::rgb(0xF4, 0x72, 0xB6),     // pink 400
            text: TextColors::default(),
            alert: Rgba8::rgb(0xEF, 0x44, 0x44),   // red 500
            success: Rgba8::rgb(0x22, 0xC5, 0x5E), // green 500
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            main: Rgba8::rgb(0xF8, 0xFA, 0xFC),  // slate 50
            muted: Rgba8::rgb(0x94, 0xA3, 0xB8), // slate 400
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            main: r#"system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#
                .to_string(),
            mono: r#"Menlo, Monaco, "Courier New", monospace"#.to_string(),
        }
    }
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> Rgba8 {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::TextMain => self.text.main,
            ColorRole::TextMuted => self.text.muted,
            ColorRole::Alert => self.alert,
            ColorRole::Success => self.success,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
