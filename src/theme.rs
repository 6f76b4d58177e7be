//! Theme presets and design tokens.
//!
//! Every section renders from one set of templates. What used to be separate
//! dark and bright copies of each section is a [`ThemeConfig`]: a preset plus
//! optional per-token overrides. [`tokens`] resolves the preset and applies
//! the overrides; [`generate_theme_css`] turns the result into CSS custom
//! properties that `static/style.css` reads.
//!
//! ```toml
//! [theme]
//! preset = "playful"      # "premium" (dark) or "playful" (bright)
//! radius = "1.5rem"
//! shadow = "strong"       # none | soft | medium | strong
//!
//! [theme.palette]
//! accent = "#ec4899"
//! ```

use serde::{Deserialize, Serialize};

/// Base look of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Dark surfaces, purple and pink accents.
    #[default]
    Premium,
    /// Light surfaces, saturated primary accents.
    Playful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowIntensity {
    None,
    Soft,
    Medium,
    Strong,
}

impl ShadowIntensity {
    pub fn to_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Soft => "0 2px 8px rgba(0, 0, 0, 0.08)",
            Self::Medium => "0 10px 25px rgba(0, 0, 0, 0.18)",
            Self::Strong => "0 25px 50px rgba(0, 0, 0, 0.35)",
        }
    }
}

/// Palette tokens a site may override. Unset tokens come from the preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

/// `[theme]` section of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub preset: ThemePreset,
    pub palette: PaletteOverrides,
    /// Corner radius of cards and buttons (CSS length).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowIntensity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_alt: String,
    pub on_accent: String,
    pub border: String,
}

/// Fully resolved design tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    pub palette: Palette,
    pub radius: String,
    pub shadow: ShadowIntensity,
}

impl ThemePreset {
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Premium => ThemeTokens {
                palette: Palette {
                    background: "#020617".into(),
                    surface: "#0f172a".into(),
                    text: "#f8fafc".into(),
                    text_muted: "#94a3b8".into(),
                    accent: "#9333ea".into(),
                    accent_alt: "#ec4899".into(),
                    on_accent: "#ffffff".into(),
                    border: "#1e293b".into(),
                },
                radius: "1rem".into(),
                shadow: ShadowIntensity::Strong,
            },
            Self::Playful => ThemeTokens {
                palette: Palette {
                    background: "#fffbeb".into(),
                    surface: "#ffffff".into(),
                    text: "#1e293b".into(),
                    text_muted: "#64748b".into(),
                    accent: "#f97316".into(),
                    accent_alt: "#2563eb".into(),
                    on_accent: "#ffffff".into(),
                    border: "#fde68a".into(),
                },
                radius: "2rem".into(),
                shadow: ShadowIntensity::Medium,
            },
        }
    }
}

fn pick(value: &Option<String>, fallback: String) -> String {
    value.clone().unwrap_or(fallback)
}

/// Resolve the preset, then apply every override that is set.
pub fn tokens(config: &ThemeConfig) -> ThemeTokens {
    let base = config.preset.tokens();
    let o = &config.palette;
    ThemeTokens {
        palette: Palette {
            background: pick(&o.background, base.palette.background),
            surface: pick(&o.surface, base.palette.surface),
            text: pick(&o.text, base.palette.text),
            text_muted: pick(&o.text_muted, base.palette.text_muted),
            accent: pick(&o.accent, base.palette.accent),
            accent_alt: pick(&o.accent_alt, base.palette.accent_alt),
            on_accent: pick(&o.on_accent, base.palette.on_accent),
            border: pick(&o.border, base.palette.border),
        },
        radius: pick(&config.radius, base.radius),
        shadow: config.shadow.unwrap_or(base.shadow),
    }
}

/// CSS custom properties for the resolved tokens.
pub fn generate_theme_css(tokens: &ThemeTokens) -> String {
    let p = &tokens.palette;
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {muted};
    --color-accent: {accent};
    --color-accent-alt: {accent_alt};
    --color-on-accent: {on_accent};
    --color-border: {border};
    --radius: {radius};
    --shadow: {shadow};
}}"#,
        bg = p.background,
        surface = p.surface,
        text = p.text,
        muted = p.text_muted,
        accent = p.accent,
        accent_alt = p.accent_alt,
        on_accent = p.on_accent,
        border = p.border,
        radius = tokens.radius,
        shadow = tokens.shadow.to_css(),
    )
}
