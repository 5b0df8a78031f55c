use crate::design::color::HexColor;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{ProkitError, ProkitResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Maximum number of characters shown for the player number.
pub const MAX_NUMBER_CHARS: usize = 2;

pub(crate) const DEFAULT_PRIMARY: Rgb8 = Rgb8::new(0xef, 0x44, 0x44);
pub(crate) const DEFAULT_SECONDARY: Rgb8 = Rgb8::new(0x1e, 0x29, 0x3b);
pub(crate) const DEFAULT_ACCENT: Rgb8 = Rgb8::new(0xfd, 0xe0, 0x47);
pub(crate) const DEFAULT_TEXT: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);

/// Fill strategy applied to the jersey body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Flat primary color.
    Solid,
    /// Vertical primary/secondary bands.
    Stripes,
    /// Horizontal primary/secondary bands.
    Hoops,
    /// Primary (top) to secondary (bottom).
    Gradient,
    /// Primary left half, secondary right half.
    Half,
    /// Declared variant; renders as [`Pattern::Solid`] for now.
    Chevron,
}

impl Pattern {
    /// Every declared pattern, in declaration order.
    pub const ALL: [Pattern; 6] = [
        Pattern::Solid,
        Pattern::Stripes,
        Pattern::Hoops,
        Pattern::Gradient,
        Pattern::Half,
        Pattern::Chevron,
    ];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::Solid => "solid",
            Pattern::Stripes => "stripes",
            Pattern::Hoops => "hoops",
            Pattern::Gradient => "gradient",
            Pattern::Half => "half",
            Pattern::Chevron => "chevron",
        }
    }
}

/// Neckline geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollarType {
    /// Curved crew neck.
    Round,
    /// Straight V cut.
    VNeck,
    /// V cut with folded flaps.
    Polo,
}

impl CollarType {
    /// Every declared collar, in declaration order.
    pub const ALL: [CollarType; 3] = [CollarType::Round, CollarType::VNeck, CollarType::Polo];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CollarType::Round => "round",
            CollarType::VNeck => "v-neck",
            CollarType::Polo => "polo",
        }
    }
}

/// Which side of the jersey is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Chest side: crest, number, sponsor.
    Front,
    /// Back side: name and large number.
    Back,
}

impl ViewMode {
    /// Both views.
    pub const ALL: [ViewMode; 2] = [ViewMode::Front, ViewMode::Back];

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Front => "front",
            ViewMode::Back => "back",
        }
    }

    /// Metadata badge shown next to the canvas.
    pub fn badge_label(self) -> &'static str {
        match self {
            ViewMode::Front => "FRONT VIEW",
            ViewMode::Back => "BACK VIEW",
        }
    }

    /// The other side.
    pub fn flipped(self) -> Self {
        match self {
            ViewMode::Front => ViewMode::Back,
            ViewMode::Back => ViewMode::Front,
        }
    }
}

macro_rules! closed_from_str {
    ($ty:ty, $what:literal) => {
        impl FromStr for $ty {
            type Err = ProkitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let known: Vec<&str> = <$ty>::ALL.iter().map(|v| v.as_str()).collect();
                        ProkitError::validation(format!(
                            "unknown {} \"{s}\" (expected one of: {})",
                            $what,
                            known.join(", ")
                        ))
                    })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_from_str!(Pattern, "pattern");
closed_from_str!(CollarType, "collar type");
closed_from_str!(ViewMode, "view");

/// Closed enumerations that degrade to a fixed variant when decoding unknown input.
trait LenientChoice: FromStr + Copy + std::fmt::Display {
    const FIELD: &'static str;
    const FALLBACK: Self;
}

impl LenientChoice for Pattern {
    const FIELD: &'static str = "pattern";
    const FALLBACK: Self = Pattern::Solid;
}

impl LenientChoice for CollarType {
    const FIELD: &'static str = "collarType";
    const FALLBACK: Self = CollarType::Round;
}

impl LenientChoice for ViewMode {
    const FIELD: &'static str = "view";
    const FALLBACK: Self = ViewMode::Front;
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: LenientChoice,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let parsed = raw.as_str().and_then(|s| s.parse::<T>().ok());
    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!(
            field = T::FIELD,
            value = %raw,
            fallback = %T::FALLBACK,
            "unknown enumeration value; using fallback"
        );
        T::FALLBACK
    }))
}

/// Complete description of one jersey design.
///
/// Values are never mutated in place: [`DesignConfiguration::apply`] and
/// [`DesignConfiguration::merge`] return new configurations with only the touched fields changed.
///
/// Decoding is lenient: missing fields take their defaults and out-of-range enumeration strings
/// degrade to a fixed variant (`solid`, `round`, `front`) instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignConfiguration {
    /// Main body color.
    pub primary_color: HexColor,
    /// Second pattern color, crest detail.
    pub secondary_color: HexColor,
    /// Collar rim, crest fill, hem trim.
    pub accent_color: HexColor,
    /// Number, name, sponsor.
    pub text_color: HexColor,
    /// Body fill strategy.
    #[serde(deserialize_with = "lenient")]
    pub pattern: Pattern,
    /// Neckline variant.
    #[serde(deserialize_with = "lenient")]
    pub collar_type: CollarType,
    /// Player number shown on both sides.
    pub back_number: String,
    /// Player name, shown upper-cased on the back.
    pub back_name: String,
    /// Displayed side.
    #[serde(deserialize_with = "lenient")]
    pub view: ViewMode,
    /// Crest visibility.
    pub show_crest: bool,
}

impl Default for DesignConfiguration {
    fn default() -> Self {
        Self {
            primary_color: HexColor::from_rgb(DEFAULT_PRIMARY),
            secondary_color: HexColor::from_rgb(DEFAULT_SECONDARY),
            accent_color: HexColor::from_rgb(DEFAULT_ACCENT),
            text_color: HexColor::from_rgb(DEFAULT_TEXT),
            pattern: Pattern::Stripes,
            collar_type: CollarType::Round,
            back_number: "10".to_owned(),
            back_name: "MESSI".to_owned(),
            view: ViewMode::Front,
            show_crest: true,
        }
    }
}

/// A single-field user edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DesignEdit {
    /// Set `primaryColor`.
    PrimaryColor(HexColor),
    /// Set `secondaryColor`.
    SecondaryColor(HexColor),
    /// Set `accentColor`.
    AccentColor(HexColor),
    /// Set `textColor`.
    TextColor(HexColor),
    /// Set `pattern`.
    Pattern(Pattern),
    /// Set `collarType`.
    Collar(CollarType),
    /// Set `backNumber` (truncated to [`MAX_NUMBER_CHARS`]).
    BackNumber(String),
    /// Set `backName`.
    BackName(String),
    /// Set `view`.
    View(ViewMode),
    /// Set `showCrest`.
    ShowCrest(bool),
}

impl DesignConfiguration {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ProkitResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ProkitError::serde(format!("parse design configuration JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ProkitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ProkitError::from(
                anyhow::Error::new(e)
                    .context(format!("open design configuration '{}'", path.display())),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON encoding.
    pub fn to_json_pretty(&self) -> ProkitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ProkitError::serde(format!("encode design configuration: {e}")))
    }

    /// Return a copy with exactly one field changed.
    pub fn apply(&self, edit: DesignEdit) -> Self {
        let mut next = self.clone();
        match edit {
            DesignEdit::PrimaryColor(c) => next.primary_color = c,
            DesignEdit::SecondaryColor(c) => next.secondary_color = c,
            DesignEdit::AccentColor(c) => next.accent_color = c,
            DesignEdit::TextColor(c) => next.text_color = c,
            DesignEdit::Pattern(p) => next.pattern = p,
            DesignEdit::Collar(c) => next.collar_type = c,
            DesignEdit::BackNumber(n) => {
                next.back_number = n.chars().take(MAX_NUMBER_CHARS).collect();
            }
            DesignEdit::BackName(n) => next.back_name = n,
            DesignEdit::View(v) => next.view = v,
            DesignEdit::ShowCrest(b) => next.show_crest = b,
        }
        next
    }

    /// Overlay every field present in `partial`; absent fields keep their current value.
    pub fn merge(&self, partial: &PartialDesignConfiguration) -> Self {
        let mut next = self.clone();
        if let Some(c) = &partial.primary_color {
            next.primary_color = c.clone();
        }
        if let Some(c) = &partial.secondary_color {
            next.secondary_color = c.clone();
        }
        if let Some(c) = &partial.accent_color {
            next.accent_color = c.clone();
        }
        if let Some(c) = &partial.text_color {
            next.text_color = c.clone();
        }
        if let Some(p) = partial.pattern {
            next.pattern = p;
        }
        if let Some(c) = partial.collar_type {
            next.collar_type = c;
        }
        if let Some(n) = &partial.back_number {
            next.back_number = n.clone();
        }
        if let Some(n) = &partial.back_name {
            next.back_name = n.clone();
        }
        if let Some(v) = partial.view {
            next.view = v;
        }
        if let Some(b) = partial.show_crest {
            next.show_crest = b;
        }
        next
    }

    /// Number as displayed: at most [`MAX_NUMBER_CHARS`] characters.
    pub fn display_number(&self) -> String {
        self.back_number.chars().take(MAX_NUMBER_CHARS).collect()
    }

    /// Name as displayed on the back.
    pub fn display_name(&self) -> String {
        self.back_name.to_uppercase()
    }
}

/// A subset of [`DesignConfiguration`] fields; absent fields mean "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDesignConfiguration {
    /// See [`DesignConfiguration::primary_color`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<HexColor>,
    /// See [`DesignConfiguration::secondary_color`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<HexColor>,
    /// See [`DesignConfiguration::accent_color`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<HexColor>,
    /// See [`DesignConfiguration::text_color`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,
    /// See [`DesignConfiguration::pattern`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    /// See [`DesignConfiguration::collar_type`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collar_type: Option<CollarType>,
    /// See [`DesignConfiguration::back_number`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_number: Option<String>,
    /// See [`DesignConfiguration::back_name`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_name: Option<String>,
    /// See [`DesignConfiguration::view`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
    /// See [`DesignConfiguration::show_crest`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_crest: Option<bool>,
}

impl PartialDesignConfiguration {
    /// `true` when no field is set ("no change").
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Wire names of the fields that are set, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let present = [
            ("primaryColor", self.primary_color.is_some()),
            ("secondaryColor", self.secondary_color.is_some()),
            ("accentColor", self.accent_color.is_some()),
            ("textColor", self.text_color.is_some()),
            ("pattern", self.pattern.is_some()),
            ("collarType", self.collar_type.is_some()),
            ("backNumber", self.back_number.is_some()),
            ("backName", self.back_name.is_some()),
            ("view", self.view.is_some()),
            ("showCrest", self.show_crest.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/config.rs"]
mod tests;
