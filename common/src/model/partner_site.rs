use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A partner site listed on the public landing page (`betting_sites` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerSite {
    pub id: String,
    /// Internal short name, e.g. `cricindia99`.
    pub name: String,
    /// Name shown to visitors, e.g. `cricindia99.com (CricBet99)`.
    pub display_name: String,
    pub url: String,
    pub logo_url: Option<String>,
    pub button_color: ButtonColor,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Green,
    Red,
    Blue,
    Purple,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 4] = [
        ButtonColor::Green,
        ButtonColor::Red,
        ButtonColor::Blue,
        ButtonColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonColor::Green => "green",
            ButtonColor::Red => "red",
            ButtonColor::Blue => "blue",
            ButtonColor::Purple => "purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonColor::Green => "Green",
            ButtonColor::Red => "Red",
            ButtonColor::Blue => "Blue",
            ButtonColor::Purple => "Purple",
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown button color '{}'", s))
    }
}
