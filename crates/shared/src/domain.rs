use std::collections::BTreeSet;

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::error::DataError;

/// How a patient meets the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultMode {
    Remote,
    InPerson,
}

impl ConsultMode {
    pub const ALL: [ConsultMode; 2] = [ConsultMode::Remote, ConsultMode::InPerson];

    pub fn admits(self, supports_remote_consult: bool) -> bool {
        match self {
            ConsultMode::Remote => supports_remote_consult,
            ConsultMode::InPerson => !supports_remote_consult,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by consultation fee.
    Fees,
    /// Descending by years of experience.
    Experience,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Fees, SortKey::Experience];
}

/// A directory entry as delivered by the data feed. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_specialities")]
    pub speciality: Vec<String>,
    #[serde(default, deserialize_with = "lenient_years")]
    pub experience: u32,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub fees: f64,
    #[serde(default, rename = "videoConsult")]
    pub supports_remote_consult: bool,
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Provider {
    pub fn new<I, S>(
        name: impl Into<String>,
        speciality: I,
        experience: u32,
        fees: f64,
        supports_remote_consult: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            speciality: speciality.into_iter().map(Into::into).collect(),
            experience,
            fees: fees + 0.0,
            supports_remote_consult,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// True when at least one of this provider's specialities is selected.
    /// Matching is exact and case-sensitive.
    pub fn has_any_speciality(&self, selected: &BTreeSet<String>) -> bool {
        self.speciality.iter().any(|s| selected.contains(s))
    }

    /// Parses a JSON array of provider records.
    pub fn list_from_json(raw: &str) -> Result<Vec<Provider>, DataError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpecialityField {
    List(Vec<String>),
    Single(String),
    Other(IgnoredAny),
}

fn lenient_specialities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SpecialityField>::deserialize(deserializer)? {
        Some(SpecialityField::List(list)) => list,
        Some(SpecialityField::Single(single)) => vec![single],
        Some(SpecialityField::Other(_)) | None => Vec::new(),
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Numeric>::deserialize(deserializer)? {
        // `+ 0.0` folds `-0.0` into `0.0`.
        Some(Numeric::Number(n)) if n.is_finite() && n >= 0.0 => n + 0.0,
        Some(Numeric::Text(text)) => first_number(&text),
        _ => 0.0,
    })
}

fn lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_amount(deserializer).map(|n| n.trunc() as u32)
}

/// Reads the first run of digits in free text such as `"₹ 1,200"` or
/// `"13 Years of experience"`. A comma counts as a thousands separator only
/// when exactly three digits follow it; otherwise it ends the number.
pub(crate) fn first_number(text: &str) -> f64 {
    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    let run = &text.as_bytes()[start..];
    let mut digits = String::new();
    let mut seen_dot = false;
    let mut i = 0;
    while i < run.len() {
        match run[i] {
            b @ b'0'..=b'9' => digits.push(char::from(b)),
            b',' if !seen_dot && is_thousands_group(&run[i + 1..]) => {}
            b'.' if !seen_dot => {
                seen_dot = true;
                digits.push('.');
            }
            _ => break,
        }
        i += 1;
    }

    digits.trim_end_matches('.').parse().unwrap_or(0.0)
}

fn is_thousands_group(rest: &[u8]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(u8::is_ascii_digit)
        && !rest.get(3).is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
