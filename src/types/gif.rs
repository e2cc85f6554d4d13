use serde::{Deserialize, Deserializer, Serialize};

/// A GIF as returned by the Giphy API.
///
/// Only the fields the launcher uses are kept; everything else Giphy sends is
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gif {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub images: GifImages,
}

/// The renditions of a GIF. The launcher only uses `fixed_height`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GifImages {
    #[serde(default)]
    pub fixed_height: Rendition,
}

/// A renderable reference plus the dimensions the overlay lays it out with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rendition {
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "dimension")]
    pub width: u32,
    #[serde(default, deserialize_with = "dimension")]
    pub height: u32,
}

impl Gif {
    /// Creates a GIF with a single `fixed_height` rendition.
    pub fn new(id: &str, title: &str, url: &str, width: u32, height: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            images: GifImages {
                fixed_height: Rendition {
                    url: url.to_string(),
                    width,
                    height,
                },
            },
        }
    }

    /// The URL copied to the clipboard, if the GIF has one.
    pub fn reference_url(&self) -> Option<&str> {
        let url = self.images.fixed_height.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

/// Giphy reports dimensions as strings ("200"); the launcher's own file stores
/// numbers. Accept both.
fn dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
