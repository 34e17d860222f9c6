use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylistic directive applied uniformly across the generated texts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Witty,
    Urgent,
    Empathetic,
    #[serde(rename = "Bold/Controversial")]
    BoldControversial,
}

impl Tone {
    pub const ALL: [Self; 5] = [
        Self::Professional,
        Self::Witty,
        Self::Urgent,
        Self::Empathetic,
        Self::BoldControversial,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Witty => "Witty",
            Self::Urgent => "Urgent",
            Self::Empathetic => "Empathetic",
            Self::BoldControversial => "Bold/Controversial",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three fixed target networks. The set is closed: every platform
/// carries its own text style rules and target image aspect ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    #[serde(rename = "Twitter/X")]
    Twitter,
    Instagram,
}

impl Platform {
    /// Fixed ordering used for fan-out and snapshots.
    pub const ALL: [Self; 3] = [Self::LinkedIn, Self::Twitter, Self::Instagram];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter/X",
            Self::Instagram => "Instagram",
        }
    }

    /// Lowercase identifier safe for file names.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
        }
    }

    /// Target aspect ratio for the platform's generated visual.
    #[must_use]
    pub fn aspect_ratio(self) -> AspectRatio {
        match self {
            Self::LinkedIn | Self::Twitter => AspectRatio::Landscape16x9,
            Self::Instagram => AspectRatio::Portrait3x4,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image aspect ratios accepted by the image model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape16x9,
    #[serde(rename = "3:4")]
    Portrait3x4,
}

impl AspectRatio {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape16x9 => "16:9",
            Self::Portrait3x4 => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The post text for one platform paired with the image prompt derived from
/// it. Both halves come out of the same text-model call so the visual stays
/// consistent with the copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPostContent {
    pub post_text: String,
    pub image_prompt: String,
}

/// The structured output of one text-generation call: content for all three
/// platforms at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResponse {
    pub linkedin: GeneratedPostContent,
    pub twitter: GeneratedPostContent,
    pub instagram: GeneratedPostContent,
}

impl GenerationResponse {
    #[must_use]
    pub fn get(&self, platform: Platform) -> &GeneratedPostContent {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_wire_names_match_display() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }

    #[test]
    fn tone_wire_names_match_display() {
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{tone}\""));
        }
    }

    #[test]
    fn controversial_tone_keeps_slash_form() {
        assert_eq!(Tone::BoldControversial.as_str(), "Bold/Controversial");
        assert_eq!(
            serde_json::to_string(&Tone::BoldControversial).unwrap(),
            "\"Bold/Controversial\""
        );
    }

    #[test]
    fn aspect_ratios_are_fixed_per_platform() {
        assert_eq!(Platform::LinkedIn.aspect_ratio(), AspectRatio::Landscape16x9);
        assert_eq!(Platform::Twitter.aspect_ratio(), AspectRatio::Landscape16x9);
        assert_eq!(Platform::Instagram.aspect_ratio(), AspectRatio::Portrait3x4);
    }

    #[test]
    fn generation_response_uses_camel_case_keys() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{
                "linkedin": {"postText": "a", "imagePrompt": "b"},
                "twitter": {"postText": "c", "imagePrompt": "d"},
                "instagram": {"postText": "e", "imagePrompt": "f"}
            }"#,
        )
        .unwrap();
        assert_eq!(response.get(Platform::Twitter).post_text, "c");
        assert_eq!(response.get(Platform::Instagram).image_prompt, "f");
    }
}
