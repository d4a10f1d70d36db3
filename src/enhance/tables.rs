//! Canned phrase tables for enhanced prompts.

use serde::{Deserialize, Serialize};

/// Mood applied to an enhanced prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Dramatic,
    Peaceful,
    Epic,
    Mysterious,
    Vibrant,
}

impl Mood {
    /// All moods in the order batches cycle through them.
    pub const ALL: [Mood; 5] = [
        Mood::Dramatic,
        Mood::Peaceful,
        Mood::Epic,
        Mood::Mysterious,
        Mood::Vibrant,
    ];

    /// Parse a mood name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dramatic" => Some(Self::Dramatic),
            "peaceful" => Some(Self::Peaceful),
            "epic" => Some(Self::Epic),
            "mysterious" => Some(Self::Mysterious),
            "vibrant" => Some(Self::Vibrant),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Dramatic => "dramatic",
            Mood::Peaceful => "peaceful",
            Mood::Epic => "epic",
            Mood::Mysterious => "mysterious",
            Mood::Vibrant => "vibrant",
        }
    }

    /// The phrase this mood contributes to a prompt.
    pub fn modifier(self) -> &'static str {
        match self {
            Mood::Dramatic => "dramatic lighting, intense atmosphere, high contrast, bold shadows",
            Mood::Peaceful => "soft lighting, calm atmosphere, serene mood, gentle colors",
            Mood::Epic => "epic scale, grandiose composition, heroic pose, majestic lighting",
            Mood::Mysterious => {
                "mysterious atmosphere, shadowy lighting, enigmatic mood, dark ambiance"
            }
            Mood::Vibrant => {
                "bright vivid colors, energetic composition, lively atmosphere, dynamic lighting"
            }
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix, suffix, and negatives wrapped around an enhanced prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleFrame {
    pub key: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub negatives: &'static str,
}

/// Style frames; the first entry is the fallback for unknown styles.
pub const STYLE_FRAMES: [StyleFrame; 6] = [
    StyleFrame {
        key: "anime",
        prefix: "highly detailed anime character illustration, dynamic action pose, colorful fantasy background, crisp clean lineart, masterpiece, soft cell shading, expressive face, trending on artstation, detailed 4k rendering",
        suffix: "anime style, best quality",
        negatives: "bad anatomy, bad hands, poorly drawn face, signature, watermark, blurry, distorted, out of frame, chibi, deformed, mutation",
    },
    StyleFrame {
        key: "photorealistic",
        prefix: "photorealistic, ultra detailed, hyper-realistic texture, dramatic lighting, realistic skin, sharp focus, professional photography, 8k, high definition, perfect composition",
        suffix: "professional photography, award winning",
        negatives: "cartoon, anime, painting, drawing, sketch, blurry, low quality, distorted, watermark, artificial",
    },
    StyleFrame {
        key: "cinematic",
        prefix: "cinematic composition, film lighting, dramatic mood, wide establishing shot, epic scene, volumetric lighting, professional color grading, detailed environment, movie depth of field",
        suffix: "cinematic masterpiece, film quality",
        negatives: "amateur, low budget, poor lighting, flat composition, watermark, signature, low quality",
    },
    StyleFrame {
        key: "digital_art",
        prefix: "digital painting masterpiece, concept art, vibrant colors, dynamic composition, detailed brushwork, trending on artstation, high resolution, professional illustration",
        suffix: "digital art, concept art quality",
        negatives: "blurry, low quality, amateur, sketch, unfinished, watermark, signature, pixelated",
    },
    StyleFrame {
        key: "comic",
        prefix: "comic book style illustration, bold inked lines, dynamic panel composition, vibrant pop art colors, dramatic action pose, professional comic art, halftone effects",
        suffix: "comic book art, professional illustration",
        negatives: "blurry, realistic photo, watermark, poor anatomy, bad hands, distorted, amateur",
    },
    StyleFrame {
        key: "pixel_art",
        prefix: "pixel art, 8-bit retro style, crisp pixel edges, nostalgic gaming aesthetic, minimalist design, retro color palette, classic arcade game style",
        suffix: "high quality pixel art, retro gaming",
        negatives: "blurry, anti-aliased, smooth gradients, photorealistic, watermark, low resolution",
    },
];

/// Frame for `key`, falling back to the anime frame.
pub fn style_frame(key: &str) -> &'static StyleFrame {
    STYLE_FRAMES
        .iter()
        .find(|frame| frame.key == key)
        .unwrap_or(&STYLE_FRAMES[0])
}

/// Shared quality phrases; enhanced prompts use the first four.
pub const QUALITY_MODIFIERS: [&str; 11] = [
    "masterpiece",
    "best quality",
    "ultra detailed",
    "sharp focus",
    "professionally made",
    "award winning",
    "trending on artstation",
    "highly detailed",
    "4k resolution",
    "perfect composition",
    "vivid colors",
];

/// Canonical subject expansions, in lookup order.
pub const SUBJECT_EXPANSIONS: [(&str, &str); 12] = [
    (
        "vasile",
        "Romanian medieval warrior named Vasile wearing traditional armor",
    ),
    (
        "dragon",
        "majestic dragon with detailed scales, powerful wings, and fierce expression",
    ),
    (
        "warrior",
        "heroic warrior in battle armor wielding a legendary weapon",
    ),
    (
        "princess",
        "elegant princess in royal dress with ornate crown and jewels",
    ),
    (
        "robot",
        "futuristic robot with advanced technology, glowing details, and sleek design",
    ),
    (
        "castle",
        "medieval castle with towering spires and detailed stone architecture",
    ),
    (
        "forest",
        "mystical forest with ancient trees and magical glowing atmosphere",
    ),
    (
        "city",
        "futuristic cityscape with towering buildings and neon lighting",
    ),
    ("knight", "noble knight in shining armor with heraldic symbols"),
    ("mage", "powerful mage with flowing robes and magical energy"),
    (
        "cat",
        "adorable cat with expressive eyes and detailed fur texture",
    ),
    (
        "house",
        "detailed architectural house with intricate design elements",
    ),
];
