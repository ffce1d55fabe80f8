// Shared models - Speaker labeling
use serde::{Deserialize, Serialize};

/// How detected speakers are labeled in a finished transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SpeakerLabelMode {
    /// Keep Speaker A, B, C... (default)
    #[default]
    Generic,
    /// Try to auto-detect names from the conversation
    AutoNames,
    /// User provides known speaker names
    KnownNames,
    /// Roles: Interviewer, Interviewee
    Interview,
    /// Roles: Host, Guest
    Podcast,
    /// Roles: Moderator, Panelist
    Panel,
    /// User provides custom roles
    CustomRoles,
}

/// The kind of input a speaker label mode asks of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerLabelKind {
    None,
    Name,
    Role,
}

/// Display metadata for one speaker label mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeakerLabelOption {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: SpeakerLabelKind,
    /// Fixed role values, for the modes that predefine them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<&'static [&'static str]>,
}

impl SpeakerLabelMode {
    /// Every mode, in the order the options panel lists them.
    pub const ALL: [SpeakerLabelMode; 7] = [
        SpeakerLabelMode::Generic,
        SpeakerLabelMode::AutoNames,
        SpeakerLabelMode::KnownNames,
        SpeakerLabelMode::Interview,
        SpeakerLabelMode::Podcast,
        SpeakerLabelMode::Panel,
        SpeakerLabelMode::CustomRoles,
    ];

    /// Display metadata for this mode. Total: every mode has exactly one entry.
    pub fn option(&self) -> SpeakerLabelOption {
        match self {
            SpeakerLabelMode::Generic => SpeakerLabelOption {
                label: "Generic (Speaker A, B, C...)",
                kind: SpeakerLabelKind::None,
                values: None,
            },
            SpeakerLabelMode::AutoNames => SpeakerLabelOption {
                label: "Auto-detect names",
                kind: SpeakerLabelKind::Name,
                values: Some(&[]),
            },
            SpeakerLabelMode::KnownNames => SpeakerLabelOption {
                label: "Enter known names...",
                kind: SpeakerLabelKind::Name,
                values: None,
            },
            SpeakerLabelMode::Interview => SpeakerLabelOption {
                label: "Interview (Interviewer/Interviewee)",
                kind: SpeakerLabelKind::Role,
                values: Some(&["Interviewer", "Interviewee"]),
            },
            SpeakerLabelMode::Podcast => SpeakerLabelOption {
                label: "Podcast (Host/Guest)",
                kind: SpeakerLabelKind::Role,
                values: Some(&["Host", "Guest"]),
            },
            SpeakerLabelMode::Panel => SpeakerLabelOption {
                label: "Panel (Moderator/Panelist)",
                kind: SpeakerLabelKind::Role,
                values: Some(&["Moderator", "Panelist"]),
            },
            SpeakerLabelMode::CustomRoles => SpeakerLabelOption {
                label: "Custom roles...",
                kind: SpeakerLabelKind::Role,
                values: None,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerLabelMode::Generic => "generic",
            SpeakerLabelMode::AutoNames => "auto-names",
            SpeakerLabelMode::KnownNames => "known-names",
            SpeakerLabelMode::Interview => "interview",
            SpeakerLabelMode::Podcast => "podcast",
            SpeakerLabelMode::Panel => "panel",
            SpeakerLabelMode::CustomRoles => "custom-roles",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "generic" => SpeakerLabelMode::Generic,
            "auto-names" => SpeakerLabelMode::AutoNames,
            "known-names" => SpeakerLabelMode::KnownNames,
            "interview" => SpeakerLabelMode::Interview,
            "podcast" => SpeakerLabelMode::Podcast,
            "panel" => SpeakerLabelMode::Panel,
            "custom-roles" => SpeakerLabelMode::CustomRoles,
            _ => SpeakerLabelMode::Generic,
        }
    }
}

/// Deprecated coarse conversation classification.
///
/// Kept so configurations persisted before speaker label modes existed
/// stay readable and displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    None,
    Interview,
    Meeting,
    Panel,
}

impl ConversationType {
    pub const ALL: [ConversationType; 4] = [
        ConversationType::None,
        ConversationType::Interview,
        ConversationType::Meeting,
        ConversationType::Panel,
    ];

    /// Display label. Total over all four legacy values.
    pub fn label(&self) -> &'static str {
        match self {
            ConversationType::None => "Generic (Speaker A, B, C...)",
            ConversationType::Interview => "Interview",
            ConversationType::Meeting => "Meeting / Presentation",
            ConversationType::Panel => "Panel Discussion",
        }
    }

    /// The label mode a legacy classification upgrades to.
    ///
    /// Meeting had no role pair in the old scheme, so it maps to generic.
    pub fn speaker_label_mode(&self) -> SpeakerLabelMode {
        match self {
            ConversationType::None => SpeakerLabelMode::Generic,
            ConversationType::Interview => SpeakerLabelMode::Interview,
            ConversationType::Meeting => SpeakerLabelMode::Generic,
            ConversationType::Panel => SpeakerLabelMode::Panel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationType::None => "none",
            ConversationType::Interview => "interview",
            ConversationType::Meeting => "meeting",
            ConversationType::Panel => "panel",
        }
    }
}
