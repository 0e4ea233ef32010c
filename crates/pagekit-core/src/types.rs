//! Page archetypes, output targets, and markup dialects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A page pattern pagekit knows how to scaffold.
///
/// The discriminant is stable and doubles as an index into per-archetype
/// tables (see [`Archetype::index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Landing,
    Dashboard,
    AuthLogin,
    AuthSignup,
    Pricing,
    Settings,
    CrudTable,
    BlogList,
    Onboarding,
    #[serde(rename = "error_404")]
    Error404,
}

impl Archetype {
    /// Every archetype, in index order.
    pub const ALL: [Archetype; 10] = [
        Self::Landing,
        Self::Dashboard,
        Self::AuthLogin,
        Self::AuthSignup,
        Self::Pricing,
        Self::Settings,
        Self::CrudTable,
        Self::BlogList,
        Self::Onboarding,
        Self::Error404,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dashboard => "dashboard",
            Self::AuthLogin => "auth_login",
            Self::AuthSignup => "auth_signup",
            Self::Pricing => "pricing",
            Self::Settings => "settings",
            Self::CrudTable => "crud_table",
            Self::BlogList => "blog_list",
            Self::Onboarding => "onboarding",
            Self::Error404 => "error_404",
        }
    }

    /// Position of this archetype in [`Archetype::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = CoreError;

    /// Parse an archetype name. Hyphens, spaces and letter case are ignored,
    /// so `"auth-login"` and `"Auth Login"` both resolve to [`Archetype::AuthLogin`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownArchetype(s.to_string()))
    }
}

/// Archetype as requested by a caller: either a known archetype or a raw
/// name outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArchetypeName {
    Known(Archetype),
    Unknown(String),
}

impl ArchetypeName {
    /// Resolve a caller-supplied name without failing.
    ///
    /// Surrounding whitespace is trimmed first; the trimmed name is the one
    /// identifiers and output paths are derived from.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match name.parse() {
            Ok(archetype) => Self::Known(archetype),
            Err(_) => Self::Unknown(name.to_string()),
        }
    }

    /// The name used for component identifiers and output paths.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(archetype) => archetype.as_str(),
            Self::Unknown(name) => name,
        }
    }

    /// The known archetype, if any.
    pub fn known(&self) -> Option<Archetype> {
        match self {
            Self::Known(archetype) => Some(*archetype),
            Self::Unknown(_) => None,
        }
    }
}

impl From<Archetype> for ArchetypeName {
    fn from(archetype: Archetype) -> Self {
        Self::Known(archetype)
    }
}

impl fmt::Display for ArchetypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup syntax family a target's templates are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// JSX: `className`, `htmlFor`, camelCase SVG attributes, `{/* */}` comments.
    /// This is also the neutral dialect page bodies are authored in.
    Jsx,
    /// Plain HTML attribute and comment syntax, shared by template frameworks.
    Html,
}

/// An output ecosystem pagekit emits source files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    React,
    Nextjs,
    Vue,
    Angular,
    Svelte,
    Html,
}

impl Target {
    /// Every target.
    pub const ALL: [Target; 6] = [
        Self::React,
        Self::Nextjs,
        Self::Vue,
        Self::Angular,
        Self::Svelte,
        Self::Html,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Nextjs => "nextjs",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Svelte => "svelte",
            Self::Html => "html",
        }
    }

    /// Default output file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::React | Self::Nextjs => "tsx",
            Self::Vue => "vue",
            Self::Angular => "component.ts",
            Self::Svelte => "svelte",
            Self::Html => "html",
        }
    }

    /// Markup dialect of this target's templates.
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::React | Self::Nextjs => Dialect::Jsx,
            Self::Vue | Self::Angular | Self::Svelte | Self::Html => Dialect::Html,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Self::React),
            "nextjs" | "next" | "next.js" => Ok(Self::Nextjs),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            "svelte" => Ok(Self::Svelte),
            "html" => Ok(Self::Html),
            _ => Err(CoreError::UnknownTarget(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::to_path_segment;

    #[test]
    fn test_archetype_round_trips_through_name() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.as_str().parse::<Archetype>(), Ok(archetype));
        }
    }

    #[test]
    fn test_archetype_index_matches_all() {
        for (i, archetype) in Archetype::ALL.iter().enumerate() {
            assert_eq!(archetype.index(), i);
        }
    }

    #[test]
    fn test_archetype_parse_variants() {
        assert_eq!("auth-login".parse(), Ok(Archetype::AuthLogin));
        assert_eq!("Crud Table".parse(), Ok(Archetype::CrudTable));
        assert_eq!(
            "unknown_archetype".parse::<Archetype>(),
            Err(CoreError::UnknownArchetype("unknown_archetype".into()))
        );
    }

    #[test]
    fn test_archetype_name_fallback() {
        assert_eq!(
            ArchetypeName::parse("pricing"),
            ArchetypeName::Known(Archetype::Pricing)
        );
        let unknown = ArchetypeName::parse("kanban_board");
        assert_eq!(unknown.as_str(), "kanban_board");
        assert_eq!(unknown.known(), None);
    }

    #[test]
    fn test_archetype_name_is_trimmed() {
        assert_eq!(
            ArchetypeName::parse(" landing\n"),
            ArchetypeName::Known(Archetype::Landing)
        );
        let unknown = ArchetypeName::parse("  kanban board ");
        assert_eq!(unknown.as_str(), "kanban board");
        assert_eq!(to_path_segment(unknown.as_str()), "kanban-board");
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("Next.js".parse(), Ok(Target::Nextjs));
        assert_eq!("svelte".parse(), Ok(Target::Svelte));
        assert!("solid".parse::<Target>().is_err());
    }

    #[test]
    fn test_target_dialects() {
        assert_eq!(Target::React.dialect(), Dialect::Jsx);
        assert_eq!(Target::Nextjs.dialect(), Dialect::Jsx);
        for target in [Target::Vue, Target::Angular, Target::Svelte, Target::Html] {
            assert_eq!(target.dialect(), Dialect::Html);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Archetype::Error404).unwrap();
        assert_eq!(json, "\"error_404\"");
        let target: Target = serde_json::from_str("\"nextjs\"").unwrap();
        assert_eq!(target, Target::Nextjs);
    }
}
