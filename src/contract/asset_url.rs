use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::LazyLock};

use super::error::SchemaError;

/// All question, solution and KSC images are served from this blob container.
pub const ASSET_BASE_URL: &str = "https://questionkscimagestorage.blob.core.windows.net/dataimages";

static QUESTION_DIAGRAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^https://questionkscimagestorage\.blob\.core\.windows\.net/dataimages/questionImages/(?P<name>.*)\.JPG$",
    )
    .expect("question diagram regex is invalid")
});

static FULL_SOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^https://questionkscimagestorage\.blob\.core\.windows\.net/dataimages/fullsolutionImages/(?P<name>.*)-Solution\.JPG$",
    )
    .expect("full solution regex is invalid")
});

static KSC_DIAGRAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^https://questionkscimagestorage\.blob\.core\.windows\.net/dataimages/kscImages/(?P<name>.*)\.JPG$",
    )
    .expect("ksc diagram regex is invalid")
});

macro_rules! asset_url {
    ($(#[$meta:meta])* $name:ident, $regex:ident, $field:literal, $shape:literal) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const PATTERN: &'static str = $shape;

            pub fn parse(url: impl Into<String>) -> Result<Self, SchemaError> {
                let url = url.into();
                if $regex.is_match(&url) {
                    Ok(Self(url))
                } else {
                    Err(SchemaError::violation(
                        $field,
                        format!("a URL shaped like {} (got '{}')", Self::PATTERN, url),
                    ))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The `<name>` part of the URL.
            pub fn name(&self) -> &str {
                $regex
                    .captures(&self.0)
                    .and_then(|caps| caps.name("name"))
                    .map_or("", |m| m.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = SchemaError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

asset_url!(
    /// `questionDiagramURL`, the rendered question image.
    QuestionDiagramUrl,
    QUESTION_DIAGRAM,
    "questionDiagramURL",
    "https://questionkscimagestorage.blob.core.windows.net/dataimages/questionImages/<name>.JPG"
);

asset_url!(
    /// `fullSolutionURL`, the worked-solution image.
    FullSolutionUrl,
    FULL_SOLUTION,
    "fullSolutionURL",
    "https://questionkscimagestorage.blob.core.windows.net/dataimages/fullsolutionImages/<name>-Solution.JPG"
);

asset_url!(
    /// `kscDiagramURL`
    KscDiagramUrl,
    KSC_DIAGRAM,
    "kscDiagramURL",
    "https://questionkscimagestorage.blob.core.windows.net/dataimages/kscImages/<name>.JPG"
);
