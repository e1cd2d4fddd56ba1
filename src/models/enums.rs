use crate::triage::TriageError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::MalformedInput {
                        field: stringify!($name).into(),
                        reason: format!("unrecognized value `{s}`"),
                    }),
                }
            }
        }
    };
}

str_enum!(IronFolicIntake {
    Regular => "regular",
    Irregular => "irregular",
    NotStarted => "not-started",
});

str_enum!(DietType {
    Veg => "veg",
    NonVeg => "non-veg",
});

str_enum!(RiskCategory {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(Direction {
    Increase => "increase",
    Decrease => "decrease",
});
