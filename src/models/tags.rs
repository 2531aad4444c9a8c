use serde::{Deserialize, Serialize};

/// Declares a closed tag universe with its display labels.
///
/// Every tag enum gets `ALL` in declaration order, `as_str()` and a
/// `Display` impl, and serializes as its label.
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum! {
    /// Functional skill a founder brings
    Skill {
        Technical => "Technical",
        Design => "Design",
        Marketing => "Marketing",
        Sales => "Sales",
        Finance => "Finance",
        Operations => "Operations",
    }
}

tag_enum! {
    /// Market a founder wants to build in
    Interest {
        Ai => "AI",
        Fintech => "Fintech",
        Health => "Health",
        Education => "Education",
        Enterprise => "Enterprise",
        Consumer => "Consumer",
    }
}

tag_enum! {
    Strength {
        Leadership => "Leadership",
        Execution => "Execution",
        Creativity => "Creativity",
        Analysis => "Analysis",
        Networking => "Networking",
    }
}

tag_enum! {
    Weakness {
        Impatience => "Impatience",
        Perfectionism => "Perfectionism",
        RiskAverse => "Risk-averse",
        Overconfidence => "Overconfidence",
    }
}

tag_enum! {
    /// Preferred pace and mode of working
    WorkStyle {
        FastPaced => "Fast-paced",
        Methodical => "Methodical",
        Collaborative => "Collaborative",
        Independent => "Independent",
    }
}

tag_enum! {
    /// Core value a founder cares about
    Value {
        Innovation => "Innovation",
        Impact => "Impact",
        Growth => "Growth",
        Balance => "Balance",
        Ethics => "Ethics",
        Quality => "Quality",
    }
}
