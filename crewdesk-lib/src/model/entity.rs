//! Entity kinds (the back-office tabs)

use serde::Deserialize;
use serde::Serialize;

/// The four entity types the back office manages.
///
/// Each kind corresponds to one tab in a front end: a table of records of
/// that kind with its own filters, sort order, and selection. Switching
/// the active kind discards all of that per-tab state.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::EntityKind;
///
/// let kind: EntityKind = "candidate".parse().unwrap();
/// assert_eq!(kind, EntityKind::Candidate);
/// assert_eq!(kind.name(), "candidate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A client company with open roles.
    Client,
    /// A candidate in the placement pipeline.
    Candidate,
    /// A back-office user (recruiter, admin).
    User,
    /// A revenue transaction booked against a client.
    Transaction,
}

impl EntityKind {
    /// All entity kinds, in tab order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Client,
        EntityKind::Candidate,
        EntityKind::User,
        EntityKind::Transaction,
    ];

    /// Returns the logical name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Candidate => "candidate",
            Self::User => "user",
            Self::Transaction => "transaction",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "candidate" => Ok(Self::Candidate),
            "user" => Ok(Self::User),
            "transaction" => Ok(Self::Transaction),
            other => Err(format!("unknown entity kind '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in EntityKind::ALL {
            let parsed: EntityKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!("invoice".parse::<EntityKind>().is_err());
    }
}
