use std::fmt;
use std::str::FromStr;

/// One of the four record collections exposed as a table page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySet {
    Personnel,
    Route,
    Schedule,
    Stop,
}

impl EntitySet {
    /// All sets, in navigation order.
    pub const ALL: [EntitySet; 4] = [
        EntitySet::Personnel,
        EntitySet::Route,
        EntitySet::Schedule,
        EntitySet::Stop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntitySet::Personnel => "Personnel",
            EntitySet::Route => "Route",
            EntitySet::Schedule => "Schedule",
            EntitySet::Stop => "Stop",
        }
    }
}

impl fmt::Display for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntitySet {
    type Err = String;

    /// Matches the path segment exactly; `route` is not `Route`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntitySet::ALL
            .into_iter()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| format!("Unknown table: '{}'", s))
    }
}
