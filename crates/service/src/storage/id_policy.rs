use std::str::FromStr;

/// How the next identifier is derived after a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// `number of records + 1`. Ids of deleted records get handed out again and
    /// can collide with a live record.
    #[default]
    CountPlusOne,
    /// `highest id + 1`; ids are never reused.
    MaxPlusOne,
}

impl IdPolicy {
    pub fn next_id<I>(self, ids: I) -> u64
    where
        I: IntoIterator<Item = u64>,
    {
        match self {
            Self::CountPlusOne => ids.into_iter().count() as u64 + 1,
            Self::MaxPlusOne => ids.into_iter().max().unwrap_or(0) + 1,
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "count_plus_one" => Ok(Self::CountPlusOne),
            "max" | "max_plus_one" => Ok(Self::MaxPlusOne),
            other => Err(format!("unknown id policy `{other}`")),
        }
    }
}
