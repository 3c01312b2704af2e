use log::{info, warn};

use crate::domain::{RaceResult, ResultCollection, UnofficialRecord};
use crate::errors::SwimError;

pub const OFFICIAL_FEED: &str = "official results";
pub const UNOFFICIAL_FEED: &str = "unofficial results";

/// Combines the authoritative feed with the secondary one.
///
/// Official results are required: their failure fails the merge. Unofficial
/// results are tagged and appended after them; if that feed failed, the
/// official results are returned alone. A swim present in both feeds is kept
/// once, as official.
pub fn merge_official_and_unofficial(
    official: anyhow::Result<Vec<RaceResult>>,
    unofficial: anyhow::Result<Vec<UnofficialRecord>>,
) -> Result<Vec<RaceResult>, SwimError> {
    let official = official.map_err(|e| SwimError::unavailable(OFFICIAL_FEED, &e))?;

    let mut collection = ResultCollection::new();
    collection.extend(official);
    if collection.is_empty() {
        warn!("The {} feed holds no results", OFFICIAL_FEED);
    }
    let official_count = collection.len();

    match unofficial {
        Ok(records) => {
            let total = records.len();
            let kept = collection.extend(records.into_iter().map(RaceResult::from));
            info!(
                "Merged {} official and {} unofficial results ({} duplicates dropped)",
                official_count,
                kept,
                total - kept
            );
        }
        Err(e) => {
            warn!("Continuing with official results only, {} failed: {:#}", UNOFFICIAL_FEED, e);
        }
    }

    Ok(collection.into_vec())
}
