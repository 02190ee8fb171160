use crate::models::CandidateRow;
use itertools::Itertools;
use lottery_lib::{Candidate, CandidateId, RandomSource};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_CATEGORY: &str = "winner";
const DEFAULT_PAUSE_SECS: u64 = 3;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the prize plan has no categories")]
    EmptyPlan,

    #[error("prize category {0} awards no winners")]
    ZeroWinnersCategory(String),

    #[error("the prize plan awards more winners than can be counted")]
    TooManyWinners,

    #[error("candidate {0} is listed more than once")]
    DuplicateCandidate(CandidateId),
}

/// How long each round of a category is shown for.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RevealTiming {
    pub countdown_secs: u64,
    pub reveal_secs: u64,
}

impl RevealTiming {
    pub fn countdown(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }

    pub fn reveal(&self) -> Duration {
        Duration::from_secs(self.reveal_secs)
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            countdown_secs: 10,
            reveal_secs: 5,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PrizeCategory {
    pub category: String,
    pub winners: usize,
    #[serde(flatten)]
    pub timing: RevealTiming,
}

/// Prize categories in reveal order. The first `winners` rounds of the draw
/// go to the first category, the following ones to the next, and so on.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawPlan {
    pub prizes: Vec<PrizeCategory>,
    #[serde(default = "default_pause_secs")]
    pub pause_secs: u64,
}

fn default_pause_secs() -> u64 {
    DEFAULT_PAUSE_SECS
}

impl DrawPlan {
    /// A plan with a single category, used when only a winner count is given.
    pub fn single(winners: usize) -> Self {
        Self {
            prizes: vec![PrizeCategory {
                category: DEFAULT_CATEGORY.to_string(),
                winners,
                timing: RevealTiming::default(),
            }],
            pause_secs: DEFAULT_PAUSE_SECS,
        }
    }

    /// Saturates instead of overflowing, [`DrawPlan::validate`] rejects such
    /// plans.
    pub fn total_winners(&self) -> usize {
        self.prizes
            .iter()
            .fold(0usize, |total, prize| total.saturating_add(prize.winners))
    }

    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.prizes.is_empty() {
            return Err(Error::EmptyPlan);
        }
        if let Some(prize) = self.prizes.iter().find(|prize| prize.winners == 0) {
            return Err(Error::ZeroWinnersCategory(prize.category.clone()));
        }
        self.prizes
            .iter()
            .try_fold(0usize, |total, prize| total.checked_add(prize.winners))
            .ok_or(Error::TooManyWinners)?;
        Ok(())
    }

    fn rounds(&self) -> impl Iterator<Item = &PrizeCategory> {
        self.prizes
            .iter()
            .flat_map(|prize| std::iter::repeat(prize).take(prize.winners))
    }
}

/// A winner together with the round and category it was drawn for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Award {
    /// 1-based
    pub round: usize,
    pub category: String,
    pub timing: RevealTiming,
    pub winner: Candidate,
}

/// Turn the participants sheet into the pool of eligible candidates.
///
/// Excluded rows are dropped, the order of the sheet is kept since it decides
/// how the tickets are laid out during the draw.
pub fn build_pool(rows: Vec<CandidateRow>) -> Result<Vec<Candidate>, Error> {
    if let Some(id) = rows.iter().map(|row| &row.id).duplicates().next() {
        return Err(Error::DuplicateCandidate(id.clone()));
    }

    Ok(rows
        .into_iter()
        .filter(|row| {
            if row.excluded {
                debug!(id = %row.id, "skipping excluded candidate");
            }
            !row.excluded
        })
        .map(Candidate::from)
        .collect())
}

/// Draw every prize of `plan` in one go and assign the winners to categories.
///
/// If the pool runs dry before the plan is fulfilled the remaining rounds are
/// left unawarded.
pub fn run_draw<S>(plan: &DrawPlan, pool: &[Candidate], source: &mut S) -> Result<Vec<Award>, Error>
where
    S: RandomSource + ?Sized,
{
    plan.validate()?;

    let requested = plan.total_winners();
    let winners = lottery_lib::select(pool, requested, source);
    if winners.len() < requested {
        warn!(
            requested,
            drawn = winners.len(),
            "not enough candidates to award every prize"
        );
    }

    let awards = plan
        .rounds()
        .zip(winners)
        .enumerate()
        .map(|(i, (prize, winner))| Award {
            round: i + 1,
            category: prize.category.clone(),
            timing: prize.timing,
            winner,
        })
        .collect::<Vec<_>>();

    info!(
        pool = pool.len(),
        awarded = awards.len(),
        "draw completed"
    );
    Ok(awards)
}
