mod draw;
mod odds;
mod reveal;

use draw_toolbox::draw::{self as prizes, build_pool, DrawPlan};
use draw_toolbox::models::CandidateRow;
use draw_toolbox::utils::{
    self,
    csv::{dump_data_to_csv, dump_data_to_writer, load_data_from_csv},
};
use lottery_lib::{Candidate, Seed};
use std::fs::File;
use serde::Serialize;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] ::csv::Error),

    #[error("invalid prize plan: {0}")]
    Plan(#[from] serde_json::Error),

    #[error(transparent)]
    Draw(#[from] prizes::Error),

    #[error("invalid seed, expected 64 hex characters: {0}")]
    Seed(#[from] hex::FromHexError),

    #[error("time scale must be between 0.001 and 1000, got {0}")]
    TimeScale(f64),
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Cli {
    /// Draw the winners and write them as csv
    Draw(draw::Draw),
    /// Draw the winners and reveal them one round at a time
    Reveal(reveal::Reveal),
    /// Chance of every candidate to win the first round
    Odds(odds::Odds),
}

impl Cli {
    pub fn exec(self) -> Result<(), Error> {
        match self {
            Cli::Draw(cmd) => cmd.exec(),
            Cli::Reveal(cmd) => cmd.exec(),
            Cli::Odds(cmd) => cmd.exec(),
        }
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Candidates {
    /// Participants csv file path. Needs `id` and `weight` (or `tickets`)
    /// columns, `name`, `group` and `excluded` are optional
    #[structopt(long)]
    candidates: PathBuf,

    /// Use ';' instead of ',' as the csv delimiter
    #[structopt(long)]
    semicolon: bool,
}

impl Candidates {
    pub fn load(&self) -> Result<Vec<Candidate>, Error> {
        let rows: Vec<CandidateRow> = if self.semicolon {
            load_data_from_csv::<_, b';'>(&self.candidates)?
        } else {
            load_data_from_csv::<_, b','>(&self.candidates)?
        };
        let pool = build_pool(rows)?;
        info!(eligible = pool.len(), "candidates loaded");
        Ok(pool)
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct DrawSetup {
    #[structopt(flatten)]
    candidates: Candidates,

    /// Prize plan json file path
    #[structopt(long, required_unless = "count", conflicts_with = "count")]
    plan: Option<PathBuf>,

    /// Number of winners of a single prize, when no plan is given
    #[structopt(long)]
    count: Option<usize>,

    /// Hex encoded 32 bytes seed. A random one is generated (and logged) if missing
    #[structopt(long)]
    seed: Option<String>,
}

impl DrawSetup {
    pub fn load(&self) -> Result<(DrawPlan, Vec<Candidate>, Seed), Error> {
        let plan = match (&self.plan, self.count) {
            (Some(path), _) => load_plan(path)?,
            (None, Some(count)) => DrawPlan::single(count),
            (None, None) => DrawPlan::single(1),
        };
        plan.validate()?;

        let seed = match &self.seed {
            Some(seed) => utils::parse_seed(seed)?,
            None => utils::random_seed(),
        };
        info!(seed = %hex::encode(seed), "using seed");

        Ok((plan, self.candidates.load()?, seed))
    }
}

fn load_plan(path: &Path) -> Result<DrawPlan, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write `records` as csv to `output`, or to stdout when no path is given.
pub fn write_records<T: Serialize>(records: &[T], output: &Option<PathBuf>) -> Result<(), Error> {
    match output {
        Some(path) => dump_data_to_csv(records, path)?,
        None => dump_data_to_writer(records, io::stdout())?,
    }
    Ok(())
}
