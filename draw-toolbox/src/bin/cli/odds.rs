use super::{write_records, Candidates, Error};
use draw_toolbox::models::OddsRecord;
use lottery_lib::first_round_odds;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Odds {
    #[structopt(flatten)]
    candidates: Candidates,

    /// Odds csv output path, stdout if missing
    #[structopt(long)]
    output: Option<PathBuf>,
}

impl Odds {
    pub fn exec(self) -> Result<(), Error> {
        let pool = self.candidates.load()?;
        let records = pool
            .iter()
            .zip(first_round_odds(&pool))
            .map(|(candidate, probability)| OddsRecord {
                id: candidate.id.clone(),
                weight: candidate.weight,
                probability,
            })
            .collect::<Vec<_>>();
        write_records(&records, &self.output)?;
        Ok(())
    }
}
