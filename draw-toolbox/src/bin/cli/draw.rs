use super::{write_records, DrawSetup, Error};
use draw_toolbox::draw::run_draw;
use draw_toolbox::models::WinnerRecord;
use lottery_lib::RngSource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Draw {
    #[structopt(flatten)]
    setup: DrawSetup,

    /// Winners csv output path, stdout if missing
    #[structopt(long)]
    output: Option<PathBuf>,
}

impl Draw {
    pub fn exec(self) -> Result<(), Error> {
        let Self { setup, output } = self;
        let (plan, pool, seed) = setup.load()?;

        let mut source = RngSource(ChaCha8Rng::from_seed(seed));
        let awards = run_draw(&plan, &pool, &mut source)?;

        let records = awards.iter().map(WinnerRecord::from).collect::<Vec<_>>();
        write_records(&records, &output)?;
        Ok(())
    }
}
