use super::{DrawSetup, Error};
use draw_toolbox::draw::run_draw;
use draw_toolbox::reveal::{Phase, RevealEvent, RevealSequence};
use lottery_lib::RngSource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::thread;
use std::time::Duration;
use structopt::StructOpt;
use tracing::info;

const TICK: Duration = Duration::from_millis(250);
const MIN_TIME_SCALE: f64 = 0.001;
const MAX_TIME_SCALE: f64 = 1000.0;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Reveal {
    #[structopt(flatten)]
    setup: DrawSetup,

    /// Speed up (> 1) or slow down (< 1) the reveal
    #[structopt(long, default_value = "1.0")]
    time_scale: f64,
}

impl Reveal {
    pub fn exec(self) -> Result<(), Error> {
        let Self { setup, time_scale } = self;
        let time_scale = check_time_scale(time_scale)?;
        let (plan, pool, seed) = setup.load()?;

        let mut source = RngSource(ChaCha8Rng::from_seed(seed));
        let awards = run_draw(&plan, &pool, &mut source)?;
        let mut sequence = RevealSequence::new(awards, plan.pause());
        info!(
            rounds = sequence.awards().len(),
            duration = ?sequence.time_remaining(),
            "starting reveal"
        );
        if let Some(award) = sequence.current() {
            println!("Round {} ({})", award.round, award.category);
        }

        let mut last_second = None;
        while !sequence.is_complete() {
            thread::sleep(TICK.div_f64(time_scale));
            for event in sequence.tick(TICK) {
                match event {
                    RevealEvent::CountdownStarted { round, category } => {
                        println!("Round {} ({})", round, category);
                    }
                    RevealEvent::Revealed(award) => {
                        let name = if award.winner.name.is_empty() {
                            &award.winner.id
                        } else {
                            &award.winner.name
                        };
                        println!("  {} wins {}!", name, award.category);
                    }
                    RevealEvent::Completed => info!("reveal complete"),
                }
            }
            if let Phase::CountingDown { remaining, .. } = sequence.phase() {
                let second = remaining.as_secs() + 1;
                if last_second != Some(second) {
                    println!("  {}...", second);
                    last_second = Some(second);
                }
            }
        }
        Ok(())
    }
}

/// The sleep between ticks is `TICK / time_scale`, which must stay a
/// representable duration.
fn check_time_scale(time_scale: f64) -> Result<f64, Error> {
    if (MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&time_scale) {
        Ok(time_scale)
    } else {
        Err(Error::TimeScale(time_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_bounds() {
        for scale in [MIN_TIME_SCALE, 0.5, 1.0, 60.0, MAX_TIME_SCALE] {
            assert_eq!(check_time_scale(scale).unwrap(), scale);
            let _ = TICK.div_f64(scale);
        }
        for scale in [0.0, -1.0, 1e-300, 1e300, f64::NAN, f64::INFINITY] {
            assert!(matches!(check_time_scale(scale), Err(Error::TimeScale(_))));
        }
    }
}
