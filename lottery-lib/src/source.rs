use rand::Rng;

/// Provider of uniformly distributed fractions in `[0, 1)`.
///
/// The selector never reaches for a global generator, whatever drives the
/// draw has to be handed in explicitly. Plain closures work, which keeps
/// scripted draws in tests short.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_fraction(&mut self) -> f64 {
        self()
    }
}

/// Adapts any [`rand::Rng`] (including `&mut R`) into a [`RandomSource`].
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_fraction(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
