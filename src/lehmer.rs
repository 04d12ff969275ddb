//! Deterministic uniform random source
//!
//! Park–Miller "minimal standard" Lehmer generator: `state = state * 16807 mod (2^31 - 1)`.
//! Chosen for exact reproducibility across processes and platforms, not for
//! statistical quality. Two generators built from the same seed emit the same
//! sequence forever.

/// Multiplier of the minimal standard generator (7^5)
pub const MULTIPLIER: i64 = 16_807;

/// Modulus of the generator (2^31 - 1, a Mersenne prime)
pub const MODULUS: i64 = 2_147_483_647;

/// Seeded Lehmer generator producing values in the open interval (0, 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LehmerRng {
    /// Always in `[1, MODULUS - 1]`; zero is a fixed point and never reached
    state: i64,
}

impl LehmerRng {
    /// Create a generator from an arbitrary integer seed
    ///
    /// The seed is reduced modulo [`MODULUS`]; a non-positive remainder is shifted
    /// up by `MODULUS - 1`, so seeds like `0` or `-5` still start from a valid state.
    ///
    /// # Example
    /// ```
    /// use madlens::lehmer::LehmerRng;
    ///
    /// let mut a = LehmerRng::new(42);
    /// let mut b = LehmerRng::new(42);
    /// assert_eq!(a.next_unit(), b.next_unit());
    /// ```
    pub fn new(seed: i64) -> Self {
        Self {
            state: normalize_seed(seed),
        }
    }

    /// Advance the generator and return the next value in (0, 1)
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Current internal state (diagnostics only)
    pub fn state(&self) -> i64 {
        self.state
    }
}

impl Iterator for LehmerRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}

/// Map any seed into `[1, MODULUS - 1]`
fn normalize_seed(seed: i64) -> i64 {
    let mut state = seed % MODULUS;
    if state <= 0 {
        state += MODULUS - 1;
    }
    // seed ≡ -(MODULUS - 1) still lands on zero after the shift
    if state == 0 {
        state = MODULUS - 1;
    }
    state
}
