// src/generators/password.rs
use rand::rngs::ThreadRng;
use rand::Rng;

// Builds a password by drawing one pool character per position, uniformly
// and independently. No class-coverage guarantee: a short password may miss
// a selected class entirely, which matches the advertised distribution.
//
// The random source is injected so tests can seed a deterministic RNG.
pub struct PasswordGenerator<R: Rng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    // Callers guarantee a non-empty pool; requests with every character
    // class disabled are rejected before this is reached.
    pub fn generate(&mut self, pool: &str, length: usize) -> String {
        let chars: Vec<char> = pool.chars().collect();

        let mut password = String::with_capacity(length);
        for _ in 0..length {
            let index = self.rng.gen_range(0..chars.len());
            password.push(chars[index]);
        }
        password
    }
}
