use rand::rngs::OsRng;
use rand::Rng;
use zeroize::Zeroizing;

use crate::charset;
use crate::options::GeneratorOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Uniform draw over pool indices.
    #[default]
    Uniform,
    /// The rounding sampler from the original tool. `round` instead of
    /// `floor` makes `pool.len()` itself a possible index; such a draw
    /// appends nothing, so output can come up short of the requested
    /// length, and the first and last pool characters are drawn at half
    /// the rate of the rest.
    Legacy,
}

pub fn generate_password(options: &GeneratorOptions, mode: SamplingMode) -> Zeroizing<String> {
    generate_with_rng(options, mode, &mut OsRng)
}

// Generic over the rng so tests can pass a seeded StdRng.
pub fn generate_with_rng<R: Rng>(
    options: &GeneratorOptions,
    mode: SamplingMode,
    rng: &mut R,
) -> Zeroizing<String> {
    let pool: Vec<char> = charset::compose(options).chars().collect();
    let mut password = Zeroizing::new(String::with_capacity(options.length));

    if pool.is_empty() {
        return password;
    }

    for _ in 0..options.length {
        let index = match mode {
            SamplingMode::Uniform => rng.gen_range(0..pool.len()),
            SamplingMode::Legacy => (rng.gen::<f64>() * pool.len() as f64).round() as usize,
        };

        if let Some(c) = pool.get(index) {
            password.push(*c);
        }
    }

    password
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{generate_password, generate_with_rng, SamplingMode};
    use crate::charset;
    use crate::options::GeneratorOptions;

    fn all_classes(length: usize) -> GeneratorOptions {
        GeneratorOptions {
            length,
            lowercase: true,
            uppercase: true,
            symbols: true,
            digits: true,
        }
    }

    #[test]
    fn test_lowercase_only_exact_length() {
        let options = GeneratorOptions {
            length: 8,
            ..GeneratorOptions::default()
        };

        let password = generate_password(&options, SamplingMode::Uniform);
        println!("{}", password.as_str());

        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_full_pool_exact_length() {
        let options = all_classes(16);
        let pool = charset::compose(&options);

        let password = generate_password(&options, SamplingMode::Uniform);
        println!("{}", password.as_str());

        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_empty_pool_yields_empty_password() {
        let options = GeneratorOptions {
            length: 12,
            lowercase: false,
            uppercase: false,
            symbols: false,
            digits: false,
        };

        let uniform = generate_password(&options, SamplingMode::Uniform);
        let legacy = generate_password(&options, SamplingMode::Legacy);

        assert_eq!(uniform.as_str(), "");
        assert_eq!(legacy.as_str(), "");
    }

    #[test]
    fn test_legacy_draws_from_pool() {
        let options = all_classes(16);
        let pool = charset::compose(&options);
        let mut rng = StdRng::seed_from_u64(7);

        let password = generate_with_rng(&options, SamplingMode::Legacy, &mut rng);
        println!("{}", password.as_str());

        assert!(password.len() <= 16);
        assert!(password.chars().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_legacy_drops_out_of_range_draws() {
        // With a lowercase-only pool the out-of-range index 26 comes up
        // for roughly one draw in 52, so a long run must lose characters.
        let options = GeneratorOptions {
            length: 10_000,
            ..GeneratorOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1234);

        let password = generate_with_rng(&options, SamplingMode::Legacy, &mut rng);
        println!("requested 10000, got {}", password.len());

        assert!(password.len() < 10_000);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_uniform_never_drops() {
        let mut rng = StdRng::seed_from_u64(99);

        for length in [4, 8, 16] {
            let options = all_classes(length);
            let password = generate_with_rng(&options, SamplingMode::Uniform, &mut rng);
            assert_eq!(password.len(), length);
        }
    }
}
