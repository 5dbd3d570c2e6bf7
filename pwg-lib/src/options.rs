use serde::{Deserialize, Serialize};

/// Character class selection plus the requested length.
///
/// `length` starts at 0, which stands for "not chosen yet"; callers are
/// expected to run it through `validate` before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub symbols: bool,
    pub digits: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 0,
            lowercase: true,
            uppercase: false,
            symbols: false,
            digits: false,
        }
    }
}

impl GeneratorOptions {
    pub fn class_count(&self) -> usize {
        let mut count = 0;
        for enabled in [self.lowercase, self.uppercase, self.symbols, self.digits] {
            if enabled {
                count += 1;
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::GeneratorOptions;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::default();

        assert_eq!(options.length, 0);
        assert!(options.lowercase);
        assert!(!options.uppercase);
        assert!(!options.symbols);
        assert!(!options.digits);
        assert_eq!(options.class_count(), 1);
    }
}
