use crate::options::GeneratorOptions;

pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static SYMBOLS: &str = "!@#$%^&*()_+";
pub static DIGITS: &str = "0123456789";

// Class order must stay uppercase, lowercase, symbols, digits for index
// parity with the legacy sampler.
pub fn compose(options: &GeneratorOptions) -> String {
    let mut pool = String::new();

    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }

    pool
}
