use pwg_lib::generator::{generate_password, SamplingMode};
use pwg_lib::options::GeneratorOptions;
use pwg_lib::validate::check_length;
use pwg_lib::zeroize::Zeroizing;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Password length, 4 to 16
    #[arg(short, long, value_name = "number", allow_negative_numbers = true)]
    length: i64,

    /// Include lowercase letters (default when no class is given)
    #[arg(long, default_value_t = false)]
    lowercase: bool,

    /// Include uppercase letters
    #[arg(long, default_value_t = false)]
    uppercase: bool,

    /// Include digits
    #[arg(long, default_value_t = false)]
    digits: bool,

    /// Include symbols
    #[arg(long, default_value_t = false)]
    symbols: bool,

    /// Sample with the old rounding draw, quirks included
    #[arg(long, default_value_t = false)]
    legacy: bool,

    /// Copy the last password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// How many passwords to generate
    #[arg(short = 'n', long, value_name = "number", default_value_t = 1)]
    count: usize,
}

fn options_from_args(args: &Args) -> GeneratorOptions {
    let length = args.length as usize;

    if !args.lowercase && !args.uppercase && !args.digits && !args.symbols {
        return GeneratorOptions {
            length,
            ..GeneratorOptions::default()
        };
    }

    GeneratorOptions {
        length,
        lowercase: args.lowercase,
        uppercase: args.uppercase,
        symbols: args.symbols,
        digits: args.digits,
    }
}

fn copy_to_clipboard(password: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(password.to_string())?;

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(error) = check_length(args.length) {
        eprintln!("{}", error);
        std::process::exit(1);
    }

    let options = options_from_args(&args);
    let mode = match args.legacy {
        true => SamplingMode::Legacy,
        false => SamplingMode::Uniform,
    };

    let mut last = Zeroizing::new(String::new());
    for _ in 0..args.count {
        let password = generate_password(&options, mode);
        println!("{}", password.as_str());
        last = password;
    }

    if args.copy {
        match copy_to_clipboard(last.as_str()) {
            Ok(()) => println!("copied to clipboard"),
            Err(error) => {
                eprintln!("failed to copy to clipboard: {}", error);
                std::process::exit(1);
            }
        }
    }
}
