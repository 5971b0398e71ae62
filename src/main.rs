use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use randgen::{
    generators::{
        bingo::{self, BingoConfig},
        cards::{self, CardConfig},
        color::{self, ColorConfig, ColorMode},
        dice::{self, DiceConfig},
        name::{self, Gender, NameConfig},
        number::{self, NumberConfig},
        password::{self, PasswordConfig},
        picker::{self, Entry, PickerConfig},
        teams::{self, BracketConfig, TeamConfig},
    },
    Source,
};

fn parse_seed(s: &str) -> Result<Source, String> {
    Source::seeded(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Makes the draws reproducible, either a positive integer or 64 hex characters.
    #[arg(long, global = true, value_parser = parse_seed)]
    seed: Option<Source>,

    /// Reads randomness straight from the operating system.
    #[arg(long, global = true, conflicts_with = "seed")]
    secure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Any,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Any => Gender::Any,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorModeArg {
    Rgb,
    Pastel,
    Vivid,
}

impl From<ColorModeArg> for ColorMode {
    fn from(m: ColorModeArg) -> Self {
        match m {
            ColorModeArg::Rgb => ColorMode::Rgb,
            ColorModeArg::Pastel => ColorMode::pastel(),
            ColorModeArg::Vivid => ColorMode::vivid(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generates integers in a range.
    Number {
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Never draws the same number twice.
        #[arg(short, long)]
        unique: bool,
        #[arg(short, long)]
        sorted: bool,
    },
    /// Generates passwords, from the operating system unless a seed is given.
    Password {
        #[arg(short, long, default_value_t = 16)]
        length: usize,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_digits: bool,
        #[arg(long)]
        no_symbols: bool,
        /// Leaves out characters such as `l`, `1`, `O` and `0`.
        #[arg(short, long)]
        exclude_ambiguous: bool,
    },
    /// Generates full names.
    Name {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(short, long, value_enum, default_value = "any")]
        gender: GenderArg,
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Generates colors as hex, RGB and HSL.
    Color {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(short, long, value_enum, default_value = "rgb")]
        mode: ColorModeArg,
    },
    /// Rolls dice given in `NdS` notation.
    Dice {
        #[arg(default_value = "1d6")]
        notation: String,
    },
    /// Shuffles a deck and deals hands.
    Cards {
        #[arg(long, default_value_t = 1)]
        hands: usize,
        #[arg(long, default_value_t = 5)]
        hand_size: usize,
        #[arg(short, long)]
        jokers: bool,
    },
    /// Generates 75-ball bingo cards.
    Bingo {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        no_free_centre: bool,
    },
    /// Splits participants into balanced teams.
    Teams {
        #[arg(short, long, default_value_t = 2)]
        teams: usize,
        #[arg(required = true)]
        participants: Vec<String>,
    },
    /// Seeds the first round of a single-elimination bracket.
    Bracket {
        /// Uses the given order as seeding.
        #[arg(short, long)]
        keep_order: bool,
        #[arg(required = true)]
        participants: Vec<String>,
    },
    /// Picks entries from a list, written `label` or `label:weight`.
    Pick {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        allow_duplicates: bool,
        #[arg(required = true)]
        entries: Vec<Entry>,
    },
    /// Flips coins.
    Coin {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Answers yes or no.
    YesNo {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

fn print_all<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) {
    for item in items {
        println!("{}", item);
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = match (cli.seed, cli.secure) {
        (Some(seed), _) => seed,
        (None, true) => Source::Secure,
        (None, false) => match cli.command {
            Commands::Password { .. } => {
                info!("using the operating system for passwords");
                Source::Secure
            }
            _ => Source::Thread,
        },
    };
    debug!("random source: {:?}", source);
    let rng = &mut source.rng();

    match cli.command {
        Commands::Number {
            min,
            max,
            count,
            unique,
            sorted,
        } => {
            let config = NumberConfig {
                min,
                max,
                count,
                allow_duplicates: !unique,
                sorted,
            };
            print_all(number::generate(&config, rng).context("could not generate numbers")?);
        }
        Commands::Password {
            length,
            count,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        } => {
            let config = PasswordConfig {
                length,
                count,
                lowercase: !no_lowercase,
                uppercase: !no_uppercase,
                digits: !no_digits,
                symbols: !no_symbols,
                exclude_ambiguous,
            };
            print_all(password::generate(&config, rng).context("could not generate passwords")?);
        }
        Commands::Name {
            count,
            gender,
            allow_duplicates,
        } => {
            let config = NameConfig {
                count,
                gender: gender.into(),
                unique: !allow_duplicates,
            };
            print_all(name::generate(&config, rng).context("could not generate names")?);
        }
        Commands::Color { count, mode } => {
            let config = ColorConfig {
                count,
                mode: mode.into(),
            };
            print_all(color::generate(&config, rng).context("could not generate colors")?);
        }
        Commands::Dice { notation } => {
            let config: DiceConfig = notation
                .parse()
                .with_context(|| format!("invalid dice notation '{}'", notation))?;
            println!("{}", dice::roll(&config, rng)?);
        }
        Commands::Cards {
            hands,
            hand_size,
            jokers,
        } => {
            let config = CardConfig {
                hands,
                hand_size,
                jokers,
            };
            for hand in cards::deal(&config, rng).context("could not deal cards")? {
                let hand: Vec<String> = hand.iter().map(|c| c.to_string()).collect();
                println!("{}", hand.join(" "));
            }
        }
        Commands::Bingo {
            count,
            no_free_centre,
        } => {
            let config = BingoConfig {
                count,
                free_centre: !no_free_centre,
            };
            print_all(bingo::generate(&config, rng).context("could not generate bingo cards")?);
        }
        Commands::Teams {
            teams: count,
            participants,
        } => {
            let config = TeamConfig { teams: count };
            let split = teams::make_teams(&participants, &config, rng)
                .context("could not make teams")?;
            for (i, team) in split.iter().enumerate() {
                println!("team {}: {}", i + 1, team.join(", "));
            }
        }
        Commands::Bracket {
            keep_order,
            participants,
        } => {
            let config = BracketConfig { keep_order };
            print_all(
                teams::make_bracket(&participants, &config, rng)
                    .context("could not make bracket")?,
            );
        }
        Commands::Pick {
            count,
            allow_duplicates,
            entries,
        } => {
            let config = PickerConfig {
                count,
                allow_duplicates,
            };
            print_all(picker::pick(&entries, &config, rng).context("could not pick entries")?);
        }
        Commands::Coin { count } => print_all(picker::flip_coins(count, rng)?),
        Commands::YesNo { count } => print_all(picker::yes_no(count, rng)?),
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("cannot init logger: {}", e))?;

    run(Cli::parse())
}
