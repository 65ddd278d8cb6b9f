use iso8601_duration::{parse_duration, Unit};
use log::error;

const UNITS: [Unit; 7] = [
    Unit::Years,
    Unit::Months,
    Unit::Weeks,
    Unit::Days,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
];

fn main() {
    env_logger::init();

    let input: String = std::env::args().nth(1).unwrap_or("".to_string());
    match parse_duration(&input) {
        Ok(duration) => {
            for unit in UNITS {
                println!("{unit}: {}", duration.get(unit));
            }
        }
        Err(e) => {
            error!("{input:?}: {e}");
            std::process::exit(1);
        }
    }
}
