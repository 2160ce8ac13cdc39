use crate::constants::*;

/// Run parameters for the drift demo, read from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub headless: bool,
    pub width: u16,
    pub height: u16,
    pub max_frames: Option<u64>,
    pub seed: Option<u64>,
    pub drifter_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            headless: false,
            width: DEFAULT_HEADLESS_WIDTH,
            height: DEFAULT_HEADLESS_HEIGHT,
            max_frames: None,
            seed: None,
            drifter_count: DEFAULT_DRIFTER_COUNT,
        }
    }
}

impl SimConfig {
    /// Parses `args` as returned by `env::args()`, program name included.
    ///
    /// `--debug [width height [frames]]` renders into an in-memory buffer.
    /// Otherwise a leading number is taken as a frame limit. `--seed N` and
    /// `--drifters N` may appear anywhere. Bad values fall back to defaults.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = SimConfig::default();
        let (options, positional) = split_options(args.get(1..).unwrap_or_default());

        for (flag, value) in options {
            match flag {
                "--seed" => config.seed = value.parse().ok(),
                "--drifters" => {
                    config.drifter_count = value.parse().unwrap_or(DEFAULT_DRIFTER_COUNT);
                }
                _ => {}
            }
        }

        config.headless = positional.first() == Some(&"--debug");
        if config.headless {
            if positional.len() >= 3 {
                config.width = positional[1].parse().unwrap_or(DEFAULT_HEADLESS_WIDTH);
                config.height = positional[2].parse().unwrap_or(DEFAULT_HEADLESS_HEIGHT);
            }
            config.max_frames = Some(
                positional
                    .get(3)
                    .and_then(|frames| frames.parse().ok())
                    .unwrap_or(DEFAULT_HEADLESS_FRAMES),
            );
        } else {
            config.max_frames = positional.first().and_then(|frames| frames.parse().ok());
        }

        config
    }
}

// Pulls `--flag value` pairs out, leaving the positional arguments in order.
fn split_options(args: &[String]) -> (Vec<(&str, &str)>, Vec<&str>) {
    let mut options = Vec::new();
    let mut positional = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            flag @ ("--seed" | "--drifters") => {
                if let Some(value) = iter.next() {
                    options.push((flag, value.as_str()));
                }
            }
            other => positional.push(other),
        }
    }
    (options, positional)
}
