use std::path::PathBuf;

use clap::Parser;

/// Drop weighted balls on a seesaw and watch it tip.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "seesaw", version)]
pub struct Args {
    /// Extra RON config layer applied after the built-in ones (repeatable).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Vec<PathBuf>,
    /// Directory holding the saved session (overrides `storage.dir`).
    #[arg(long, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,
    /// Seed for ball weights and colours. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Exit after this many seconds (overrides `window.autoClose`).
    #[arg(long, value_name = "SECS")]
    pub auto_close: Option<f32>,
}

impl Args {
    /// Config files in load order: base, local override, then `--config` layers.
    pub fn config_layers(&self) -> Vec<PathBuf> {
        let mut layers = vec![
            PathBuf::from("assets/config/game.ron"),
            PathBuf::from("assets/config/game.local.ron"),
        ];
        layers.extend(self.config.iter().cloned());
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "seesaw",
            "--config",
            "a.ron",
            "--config",
            "b.ron",
            "--storage-dir",
            "/tmp/saves",
            "--seed",
            "7",
            "--auto-close",
            "2.5",
        ])
        .unwrap();
        assert_eq!(args.config, vec![PathBuf::from("a.ron"), PathBuf::from("b.ron")]);
        assert_eq!(args.storage_dir, Some(PathBuf::from("/tmp/saves")));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.auto_close, Some(2.5));
        let layers = args.config_layers();
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[3], PathBuf::from("b.ron"));
    }

    #[test]
    fn no_flags_is_default() {
        assert_eq!(Args::try_parse_from(["seesaw"]).unwrap(), Args::default());
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Args::try_parse_from(["seesaw", "--seed", "abc"]).is_err());
    }
}
