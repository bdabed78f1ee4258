//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "unsplash-details",
    version,
    about = "Show the details of one Unsplash photo in the terminal"
)]
pub struct Cli {
    /// Unsplash photo id, e.g. `Dwu85P9SOIk`.
    #[arg(value_name = "PHOTO_ID")]
    pub id: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the details to stdout instead of opening the viewer.
    #[arg(long)]
    pub plain: bool,

    /// Do not download the cover and avatar images.
    #[arg(long)]
    pub no_images: bool,
}

impl Cli {
    /// The photo id to fetch, passed through as given. Blank ids count
    /// as missing.
    pub fn photo_id(&self) -> Option<String> {
        self.id.clone().filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_and_flags() {
        let cli = Cli::try_parse_from([
            "unsplash-details",
            "Dwu85P9SOIk",
            "--plain",
            "--no-images",
        ])
        .unwrap();
        assert_eq!(cli.photo_id().as_deref(), Some("Dwu85P9SOIk"));
        assert!(cli.plain);
        assert!(cli.no_images);
        assert!(cli.config.is_none());
    }

    #[test]
    fn id_is_optional() {
        let cli = Cli::try_parse_from(["unsplash-details"]).unwrap();
        assert_eq!(cli.photo_id(), None);
        assert!(!cli.plain);
    }

    #[test]
    fn blank_id_counts_as_missing() {
        let cli = Cli::try_parse_from(["unsplash-details", "   "]).unwrap();
        assert_eq!(cli.photo_id(), None);
    }

    #[test]
    fn id_is_not_trimmed() {
        let cli = Cli::try_parse_from(["unsplash-details", " abc "]).unwrap();
        assert_eq!(cli.photo_id().as_deref(), Some(" abc "));
    }

    #[test]
    fn config_path_is_taken_verbatim() {
        let cli = Cli::try_parse_from(["unsplash-details", "--config", "/tmp/u.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/u.toml")));
    }
}
