use std::path::PathBuf;

use clap::Parser;
use deploy_common::CommaList;

use crate::config::Config;

/// Django allowed-hosts filler
///
/// Replaces the empty `ALLOWED_HOSTS = []` assignment of a project's
/// `settings.py` with the local development hosts plus the given hosts.
///
/// ## Example
/// ```bash
/// deploy-allowed-hosts -p blog -l blog.example.org,www.blog.example.org
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "deploy-allowed-hosts")]
#[command(about = "Fill the empty ALLOWED_HOSTS list of a Django settings file")]
#[command(version)]
#[command(
    long_about = "Fill the empty ALLOWED_HOSTS list of a Django settings file. \nThe literal `ALLOWED_HOSTS = []` in <root>/<project>/settings.py is replaced by \n127.0.0.1, localhost and 0.0.0.0 followed by the hosts given with --host_list."
)]
pub struct Cli {
    /// Project directory holding settings.py
    #[arg(
        short = 'p',
        long = "project_name",
        visible_alias = "project-name",
        value_name = "NAME"
    )]
    pub project_name: Option<String>,

    /// Comma separated hosts to allow in addition to the local ones
    #[arg(
        short = 'l',
        long = "host_list",
        visible_alias = "host-list",
        value_name = "HOSTS"
    )]
    pub host_list: Option<CommaList>,

    /// Settings file to rewrite instead of <root>/<project>/settings.py
    #[arg(short = 's', long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Directory the project directory is looked up in
    #[arg(short = 'C', long = "root", value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Do not print progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Convert parsed arguments into the rewrite configuration
    pub fn into_config(self) -> Config {
        let config = Config::new(
            self.project_name.unwrap_or_default(),
            self.root,
            self.host_list.map(CommaList::into_inner).unwrap_or_default(),
        );
        match self.settings {
            Some(path) => config.with_settings_file(path),
            None => config,
        }
    }
}
