use std::path::PathBuf;

use clap::Parser;

use crate::app::Tab;

#[derive(Parser, Debug)]
#[command(
    name = "component-canvas",
    version,
    about = "Terminal showcase for an input field and a data table"
)]
pub struct Args {
    /// Tab to open on start
    #[arg(short, long, value_enum, default_value_t = Tab::Input)]
    pub tab: Tab,

    /// Theme name (e.g., "Catppuccin Latte"); overrides the config file
    #[arg(long)]
    pub theme: Option<String>,

    /// JSON file with users for the DataTable tab
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}
