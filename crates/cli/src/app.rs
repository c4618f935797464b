use clap::builder::styling::{Color, Style, Styles};
use clap::{Parser, ValueEnum};
use starbase_styles::color::Color as ColorType;
use tracing::metadata::LevelFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

fn fg(ty: ColorType) -> Style {
    Style::new().fg_color(Some(Color::from(ty as u8)))
}

fn create_styles() -> Styles {
    Styles::default()
        .error(fg(ColorType::Red))
        .header(Style::new().bold())
        .invalid(fg(ColorType::Yellow))
        .literal(fg(ColorType::Pink)) // args, options, etc
        .placeholder(fg(ColorType::GrayLight))
        .usage(fg(ColorType::Purple).bold())
        .valid(fg(ColorType::Green))
}

#[derive(Debug, Parser)]
#[command(
    name = "sysnap",
    version,
    about = "Capture and print a snapshot of the host and process environment.",
    long_about = None,
    next_line_help = false,
    styles = create_styles()
)]
pub struct App {
    #[arg(
        value_enum,
        long,
        global = true,
        env = "SYSNAP_LOG",
        help = "Lowest log level to output"
    )]
    pub log: Option<LogLevel>,

    #[arg(long, help = "Print the snapshot as JSON")]
    pub json: bool,

    #[arg(
        long = "var",
        value_name = "NAME",
        help = "Only print the captured value of this environment variable (can be repeated)"
    )]
    pub vars: Vec<String>,

    #[arg(
        long,
        env = "SYSNAP_TRUNCATE",
        default_value_t = 80,
        help = "Truncate variable values longer than this many characters"
    )]
    pub truncate: usize,
}
