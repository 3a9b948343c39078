mod form;
mod output;
mod stories;

use std::fs::File;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabula::style::Theme;

use output::{StyledLine, print_lines};
use stories::{find_story, registered_stories};

#[derive(Debug, Parser)]
#[command(name = "tabula-demo")]
#[command(about = "Render tabula component stories in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Render with the dark theme
    #[arg(long, global = true)]
    dark: bool,
}

impl Cli {
    fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// List every registered story
    List,

    /// Render one story
    Story {
        /// Story path, e.g. DataTable/Sorted
        #[arg(value_name = "COMPONENT/NAME")]
        name: String,
    },

    /// Render every story
    All,

    /// Run the scripted sign-up form
    Form,
}

fn story_lines(story: &stories::StoryRegistration, theme: Theme) -> (Theme, Vec<StyledLine>) {
    let theme = story.theme_for(theme);
    let mut lines = vec![StyledLine::title(story.path()), StyledLine::blank()];
    lines.extend((story.render)(theme));
    (theme, lines)
}

fn run(cli: Cli) -> Result<(), String> {
    let io_err = |e: std::io::Error| format!("Failed to write output: {}", e);
    let theme = cli.theme();
    match cli.command.unwrap_or(Command::List) {
        Command::List => {
            let lines: Vec<StyledLine> = registered_stories()
                .into_iter()
                .map(|s| StyledLine::new(s.path(), output::Tone::Normal))
                .collect();
            print_lines(&lines, theme).map_err(io_err)
        }
        Command::Story { name } => {
            let story = find_story(&name).ok_or_else(|| format!("No story named '{}'", name))?;
            info!("Rendering story {}", story.path());
            let (theme, lines) = story_lines(story, theme);
            print_lines(&lines, theme).map_err(io_err)
        }
        Command::All => {
            for story in registered_stories() {
                info!("Rendering story {}", story.path());
                let (theme, mut lines) = story_lines(story, theme);
                lines.push(StyledLine::blank());
                print_lines(&lines, theme).map_err(io_err)?;
            }
            Ok(())
        }
        Command::Form => print_lines(&form::run_form(theme), theme).map_err(io_err),
    }
}

fn main() -> ExitCode {
    match File::create("tabula-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    let cli = Cli::parse();
    info!("Starting tabula-demo: {:?}", cli);

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
