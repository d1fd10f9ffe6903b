use std::io::IsTerminal;

use anyhow::{Context, bail};
use dcc_core::entities::CompanySummary;
use dcc_core::enums::FilterField;
use dcc_core::responses::{CompanyListResponse, FilterChipRow};
use dcc_engine::FilterState;
use dcc_engine::filter::{available_options, chip_rows, company_list};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

const HELP: &str = "commands: search <text> | type <value> | category <value> | size <value> \
                    | clear [type|category|size] | options | list | help | quit";

/// One line typed into the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Toggle(FilterField, String),
    Clear(Option<FilterField>),
    Options,
    List,
    Help,
    Quit,
}

fn parse_line(line: &str) -> anyhow::Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "search" => BrowseCommand::Search(rest.to_string()),
        "type" | "category" | "size" => {
            if rest.is_empty() {
                bail!("{word} needs a value");
            }
            BrowseCommand::Toggle(parse_enum(word)?, rest.to_string())
        }
        "clear" if rest.is_empty() => BrowseCommand::Clear(None),
        "clear" => BrowseCommand::Clear(Some(parse_enum(rest)?)),
        "options" => BrowseCommand::Options,
        "list" | "ls" => BrowseCommand::List,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(command))
}

/// What the session prints after a command.
#[derive(Debug)]
enum Step {
    List(Box<CompanyListResponse>),
    Options(Vec<FilterChipRow>),
    Help,
    Quit,
}

/// Filter state owned by one interactive session, dropped when it ends.
struct BrowseSession {
    companies: Vec<CompanySummary>,
    state: FilterState,
    category_limit: usize,
    limit: usize,
}

impl BrowseSession {
    fn view(&self) -> CompanyListResponse {
        let mut view = company_list(&self.companies, &self.state, self.category_limit);
        view.companies.truncate(self.limit);
        view
    }

    fn apply(&mut self, command: BrowseCommand) -> Step {
        match command {
            BrowseCommand::Search(text) => self.state.set_search(text),
            BrowseCommand::Toggle(field, value) => self.state.toggle(field, &value),
            BrowseCommand::Clear(Some(field)) => self.state.clear(field),
            BrowseCommand::Clear(None) => self.state.clear_all(),
            BrowseCommand::List => {}
            // Every value of every field, without the category chip cut.
            BrowseCommand::Options => {
                let options = available_options(&self.companies, &FilterField::ALL);
                return Step::Options(chip_rows(&options, &self.state, usize::MAX));
            }
            BrowseCommand::Help => return Step::Help,
            BrowseCommand::Quit => return Step::Quit,
        }
        tracing::debug!(
            search = self.state.search(),
            filters = self.state.criteria().len(),
            "browse state changed"
        );
        Step::List(Box::new(self.view()))
    }
}

/// Handle `dcc companies browse`: a line-oriented session over stdin.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let general = &ctx.config.general;
    let mut session = BrowseSession {
        companies: ctx.service.list_company_summaries().await?,
        state: FilterState::new(),
        category_limit: as_len(general.category_chip_limit)?,
        limit: as_len(effective_limit(flags.limit, general.default_limit))?,
    };

    let interactive = std::io::stdin().is_terminal();
    if interactive {
        eprintln!("{HELP}");
    }
    output(&session.view(), flags.format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            eprint!("> ");
        }
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                eprintln!("{error}");
                continue;
            }
        };
        match session.apply(command) {
            Step::List(view) => output(view.as_ref(), flags.format)?,
            Step::Options(rows) => output(&rows, flags.format)?,
            Step::Help => eprintln!("{HELP}"),
            Step::Quit => break,
        }
    }
    Ok(())
}
