use clap::{Args, Parser, Subcommand};
use client::options::translate_items;
use client::{ClientConfig, ListParams, Page, RunnerClient, Timeouts};
use schema::{Catalog, Locale, ResourceKind, dictionary};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] client::ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("locale catalog failed: {0}")]
    Catalog(#[from] schema::CatalogError),
    #[error("{resource} has no form field `{field}`")]
    UnknownField { resource: ResourceKind, field: String },
}

#[derive(Parser, Debug)]
#[command(name = "runner-cli", about = "Runner console API and descriptor CLI")]
struct Cli {
    #[arg(long, env = "RUNNER_BASE_URL", default_value = client::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "RUNNER_API_TOKEN")]
    token: Option<String>,

    #[arg(long, env = "RUNNER_REQUEST_TIMEOUT_SECS", default_value_t = client::config::DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `GET /healthz`.
    Ping,
    Project(ResourceCommand),
    Task(ResourceCommand),
    Account(ResourceCommand),
    #[command(name = "pageobject", alias = "page-object")]
    PageObject(ResourceCommand),
    Case(ResourceCommand),
    #[command(alias = "testsuite")]
    Suite(ResourceCommand),
    /// Print a resource's localized columns and forms.
    Schema {
        resource: ResourceKind,
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
    /// Print every built-in dictionary with translated labels.
    Dictionaries {
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
    /// Resolve the options of one edit-form field.
    Options {
        resource: ResourceKind,
        field: String,
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
}

#[derive(Args, Debug)]
struct ResourceCommand {
    #[command(subcommand)]
    command: ResourceSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResourceSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
        /// Search-form filter, repeatable.
        #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: i64,
    },
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}

impl Command {
    fn resource(&self) -> Option<(ResourceKind, &ResourceCommand)> {
        match self {
            Self::Project(cmd) => Some((ResourceKind::Project, cmd)),
            Self::Task(cmd) => Some((ResourceKind::Task, cmd)),
            Self::Account(cmd) => Some((ResourceKind::Account, cmd)),
            Self::PageObject(cmd) => Some((ResourceKind::PageObject, cmd)),
            Self::Case(cmd) => Some((ResourceKind::Case, cmd)),
            Self::Suite(cmd) => Some((ResourceKind::Suite, cmd)),
            Self::Ping | Self::Schema { .. } | Self::Dictionaries { .. } | Self::Options { .. } => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if let Command::Schema { resource, locale } = &cli.command {
        let catalog = Catalog::builtin(*locale)?;
        return print_json(&serde_json::to_value(resource.schema().localize(&catalog))?);
    }
    if let Command::Dictionaries { locale } = &cli.command {
        return print_json(&dictionaries_json(&Catalog::builtin(*locale)?)?);
    }

    let mut config = ClientConfig::new(&cli.base_url)?;
    config.timeouts = Timeouts { request_secs: cli.timeout_secs, ..Timeouts::default() };
    if let Some(token) = cli.token.filter(|t| !t.is_empty()) {
        config = config.with_token(token);
    }
    let runner = RunnerClient::new(config)?;

    if let Some((kind, cmd)) = cli.command.resource() {
        return run_resource(&runner, kind, cmd).await;
    }
    match cli.command {
        Command::Ping => {
            runner.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::Options { resource, field, locale } => {
            let catalog = Catalog::builtin(locale)?;
            let descriptor = resource
                .schema()
                .field(&field)
                .ok_or_else(|| CliError::UnknownField { resource, field: field.clone() })?;
            let options = runner.field_options(descriptor, &catalog).await?;
            print_json(&serde_json::to_value(options)?)
        }
        _ => Ok(()),
    }
}

async fn run_resource(runner: &RunnerClient, kind: ResourceKind, cmd: &ResourceCommand) -> Result<(), CliError> {
    let api = runner.dynamic(kind);
    match &cmd.command {
        ResourceSubcommand::List { page, page_size, filters } => {
            let mut params = ListParams::page(*page, *page_size);
            for (key, value) in filters {
                params = params.filter(key, value);
            }
            let page = api.list(&params).await?;
            print_json(&page_json(page))
        }
        ResourceSubcommand::Get { id } => print_json(&api.get(*id).await?),
        ResourceSubcommand::Create { data } => {
            let body = serde_json::from_str::<Value>(data)?;
            print_json(&api.create(&body).await?)
        }
        ResourceSubcommand::Update { id, data } => {
            let body = serde_json::from_str::<Value>(data)?;
            print_json(&api.update(*id, &body).await?)
        }
        ResourceSubcommand::Delete { id } => {
            api.delete(*id).await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

fn dictionaries_json(catalog: &Catalog) -> Result<Value, CliError> {
    let mut dictionaries = serde_json::Map::new();
    for code in dictionary::codes() {
        let items = dictionary::lookup(code).unwrap_or_default();
        dictionaries.insert(code.to_owned(), serde_json::to_value(translate_items(items, catalog))?);
    }
    Ok(json!({ "locale": catalog.locale(), "dictionaries": dictionaries }))
}

fn page_json(page: Page<Value>) -> Value {
    json!({
        "items": page.items,
        "total": page.total,
        "page": page.page,
        "page_size": page.page_size,
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
