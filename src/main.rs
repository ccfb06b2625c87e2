// SPDX-License-Identifier: MPL-2.0
use folio::config;
use folio::contact::{ContactForm, Submission};
use folio::content::Portfolio;
use folio::i18n::{Locale, LocaleStore, TranslationTable};
use folio::page;
use folio::paths;
use folio::storage::{FileStorage, MemoryStorage, Storage};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio - portfolio page in your language

USAGE:
  folio [OPTIONS] <COMMAND>

COMMANDS:
  locales                      List selectable languages
  get <key>                    Print one display string
  set <code>                   Switch language and remember it
  page                         Print the whole page
  projects                     Print every project with its links
  certificates                 Print every certificate with its verify link
  contact --name N --email E --message M
                               Validate a contact message and print its payload

OPTIONS:
  --lang <tag>                 Show this language for one run (not remembered)
  --data-dir <dir>             Where the language choice is stored
  --config-dir <dir>           Where settings.toml lives
  -h, --help                   Print help
";

enum Command {
    Locales,
    Get(String),
    Set(String),
    Page,
    Projects,
    Certificates,
    Contact(ContactForm),
}

struct Cli {
    lang: Option<String>,
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    command: Option<Command>,
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(cli.data_dir.clone(), cli.config_dir.clone());
    let (config, config_warning) = config::load();
    init_logging(config.logging.filter_or_default());
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let Some(command) = cli.command else {
        print!("{HELP}");
        return ExitCode::from(2);
    };

    match run(command, cli.lang.as_deref(), &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Cli, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let command = match args.subcommand()?.as_deref() {
        Some("locales") => Some(Command::Locales),
        Some("get") => Some(Command::Get(args.free_from_str()?)),
        Some("set") => Some(Command::Set(args.free_from_str()?)),
        Some("page") => Some(Command::Page),
        Some("projects") => Some(Command::Projects),
        Some("certificates") => Some(Command::Certificates),
        Some("contact") => Some(Command::Contact(ContactForm {
            name: args.opt_value_from_str("--name")?.unwrap_or_default(),
            email: args.opt_value_from_str("--email")?.unwrap_or_default(),
            message: args.opt_value_from_str("--message")?.unwrap_or_default(),
        })),
        Some(other) => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command `{other}`"),
            })
        }
        None => None,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        let remaining: Vec<String> = remaining
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unused arguments left: {}", remaining.join(", ")),
        });
    }

    Ok(Cli {
        lang,
        data_dir,
        config_dir,
        command,
    })
}

fn init_logging(fallback: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn open_storage() -> Box<dyn Storage> {
    match FileStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            tracing::warn!("no data directory; language choice will not be remembered");
            Box::new(MemoryStorage::new())
        }
    }
}

fn run(
    command: Command,
    lang: Option<&str>,
    config: &config::Config,
) -> folio::error::Result<ExitCode> {
    let table = Arc::new(TranslationTable::embedded()?);
    let mut store = LocaleStore::init(table, open_storage());

    if let Command::Set(code) = &command {
        if store.select(code) {
            let descriptor = store.descriptor();
            println!("{} {}", descriptor.flag, descriptor.label);
            return Ok(ExitCode::SUCCESS);
        }
        let codes: Vec<&str> = Locale::ALL.iter().map(|locale| locale.code()).collect();
        eprintln!("unsupported language `{code}` (expected one of: {})", codes.join(", "));
        return Ok(ExitCode::from(2));
    }

    match lang.map(|tag| (tag, Locale::negotiate(tag))) {
        Some((_, Some(locale))) => show(&store.preview(locale), command, config),
        Some((tag, None)) => {
            tracing::warn!(tag, "unsupported --lang, using saved language");
            show(&store, command, config)
        }
        None => show(&store, command, config),
    }
}

/// Runs a command that only reads the active locale.
fn show<S: Storage>(
    view: &LocaleStore<S>,
    command: Command,
    config: &config::Config,
) -> folio::error::Result<ExitCode> {
    match command {
        Command::Locales => {
            for descriptor in view.list_locales() {
                let marker = if descriptor.code == view.locale() { "*" } else { " " };
                println!(
                    "{marker} {} {} {}",
                    descriptor.code, descriptor.flag, descriptor.label
                );
            }
        }
        Command::Get(name) => println!("{}", view.resolve_name(&name)),
        Command::Page => print!("{}", page::render(view, &Portfolio::embedded()?)),
        Command::Projects => print!("{}", page::render_projects(view, &Portfolio::embedded()?)),
        Command::Certificates => {
            print!("{}", page::render_certificates(view, &Portfolio::embedded()?))
        }
        Command::Contact(form) => match form.validate() {
            Ok(valid) => {
                if config.contact.access_key.is_none() {
                    tracing::warn!("[contact] access_key is not configured");
                }
                let submission = Submission::new(valid, &config.contact);
                println!("POST {}", config.contact.endpoint);
                println!("{}", submission.to_json()?);
            }
            Err(errors) => {
                for (field, error) in errors {
                    eprintln!(
                        "{}: {}",
                        view.resolve(field.placeholder_key()),
                        view.resolve(error.message_key(field))
                    );
                }
                return Ok(ExitCode::from(2));
            }
        },
        // Handled by `run` before a view is chosen.
        Command::Set(_) => {}
    }
    Ok(ExitCode::SUCCESS)
}
