mod demo;

use std::io::Read;
use std::str::FromStr;
use svgplot::render::{FigureConfig, figure_markup_from_json};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Svg(svgplot::Error),
    Render(svgplot::render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Svg(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<svgplot::Error> for CliError {
    fn from(value: svgplot::Error) -> Self {
        Self::Svg(value)
    }
}

impl From<svgplot::render::Error> for CliError {
    fn from(value: svgplot::render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy)]
enum Demo {
    Shapes,
    Plot,
    Figure,
}

impl FromStr for Demo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shapes" => Ok(Self::Shapes),
            "plot" => Ok(Self::Plot),
            "figure" => Ok(Self::Figure),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Help,
    Demo(Demo),
    Render,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "svgplot-cli\n\
\n\
USAGE:\n\
  svgplot-cli demo shapes|plot|figure [--out <path>]\n\
  svgplot-cli render [--config <path>] [--out <path>] [<spec.json>|-]\n\
\n\
NOTES:\n\
  - Output goes to stdout unless --out is given.\n\
  - render reads a JSON figure spec; if <spec.json> is omitted or '-', it is read from stdin.\n\
  - --config overrides the spec's figure config with the JSON object in <path>.\n\
  - Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut command = None;
    let mut args = Args {
        command: Command::Help,
        input: None,
        config: None,
        out: None,
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => {
                args.command = Command::Help;
                return Ok(args);
            }
            "demo" if command.is_none() => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let demo = name
                    .parse::<Demo>()
                    .map_err(|_| CliError::Usage(usage()))?;
                command = Some(Command::Demo(demo));
            }
            "render" if command.is_none() => command = Some(Command::Render),
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--config" => {
                let Some(config) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(config.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() || !matches!(command, Some(Command::Render)) {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    let Some(command) = command else {
        return Err(CliError::Usage(usage()));
    };
    if matches!(command, Command::Demo(_)) && (args.input.is_some() || args.config.is_some()) {
        return Err(CliError::Usage(usage()));
    }
    args.command = command;
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))?;
            tracing::debug!(path, bytes = text.len() + 1, "output written");
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Help => {
            print!("{}", usage());
            Ok(())
        }
        Command::Demo(which) => {
            let svg = match which {
                Demo::Shapes => demo::shapes(),
                Demo::Plot => demo::plot()?.to_svg(),
                Demo::Figure => demo::figure()?.to_svg(),
            };
            match args.out.as_deref() {
                Some(path) => svg.save(path)?,
                None => println!("{svg}"),
            }
            Ok(())
        }
        Command::Render => {
            let config = match args.config.as_deref() {
                Some(path) => Some(serde_json::from_str::<FigureConfig>(
                    &std::fs::read_to_string(path)?,
                )?),
                None => None,
            };
            let input = read_input(args.input.as_deref())?;
            let markup = figure_markup_from_json(&input, config)?;
            write_text(&markup, args.out.as_deref())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("svgplot-cli")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parses_demo_with_out() {
        let args = parse_args(&argv(&["demo", "figure", "--out", "fig.svg"])).expect("args");
        assert!(matches!(args.command, Command::Demo(Demo::Figure)));
        assert_eq!(args.out.as_deref(), Some("fig.svg"));
    }

    #[test]
    fn parses_render_with_input_and_config() {
        let args =
            parse_args(&argv(&["render", "--config", "cfg.json", "spec.json"])).expect("args");
        assert!(matches!(args.command, Command::Render));
        assert_eq!(args.input.as_deref(), Some("spec.json"));
        assert_eq!(args.config.as_deref(), Some("cfg.json"));
    }

    #[test]
    fn rejects_bad_invocations() {
        for bad in [
            &[][..],
            &["demo"][..],
            &["demo", "bars"][..],
            &["demo", "plot", "extra.json"][..],
            &["render", "a.json", "b.json"][..],
            &["render", "--out"][..],
            &["render", "--verbose"][..],
        ] {
            assert!(
                matches!(parse_args(&argv(bad)), Err(CliError::Usage(_))),
                "{bad:?}"
            );
        }
    }
}
