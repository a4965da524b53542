use anyhow::{Context, Result};
use catalog_reflow_config::Config;
use catalog_reflow_engine::{EntryMeta, ReflowOptions, Reflower, io};
use std::io::{BufWriter, Write, stdout};
use std::{env, fs::File, path::PathBuf, process};

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    volume: Option<u32>,
    part: Option<String>,
    number: Option<u32>,
    page: Option<u32>,
    entry_type: Option<String>,
    no_auto_number: bool,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <catalog.txt> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o <file>            Write records to <file> instead of stdout");
    eprintln!("  --volume <n>         Seed the volume field (default 1)");
    eprintln!("  --part <s>           Seed the part field (default \"1\")");
    eprintln!("  --number <n>         Seed the entry number (default 1)");
    eprintln!("  --page <n>           Seed the page number (default 1)");
    eprintln!("  --entry-type <s>     Entry type folded into record identifiers");
    eprintln!("  --no-auto-number     Do not advance the entry number per record");
    process::exit(1);
}

fn parse_args() -> Args {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("catalog-reflow-cli");

    let mut input = None;
    let mut parsed = Args {
        input: PathBuf::new(),
        output: None,
        volume: None,
        part: None,
        number: None,
        page: None,
        entry_type: None,
        no_auto_number: false,
    };

    let mut iter = argv.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| match iter.next() {
            Some(v) => v.clone(),
            None => {
                eprintln!("Error: {flag} requires a value");
                usage(program);
            }
        };

        match arg.as_str() {
            "-o" => parsed.output = Some(PathBuf::from(value("-o"))),
            "--volume" => parsed.volume = Some(parse_number(&value("--volume"), program)),
            "--part" => parsed.part = Some(value("--part")),
            "--number" => parsed.number = Some(parse_number(&value("--number"), program)),
            "--page" => parsed.page = Some(parse_number(&value("--page"), program)),
            "--entry-type" => parsed.entry_type = Some(value("--entry-type")),
            "--no-auto-number" => parsed.no_auto_number = true,
            "-h" | "--help" => usage(program),
            other if other.starts_with('-') => {
                eprintln!("Error: unknown option {other}");
                usage(program);
            }
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    eprintln!("Error: more than one input file given");
                    usage(program);
                }
            }
        }
    }

    match input {
        Some(path) => parsed.input = path,
        None => {
            eprintln!("Error: no input file given");
            usage(program);
        }
    }
    parsed
}

fn parse_number(raw: &str, program: &str) -> u32 {
    match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: expected a number, got {raw:?}");
            usage(program);
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let seed = EntryMeta {
        entry_type: args.entry_type.unwrap_or(config.entry_type),
        volume: args.volume.unwrap_or(1),
        part: args.part.unwrap_or_else(|| "1".to_string()),
        number: args.number.unwrap_or(1),
        page: args.page.unwrap_or(1),
    };
    let options = ReflowOptions {
        auto_number: config.auto_number && !args.no_auto_number,
        track_page_breaks: true,
    };

    let content = io::read_catalog_file(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut reflower = Reflower::new(seed, options);
    let mut records = Vec::new();
    for line in content.lines() {
        records.extend(reflower.feed(line));
    }
    records.extend(reflower.finish());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            io::write_records(&mut sink, &records, &config.field_order)
                .with_context(|| format!("writing {}", path.display()))?;
            sink.flush()?;
        }
        None => {
            let mut sink = stdout().lock();
            io::write_records(&mut sink, &records, &config.field_order)
                .context("writing to stdout")?;
        }
    }

    Ok(())
}
