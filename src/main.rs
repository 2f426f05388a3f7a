//! CLI for the DART registry and statement parser

use dartfin::{
    build_report, filter_by_report, load_snapshot, parse_registry_file, save_snapshot,
    CompanyIndex, RawLineItem, ReportType,
};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage(&args[0]);
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "parse" => cmd_parse(&args[2..]),
        "search" => cmd_search(&args[2..]),
        "lookup" => cmd_lookup(&args[2..]),
        "report" => cmd_report(&args[2..]),
        other => {
            eprintln!("Unknown command: {}", other);
            usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn usage(prog: &str) {
    eprintln!("Usage:");
    eprintln!("  {} parse <registry.xml> [--output <snapshot.json>]", prog);
    eprintln!("  {} search <snapshot.json> <term>", prog);
    eprintln!("  {} lookup <snapshot.json> <corp_code>", prog);
    eprintln!("  {} report <items.json> [--type <report>] [--pretty]", prog);
}

fn cmd_parse(args: &[String]) -> dartfin::Result<()> {
    let Some(input) = args.first() else {
        eprintln!("parse requires a registry file");
        std::process::exit(1);
    };

    let mut output: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("--output requires a path");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let records = parse_registry_file(input)?;

    if let Some(out) = &output {
        save_snapshot(&records, out)?;
        println!("Wrote snapshot: {}", out.display());
    }

    let index = CompanyIndex::new(records);
    let stats = index.stats();

    println!("Records: {}", stats.total);
    println!("Listed: {}", stats.listed);
    println!("Unlisted: {}", stats.unlisted);
    println!("Last update: {}", stats.last_update);

    Ok(())
}

fn cmd_search(args: &[String]) -> dartfin::Result<()> {
    let (Some(snapshot), Some(term)) = (args.first(), args.get(1)) else {
        eprintln!("search requires a snapshot file and a term");
        std::process::exit(1);
    };

    let index = CompanyIndex::new(load_snapshot(snapshot)?);
    let hits = index.search_by_name(term);

    println!("Matches: {}", hits.len());
    for (i, rec) in hits.iter().enumerate() {
        println!(
            "  [{}] {} ({}) stock={}",
            i + 1,
            rec.corp_name,
            rec.corp_code,
            if rec.is_listed() { rec.stock_code.as_str() } else { "-" }
        );
    }

    Ok(())
}

fn cmd_lookup(args: &[String]) -> dartfin::Result<()> {
    let (Some(snapshot), Some(code)) = (args.first(), args.get(1)) else {
        eprintln!("lookup requires a snapshot file and a corp code");
        std::process::exit(1);
    };

    let index = CompanyIndex::new(load_snapshot(snapshot)?);
    match index.get_by_code(code) {
        Some(rec) => {
            println!("{}", serde_json::to_string_pretty(rec)?);
        }
        None => {
            eprintln!("Not found: {}", code);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn cmd_report(args: &[String]) -> dartfin::Result<()> {
    let Some(input) = args.first() else {
        eprintln!("report requires an items file");
        std::process::exit(1);
    };

    let mut pretty = false;
    let mut report_type: Option<ReportType> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pretty" => pretty = true,
            "--type" | "-t" => {
                i += 1;
                if i < args.len() {
                    // Accepts the four report codes or the Korean report
                    // names; anything else resolves to the annual report.
                    report_type = Some(ReportType::resolve(&args[i]));
                } else {
                    eprintln!("--type requires a report code or name");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let data = std::fs::read(input)?;
    let mut items = parse_feed(&data)?;
    if let Some(rt) = report_type {
        items = filter_by_report(&items, rt);
    }
    let report = build_report(&items);

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

/// Accept either a bare item array or the upstream `{"list": [...]}` body.
fn parse_feed(data: &[u8]) -> dartfin::Result<Vec<RawLineItem>> {
    #[derive(serde::Deserialize)]
    struct FeedBody {
        #[serde(default)]
        list: Vec<RawLineItem>,
    }

    if let Ok(items) = serde_json::from_slice::<Vec<RawLineItem>>(data) {
        return Ok(items);
    }
    let body: FeedBody = serde_json::from_slice(data)?;
    Ok(body.list)
}
