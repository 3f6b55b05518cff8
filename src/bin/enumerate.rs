use std::fs::File;
use std::path::PathBuf;
use std::process;

use log::info;

use shape_reach::config::{LAYER, PART};
use shape_reach::search::exhaustive::Searcher;
use shape_reach::search::progress::{ProgressObserver, SearchProgress};

/// Routes engine checkpoints to the log.
struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, p: &SearchProgress) {
        info!(
            "processed {} shapes, {} sectors, {}/{} halves, {}/{}/{} shapes",
            p.shapes,
            p.sectors,
            p.halves_expanded,
            p.halves_total,
            p.frontier_pending,
            p.frontier_queued,
            p.residual,
        );
    }
}

fn usage() -> ! {
    eprintln!("Usage: enumerate [out.bin] [--counts-json <path>]");
    process::exit(2);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut out_path: Option<PathBuf> = None;
    let mut counts_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--counts-json" => {
                let Some(v) = args.get(i + 1) else {
                    eprintln!("--counts-json requires a path argument");
                    usage();
                };
                counts_path = Some(PathBuf::from(v));
                i += 2;
            }
            x if x.starts_with('-') => {
                eprintln!("Unknown option: {x}");
                usage();
            }
            x => {
                if out_path.is_some() {
                    usage();
                }
                out_path = Some(PathBuf::from(x));
                i += 1;
            }
        }
    }

    let mut searcher = Searcher::<LAYER, PART>::new();
    searcher.run(&mut LogProgress);

    let counts = searcher.counts();
    info!("# shapes: {}", counts.shapes);
    info!("# halves: {}", counts.halves);
    info!("# shapes whose halves aren't stable: {}", counts.residual_shapes);
    info!("# sectors: {}", counts.sectors);

    if let Some(path) = counts_path {
        let file = match File::create(&path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("failed to create {}: {e}", path.display());
                process::exit(1);
            }
        };
        if let Err(e) = serde_json::to_writer_pretty(file, &counts) {
            eprintln!("failed to write {}: {e}", path.display());
            process::exit(1);
        }
        info!("wrote counts to {}", path.display());
    }

    if let Some(path) = out_path {
        let set = searcher.into_shape_set();
        if let Err(e) = set.save(&path) {
            eprintln!("{e}");
            process::exit(1);
        }
        info!("wrote store to {}", path.display());
    }
}
