use std::path::Path;
use std::process;

use shape_reach::config::Shape;
use shape_reach::config::{LAYER, PART};
use shape_reach::query::CreatabilityQuery;
use shape_reach::store::ShapeSet;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: lookup <store.bin> <shape>");
        process::exit(2);
    }

    let set = match ShapeSet::<LAYER, PART>::load(Path::new(&args[1])) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let shape: Shape = match args[2].parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid shape {:?}: {e}", args[2]);
            process::exit(2);
        }
    };

    let query = CreatabilityQuery::new(set);
    if query.is_creatable(shape) {
        println!("The shape is creatable");
    } else {
        println!("The shape is not creatable");
    }
}
