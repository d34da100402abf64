use super::output::{print_entry, print_entry_json};
use super::{Context, load_config, open_store};
use crate::ShowArgs;

pub fn run(ctx: &Context, args: ShowArgs) {
    let rc = load_config(ctx);
    let store = open_store(&rc);

    let Some(entry) = store.find_location(&args.location) else {
        eprintln!("No entry at location: {}", args.location);
        std::process::exit(1);
    };

    if args.json {
        print_entry_json(entry);
    } else {
        print_entry(entry);
    }
}
