use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use keysplit::commands::{reconstruct_from_store, split_to_store};
use keysplit::{interactive, Config, FsShareStore, KeysplitError, ShareId};

fn cli() -> Command {
    Command::new("keysplit")
        .about("Split a secret into threshold shares and put it back together")
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("Share directory (default: $KEYSPLIT_SHARE_DIR or ./shares)"),
        )
        .subcommand(
            Command::new("split")
                .about("Split SECRET into TOTAL shares, any THRESHOLD of which recover it")
                .arg(Arg::new("secret").value_name("SECRET").required(true))
                .arg(
                    Arg::new("threshold")
                        .value_name("THRESHOLD")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("total")
                        .value_name("TOTAL")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("recon")
                .about("Reconstruct from share numbers (1 2 ..) or share file paths")
                .arg(
                    Arg::new("shares")
                        .value_name("SHARE")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail instead of substituting U+FFFD for invalid UTF-8"),
                ),
        )
}

fn split(store: &mut FsShareStore, args: &ArgMatches) -> Result<(), KeysplitError> {
    let secret = args.get_one::<String>("secret").cloned().unwrap_or_default();
    let threshold = args.get_one::<usize>("threshold").copied().unwrap_or_default();
    let total = args.get_one::<usize>("total").copied().unwrap_or_default();

    let shares = split_to_store(store, &secret, threshold, total)?;
    println!(
        "Saved {} shares in '{}' (threshold {}).",
        shares.len(),
        store.dir().display(),
        threshold
    );
    Ok(())
}

fn recon(store: &FsShareStore, args: &ArgMatches) -> Result<(), KeysplitError> {
    let raw: Vec<String> = args
        .get_many::<String>("shares")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let ids = ShareId::parse_args(&raw)?;

    let secret = reconstruct_from_store(store, &ids, args.get_flag("strict"))?;
    println!("Reconstructed secret: {}", secret);
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    let dir = matches
        .subcommand()
        .and_then(|(_, sub)| sub.get_one::<PathBuf>("dir"))
        .or_else(|| matches.get_one::<PathBuf>("dir"));
    let config = Config::from_env().with_share_dir(dir.map(PathBuf::as_path));
    let mut store = FsShareStore::new(&config.share_dir);

    let result = match matches.subcommand() {
        Some(("split", args)) => split(&mut store, args),
        Some(("recon", args)) => recon(&store, args),
        _ => {
            let stdin = io::stdin();
            interactive::run(&mut store, stdin.lock(), io::stdout()).map_err(KeysplitError::from)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
