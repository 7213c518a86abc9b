use super::*;

fn pick_args(args: &[&str]) -> pick::PickArgs {
    let mut argv = vec!["lunchroll", "pick"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
    match cli.command {
        Commands::Pick(args) => args,
    }
}

#[test]
fn parses_pick_with_defaults() {
    let args = pick_args(&["--origin", "Götgatan 1, Stockholm", "--blacklist", "Pelikan"]);

    assert_eq!(args.origin, "Götgatan 1, Stockholm");
    assert_eq!(args.count, 1);
    assert_eq!(args.blacklist, ["Pelikan"]);
    assert!(args.walk_origin.is_none());
    assert!(args.blacklist_file.is_none());
    assert!(args.seed.is_none());
    assert!(!args.json);
}

#[test]
fn blacklist_accepts_commas_and_repeats() {
    let args = pick_args(&[
        "--origin",
        "X",
        "--blacklist",
        "Pelikan,Kvarnen",
        "--blacklist",
        "Tranan",
    ]);
    assert_eq!(args.blacklist, ["Pelikan", "Kvarnen", "Tranan"]);
}

#[test]
fn parses_all_pick_options() {
    let args = pick_args(&[
        "--origin",
        "X",
        "--walk-origin",
        "Y",
        "--count",
        "5",
        "--blacklist-file",
        "blacklist.txt",
        "--api-key",
        "k",
        "--seed",
        "42",
        "--json",
    ]);

    assert_eq!(args.walk_origin.as_deref(), Some("Y"));
    assert_eq!(args.count, 5);
    assert_eq!(
        args.blacklist_file.as_deref(),
        Some(std::path::Path::new("blacklist.txt"))
    );
    assert_eq!(args.api_key.as_deref(), Some("k"));
    assert_eq!(args.seed, Some(42));
    assert!(args.json);
}

#[test]
fn negative_count_is_parsed_for_range_validation() {
    let args = pick_args(&["--origin", "X", "--blacklist", "A", "--count", "-1"]);
    assert_eq!(args.count, -1);
}

#[test]
fn pick_requires_a_blacklist_source() {
    let result = Cli::try_parse_from(["lunchroll", "pick", "--origin", "X"]);
    assert!(result.is_err());
}

#[test]
fn pick_rejects_both_blacklist_sources() {
    let result = Cli::try_parse_from([
        "lunchroll",
        "pick",
        "--origin",
        "X",
        "--blacklist",
        "A",
        "--blacklist-file",
        "b.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn pick_requires_origin() {
    let result = Cli::try_parse_from(["lunchroll", "pick", "--blacklist", "A"]);
    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["lunchroll"]).is_err());
}
