use super::*;

#[test]
fn parses_lookup_command() {
    let cli = Cli::try_parse_from(["storescout", "lookup", "acmestore.com/shop"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Lookup { ref input } if input == "acmestore.com/shop"
    ));
}

#[test]
fn parses_batch_command_with_default_output() {
    let cli = Cli::try_parse_from(["storescout", "batch", "--input", "brands.csv"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Batch { ref input, output: None } if input == Path::new("brands.csv")
    ));
}

#[test]
fn parses_batch_command_with_explicit_output() {
    let cli = Cli::try_parse_from([
        "storescout",
        "batch",
        "--input",
        "brands.csv",
        "--output",
        "enriched.csv",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Batch { input, output } => {
            assert_eq!(input, PathBuf::from("brands.csv"));
            assert_eq!(output, Some(PathBuf::from("enriched.csv")));
        }
        other => panic!("expected Batch, got: {other:?}"),
    }
}

#[test]
fn batch_requires_input() {
    assert!(Cli::try_parse_from(["storescout", "batch"]).is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["storescout"]).is_err());
}

#[test]
fn default_output_path_derives_from_input_stem() {
    assert_eq!(
        default_output_path(Path::new("/data/brands.csv")),
        PathBuf::from("/data/storescout_brands.csv")
    );
    assert_eq!(
        default_output_path(Path::new("clientes.csv")),
        PathBuf::from("storescout_clientes.csv")
    );
}
