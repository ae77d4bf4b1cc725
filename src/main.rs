fn main() {
    use tree_grower::cli::parse;
    let cli = parse();
    tree_grower::app::init_logging(cli.verbose);
    let code = tree_grower::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
