mod args;

fn main() {
    if let Err(err) = real_main() {
        umbra_infra::output::print_error(&err);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;

    let cli = args::Cli::parse();

    // Must fail before the settings backend is probed.
    let forced = args::forced_mode(cli.dark, cli.white)?;
    let request = umbra_infra::sync::Request {
        forced,
        image: cli.img,
    };

    let settings = umbra_infra::settings::Gsettings::new()?;

    umbra_infra::sync::run(
        &request,
        &settings,
        &umbra_infra::picker::ZenityPicker,
        &umbra_infra::environment::SystemEnvironment,
    )
}
