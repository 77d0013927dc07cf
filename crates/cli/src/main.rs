use clap::Parser;

mod args;
mod info;
mod load;
mod smooth;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Smooth(args) => smooth::smooth_command(args),
        args::Commands::Info(args) => {
            let stdout = std::io::stdout();
            info::info_command(args, &mut stdout.lock())
        }
    }
}
