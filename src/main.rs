// SPDX-License-Identifier: MPL-2.0
use gift_notice::app::{self, paths, Flags};
use gift_notice::logging;

const HELP: &str = "\
gift_notice - welcome gift notification

USAGE:
    gift_notice [OPTIONS]

OPTIONS:
    --amount <AMOUNT>        Gift amount to announce (shows the notification at startup)
    --explorer-url <URL>     Transaction page linked from the notification
    --lang <LOCALE>          Interface language (e.g. en-US, fr)
    --config-dir <DIR>       Directory holding settings.toml
    -v, --verbose            Log debug output to stderr
    -h, --help               Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        amount: args.opt_value_from_str("--amount")?,
        explorer_url: args.opt_value_from_str("--explorer-url")?,
    })
}
