// SPDX-License-Identifier: MPL-2.0
use vvs_portfolio::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        offline: args.contains("--offline"),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
