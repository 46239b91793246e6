use clap::Parser;
use miette::Result;
use tablesmith::cli::{Cli, Session};
use tablesmith::command::CommandProcessor;
use tablesmith::core::TableState;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let processor = CommandProcessor::new(TableState::with_style(cli.table_style()));
    let mut session = Session::new(processor, cli.quiet);
    session.run()?;

    log::debug!(
        "session ended with {} rows",
        session.processor().table().rows().len()
    );
    Ok(())
}
