use clap::ValueEnum;

/// When to emit ANSI colors; `Auto` follows tty detection and `NO_COLOR`.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
