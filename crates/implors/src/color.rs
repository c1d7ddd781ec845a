/// Controls when to use colors in output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Color {
    /// Color when stdout is a terminal, plain when it is piped or redirected.
    #[default]
    Auto,

    /// Never color.
    Never,

    /// Always color, terminal or not.
    Always,
}

impl Color {
    /// Push the choice into the global `colored` switch; `Auto` leaves the
    /// library's own terminal detection in charge.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Never => colored::control::set_override(false),
            Self::Always => colored::control::set_override(true),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            _ => Err(format!("Invalid color option: {}", s)),
        }
    }
}
